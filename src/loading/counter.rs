//! Reference-counted loading indicator.

use indicatif::ProgressBar;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

/// Callback type for the loading start/stop side effects.
pub type LoadingCallback = Box<dyn Fn() + Send + Sync>;

/// Reference counter driving a shared loading indicator.
///
/// `on_start` fires exactly once per 0→1 transition and `on_stop` exactly once
/// per 1→0 transition; intermediate increments and decrements while the count
/// stays positive fire neither. The count never goes negative: surplus
/// [`stop`](LoadingCounter::stop) calls are no-ops.
pub struct LoadingCounter {
    count: AtomicUsize,
    on_start: LoadingCallback,
    on_stop: LoadingCallback,
}

impl LoadingCounter {
    /// Creates a counter with the given start/stop side effects.
    pub fn new<S, T>(on_start: S, on_stop: T) -> Self
    where
        S: Fn() + Send + Sync + 'static,
        T: Fn() + Send + Sync + 'static,
    {
        Self {
            count: AtomicUsize::new(0),
            on_start: Box::new(on_start),
            on_stop: Box::new(on_stop),
        }
    }

    /// Increments the count, firing `on_start` on the 0→1 transition.
    pub fn start(&self) {
        if self.count.fetch_add(1, Ordering::SeqCst) == 0 {
            (self.on_start)();
        }
    }

    /// Decrements the count, firing `on_stop` on the 1→0 transition.
    ///
    /// Calling `stop` with no outstanding `start` is a no-op; the count cannot
    /// go negative and `on_stop` cannot re-fire.
    pub fn stop(&self) {
        let mut current = self.count.load(Ordering::SeqCst);
        loop {
            if current == 0 {
                return;
            }
            match self.count.compare_exchange(
                current,
                current - 1,
                Ordering::SeqCst,
                Ordering::SeqCst,
            ) {
                Ok(_) => {
                    if current == 1 {
                        (self.on_stop)();
                    }
                    return;
                }
                Err(actual) => current = actual,
            }
        }
    }

    /// Number of currently outstanding requests.
    pub fn count(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }
}

impl std::fmt::Debug for LoadingCounter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoadingCounter")
            .field("count", &self.count())
            .finish()
    }
}

/// Creates a counter driving a terminal spinner.
///
/// The spinner appears while at least one request is outstanding and clears
/// when the last one finishes. This is the out-of-the-box indicator; for UI
/// frameworks supply your own hooks via [`LoadingCounter::new`].
pub fn spinner(message: impl Into<String>) -> LoadingCounter {
    let bar = ProgressBar::new_spinner();
    let message = message.into();

    let start_bar = bar.clone();
    let stop_bar = bar;
    LoadingCounter::new(
        move || {
            start_bar.reset();
            start_bar.set_message(message.clone());
            start_bar.enable_steady_tick(Duration::from_millis(100));
        },
        move || {
            stop_bar.disable_steady_tick();
            stop_bar.finish_and_clear();
        },
    )
}
