//! Loading module containing the shared loading-indicator counter.
//!
//! Multiple concurrent requests share one visual loading indicator: the
//! indicator should appear on the first outstanding request and disappear only
//! when the last one finishes. A plain boolean cannot express overlapping
//! requests, so a reference counter drives the start/stop side effects.
//!
//! # Examples
//!
//! ## Wiring custom start/stop hooks
//!
//! ```rust
//! use relay::loading::LoadingCounter;
//!
//! let counter = LoadingCounter::new(
//!     || println!("show indicator"),
//!     || println!("hide indicator"),
//! );
//!
//! counter.start(); // prints "show indicator"
//! counter.start(); // second outstanding request, no side effect
//! counter.stop();
//! counter.stop(); // prints "hide indicator"
//! ```
//!
//! ## Terminal spinner
//!
//! ```rust
//! use relay::loading::spinner;
//!
//! let counter = spinner("requesting...");
//! counter.start();
//! counter.stop();
//! ```

pub mod counter;

pub use counter::{spinner, LoadingCallback, LoadingCounter};
