//! The single-slot status interceptor and its settlement pair.
//!
//! Business APIs often embed their own status codes inside a 200 response.
//! The status interceptor is the designed mechanism for distinguishing "got a
//! response" from "response represents success": every successful plain or
//! Default-mode streaming response is handed to it together with explicit
//! resolve/reject capabilities, and the hook fully owns settlement. It may
//! settle immediately or hand the [`Settlement`] to a spawned task and settle
//! later (e.g. after a token refresh retry), which is why the contract is a
//! pair of completion callbacks rather than a return value.

use crate::error::{Error, Result};
use crate::request::RawResponse;

use serde_json::Value;
use std::sync::Arc;
use tokio::sync::oneshot;

/// The status interceptor hook. At most one per wrapper instance; the last
/// registration wins.
pub type StatusInterceptor = Arc<dyn Fn(StatusContext) + Send + Sync>;

/// One-shot resolve/reject pair settling a pending dispatch.
///
/// Consuming either method settles the call. Dropping the settlement without
/// settling rejects the call with [`Error::Unsettled`].
pub struct Settlement {
    tx: oneshot::Sender<Result<Value>>,
}

impl Settlement {
    pub(crate) fn new_pair() -> (Self, oneshot::Receiver<Result<Value>>) {
        let (tx, rx) = oneshot::channel();
        (Self { tx }, rx)
    }

    /// Resolves the pending dispatch with the given payload.
    pub fn resolve(self, value: Value) {
        let _ = self.tx.send(Ok(value));
    }

    /// Rejects the pending dispatch with the given error.
    pub fn reject(self, error: Error) {
        let _ = self.tx.send(Err(error));
    }
}

impl std::fmt::Debug for Settlement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Settlement")
    }
}

/// Everything a status interceptor needs to settle an in-flight call.
#[derive(Debug)]
pub struct StatusContext {
    /// The raw transport response.
    pub response: RawResponse,
    /// The dispatch's toast-suppression flag.
    pub disable_toast: bool,
    /// The resolve/reject pair for the pending call.
    pub settlement: Settlement,
}

impl StatusContext {
    /// Resolves the pending call with the given payload.
    pub fn resolve(self, value: Value) {
        self.settlement.resolve(value);
    }

    /// Rejects the pending call with the given error.
    pub fn reject(self, error: Error) {
        self.settlement.reject(error);
    }

    /// Splits the context for deferred settlement from another task.
    pub fn into_parts(self) -> (RawResponse, bool, Settlement) {
        (self.response, self.disable_toast, self.settlement)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_resolve_settles_with_value() {
        let (settlement, rx) = Settlement::new_pair();
        settlement.resolve(json!({"ok": true}));
        assert_eq!(rx.await.unwrap().unwrap(), json!({"ok": true}));
    }

    #[tokio::test]
    async fn test_reject_settles_with_error() {
        let (settlement, rx) = Settlement::new_pair();
        settlement.reject(Error::Internal("business failure".to_string()));
        let err = rx.await.unwrap().unwrap_err();
        assert!(matches!(err, Error::Internal(_)));
    }

    #[tokio::test]
    async fn test_dropped_settlement_is_detectable() {
        let (settlement, rx) = Settlement::new_pair();
        drop(settlement);
        assert!(rx.await.is_err());
    }

    #[tokio::test]
    async fn test_deferred_settlement_from_spawned_task() {
        let (settlement, rx) = Settlement::new_pair();
        tokio::spawn(async move {
            settlement.resolve(json!(42));
        });
        assert_eq!(rx.await.unwrap().unwrap(), json!(42));
    }
}
