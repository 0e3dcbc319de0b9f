//! Opaque-handle bookkeeping for installed interceptors.

use crate::interceptor::handler::{RequestInterceptor, ResponseInterceptor};

use std::sync::Arc;

/// Opaque handle identifying an installed interceptor.
///
/// Treat it as an opaque comparable value: it can be stored, compared and
/// handed back for removal, nothing else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InterceptorId(u64);

/// Tracks installed request- and response-side interceptors.
///
/// Handles are issued from one counter shared by both sides, so a handle
/// appears in at most one collection at a time. Removal is idempotent:
/// removing an absent handle is a no-op.
#[derive(Default)]
pub struct InterceptorRegistry {
    next_id: u64,
    request: Vec<(InterceptorId, Arc<dyn RequestInterceptor>)>,
    response: Vec<(InterceptorId, Arc<dyn ResponseInterceptor>)>,
}

impl InterceptorRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    fn issue_id(&mut self) -> InterceptorId {
        let id = InterceptorId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Stores a request interceptor and returns its handle.
    pub fn add_request(&mut self, interceptor: Arc<dyn RequestInterceptor>) -> InterceptorId {
        let id = self.issue_id();
        self.request.push((id, interceptor));
        id
    }

    /// Stores a response interceptor and returns its handle.
    pub fn add_response(&mut self, interceptor: Arc<dyn ResponseInterceptor>) -> InterceptorId {
        let id = self.issue_id();
        self.response.push((id, interceptor));
        id
    }

    /// Removes a request interceptor. Absent handles are a silent no-op.
    pub fn remove_request(&mut self, id: InterceptorId) {
        self.request.retain(|(stored, _)| *stored != id);
    }

    /// Removes a response interceptor. Absent handles are a silent no-op.
    pub fn remove_response(&mut self, id: InterceptorId) {
        self.response.retain(|(stored, _)| *stored != id);
    }

    /// Installed request interceptors, in registration order.
    pub(crate) fn request_interceptors(
        &self,
    ) -> impl Iterator<Item = &Arc<dyn RequestInterceptor>> {
        self.request.iter().map(|(_, interceptor)| interceptor)
    }

    /// Installed response interceptors, in registration order.
    pub(crate) fn response_interceptors(
        &self,
    ) -> impl Iterator<Item = &Arc<dyn ResponseInterceptor>> {
        self.response.iter().map(|(_, interceptor)| interceptor)
    }

    /// Number of installed request interceptors.
    pub fn request_len(&self) -> usize {
        self.request.len()
    }

    /// Number of installed response interceptors.
    pub fn response_len(&self) -> usize {
        self.response.len()
    }
}

impl std::fmt::Debug for InterceptorRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InterceptorRegistry")
            .field("request", &self.request_len())
            .field("response", &self.response_len())
            .finish()
    }
}
