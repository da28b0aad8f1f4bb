//! Shared application state for all routes.

use crate::store::StudentRepository;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    /// Each handler call checks out its own session from here; no per-request state is shared.
    pub students: Arc<dyn StudentRepository>,
}

impl AppState {
    pub fn new<R: StudentRepository + 'static>(repo: R) -> Self {
        AppState {
            students: Arc::new(repo),
        }
    }
}
