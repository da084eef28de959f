// tests/support/mocks/hooks.rs
use std::sync::{
    Arc, Mutex,
    atomic::{AtomicUsize, Ordering},
};

use orm_slug::{MiddlewareParams, SlugError, SlugOptions};

#[derive(Clone, Default)]
pub struct HookCounter(Arc<AtomicUsize>);

impl HookCounter {
    pub fn bump(&self) {
        self.0.fetch_add(1, Ordering::SeqCst);
    }

    pub fn get(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }
}

/// Captures every call to the error and done hooks.
#[derive(Clone, Default)]
pub struct RecordingHooks {
    pub errors: Arc<Mutex<Vec<SlugError>>>,
    pub done: Arc<Mutex<Vec<MiddlewareParams>>>,
}

impl RecordingHooks {
    /// Attach both hooks to `options`.
    pub fn install(&self, options: SlugOptions) -> SlugOptions {
        let errors = Arc::clone(&self.errors);
        let done = Arc::clone(&self.done);
        options
            .on_error(move |err: &SlugError| errors.lock().unwrap().push(err.clone()))
            .on_done(move |params: &MiddlewareParams| done.lock().unwrap().push(params.clone()))
    }

    pub fn errors(&self) -> Vec<SlugError> {
        self.errors.lock().unwrap().clone()
    }

    pub fn done(&self) -> Vec<MiddlewareParams> {
        self.done.lock().unwrap().clone()
    }
}
