// tests/support/mocks/ports.rs
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use orm_slug::{MiddlewareParams, SlugError, SlugGenerator, SlugResult, SlugSource};

/// Source that always fails.
pub struct FailingSource;

#[async_trait]
impl SlugSource for FailingSource {
    async fn source(&self, _params: &MiddlewareParams) -> SlugResult<Option<String>> {
        Err(SlugError::source_failed("source unavailable"))
    }
}

/// Source that yields to the runtime before reading `args.data.title`.
pub struct SuspendingSource;

#[async_trait]
impl SlugSource for SuspendingSource {
    async fn source(&self, params: &MiddlewareParams) -> SlugResult<Option<String>> {
        tokio::task::yield_now().await;
        Ok(params
            .data_field("title")
            .and_then(serde_json::Value::as_str)
            .map(str::to_owned))
    }
}

/// Generator that records its inputs and upper-cases them after a short sleep.
#[derive(Clone, Default)]
pub struct RecordingSlugger {
    pub calls: Arc<Mutex<Vec<(String, Option<String>)>>>,
}

impl RecordingSlugger {
    pub fn calls(&self) -> Vec<(String, Option<String>)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl SlugGenerator for RecordingSlugger {
    async fn slugify(&self, input: &str, params: &MiddlewareParams) -> SlugResult<String> {
        tokio::time::sleep(std::time::Duration::from_millis(1)).await;
        self.calls
            .lock()
            .unwrap()
            .push((input.to_string(), params.model.clone()));
        Ok(input.to_uppercase())
    }
}
