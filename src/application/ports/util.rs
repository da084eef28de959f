// src/application/ports/util.rs
use crate::application::error::SlugResult;
use crate::domain::params::MiddlewareParams;
use async_trait::async_trait;

/// Produces the raw text a slug is derived from.
///
/// `Ok(None)` (or an empty string) means there is nothing to slugify and the
/// payload is left alone.
#[async_trait]
pub trait SlugSource: Send + Sync {
    async fn source(&self, params: &MiddlewareParams) -> SlugResult<Option<String>>;
}

/// Turns source text into the slug that is stored.
#[async_trait]
pub trait SlugGenerator: Send + Sync {
    async fn slugify(&self, input: &str, params: &MiddlewareParams) -> SlugResult<String>;
}

/// Decides per operation whether a slug should be generated at all.
pub trait GenerationPolicy: Send + Sync {
    fn will_generate(&self, params: &MiddlewareParams) -> bool;
}
