// src/application/interceptor.rs
use crate::application::error::SlugResult;
use crate::application::middleware::{Middleware, Next};
use crate::config::{ConfigError, SlugConfig, SlugOptions};
use crate::domain::params::MiddlewareParams;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, trace};

/// Middleware that writes a slug into `args.data.slug` on selected operations.
///
/// Generation failures are handed to the configured error hook and never stop
/// the operation: the continuation always runs and its output is returned as is.
#[derive(Clone, Debug, Default)]
pub struct SlugMiddleware {
    config: Arc<SlugConfig>,
}

impl SlugMiddleware {
    /// Merge `options` over the defaults and build the middleware.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when the options do not validate.
    pub fn new(options: SlugOptions) -> Result<Self, ConfigError> {
        Ok(Self::from_config(options.resolve()?))
    }

    #[must_use]
    pub fn from_config(config: SlugConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    #[must_use]
    pub fn config(&self) -> &SlugConfig {
        &self.config
    }

    #[must_use]
    pub fn will_generate(&self, params: &MiddlewareParams) -> bool {
        self.config.policy().will_generate(params)
    }

    /// Run the generation step on its own and return the resulting params.
    ///
    /// The returned value carries the slug when one was produced; merging it
    /// back into the host's record is up to the caller.
    pub async fn apply(&self, mut params: MiddlewareParams) -> MiddlewareParams {
        if !self.will_generate(&params) {
            trace!(action = %params.action, "slug generation skipped");
            return params;
        }

        if let Err(err) = self.generate(&mut params).await {
            self.config.report_error(&err);
        }
        self.config.notify_done(&params);

        params
    }

    async fn generate(&self, params: &mut MiddlewareParams) -> SlugResult<()> {
        let source = self.config.source().source(params).await?;
        let Some(source) = source.filter(|text| !text.is_empty()) else {
            trace!(action = %params.action, "empty slug source");
            return Ok(());
        };

        let slug = self.config.slugify().slugify(&source, params).await?;
        params.set_slug(slug)?;

        debug!(
            model = params.model.as_deref().unwrap_or("-"),
            action = %params.action,
            slug = params.slug().unwrap_or_default(),
            "generated slug"
        );
        Ok(())
    }
}

#[async_trait]
impl<T: Send + 'static> Middleware<T> for SlugMiddleware {
    async fn handle(&self, params: MiddlewareParams, next: Next<'_, T>) -> T {
        let params = self.apply(params).await;
        next.run(params).await
    }
}
