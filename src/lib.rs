//! Slug-generating middleware for ORM write pipelines.
//!
//! [`SlugMiddleware`] sits in a host's middleware chain and, for the operations
//! its policy selects, derives a slug from the write payload and stores it under
//! `args.data.slug` before handing the operation on.
//!
//! ```no_run
//! use orm_slug::{Action, MiddlewareChain, MiddlewareParams, SlugMiddleware, SlugOptions};
//! use serde_json::{Value, json};
//!
//! # async fn run() -> Result<(), orm_slug::ConfigError> {
//! let slugs = SlugMiddleware::new(SlugOptions::new().source_field("title"))?;
//! let chain = MiddlewareChain::new(|params: MiddlewareParams| async move { params.args })
//!     .with(slugs);
//!
//! let written: Value = chain
//!     .run(MiddlewareParams::new(Action::Create, json!({ "data": { "title": "Hello World" } })))
//!     .await;
//! assert_eq!(written["data"]["slug"], "hello-world");
//! # Ok(())
//! # }
//! ```
pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use application::{
    Middleware, MiddlewareChain, Next, SlugError, SlugMiddleware, SlugResult,
    ports::util::{GenerationPolicy, SlugGenerator, SlugSource},
};
pub use config::{ConfigError, SlugConfig, SlugOptions};
pub use domain::{Action, DomainError, MiddlewareParams, SLUG_KEY};
pub use infrastructure::{ActionAllowList, DefaultSlugGenerator, FieldSource};
