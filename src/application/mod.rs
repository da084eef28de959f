// src/application/mod.rs
pub mod error;
pub mod interceptor;
pub mod middleware;
pub mod ports;

pub use error::{SlugError, SlugResult};
pub use interceptor::SlugMiddleware;
pub use middleware::{Middleware, MiddlewareChain, Next};
