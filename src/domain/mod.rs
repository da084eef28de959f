// src/domain/mod.rs
pub mod action;
pub mod errors;
pub mod params;

pub use action::Action;
pub use errors::{DomainError, DomainResult};
pub use params::{MiddlewareParams, SLUG_KEY};
