// src/application/error.rs
use crate::domain::errors::DomainError;
use thiserror::Error;

pub type SlugResult<T> = Result<T, SlugError>;

/// Failure while producing a slug. Never fatal: the middleware reports it to
/// the configured error hook and lets the operation continue.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SlugError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("failed to read slug source: {0}")]
    Source(String),

    #[error("failed to generate slug: {0}")]
    Slugify(String),
}

impl SlugError {
    #[must_use]
    pub fn source_failed(msg: impl Into<String>) -> Self {
        Self::Source(msg.into())
    }

    #[must_use]
    pub fn slugify_failed(msg: impl Into<String>) -> Self {
        Self::Slugify(msg.into())
    }
}
