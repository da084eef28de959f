// src/domain/params.rs
use crate::domain::action::Action;
use crate::domain::errors::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Payload key written by the slug middleware. Other middleware must not use it.
pub const SLUG_KEY: &str = "slug";

/// Request record handed to each middleware by the host ORM.
///
/// `args` is kept as raw JSON; the write payload lives under `args.data` and is
/// expected to be an object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MiddlewareParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    pub action: Action,
    #[serde(default)]
    pub args: Value,
    #[serde(default)]
    pub data_path: Vec<String>,
    #[serde(default)]
    pub run_in_transaction: bool,
}

impl MiddlewareParams {
    #[must_use]
    pub fn new(action: Action, args: Value) -> Self {
        Self {
            model: None,
            action,
            args,
            data_path: Vec::new(),
            run_in_transaction: false,
        }
    }

    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    #[must_use]
    pub fn in_transaction(mut self, run_in_transaction: bool) -> Self {
        self.run_in_transaction = run_in_transaction;
        self
    }

    /// The write payload, if `args.data` is an object.
    #[must_use]
    pub fn data(&self) -> Option<&Map<String, Value>> {
        self.args.get("data").and_then(Value::as_object)
    }

    #[must_use]
    pub fn data_field(&self, key: &str) -> Option<&Value> {
        self.data().and_then(|data| data.get(key))
    }

    #[must_use]
    pub fn slug(&self) -> Option<&str> {
        self.data_field(SLUG_KEY).and_then(Value::as_str)
    }

    /// Write `slug` into `args.data`.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::Validation`] when `args.data` is missing or is
    /// not an object.
    pub fn set_slug(&mut self, slug: impl Into<String>) -> DomainResult<()> {
        let data = self
            .args
            .get_mut("data")
            .and_then(Value::as_object_mut)
            .ok_or_else(|| DomainError::Validation("args.data must be an object".into()))?;
        data.insert(SLUG_KEY.to_string(), Value::String(slug.into()));
        Ok(())
    }

    /// Consuming variant of [`Self::set_slug`].
    ///
    /// # Errors
    ///
    /// Same as [`Self::set_slug`].
    pub fn with_slug(mut self, slug: impl Into<String>) -> DomainResult<Self> {
        self.set_slug(slug)?;
        Ok(self)
    }
}
