use crate::application::error::SlugResult;
use crate::application::ports::util::{GenerationPolicy, SlugGenerator, SlugSource};
use crate::domain::action::Action;
use crate::domain::errors::DomainError;
use crate::domain::params::MiddlewareParams;
use async_trait::async_trait;
use serde_json::Value;
use slug::slugify;

/// Lowercase, hyphen-delimited slugs via the `slug` crate.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultSlugGenerator;

#[async_trait]
impl SlugGenerator for DefaultSlugGenerator {
    async fn slugify(&self, input: &str, _params: &MiddlewareParams) -> SlugResult<String> {
        Ok(slugify(input))
    }
}

/// Reads a string field out of `args.data`.
///
/// Missing, `null`, `false` and zero values count as "no source". Any other
/// non-string value is an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSource {
    field: String,
}

impl FieldSource {
    #[must_use]
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    #[must_use]
    pub fn field(&self) -> &str {
        &self.field
    }
}

#[async_trait]
impl SlugSource for FieldSource {
    async fn source(&self, params: &MiddlewareParams) -> SlugResult<Option<String>> {
        let data = params
            .data()
            .ok_or_else(|| DomainError::Validation("args.data must be an object".into()))?;

        match data.get(&self.field) {
            None | Some(Value::Null | Value::Bool(false)) => Ok(None),
            Some(Value::Number(n)) if n.as_f64() == Some(0.0) => Ok(None),
            Some(Value::String(text)) => Ok(Some(text.clone())),
            Some(other) => Err(DomainError::Validation(format!(
                "field '{}' must be a string, got {other}",
                self.field
            ))
            .into()),
        }
    }
}

/// Generates only for the listed actions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionAllowList {
    actions: Vec<Action>,
}

impl ActionAllowList {
    #[must_use]
    pub fn new(actions: impl IntoIterator<Item = Action>) -> Self {
        Self {
            actions: actions.into_iter().collect(),
        }
    }

    #[must_use]
    pub fn actions(&self) -> &[Action] {
        &self.actions
    }
}

impl GenerationPolicy for ActionAllowList {
    fn will_generate(&self, params: &MiddlewareParams) -> bool {
        self.actions.contains(&params.action)
    }
}

/// Adapts a plain closure into a [`SlugSource`].
pub struct FnSource<F>(pub F);

#[async_trait]
impl<F> SlugSource for FnSource<F>
where
    F: Fn(&MiddlewareParams) -> SlugResult<Option<String>> + Send + Sync,
{
    async fn source(&self, params: &MiddlewareParams) -> SlugResult<Option<String>> {
        (self.0)(params)
    }
}

/// Adapts a plain closure into a [`SlugGenerator`].
pub struct FnSlugGenerator<F>(pub F);

#[async_trait]
impl<F> SlugGenerator for FnSlugGenerator<F>
where
    F: Fn(&str, &MiddlewareParams) -> SlugResult<String> + Send + Sync,
{
    async fn slugify(&self, input: &str, params: &MiddlewareParams) -> SlugResult<String> {
        (self.0)(input, params)
    }
}

/// Adapts a plain predicate into a [`GenerationPolicy`].
pub struct FnPolicy<F>(pub F);

impl<F> GenerationPolicy for FnPolicy<F>
where
    F: Fn(&MiddlewareParams) -> bool + Send + Sync,
{
    fn will_generate(&self, params: &MiddlewareParams) -> bool {
        (self.0)(params)
    }
}
