// src/config.rs
use crate::application::error::{SlugError, SlugResult};
use crate::application::ports::{GenerationPolicyPort, SlugGeneratorPort, SlugSourcePort};
use crate::application::ports::util::{GenerationPolicy, SlugGenerator, SlugSource};
use crate::domain::action::Action;
use crate::domain::params::MiddlewareParams;
use crate::infrastructure::util::{
    ActionAllowList, DefaultSlugGenerator, FieldSource, FnPolicy, FnSlugGenerator, FnSource,
};
use std::{env, fmt, sync::Arc};
use thiserror::Error;

pub type ErrorHook = Arc<dyn Fn(&SlugError) + Send + Sync>;
pub type DoneHook = Arc<dyn Fn(&MiddlewareParams) + Send + Sync>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing configuration: {0}")]
    Missing(&'static str),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn default_source_field() -> &'static str {
    "name"
}

fn default_actions() -> Vec<Action> {
    vec![Action::Create, Action::Update]
}

fn default_on_error() -> ErrorHook {
    Arc::new(|err: &SlugError| {
        tracing::error!(error = %err, "failed to generate slug");
    })
}

/// Fully resolved, immutable middleware configuration.
#[derive(Clone)]
pub struct SlugConfig {
    source: Arc<SlugSourcePort>,
    slugify: Arc<SlugGeneratorPort>,
    policy: Arc<GenerationPolicyPort>,
    on_error: ErrorHook,
    on_done: Option<DoneHook>,
}

impl Default for SlugConfig {
    /// Slug from `args.data.name` via the `slug` crate, on `create` and
    /// `update`, errors logged at error level, no done hook.
    fn default() -> Self {
        Self {
            source: Arc::new(FieldSource::new(default_source_field())),
            slugify: Arc::new(DefaultSlugGenerator),
            policy: Arc::new(ActionAllowList::new(default_actions())),
            on_error: default_on_error(),
            on_done: None,
        }
    }
}

impl SlugConfig {
    #[must_use]
    pub fn source(&self) -> &SlugSourcePort {
        self.source.as_ref()
    }

    #[must_use]
    pub fn slugify(&self) -> &SlugGeneratorPort {
        self.slugify.as_ref()
    }

    #[must_use]
    pub fn policy(&self) -> &GenerationPolicyPort {
        self.policy.as_ref()
    }

    #[must_use]
    pub const fn has_on_done(&self) -> bool {
        self.on_done.is_some()
    }

    pub(crate) fn report_error(&self, err: &SlugError) {
        (self.on_error)(err);
    }

    pub(crate) fn notify_done(&self, params: &MiddlewareParams) {
        if let Some(on_done) = &self.on_done {
            on_done(params);
        }
    }
}

impl fmt::Debug for SlugConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SlugConfig")
            .field("has_on_done", &self.has_on_done())
            .finish_non_exhaustive()
    }
}

#[derive(Clone)]
enum SourceOption {
    Field(String),
    Custom(Arc<SlugSourcePort>),
}

#[derive(Clone)]
enum PolicyOption {
    Actions(Vec<Action>),
    Custom(Arc<GenerationPolicyPort>),
}

/// Partial configuration. Anything left unset falls back to
/// [`SlugConfig::default`] when resolved.
#[derive(Clone, Default)]
pub struct SlugOptions {
    source: Option<SourceOption>,
    slugify: Option<Arc<SlugGeneratorPort>>,
    policy: Option<PolicyOption>,
    on_error: Option<ErrorHook>,
    on_done: Option<DoneHook>,
}

impl SlugOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build options from environment variables, loading `.env` first when
    /// present.
    ///
    /// * `SLUG_SOURCE_FIELD`: payload field to read the source text from.
    /// * `SLUG_ACTIONS`: comma separated action names that trigger generation.
    ///   A blank value is rejected rather than read as "no actions"; leave the
    ///   variable unset to keep the defaults.
    ///
    /// # Errors
    ///
    /// See [`Self::from_vars`].
    pub fn from_env() -> Result<Self, ConfigError> {
        // Allow dotenv files to populate env vars when present.
        dotenvy::dotenv().ok();
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Same as [`Self::from_env`] with an explicit variable lookup.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Missing`] when a variable is set but blank, and
    /// [`ConfigError::Invalid`] when `SLUG_ACTIONS` names an unknown action.
    pub fn from_vars<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut options = Self::new();

        if let Some(field) = lookup("SLUG_SOURCE_FIELD") {
            let field = field.trim();
            if field.is_empty() {
                return Err(ConfigError::Missing("SLUG_SOURCE_FIELD"));
            }
            options = options.source_field(field);
        }

        if let Some(raw) = lookup("SLUG_ACTIONS") {
            let actions = raw
                .split(',')
                .map(str::trim)
                .filter(|name| !name.is_empty())
                .map(|name| {
                    name.parse::<Action>().map_err(|err| {
                        ConfigError::Invalid(format!("SLUG_ACTIONS: {err}"))
                    })
                })
                .collect::<Result<Vec<_>, _>>()?;
            if actions.is_empty() {
                return Err(ConfigError::Missing("SLUG_ACTIONS"));
            }
            options = options.actions(actions);
        }

        Ok(options)
    }

    #[must_use]
    pub fn source(mut self, source: impl SlugSource + 'static) -> Self {
        self.source = Some(SourceOption::Custom(Arc::new(source)));
        self
    }

    /// Closure form of [`Self::source`].
    #[must_use]
    pub fn source_fn<F>(self, source: F) -> Self
    where
        F: Fn(&MiddlewareParams) -> SlugResult<Option<String>> + Send + Sync + 'static,
    {
        self.source(FnSource(source))
    }

    /// Read the source text from `args.data.<field>`.
    #[must_use]
    pub fn source_field(mut self, field: impl Into<String>) -> Self {
        self.source = Some(SourceOption::Field(field.into()));
        self
    }

    #[must_use]
    pub fn slugify(mut self, slugify: impl SlugGenerator + 'static) -> Self {
        self.slugify = Some(Arc::new(slugify));
        self
    }

    /// Closure form of [`Self::slugify`].
    #[must_use]
    pub fn slugify_fn<F>(self, slugify: F) -> Self
    where
        F: Fn(&str, &MiddlewareParams) -> SlugResult<String> + Send + Sync + 'static,
    {
        self.slugify(FnSlugGenerator(slugify))
    }

    #[must_use]
    pub fn policy(mut self, policy: impl GenerationPolicy + 'static) -> Self {
        self.policy = Some(PolicyOption::Custom(Arc::new(policy)));
        self
    }

    /// Closure form of [`Self::policy`].
    #[must_use]
    pub fn will_generate<F>(self, predicate: F) -> Self
    where
        F: Fn(&MiddlewareParams) -> bool + Send + Sync + 'static,
    {
        self.policy(FnPolicy(predicate))
    }

    /// Generate only for these actions. Replaces any previously set policy.
    /// An empty list keeps the middleware installed but inert.
    #[must_use]
    pub fn actions(mut self, actions: impl IntoIterator<Item = Action>) -> Self {
        self.policy = Some(PolicyOption::Actions(actions.into_iter().collect()));
        self
    }

    #[must_use]
    pub fn on_error<F>(mut self, on_error: F) -> Self
    where
        F: Fn(&SlugError) + Send + Sync + 'static,
    {
        self.on_error = Some(Arc::new(on_error));
        self
    }

    #[must_use]
    pub fn on_done<F>(mut self, on_done: F) -> Self
    where
        F: Fn(&MiddlewareParams) + Send + Sync + 'static,
    {
        self.on_done = Some(Arc::new(on_done));
        self
    }

    /// Merge over the defaults and validate.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Missing`] for a blank source field. An empty
    /// action list is accepted and never generates.
    pub fn resolve(self) -> Result<SlugConfig, ConfigError> {
        let defaults = SlugConfig::default();

        let source = match self.source {
            Some(SourceOption::Field(field)) => {
                let field = field.trim();
                if field.is_empty() {
                    return Err(ConfigError::Missing("source field"));
                }
                Arc::new(FieldSource::new(field)) as Arc<SlugSourcePort>
            }
            Some(SourceOption::Custom(source)) => source,
            None => defaults.source,
        };

        let policy = match self.policy {
            Some(PolicyOption::Actions(actions)) => {
                Arc::new(ActionAllowList::new(actions)) as Arc<GenerationPolicyPort>
            }
            Some(PolicyOption::Custom(policy)) => policy,
            None => defaults.policy,
        };

        Ok(SlugConfig {
            source,
            slugify: self.slugify.unwrap_or(defaults.slugify),
            policy,
            on_error: self.on_error.unwrap_or(defaults.on_error),
            on_done: self.on_done.or(defaults.on_done),
        })
    }
}

impl fmt::Debug for SlugOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let source = match &self.source {
            Some(SourceOption::Field(field)) => Some(field.as_str()),
            Some(SourceOption::Custom(_)) => Some("<custom>"),
            None => None,
        };
        let actions = match &self.policy {
            Some(PolicyOption::Actions(actions)) => Some(actions.as_slice()),
            _ => None,
        };
        f.debug_struct("SlugOptions")
            .field("source", &source)
            .field("actions", &actions)
            .field("custom_slugify", &self.slugify.is_some())
            .finish_non_exhaustive()
    }
}
