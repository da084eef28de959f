// src/infrastructure/mod.rs
pub mod telemetry;
pub mod util;

pub use telemetry::init_tracing;
pub use util::{
    ActionAllowList, DefaultSlugGenerator, FieldSource, FnPolicy, FnSlugGenerator, FnSource,
};
