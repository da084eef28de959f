// src/application/ports/mod.rs
pub mod util;

// Type aliases to make port injection sites more descriptive and reduce `dyn` noise
pub type SlugSourcePort = dyn util::SlugSource;
pub type SlugGeneratorPort = dyn util::SlugGenerator;
pub type GenerationPolicyPort = dyn util::GenerationPolicy;
