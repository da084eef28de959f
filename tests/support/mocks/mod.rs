// tests/support/mocks/mod.rs
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod hooks;
pub mod ports;

pub use hooks::{HookCounter, RecordingHooks};
pub use ports::{FailingSource, RecordingSlugger, SuspendingSource};
