//! Observability for matchfeat.
//! `tracing` crate with `EnvFilter`, per-module log levels.

pub mod fields;
pub mod setup;

pub use setup::init_tracing;
