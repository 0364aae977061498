//! # Crewplan Config
//!
//! Layered configuration for Crewplan: toml files, environment overrides,
//! and runtime reload, plus the tracing subscriber setup.

mod app_config;
mod loader;
mod logging;

pub use app_config::*;
pub use loader::*;
pub use logging::*;
