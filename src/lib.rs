// Public API
pub mod cli;
pub mod commands;

// Core domain types
mod config;
mod environment;
mod error;
mod manager;
mod toolchain;
mod ui;

// Re-export main types
pub use config::{config_path, Config, ConfigFile};
pub use environment::{validate_name, Environment, Shell, MANIFEST_FILE};
pub use error::{EnvError, Result, Step};
pub use manager::{Created, EnvManager, DEFAULT_ROOT};
pub use toolchain::{SystemToolchain, Toolchain};
