//! Configuration system for voxctl.
//!
//! Provides TOML-based configuration with:
//! - Config file layering (user config directory + project-local `voxctl.toml`)
//! - `[api]` connection settings (base URL, timeout)
//! - `[agent]` overrides applied field by field on top of the built-in agent defaults
//! - API key resolution (env var → config file)

pub mod discovery;
pub mod error;
pub mod secrets;
pub mod types;

pub use discovery::{
    load_config_file, load_config_with_options, xdg_config_dir, xdg_config_path,
    ConfigSource, LoadedConfig,
};
pub use error::{ConfigError, Result};
pub use secrets::{resolve_api_key, resolve_api_key_with, ResolvedSecret, SecretSource, API_KEY_ENV};
pub use types::*;
