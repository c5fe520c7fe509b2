//! CLI command handlers.

pub mod create;
pub mod presets;
pub mod voices;

use anyhow::{Context as _, Result};
use voxctl_client::VoxClient;
use voxctl_config::{ResolvedSecret, VoxConfig};

/// Shared context for all commands.
#[derive(Debug, Clone)]
pub struct Context {
    /// Merged configuration.
    pub config: VoxConfig,
    /// API base URL given on the command line, overriding the config.
    pub api_url: Option<String>,
    /// Resolved API key, if any.
    pub api_key: Option<ResolvedSecret>,
    /// Output as JSON for scripting.
    pub json_output: bool,
    /// Verbose output enabled.
    pub verbose: bool,
}

impl Context {
    /// Build a client from the context.
    ///
    /// A missing key is not an error here; the client reports it on first use
    /// without touching the network.
    pub fn client(&self) -> Result<VoxClient> {
        let mut builder = VoxClient::builder();

        if let Some(url) = self.api_url.as_deref().or(self.config.base_url()) {
            builder = builder.base_url(url);
        }
        if let Some(timeout) = self.config.timeout() {
            builder = builder.timeout(timeout);
        }
        if let Some(secret) = &self.api_key {
            tracing::debug!(source = %secret.source, "using API key");
            builder = builder.api_key(secret.value.clone());
        }

        builder.build().context("failed to build API client")
    }
}
