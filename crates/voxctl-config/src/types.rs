//! Configuration types.
//!
//! Every field is optional so a file only has to mention what it changes.
//! Layers are combined with [`VoxConfig::merge`]; the `[agent]` section is
//! finally applied on top of [`AgentConfig::default`].

use std::time::Duration;

use serde::{Deserialize, Serialize};
use voxctl_client::{AgentConfig, AsrQuality, AudioFormat};

use crate::{ConfigError, Result};

/// Root configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VoxConfig {
    /// Vendor API connection settings.
    pub api: Option<ApiSection>,

    /// Agent overrides.
    pub agent: Option<AgentSection>,
}

impl VoxConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        let config: VoxConfig = toml::from_str(toml_str)?;
        config.check()?;
        Ok(config)
    }

    /// Merge another config on top of this one (other takes priority, field by field).
    pub fn merge(&mut self, other: VoxConfig) {
        if let Some(api) = other.api {
            self.api.get_or_insert_with(ApiSection::default).merge(api);
        }
        if let Some(agent) = other.agent {
            self.agent
                .get_or_insert_with(AgentSection::default)
                .merge(agent);
        }
    }

    /// Agent configuration with the `[agent]` overrides applied.
    pub fn agent_config(&self) -> AgentConfig {
        match &self.agent {
            Some(section) => section.apply(AgentConfig::default()),
            None => AgentConfig::default(),
        }
    }

    pub fn base_url(&self) -> Option<&str> {
        self.api.as_ref().and_then(|a| a.base_url.as_deref())
    }

    pub fn api_key(&self) -> Option<&str> {
        self.api.as_ref().and_then(|a| a.api_key.as_deref())
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.api
            .as_ref()
            .and_then(|a| a.timeout_secs)
            .map(Duration::from_secs)
    }

    fn check(&self) -> Result<()> {
        if let Some(0) = self.api.as_ref().and_then(|a| a.timeout_secs) {
            return Err(ConfigError::InvalidValue {
                field: "api.timeout_secs".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

/// `[api]` section.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiSection {
    /// Alternative API endpoint (proxies, test servers).
    pub base_url: Option<String>,

    /// Plaintext API key. Prefer `ELEVENLABS_API_KEY`.
    pub api_key: Option<String>,

    /// Per-request timeout in seconds.
    pub timeout_secs: Option<u64>,
}

impl ApiSection {
    fn merge(&mut self, other: ApiSection) {
        if other.base_url.is_some() {
            self.base_url = other.base_url;
        }
        if other.api_key.is_some() {
            self.api_key = other.api_key;
        }
        if other.timeout_secs.is_some() {
            self.timeout_secs = other.timeout_secs;
        }
    }

    pub fn has_plaintext_api_key(&self) -> bool {
        self.api_key.as_deref().is_some_and(|k| !k.is_empty())
    }
}

/// `[agent]` section: any subset of [`AgentConfig`] fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AgentSection {
    pub name: Option<String>,
    pub voice_id: Option<String>,
    pub prompt: Option<String>,
    pub llm_model: Option<String>,
    pub temperature: Option<f64>,
    pub first_message: Option<String>,
    pub language: Option<String>,
    pub tts_model: Option<String>,
    pub streaming_latency: Option<u32>,
    pub stability: Option<f64>,
    pub similarity_boost: Option<f64>,
    pub asr_quality: Option<AsrQuality>,
    pub audio_format: Option<AudioFormat>,
    pub widget_colors: Option<(String, String)>,
}

macro_rules! overlay {
    ($target:expr, $source:expr, $($field:ident),+ $(,)?) => {
        $(
            if let Some(value) = &$source.$field {
                $target.$field = value.clone();
            }
        )+
    };
}

macro_rules! replace_set {
    ($target:expr, $source:expr, $($field:ident),+ $(,)?) => {
        $(
            if $source.$field.is_some() {
                $target.$field = $source.$field;
            }
        )+
    };
}

impl AgentSection {
    fn merge(&mut self, other: AgentSection) {
        replace_set!(
            self,
            other,
            name,
            voice_id,
            prompt,
            llm_model,
            temperature,
            first_message,
            language,
            tts_model,
            streaming_latency,
            stability,
            similarity_boost,
            asr_quality,
            audio_format,
            widget_colors,
        );
    }

    /// Overlay the fields this section sets onto `base`.
    pub fn apply(&self, mut base: AgentConfig) -> AgentConfig {
        overlay!(
            base,
            self,
            name,
            voice_id,
            prompt,
            llm_model,
            temperature,
            first_message,
            language,
            tts_model,
            streaming_latency,
            stability,
            similarity_boost,
            asr_quality,
            audio_format,
            widget_colors,
        );
        base
    }
}
