//! API key resolution.
//!
//! Resolution order:
//! 1. `ELEVENLABS_API_KEY` environment variable
//! 2. `[api] api_key` in the config file (with warning)

use std::fmt;

/// Environment variable holding the vendor API key.
pub const API_KEY_ENV: &str = "ELEVENLABS_API_KEY";

/// Result of API key resolution with provenance.
#[derive(Clone, PartialEq, Eq)]
pub struct ResolvedSecret {
    /// The secret value.
    pub value: String,
    /// Where the secret was found.
    pub source: SecretSource,
}

impl fmt::Debug for ResolvedSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResolvedSecret")
            .field("value", &"<redacted>")
            .field("source", &self.source)
            .finish()
    }
}

/// Where a secret was resolved from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SecretSource {
    /// Environment variable.
    EnvVar(String),
    /// Config file (plaintext, not recommended).
    ConfigFile,
}

impl fmt::Display for SecretSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SecretSource::EnvVar(var) => write!(f, "env var {}", var),
            SecretSource::ConfigFile => write!(f, "config file (plaintext)"),
        }
    }
}

/// Resolve the API key from the process environment, then the config value.
pub fn resolve_api_key(config_value: Option<&str>) -> Option<ResolvedSecret> {
    resolve_api_key_with(config_value, |var| std::env::var(var).ok())
}

/// Resolve the API key using `lookup` in place of the process environment.
pub fn resolve_api_key_with<F>(config_value: Option<&str>, lookup: F) -> Option<ResolvedSecret>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(value) = lookup(API_KEY_ENV).filter(|v| !v.trim().is_empty()) {
        return Some(ResolvedSecret {
            value,
            source: SecretSource::EnvVar(API_KEY_ENV.to_string()),
        });
    }

    config_value
        .filter(|v| !v.trim().is_empty())
        .map(|v| ResolvedSecret {
            value: v.to_string(),
            source: SecretSource::ConfigFile,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env_with(key: &'static str) -> impl Fn(&str) -> Option<String> {
        move |var| (var == API_KEY_ENV).then(|| key.to_string())
    }

    fn empty_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_env_var_wins_over_config() {
        let r = resolve_api_key_with(Some("from-file"), env_with("from-env")).unwrap();
        assert_eq!(r.value, "from-env");
        assert_eq!(r.source, SecretSource::EnvVar("ELEVENLABS_API_KEY".to_string()));
    }

    #[test]
    fn test_resolve_from_config_value() {
        let r = resolve_api_key_with(Some("my-key"), empty_env).unwrap();
        assert_eq!(r.value, "my-key");
        assert_eq!(r.source, SecretSource::ConfigFile);
    }

    #[test]
    fn test_blank_values_are_ignored() {
        let r = resolve_api_key_with(Some("file-key"), env_with("  ")).unwrap();
        assert_eq!(r.source, SecretSource::ConfigFile);

        assert!(resolve_api_key_with(Some(""), env_with("")).is_none());
    }

    #[test]
    fn test_resolve_none_when_nothing_available() {
        assert!(resolve_api_key_with(None, empty_env).is_none());
    }

    #[test]
    fn test_debug_redacts_value() {
        let r = resolve_api_key_with(Some("sk_super_secret"), empty_env).unwrap();
        let debug = format!("{:?}", r);
        assert!(!debug.contains("sk_super_secret"));
        assert!(debug.contains("ConfigFile"));
    }

    #[test]
    fn test_secret_source_display() {
        assert_eq!(
            SecretSource::EnvVar("ELEVENLABS_API_KEY".to_string()).to_string(),
            "env var ELEVENLABS_API_KEY"
        );
        assert_eq!(
            SecretSource::ConfigFile.to_string(),
            "config file (plaintext)"
        );
    }
}
