//! Request and response types for the ElevenLabs conversational AI API.
//!
//! [`AgentConfig`] is the flat, caller-facing description of an agent. The
//! `CreateAgentRequest` family mirrors the nested document the vendor expects
//! and is built from it without loss.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{Error, Result};

/// Voice used when the caller does not pick one (Rachel).
pub const DEFAULT_VOICE_ID: &str = "21m00Tcm4TlvDq8ikWAM";

/// Agent name used when the caller does not pick one.
pub const DEFAULT_AGENT_NAME: &str = "Personal Assistant";

/// System prompt used when the caller does not supply one.
pub const DEFAULT_PROMPT: &str = "You are a friendly personal assistant on a phone call.

Be warm, conversational, and helpful. Keep responses concise since this is a phone call.

Listen carefully to what the user says and respond naturally. Be supportive and encouraging.";

/// Greeting spoken when a call connects.
pub const DEFAULT_FIRST_MESSAGE: &str = "Hey! How can I help you today?";

/// Maximum number of voices returned by a listing.
pub const VOICE_LISTING_LIMIT: usize = 20;

// ─────────────────────────────────────────────────────────────────────────────
// Agent configuration
// ─────────────────────────────────────────────────────────────────────────────

/// Speech recognition quality tier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AsrQuality {
    #[default]
    High,
}

impl AsrQuality {
    pub fn as_str(&self) -> &'static str {
        match self {
            AsrQuality::High => "high",
        }
    }
}

impl fmt::Display for AsrQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AsrQuality {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "high" => Ok(AsrQuality::High),
            other => Err(Error::InvalidAgentConfig {
                field: "asr_quality",
                reason: format!("unknown quality '{}'", other),
            }),
        }
    }
}

/// Audio encoding of the caller's side of the conversation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AudioFormat {
    #[serde(rename = "pcm_16000")]
    Pcm16000,
    #[serde(rename = "pcm_22050")]
    Pcm22050,
    #[serde(rename = "pcm_24000")]
    Pcm24000,
    #[serde(rename = "pcm_44100")]
    Pcm44100,
    /// μ-law at 8 kHz, what telephony providers such as Twilio send.
    #[default]
    #[serde(rename = "ulaw_8000")]
    Ulaw8000,
}

impl AudioFormat {
    /// All formats, in wire-name order.
    pub const ALL: [AudioFormat; 5] = [
        AudioFormat::Pcm16000,
        AudioFormat::Pcm22050,
        AudioFormat::Pcm24000,
        AudioFormat::Pcm44100,
        AudioFormat::Ulaw8000,
    ];

    /// Name used on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            AudioFormat::Pcm16000 => "pcm_16000",
            AudioFormat::Pcm22050 => "pcm_22050",
            AudioFormat::Pcm24000 => "pcm_24000",
            AudioFormat::Pcm44100 => "pcm_44100",
            AudioFormat::Ulaw8000 => "ulaw_8000",
        }
    }
}

impl fmt::Display for AudioFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AudioFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        AudioFormat::ALL
            .into_iter()
            .find(|f| f.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::InvalidAgentConfig {
                field: "audio_format",
                reason: format!("unknown format '{}'", s),
            })
    }
}

/// Everything needed to create one agent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentConfig {
    /// Display name of the agent.
    pub name: String,
    /// Vendor voice to speak with.
    pub voice_id: String,
    /// System prompt.
    pub prompt: String,
    /// LLM backing the agent.
    pub llm_model: String,
    /// Sampling temperature, in `[0, 1]`.
    pub temperature: f64,
    /// Greeting spoken when the conversation starts.
    pub first_message: String,
    /// Conversation language code.
    pub language: String,
    /// Text-to-speech model.
    pub tts_model: String,
    /// Streaming latency optimization level.
    pub streaming_latency: u32,
    /// Voice stability, in `[0, 1]`.
    pub stability: f64,
    /// Voice similarity boost, in `[0, 1]`.
    pub similarity_boost: f64,
    /// Speech recognition quality.
    pub asr_quality: AsrQuality,
    /// Inbound audio encoding.
    pub audio_format: AudioFormat,
    /// Web widget colors (primary, secondary).
    pub widget_colors: (String, String),
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_AGENT_NAME.to_string(),
            voice_id: DEFAULT_VOICE_ID.to_string(),
            prompt: DEFAULT_PROMPT.to_string(),
            llm_model: "gpt-4o-mini".to_string(),
            temperature: 0.7,
            first_message: DEFAULT_FIRST_MESSAGE.to_string(),
            language: "en".to_string(),
            tts_model: "eleven_turbo_v2".to_string(),
            streaming_latency: 3,
            stability: 0.5,
            similarity_boost: 0.75,
            asr_quality: AsrQuality::High,
            audio_format: AudioFormat::Ulaw8000,
            widget_colors: ("#3B82F6".to_string(), "#60A5FA".to_string()),
        }
    }
}

impl AgentConfig {
    /// Default configuration speaking with the given voice.
    pub fn with_voice(voice_id: impl Into<String>) -> Self {
        Self {
            voice_id: voice_id.into(),
            ..Self::default()
        }
    }

    /// Check the invariants the vendor would otherwise reject.
    pub fn validate(&self) -> Result<()> {
        require_text("name", &self.name)?;
        require_text("voice_id", &self.voice_id)?;
        require_text("prompt", &self.prompt)?;
        require_unit("temperature", self.temperature)?;
        require_unit("stability", self.stability)?;
        require_unit("similarity_boost", self.similarity_boost)?;
        Ok(())
    }
}

fn require_text(field: &'static str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(Error::InvalidAgentConfig {
            field,
            reason: "must not be empty".to_string(),
        });
    }
    Ok(())
}

fn require_unit(field: &'static str, value: f64) -> Result<()> {
    if !(0.0..=1.0).contains(&value) {
        return Err(Error::InvalidAgentConfig {
            field,
            reason: format!("must be between 0 and 1, got {}", value),
        });
    }
    Ok(())
}

// ─────────────────────────────────────────────────────────────────────────────
// Agent creation (wire format)
// ─────────────────────────────────────────────────────────────────────────────

/// Body of `POST /v1/convai/agents/create`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateAgentRequest {
    pub conversation_config: ConversationConfig,
    pub platform_settings: PlatformSettings,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversationConfig {
    pub agent: AgentSettings,
    pub tts: TtsSettings,
    pub asr: AsrSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentSettings {
    pub prompt: PromptSettings,
    pub first_message: String,
    pub language: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PromptSettings {
    pub prompt: String,
    pub llm: String,
    pub temperature: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TtsSettings {
    pub voice_id: String,
    pub model_id: String,
    pub optimize_streaming_latency: u32,
    pub stability: f64,
    pub similarity_boost: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AsrSettings {
    pub quality: AsrQuality,
    pub user_input_audio_format: AudioFormat,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlatformSettings {
    pub widget: WidgetSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WidgetSettings {
    pub color_1: String,
    pub color_2: String,
}

impl From<&AgentConfig> for CreateAgentRequest {
    fn from(config: &AgentConfig) -> Self {
        Self {
            conversation_config: ConversationConfig {
                agent: AgentSettings {
                    prompt: PromptSettings {
                        prompt: config.prompt.clone(),
                        llm: config.llm_model.clone(),
                        temperature: config.temperature,
                    },
                    first_message: config.first_message.clone(),
                    language: config.language.clone(),
                },
                tts: TtsSettings {
                    voice_id: config.voice_id.clone(),
                    model_id: config.tts_model.clone(),
                    optimize_streaming_latency: config.streaming_latency,
                    stability: config.stability,
                    similarity_boost: config.similarity_boost,
                },
                asr: AsrSettings {
                    quality: config.asr_quality,
                    user_input_audio_format: config.audio_format,
                },
            },
            platform_settings: PlatformSettings {
                widget: WidgetSettings {
                    color_1: config.widget_colors.0.clone(),
                    color_2: config.widget_colors.1.clone(),
                },
            },
            name: config.name.clone(),
        }
    }
}

/// Successful response of agent creation.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct CreateAgentResponse {
    pub agent_id: String,
}

/// Vendor-assigned agent identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AgentId(String);

impl AgentId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AgentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Voices
// ─────────────────────────────────────────────────────────────────────────────

/// Voice labels keyed by name, kept in the order the vendor sent them.
pub type Labels = serde_json::Map<String, serde_json::Value>;

/// One entry of the voice catalogue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VoiceInfo {
    /// Human-readable voice name.
    pub name: String,
    /// Vendor voice ID.
    pub voice_id: String,
    /// Descriptive labels (accent, age, gender, ...) in response order.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub labels: Labels,
}

impl VoiceInfo {
    /// Labels rendered as `k: v` pairs joined by `, `.
    pub fn label_summary(&self) -> String {
        self.labels
            .iter()
            .map(|(k, v)| match v.as_str() {
                Some(text) => format!("{}: {}", k, text),
                None => format!("{}: {}", k, v),
            })
            .collect::<Vec<_>>()
            .join(", ")
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<Labels, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Labels>::deserialize(deserializer)?.unwrap_or_default())
}

/// Response of `GET /v1/voices`.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ListVoicesResponse {
    #[serde(default)]
    pub voices: Vec<VoiceInfo>,
}

/// The first [`VOICE_LISTING_LIMIT`] voices of the catalogue, in response order.
///
/// Iterating borrows the listing, so it can be walked any number of times.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct VoiceListing {
    voices: Vec<VoiceInfo>,
}

impl VoiceListing {
    pub(crate) fn from_catalogue(mut voices: Vec<VoiceInfo>) -> Self {
        voices.truncate(VOICE_LISTING_LIMIT);
        Self { voices }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, VoiceInfo> {
        self.voices.iter()
    }

    pub fn len(&self) -> usize {
        self.voices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.voices.is_empty()
    }
}

impl<'a> IntoIterator for &'a VoiceListing {
    type Item = &'a VoiceInfo;
    type IntoIter = std::slice::Iter<'a, VoiceInfo>;

    fn into_iter(self) -> Self::IntoIter {
        self.voices.iter()
    }
}

impl IntoIterator for VoiceListing {
    type Item = VoiceInfo;
    type IntoIter = std::vec::IntoIter<VoiceInfo>;

    fn into_iter(self) -> Self::IntoIter {
        self.voices.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use serde_json::{json, Value};

    fn payload(config: &AgentConfig) -> Value {
        serde_json::to_value(CreateAgentRequest::from(config)).unwrap()
    }

    #[test]
    fn test_default_payload_matches_vendor_document() {
        let expected = json!({
            "conversation_config": {
                "agent": {
                    "prompt": {
                        "prompt": DEFAULT_PROMPT,
                        "llm": "gpt-4o-mini",
                        "temperature": 0.7
                    },
                    "first_message": "Hey! How can I help you today?",
                    "language": "en"
                },
                "tts": {
                    "voice_id": "21m00Tcm4TlvDq8ikWAM",
                    "model_id": "eleven_turbo_v2",
                    "optimize_streaming_latency": 3,
                    "stability": 0.5,
                    "similarity_boost": 0.75
                },
                "asr": {
                    "quality": "high",
                    "user_input_audio_format": "ulaw_8000"
                }
            },
            "platform_settings": {
                "widget": { "color_1": "#3B82F6", "color_2": "#60A5FA" }
            },
            "name": "Personal Assistant"
        });

        assert_eq!(payload(&AgentConfig::default()), expected);
    }

    #[test]
    fn test_default_prompt_text() {
        assert!(DEFAULT_PROMPT.starts_with("You are a friendly personal assistant on a phone call."));
        assert!(DEFAULT_PROMPT.ends_with("Be supportive and encouraging."));
        assert_eq!(DEFAULT_PROMPT.matches("\n\n").count(), 2);
    }

    #[test]
    fn test_with_voice_keeps_other_defaults() {
        let config = AgentConfig::with_voice("pNInz6obpgDQGcFmaJgB");
        assert_eq!(config.voice_id, "pNInz6obpgDQGcFmaJgB");
        assert_eq!(config.name, DEFAULT_AGENT_NAME);
        assert_eq!(config.prompt, DEFAULT_PROMPT);
    }

    #[test]
    fn test_validate_accepts_defaults() {
        AgentConfig::default().validate().unwrap();
    }

    #[test]
    fn test_validate_rejects_blank_fields() {
        let mut config = AgentConfig::default();
        config.voice_id = "  ".to_string();
        let err = config.validate().unwrap_err();
        assert!(matches!(err, Error::InvalidAgentConfig { field: "voice_id", .. }));

        let mut config = AgentConfig::default();
        config.prompt.clear();
        assert!(matches!(
            config.validate().unwrap_err(),
            Error::InvalidAgentConfig { field: "prompt", .. }
        ));
    }

    #[test]
    fn test_validate_rejects_out_of_range() {
        let mut config = AgentConfig::default();
        config.similarity_boost = 1.5;
        assert!(matches!(
            config.validate().unwrap_err(),
            Error::InvalidAgentConfig { field: "similarity_boost", .. }
        ));

        let mut config = AgentConfig::default();
        config.temperature = f64::NAN;
        assert!(config.validate().is_err());

        let mut config = AgentConfig::default();
        config.stability = 0.0;
        config.temperature = 1.0;
        config.validate().unwrap();
    }

    #[test]
    fn test_audio_format_parse() {
        assert_eq!("ulaw_8000".parse::<AudioFormat>().unwrap(), AudioFormat::Ulaw8000);
        assert_eq!("PCM_16000".parse::<AudioFormat>().unwrap(), AudioFormat::Pcm16000);
        assert!("mp3".parse::<AudioFormat>().is_err());
        assert_eq!("High".parse::<AsrQuality>().unwrap(), AsrQuality::High);
        assert!("low".parse::<AsrQuality>().is_err());
        for format in AudioFormat::ALL {
            assert_eq!(serde_json::to_value(format).unwrap(), json!(format.as_str()));
        }
    }

    #[test]
    fn test_voice_labels_tolerate_null_and_absence() {
        let voices: ListVoicesResponse = serde_json::from_value(json!({
            "voices": [
                { "name": "A", "voice_id": "a", "labels": null },
                { "name": "B", "voice_id": "b" },
                { "name": "C", "voice_id": "c", "labels": { "gender": "female", "accent": "american" }, "category": "premade" }
            ]
        }))
        .unwrap();

        assert!(voices.voices[0].labels.is_empty());
        assert!(voices.voices[1].labels.is_empty());
        assert_eq!(voices.voices[2].label_summary(), "gender: female, accent: american");
    }

    #[test]
    fn test_label_summary_renders_non_text_values() {
        let voice: VoiceInfo = serde_json::from_str(
            r#"{"name":"D","voice_id":"d","labels":{"tier":2,"accent":"irish"}}"#,
        )
        .unwrap();

        assert_eq!(voice.label_summary(), "tier: 2, accent: irish");
    }

    #[test]
    fn test_listing_truncates_and_restarts() {
        let voices: Vec<_> = (0..25)
            .map(|i| VoiceInfo {
                name: format!("voice-{}", i),
                voice_id: format!("id-{}", i),
                labels: Labels::new(),
            })
            .collect();

        let listing = VoiceListing::from_catalogue(voices);
        assert_eq!(listing.len(), VOICE_LISTING_LIMIT);

        let first: Vec<_> = listing.iter().map(|v| v.voice_id.as_str()).collect();
        let second: Vec<_> = (&listing).into_iter().map(|v| v.voice_id.as_str()).collect();
        assert_eq!(first, second);
        assert_eq!(first[0], "id-0");
        assert_eq!(first[19], "id-19");
    }

    fn unit() -> impl Strategy<Value = f64> {
        0.0f64..=1.0
    }

    proptest! {
        #[test]
        fn prop_payload_preserves_every_field(
            (name, voice_id, prompt, llm_model, first_message, language, tts_model) in (
                "[a-zA-Z0-9 ]{1,24}",
                "[a-zA-Z0-9]{20}",
                "\\PC{1,200}",
                "[a-z0-9.-]{1,16}",
                "\\PC{0,64}",
                "[a-z]{2}",
                "[a-z0-9_]{1,20}",
            ),
            (temperature, stability, similarity_boost, streaming_latency) in (unit(), unit(), unit(), 0u32..=4),
            format_index in 0usize..AudioFormat::ALL.len(),
            (color_1, color_2) in ("#[0-9A-F]{6}", "#[0-9A-F]{6}"),
        ) {
            let config = AgentConfig {
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
                asr_quality: AsrQuality::High,
                audio_format: AudioFormat::ALL[format_index],
                widget_colors: (color_1, color_2),
            };

            let body = payload(&config);
            let agent = &body["conversation_config"]["agent"];
            let tts = &body["conversation_config"]["tts"];
            let asr = &body["conversation_config"]["asr"];
            let widget = &body["platform_settings"]["widget"];

            prop_assert_eq!(body["name"].as_str(), Some(config.name.as_str()));
            prop_assert_eq!(agent["prompt"]["prompt"].as_str(), Some(config.prompt.as_str()));
            prop_assert_eq!(agent["prompt"]["llm"].as_str(), Some(config.llm_model.as_str()));
            prop_assert_eq!(agent["prompt"]["temperature"].as_f64(), Some(config.temperature));
            prop_assert_eq!(agent["first_message"].as_str(), Some(config.first_message.as_str()));
            prop_assert_eq!(agent["language"].as_str(), Some(config.language.as_str()));
            prop_assert_eq!(tts["voice_id"].as_str(), Some(config.voice_id.as_str()));
            prop_assert_eq!(tts["model_id"].as_str(), Some(config.tts_model.as_str()));
            prop_assert_eq!(tts["optimize_streaming_latency"].as_u64(), Some(u64::from(config.streaming_latency)));
            prop_assert_eq!(tts["stability"].as_f64(), Some(config.stability));
            prop_assert_eq!(tts["similarity_boost"].as_f64(), Some(config.similarity_boost));
            prop_assert_eq!(asr["quality"].as_str(), Some("high"));
            prop_assert_eq!(asr["user_input_audio_format"].as_str(), Some(config.audio_format.as_str()));
            prop_assert_eq!(widget["color_1"].as_str(), Some(config.widget_colors.0.as_str()));
            prop_assert_eq!(widget["color_2"].as_str(), Some(config.widget_colors.1.as_str()));

            let decoded: CreateAgentRequest = serde_json::from_value(body).unwrap();
            prop_assert_eq!(decoded, CreateAgentRequest::from(&config));
        }
    }
}
