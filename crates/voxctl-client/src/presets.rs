//! Well-known voices that can be referred to by name.

use std::fmt;

/// A bundled shortcut for a popular premade voice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VoicePreset {
    /// Lowercase name accepted on the command line.
    pub name: &'static str,
    /// Vendor voice ID.
    pub voice_id: &'static str,
    /// Short description of how the voice sounds.
    pub description: &'static str,
}

/// Browse the full catalogue at <https://elevenlabs.io/voice-library>.
pub const VOICE_PRESETS: &[VoicePreset] = &[
    VoicePreset {
        name: "rachel",
        voice_id: "21m00Tcm4TlvDq8ikWAM",
        description: "natural, warm female",
    },
    VoicePreset {
        name: "adam",
        voice_id: "pNInz6obpgDQGcFmaJgB",
        description: "deep, professional male",
    },
    VoicePreset {
        name: "bella",
        voice_id: "EXAVITQu4vr4xnSDxMaL",
        description: "soft, conversational female",
    },
    VoicePreset {
        name: "antoni",
        voice_id: "ErXwobaYiN019PkySvjV",
        description: "calm, friendly male",
    },
];

impl VoicePreset {
    /// Look up a preset by name, ignoring case.
    pub fn find(name: &str) -> Option<&'static VoicePreset> {
        VOICE_PRESETS
            .iter()
            .find(|p| p.name.eq_ignore_ascii_case(name.trim()))
    }
}

impl fmt::Display for VoicePreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.description)
    }
}

/// Turn a command-line voice argument into a voice ID.
///
/// Preset names map to their IDs; anything else is taken as a raw voice ID.
pub fn resolve_voice(arg: &str) -> String {
    match VoicePreset::find(arg) {
        Some(preset) => preset.voice_id.to_string(),
        None => arg.to_string(),
    }
}
