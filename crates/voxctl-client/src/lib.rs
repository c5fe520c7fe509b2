//! HTTP client for provisioning ElevenLabs conversational voice agents.
//!
//! # Example
//!
//! ```no_run
//! use voxctl_client::{AgentConfig, Result, VoxClient};
//!
//! # async fn example() -> Result<()> {
//! let client = VoxClient::builder()
//!     .api_key("xi-secret")
//!     .build()?;
//!
//! // Create an agent speaking with the default voice
//! let agent_id = client.create_agent(&AgentConfig::default()).await?;
//! println!("Agent ID: {}", agent_id);
//!
//! // Browse voices
//! for voice in &client.list_voices().await? {
//!     println!("{:<20} ID: {}", voice.name, voice.voice_id);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # API Coverage
//!
//! - **Agents**: create a conversational agent (`POST /v1/convai/agents/create`)
//! - **Voices**: list voices (`GET /v1/voices`)

pub mod api;
pub mod client;
pub mod error;
pub mod presets;
pub mod types;

pub use client::{ClientBuilder, VoxClient, API_KEY_HEADER, DEFAULT_BASE_URL};
pub use error::{Error, Result};
pub use presets::{resolve_voice, VoicePreset, VOICE_PRESETS};
pub use types::*;
