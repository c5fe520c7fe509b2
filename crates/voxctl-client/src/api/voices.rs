//! Voices API.

use crate::client::VoxClient;
use crate::error::Result;
use crate::types::{ListVoicesResponse, VoiceListing};

/// Voices API client.
pub struct VoicesApi {
    client: VoxClient,
}

impl VoicesApi {
    pub(crate) fn new(client: VoxClient) -> Self {
        Self { client }
    }

    /// Fetch the catalogue, keeping only its first entries.
    pub async fn list(&self) -> Result<VoiceListing> {
        let response: ListVoicesResponse = self.client.get("voices").await?;
        tracing::debug!(total = response.voices.len(), "fetched voices");
        Ok(VoiceListing::from_catalogue(response.voices))
    }
}
