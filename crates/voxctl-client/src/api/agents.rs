//! Conversational agents API.

use crate::client::VoxClient;
use crate::error::Result;
use crate::types::{AgentConfig, AgentId, CreateAgentRequest, CreateAgentResponse};

/// Agents API client.
pub struct AgentsApi {
    client: VoxClient,
}

impl AgentsApi {
    pub(crate) fn new(client: VoxClient) -> Self {
        Self { client }
    }

    /// Create an agent from `config`.
    ///
    /// A missing credential is reported before the config is validated;
    /// neither a missing credential nor a bad config reaches the network.
    pub async fn create(&self, config: &AgentConfig) -> Result<AgentId> {
        self.client.credential()?;
        config.validate()?;
        let request = CreateAgentRequest::from(config);
        tracing::debug!(name = %config.name, voice_id = %config.voice_id, "creating agent");

        let response: CreateAgentResponse =
            self.client.post("convai/agents/create", &request).await?;
        Ok(AgentId::new(response.agent_id))
    }
}
