//! Main client implementation.

use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::StatusCode;
use url::Url;

use crate::api::{AgentsApi, VoicesApi};
use crate::error::{Error, Result};
use crate::types::{AgentConfig, AgentId, VoiceListing};

/// Production API endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.elevenlabs.io";

/// Header carrying the API key.
pub const API_KEY_HEADER: &str = "xi-api-key";

/// Default timeout for requests.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// ElevenLabs API client.
///
/// Cheap to clone; clones share one connection pool.
///
/// # Example
///
/// ```no_run
/// use voxctl_client::{AgentConfig, VoxClient};
///
/// # async fn example() -> voxctl_client::Result<()> {
/// let client = VoxClient::builder().api_key("xi-secret").build()?;
///
/// let agent_id = client.create_agent(&AgentConfig::default()).await?;
/// println!("created {}", agent_id);
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct VoxClient {
    inner: Arc<ClientInner>,
}

/// Inner client state (shared across clones).
pub(crate) struct ClientInner {
    /// HTTP client.
    pub(crate) http: reqwest::Client,
    /// Base URL for API requests.
    pub(crate) base_url: Url,
    /// `xi-api-key` value, if one was supplied.
    pub(crate) api_key: Option<HeaderValue>,
    /// Request timeout.
    pub(crate) timeout: Duration,
}

impl VoxClient {
    /// Create a new client builder.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &Url {
        &self.inner.base_url
    }

    /// Whether an API key was configured.
    pub fn has_credential(&self) -> bool {
        self.inner.api_key.is_some()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // API accessors
    // ─────────────────────────────────────────────────────────────────────────

    /// Access the conversational agents API.
    pub fn agents(&self) -> AgentsApi {
        AgentsApi::new(self.clone())
    }

    /// Access the voices API.
    pub fn voices(&self) -> VoicesApi {
        VoicesApi::new(self.clone())
    }

    /// Create an agent and return its vendor-assigned ID.
    pub async fn create_agent(&self, config: &AgentConfig) -> Result<AgentId> {
        self.agents().create(config).await
    }

    /// List the first voices of the catalogue.
    pub async fn list_voices(&self) -> Result<VoiceListing> {
        self.voices().list().await
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Internal HTTP methods
    // ─────────────────────────────────────────────────────────────────────────

    /// Build a URL for an API path.
    pub(crate) fn url(&self, path: &str) -> Result<Url> {
        let path = path.trim_start_matches('/');
        self.inner
            .base_url
            .join(&format!("v1/{}", path))
            .map_err(Error::from)
    }

    /// The API key header value, or `MissingCredential` before any I/O happens.
    pub(crate) fn credential(&self) -> Result<&HeaderValue> {
        self.inner.api_key.as_ref().ok_or(Error::MissingCredential)
    }

    /// Make a GET request.
    pub(crate) async fn get<T: serde::de::DeserializeOwned>(&self, path: &str) -> Result<T> {
        let key = self.credential()?;
        let url = self.url(path)?;
        tracing::debug!(%url, "GET");
        let response = self
            .inner
            .http
            .get(url)
            .header(API_KEY_HEADER, key.clone())
            .timeout(self.inner.timeout)
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Make a POST request with a JSON body.
    pub(crate) async fn post<T, B>(&self, path: &str, body: &B) -> Result<T>
    where
        T: serde::de::DeserializeOwned,
        B: serde::Serialize + ?Sized,
    {
        let key = self.credential()?;
        let url = self.url(path)?;
        tracing::debug!(%url, "POST");
        let response = self
            .inner
            .http
            .post(url)
            .header(API_KEY_HEADER, key.clone())
            .json(body)
            .timeout(self.inner.timeout)
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Decode a 200 body; anything else becomes `Error::Api` with the raw body.
    async fn handle_response<T: serde::de::DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T> {
        let status = response.status();
        let body = response.text().await?;

        if status == StatusCode::OK {
            Ok(serde_json::from_str(&body)?)
        } else {
            tracing::warn!(status = status.as_u16(), "request rejected");
            Err(Error::Api {
                status: status.as_u16(),
                body,
            })
        }
    }
}

/// Builder for creating a VoxClient.
#[derive(Debug)]
pub struct ClientBuilder {
    base_url: Option<String>,
    api_key: Option<String>,
    timeout: Duration,
}

impl ClientBuilder {
    /// Create a new builder with defaults.
    pub fn new() -> Self {
        Self {
            base_url: None,
            api_key: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Set the base URL (defaults to the production API).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the API key sent as `xi-api-key`.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Build the client.
    pub fn build(self) -> Result<VoxClient> {
        let base_url = self
            .base_url
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        // Parse and normalize base URL
        let mut base_url = Url::parse(&base_url)?;
        if !base_url.path().ends_with('/') {
            base_url.set_path(&format!("{}/", base_url.path()));
        }

        let api_key = match self.api_key.filter(|k| !k.trim().is_empty()) {
            Some(key) => {
                let mut value = HeaderValue::from_str(key.trim())
                    .map_err(|_| Error::Config("Invalid API key".to_string()))?;
                value.set_sensitive(true);
                Some(value)
            }
            None => None,
        };

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .user_agent(concat!("voxctl/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(VoxClient {
            inner: Arc::new(ClientInner {
                http,
                base_url,
                api_key,
                timeout: self.timeout,
            }),
        })
    }
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
