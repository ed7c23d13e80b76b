//! reqwest-backed post provider.

use async_trait::async_trait;
use reqwest::Client;

use crate::model::Post;
use crate::network::error::FetchError;
use crate::network::provider::PostProvider;

/// Endpoint used when no override is given.
pub const DEFAULT_ENDPOINT: &str = "https://jsonplaceholder.typicode.com/posts";

/// Fetches posts over HTTP from a single read-only listing endpoint.
pub struct HttpPostProvider {
    client: Client,
    endpoint: String,
}

impl HttpPostProvider {
    pub fn new() -> Self {
        Self::with_endpoint(DEFAULT_ENDPOINT)
    }

    /// Point the provider at a different listing URL.
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
        }
    }
}

impl Default for HttpPostProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PostProvider for HttpPostProvider {
    async fn fetch_posts(&self) -> Result<Vec<Post>, FetchError> {
        let response = self.client.get(&self.endpoint).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                code: status.as_u16(),
            });
        }
        let body = response.text().await?;
        let posts: Vec<Post> = serde_json::from_str(&body)?;
        Ok(posts)
    }

    fn shutdown(&self) {
        // reqwest closes pooled connections when the client drops;
        // nothing extra to release here.
        tracing::debug!(endpoint = %self.endpoint, "post provider released");
    }
}
