//! HTTP API client for the roster and message-history endpoints.

use async_trait::async_trait;

use crate::{
    domain::{Message, User},
    dto::http::ErrorBodyDto,
    error::ClientError,
};

/// HTTP interface the store depends on
///
/// 具体的な実装（reqwest）には依存せず、テストでは差し替え可能（依存性の逆転）。
#[async_trait]
pub trait ChatApi: Send + Sync {
    /// Fetch the full roster
    async fn fetch_users(&self) -> Result<Vec<User>, ClientError>;

    /// Fetch the message history with one conversation partner
    async fn fetch_messages(&self, peer_id: &str) -> Result<Vec<Message>, ClientError>;
}

/// reqwest-backed API client
pub struct HttpChatApi {
    base_url: String,
    client: reqwest::Client,
}

impl HttpChatApi {
    /// Create a new API client for the given base URL (e.g.
    /// `http://127.0.0.1:5000/api`)
    pub fn new(base_url: String) -> Self {
        Self {
            base_url,
            client: reqwest::Client::new(),
        }
    }

    /// Issue a GET and decode the JSON body, surfacing the server-provided
    /// error message on failure.
    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
    ) -> Result<T, ClientError> {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ClientError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .json::<ErrorBodyDto>()
                .await
                .map(|body| body.message)
                .unwrap_or_else(|_| format!("request failed with status {}", status));
            return Err(ClientError::RequestFailed(message));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| ClientError::Serialization(e.to_string()))
    }
}

#[async_trait]
impl ChatApi for HttpChatApi {
    async fn fetch_users(&self) -> Result<Vec<User>, ClientError> {
        self.get_json("/users").await
    }

    async fn fetch_messages(&self, peer_id: &str) -> Result<Vec<Message>, ClientError> {
        self.get_json(&format!("/users/messages/{}", peer_id)).await
    }
}
