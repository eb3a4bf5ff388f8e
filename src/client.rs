use crate::config::WidgetConfig;
use crate::error::{ChatError, ChatResult};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

/// Reply shown in place of the assistant's answer when the endpoint cannot be reached.
pub const FALLBACK_REPLY: &str = "Error communicating with the AI";

/// Anything that can turn a composed query into a reply.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait ChatBackend {
    async fn complete(&self, query: &str) -> ChatResult<String>;
}

/// Remote text-generation endpoint taking `{ "query" }` and answering `{ "response" }`.
pub struct HttpBackend {
    client: Client,
    endpoint: String,
}

#[derive(Serialize)]
struct QueryRequest<'a> {
    query: &'a str,
}

#[derive(Deserialize)]
struct QueryResponse {
    response: String,
}

impl HttpBackend {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn from_config(config: &WidgetConfig) -> ChatResult<Self> {
        let builder = Client::builder();
        // reqwest's wasm client has no timeout support; requests run until the browser gives up
        #[cfg(not(target_arch = "wasm32"))]
        let builder = match config.timeout {
            Some(timeout) => builder.timeout(timeout),
            None => builder,
        };
        Ok(Self {
            client: builder.build()?,
            endpoint: config.endpoint.clone(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl ChatBackend for HttpBackend {
    async fn complete(&self, query: &str) -> ChatResult<String> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(&QueryRequest { query })
            .send()
            .await?;
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(ChatError::Status { status, body });
        }
        let parsed: QueryResponse = serde_json::from_str(&body)?;
        Ok(parsed.response)
    }
}

/// Run one request and fold any failure into [`FALLBACK_REPLY`].
pub async fn dispatch(backend: &dyn ChatBackend, query: &str) -> String {
    tracing::debug!(query_len = query.len(), "dispatching chat query");
    match backend.complete(query).await {
        Ok(reply) => reply,
        Err(err) => {
            tracing::error!("chat dispatch failed: {err}");
            FALLBACK_REPLY.to_string()
        }
    }
}
