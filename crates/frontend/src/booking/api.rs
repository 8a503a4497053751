use async_trait::async_trait;
use contracts::booking::FormSnapshot;
use gloo_net::http::Request;

use super::submission::{HttpReply, Transport};
use crate::shared::api_utils::api_url;

/// `fetch`-backed transport. `.json()` sets `Content-Type: application/json`.
#[derive(Debug, Clone, Copy, Default)]
pub struct GlooTransport;

#[async_trait(?Send)]
impl Transport for GlooTransport {
    async fn post_json(&self, path: &str, snapshot: &FormSnapshot) -> Result<HttpReply, String> {
        let response = Request::post(&api_url(path))
            .json(snapshot)
            .map_err(|e| format!("Failed to serialize request: {}", e))?
            .send()
            .await
            .map_err(|e| format!("Failed to send request: {}", e))?;

        let status = response.status();
        let body = if response.ok() {
            response
                .text()
                .await
                .map_err(|e| format!("Failed to read response: {}", e))?
        } else {
            // status alone decides the outcome here
            response.text().await.unwrap_or_default()
        };

        Ok(HttpReply { status, body })
    }
}
