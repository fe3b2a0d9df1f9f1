use anyhow::{Context, Result};
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;

/// Thin reqwest wrapper for GET requests returning JSON
pub struct JsonClient {
    client: Client,
}

impl JsonClient {
    pub fn new(user_agent: &str, timeout: Duration) -> Result<Self> {
        let client = Self::build_client(user_agent, timeout)?;
        Ok(Self { client })
    }

    pub async fn get_json(&self, url: &str) -> Result<Value> {
        let response = self.send_get_request(url).await?;

        if !response.status().is_success() {
            anyhow::bail!("API returned status: {}", response.status());
        }

        response
            .json()
            .await
            .context("Failed to decode JSON response")
    }

    fn build_client(user_agent: &str, timeout: Duration) -> Result<Client> {
        Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")
    }

    async fn send_get_request(&self, url: &str) -> Result<reqwest::Response> {
        self.client
            .get(url)
            .send()
            .await
            .context("Failed to send GET request")
    }
}
