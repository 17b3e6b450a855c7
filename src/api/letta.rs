use anyhow::Result;
use reqwest::blocking::Client; // we are using blocking API here to make sync calls
use reqwest::StatusCode;
use serde_json::Value;
use tracing::{debug, info};

use super::{configs::letta::LettaConfig, types::message::MessagesRequest};
use crate::errors::ApiError;

pub struct LettaClient {
    client: Client,
    config: LettaConfig,
}

impl LettaClient {
    pub fn new(config: LettaConfig) -> Result<Self> {
        let client = Client::builder().timeout(config.timeout).build()?;

        Ok(Self { client, config })
    }

    /// The underlying HTTP client, shared for auxiliary downloads
    pub fn http(&self) -> &Client {
        &self.client
    }

    /// Send messages to an agent and return the raw response
    pub fn create_messages(&self, agent_id: &str, request: &MessagesRequest) -> Result<Value> {
        for message in &request.messages {
            debug!("sending {}", message.summary());
        }

        let url = format!(
            "{}/v1/agents/{}/messages",
            self.config.base_url.trim_end_matches('/'),
            agent_id
        );
        info!(%url, "creating agent messages");

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.config.api_key))
            .json(request)
            .send()?;

        match response.status() {
            StatusCode::OK => Ok(response.json()?),
            status if status == StatusCode::TOO_MANY_REQUESTS || status.is_server_error() => {
                Err(ApiError::Server(status).into())
            }
            status => {
                let body = response.text()?;
                Err(ApiError::Request { status, body }.into())
            }
        }
    }
}
