use anyhow::Result;
use serde_json::Value;
use uuid::Uuid;

use super::types::{
    message::{MessageCreate, MessagesRequest},
    response::{AgentReply, Usage},
};
use crate::errors::ApiError;

/// Build the request body for a single image + prompt message
pub fn build_request(image: &[u8], media_type: &str, prompt: &str) -> Result<MessagesRequest> {
    let message = MessageCreate::user_with_image(image, media_type, prompt)?;
    Ok(MessagesRequest::new(vec![message]))
}

/// Agent ids look like `agent-<uuid>`, with the uuid in hyphenated form
pub fn validate_agent_id(agent_id: &str) -> bool {
    agent_id
        .strip_prefix("agent-")
        .map(|id| id.len() == 36 && Uuid::parse_str(id).is_ok())
        .unwrap_or(false)
}

/// Convert the messages endpoint response into an AgentReply
pub fn response_to_reply(response: &Value) -> Result<AgentReply> {
    let messages = response
        .get("messages")
        .and_then(|m| m.as_array())
        .ok_or_else(|| ApiError::InvalidResponse("missing messages array".to_string()))?
        .clone();

    let assistant_text = messages
        .iter()
        .filter(|m| m.get("message_type").and_then(|t| t.as_str()) == Some("assistant_message"))
        .filter_map(|m| m.get("content").and_then(content_to_text))
        .collect();

    Ok(AgentReply {
        messages,
        assistant_text,
        usage: get_usage(response),
    })
}

fn content_to_text(content: &Value) -> Option<String> {
    match content {
        Value::String(text) => Some(text.clone()),
        Value::Array(parts) => {
            let texts: Vec<&str> = parts
                .iter()
                .filter(|p| p.get("type").and_then(|t| t.as_str()) == Some("text"))
                .filter_map(|p| p.get("text").and_then(|t| t.as_str()))
                .collect();
            if texts.is_empty() {
                None
            } else {
                Some(texts.join("\n"))
            }
        }
        _ => None,
    }
}

fn get_usage(data: &Value) -> Usage {
    let Some(usage) = data.get("usage") else {
        return Usage::default();
    };

    let completion_tokens = usage.get("completion_tokens").and_then(|v| v.as_i64());
    let prompt_tokens = usage.get("prompt_tokens").and_then(|v| v.as_i64());
    let step_count = usage.get("step_count").and_then(|v| v.as_i64());

    let total_tokens = usage
        .get("total_tokens")
        .and_then(|v| v.as_i64())
        .or_else(|| match (prompt_tokens, completion_tokens) {
            (Some(input), Some(output)) => input.checked_add(output),
            _ => None,
        });

    Usage::new(completion_tokens, prompt_tokens, total_tokens, step_count)
}
