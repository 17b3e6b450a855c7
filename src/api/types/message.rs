use anyhow::Result;
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::content::{Content, ImageSource};
use crate::errors::ApiError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
    System,
}

/// A message as accepted by the agent messages endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageCreate {
    pub role: Role,
    pub content: Vec<Content>,
}

impl MessageCreate {
    pub fn new(role: Role, content: Vec<Content>) -> Result<Self> {
        let msg = Self { role, content };
        msg.validate()?;
        Ok(msg)
    }

    /// A user message holding one image followed by one text prompt
    pub fn user_with_image(bytes: &[u8], media_type: &str, prompt: &str) -> Result<Self> {
        Self::new(
            Role::User,
            vec![
                Content::image_base64(bytes, media_type),
                Content::text(prompt),
            ],
        )
    }

    pub fn user(text: &str) -> Result<Self> {
        Self::new(Role::User, vec![Content::text(text)])
    }

    fn validate(&self) -> Result<()> {
        if self.content.is_empty() {
            return Err(ApiError::InvalidPayload("Message content must not be empty".into()).into());
        }
        if self.role == Role::User && !self.has_text() && !self.has_image() {
            return Err(ApiError::InvalidPayload(
                "User message must include a Text or Image".into(),
            )
            .into());
        }
        for source in self.content.iter().filter_map(Content::as_image) {
            validate_media_type(source.media_type())?;
            source.decode().map_err(|e| {
                ApiError::InvalidPayload(format!("Image data is not valid base64: {}", e))
            })?;
        }
        Ok(())
    }

    pub fn text(&self) -> String {
        self.content
            .iter()
            .filter_map(Content::as_text)
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn images(&self) -> Vec<&ImageSource> {
        self.content.iter().filter_map(Content::as_image).collect()
    }

    fn has_text(&self) -> bool {
        self.content.iter().any(|c| matches!(c, Content::Text(_)))
    }

    fn has_image(&self) -> bool {
        self.content.iter().any(|c| matches!(c, Content::Image(_)))
    }

    pub fn summary(&self) -> String {
        let content_summaries: Vec<String> = self.content.iter().map(|c| c.summary()).collect();
        format!("message:{:?}\n{}", self.role, content_summaries.join("\n"))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessagesRequest {
    pub messages: Vec<MessageCreate>,
}

impl MessagesRequest {
    pub fn new(messages: Vec<MessageCreate>) -> Self {
        Self { messages }
    }
}

/// Reject media types that are not of the form `image/<subtype>`
pub fn validate_media_type(media_type: &str) -> Result<()> {
    if !is_valid_media_type(media_type) {
        return Err(ApiError::InvalidPayload(format!(
            "Unsupported media type '{}', expected image/<subtype>",
            media_type
        ))
        .into());
    }
    Ok(())
}

fn is_valid_media_type(media_type: &str) -> bool {
    let re = Regex::new(r"^image/[a-z0-9][a-z0-9.+-]*$").unwrap();
    re.is_match(media_type)
}
