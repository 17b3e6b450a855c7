use anyhow::Result;
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use serde::{Deserialize, Serialize};

use crate::image::encode_image;

// Base trait for all content types
pub trait ContentType {
    fn content_type(&self) -> &'static str;
    fn summary(&self) -> String;
}

// Image payload, carried inline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ImageSource {
    Base64 { media_type: String, data: String },
}

impl ImageSource {
    pub fn base64<S: Into<String>>(bytes: &[u8], media_type: S) -> Self {
        ImageSource::Base64 {
            media_type: media_type.into(),
            data: encode_image(bytes),
        }
    }

    pub fn media_type(&self) -> &str {
        match self {
            ImageSource::Base64 { media_type, .. } => media_type,
        }
    }

    /// Decode the inline data back into raw bytes
    pub fn decode(&self) -> Result<Vec<u8>> {
        match self {
            ImageSource::Base64 { data, .. } => Ok(BASE64.decode(data)?),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageContent {
    pub source: ImageSource,
}

impl ContentType for ImageContent {
    fn content_type(&self) -> &'static str {
        "image"
    }

    fn summary(&self) -> String {
        match &self.source {
            ImageSource::Base64 { media_type, data } => {
                let padding = data.bytes().rev().take_while(|&b| b == b'=').count();
                let size = (data.len() / 4 * 3).saturating_sub(padding);
                format!("content:image:{}\nbytes:{}", media_type, size)
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextContent {
    pub text: String,
}

impl ContentType for TextContent {
    fn content_type(&self) -> &'static str {
        "text"
    }

    fn summary(&self) -> String {
        format!("content:text\n{}", self.text)
    }
}

// Enum to handle all content types
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Content {
    Image(ImageContent),
    Text(TextContent),
}

impl Content {
    pub fn text<S: Into<String>>(text: S) -> Self {
        Content::Text(TextContent { text: text.into() })
    }

    pub fn image_base64<S: Into<String>>(bytes: &[u8], media_type: S) -> Self {
        Content::Image(ImageContent {
            source: ImageSource::base64(bytes, media_type),
        })
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Content::Text(text) => Some(&text.text),
            _ => None,
        }
    }

    pub fn as_image(&self) -> Option<&ImageSource> {
        match self {
            Content::Image(image) => Some(&image.source),
            _ => None,
        }
    }

    pub fn content_type(&self) -> &'static str {
        match self {
            Content::Image(i) => i.content_type(),
            Content::Text(t) => t.content_type(),
        }
    }

    pub fn summary(&self) -> String {
        match self {
            Content::Image(i) => i.summary(),
            Content::Text(t) => t.summary(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    #[test]
    fn test_image_wire_format() -> Result<()> {
        let content = Content::image_base64(b"abc", "image/jpeg");
        let value: Value = serde_json::to_value(&content)?;
        assert_eq!(
            value,
            json!({
                "type": "image",
                "source": {
                    "type": "base64",
                    "media_type": "image/jpeg",
                    "data": "YWJj"
                }
            })
        );
        Ok(())
    }

    #[test]
    fn test_text_wire_format() -> Result<()> {
        let value: Value = serde_json::to_value(Content::text("Describe this image."))?;
        assert_eq!(value, json!({"type": "text", "text": "Describe this image."}));
        Ok(())
    }

    #[test]
    fn test_decode_returns_original_bytes() -> Result<()> {
        let bytes: Vec<u8> = (0..=255).collect();
        let source = ImageSource::base64(&bytes, "image/png");
        assert_eq!(source.decode()?, bytes);
        assert_eq!(source.media_type(), "image/png");
        Ok(())
    }

    #[test]
    fn test_image_summary_omits_data() {
        let content = Content::image_base64(b"some image bytes", "image/jpeg");
        let summary = content.summary();
        assert!(summary.starts_with("content:image:image/jpeg"));
        assert!(!summary.contains("c29tZSBpbWFnZSBieXRlcw=="));
        assert!(summary.ends_with("bytes:16"));
    }

    #[test]
    fn test_image_summary_size_with_padding() {
        // 1 and 2 trailing bytes encode with == and = padding
        assert!(Content::image_base64(b"ant", "image/png").summary().ends_with("bytes:3"));
        assert!(Content::image_base64(b"ants", "image/png").summary().ends_with("bytes:4"));
        assert!(Content::image_base64(b"ants!", "image/png").summary().ends_with("bytes:5"));
        assert!(Content::image_base64(b"", "image/png").summary().ends_with("bytes:0"));
    }

    #[test]
    fn test_accessors() {
        let text = Content::text("hi");
        assert_eq!(text.as_text(), Some("hi"));
        assert!(text.as_image().is_none());
        assert_eq!(text.content_type(), "text");

        let image = Content::image_base64(b"x", "image/gif");
        assert!(image.as_text().is_none());
        assert_eq!(image.as_image().map(|s| s.media_type()), Some("image/gif"));
        assert_eq!(image.content_type(), "image");
    }
}
