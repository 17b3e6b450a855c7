//! Downloading and encoding the image that gets attached to a message.
use anyhow::Result;
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use reqwest::blocking::Client;
use tracing::info;

use crate::errors::ApiError;

pub const DEFAULT_IMAGE_URL: &str =
    "https://upload.wikimedia.org/wikipedia/commons/a/a7/Camponotus_flavomarginatus_ant.jpg";
pub const DEFAULT_MEDIA_TYPE: &str = "image/jpeg";

/// Download the image at `url`. The body is returned as-is, without
/// checking that it actually is an image.
pub fn fetch_image(client: &Client, url: &str) -> Result<Vec<u8>> {
    info!(%url, "fetching image");
    let response = client.get(url).send()?;

    let status = response.status();
    if !status.is_success() {
        return Err(ApiError::ImageFetch {
            url: url.to_string(),
            status,
        }
        .into());
    }

    let bytes = response.bytes()?.to_vec();
    info!(size = bytes.len(), "fetched image");
    Ok(bytes)
}

pub fn encode_image(bytes: &[u8]) -> String {
    BASE64.encode(bytes)
}
