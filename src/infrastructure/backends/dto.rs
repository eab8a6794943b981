//! Wire shapes of the generation and reverse image search backends.

use serde::{Deserialize, Serialize};

/// Image generation request body.
#[derive(Debug, Serialize)]
pub struct GenerateRequest<'a> {
    pub prompt: &'a str,
}

/// Image generation response body.
#[derive(Debug, Deserialize)]
pub struct GenerateResponse {
    pub images: Vec<String>,
}

/// Error body the generation backend returns, with or without a failing status.
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Reverse image search response body.
#[derive(Debug, Deserialize)]
pub struct LensResponse {
    #[serde(default)]
    pub status: bool,
    #[serde(default)]
    pub data: Vec<LensItem>,
}

/// One reverse image search match.
#[derive(Debug, Deserialize)]
pub struct LensItem {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub source: String,
    #[serde(default)]
    pub link: String,
    #[serde(default)]
    pub thumbnail: String,
}
