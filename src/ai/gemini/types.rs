//! Gemini `generateContent` payload types.

use serde::{Deserialize, Serialize};

/// Content container used in both requests and responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    pub parts: Vec<Part>,
}

/// Untagged union of text and inline media parts.
///
/// Variant order matters for `#[serde(untagged)]` decoding.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Part {
    Text {
        text: String,
    },
    InlineData {
        #[serde(rename = "inlineData")]
        inline_data: InlineData,
    },
}

/// Base64 inline payload used to attach an image to a request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineData {
    pub mime_type: String,
    pub data: String,
}

/// Top-level `generateContent` response envelope.
///
/// `candidates` may be missing entirely on an empty success.
#[derive(Debug, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

/// Candidate completion item returned by Gemini.
#[derive(Debug, Deserialize)]
pub struct Candidate {
    pub content: Content,
}

impl GenerateContentResponse {
    /// First text part of the first candidate, if any.
    pub fn first_text(&self) -> Option<&str> {
        self.candidates.first().and_then(|candidate| {
            candidate.content.parts.iter().find_map(|part| match part {
                Part::Text { text } => Some(text.as_str()),
                Part::InlineData { .. } => None,
            })
        })
    }
}
