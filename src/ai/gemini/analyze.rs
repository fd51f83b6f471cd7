use super::client::GeminiHttpClient;
use super::types::{Content, GenerateContentResponse, InlineData, Part};
use crate::ai::{AnalysisService, EMPTY_ANALYSIS_FALLBACK};
use crate::models::AnalysisRequest;
use crate::Result;
use async_trait::async_trait;
use serde::Serialize;
use std::time::Duration;

#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    system_instruction: Option<Content>,
    contents: Vec<Content>,
}

const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Gemini-backed analysis service.
pub struct GeminiAnalysisClient {
    http: GeminiHttpClient,
}

impl GeminiAnalysisClient {
    pub fn new(api_key: String, model: String) -> Self {
        Self::new_with_client(api_key, model, reqwest::Client::new())
    }

    pub fn new_with_client(api_key: String, model: String, client: reqwest::Client) -> Self {
        Self {
            http: GeminiHttpClient::new_with_client(api_key, model, REQUEST_TIMEOUT, client),
        }
    }

    #[cfg(test)]
    fn with_base_url(mut self, base_url: String) -> Self {
        self.http = self.http.with_base_url(base_url);
        self
    }
}

#[async_trait]
impl AnalysisService for GeminiAnalysisClient {
    async fn analyze(&self, request: &AnalysisRequest) -> Result<String> {
        tracing::debug!(
            "Submitting {} analysis in {} ({} prompt chars) to Gemini",
            request.mode,
            request.language,
            request.prompt.len()
        );

        // Prompt text first, image second — the order the web client sends.
        let mut parts = vec![Part::Text {
            text: request.prompt.clone(),
        }];
        if let Some(image) = &request.image {
            parts.push(Part::InlineData {
                inline_data: InlineData {
                    mime_type: image.mime_type.clone(),
                    data: image.data.clone(),
                },
            });
        }

        let payload = GenerateContentRequest {
            system_instruction: Some(Content {
                role: None,
                parts: vec![Part::Text {
                    text: request.system_instruction.clone(),
                }],
            }),
            contents: vec![Content {
                role: Some("user".to_string()),
                parts,
            }],
        };

        let response: GenerateContentResponse = self.http.generate_content(&payload).await?;

        match response.first_text() {
            Some(text) if !text.trim().is_empty() => Ok(text.to_string()),
            _ => {
                tracing::warn!("Gemini returned an empty analysis body, substituting fallback");
                Ok(EMPTY_ANALYSIS_FALLBACK.to_string())
            }
        }
    }
}
