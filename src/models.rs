//! Data models and structures
//!
//! Defines the core data structures for analysis requests, modes, output
//! languages, and application configuration.

use crate::prompts::{self, InputKind};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Model used when `GEMINI_MODEL` is not set.
pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";

/// Analysis mode selecting which instruction templates govern a request.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    General,
    Code,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::General => "general",
            Mode::Code => "code",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = String;

    fn from_str(input: &str) -> std::result::Result<Self, Self::Err> {
        match input.to_ascii_lowercase().as_str() {
            "general" => Ok(Mode::General),
            "code" => Ok(Mode::Code),
            other => Err(format!("unknown mode '{}'", other)),
        }
    }
}

/// Natural language the generated report must be written in.
///
/// The variant token (`as_str`) is embedded verbatim in every instruction
/// string handed to the model.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputLanguage {
    English,
    Hindi,
    Hinglish,
    Spanish,
    French,
    German,
    Japanese,
}

impl OutputLanguage {
    pub const ALL: [OutputLanguage; 7] = [
        OutputLanguage::English,
        OutputLanguage::Hindi,
        OutputLanguage::Hinglish,
        OutputLanguage::Spanish,
        OutputLanguage::French,
        OutputLanguage::German,
        OutputLanguage::Japanese,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OutputLanguage::English => "English",
            OutputLanguage::Hindi => "Hindi",
            OutputLanguage::Hinglish => "Hinglish",
            OutputLanguage::Spanish => "Spanish",
            OutputLanguage::French => "French",
            OutputLanguage::German => "German",
            OutputLanguage::Japanese => "Japanese",
        }
    }

    /// Primary language subtag used to pick a text-to-speech voice.
    pub fn speech_tag(&self) -> &'static str {
        match self {
            OutputLanguage::English => "en",
            // Hinglish is spoken; Hindi voices read it best.
            OutputLanguage::Hindi | OutputLanguage::Hinglish => "hi",
            OutputLanguage::Spanish => "es",
            OutputLanguage::French => "fr",
            OutputLanguage::German => "de",
            OutputLanguage::Japanese => "ja",
        }
    }
}

impl fmt::Display for OutputLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputLanguage {
    type Err = String;

    fn from_str(input: &str) -> std::result::Result<Self, Self::Err> {
        OutputLanguage::ALL
            .iter()
            .find(|lang| lang.as_str().eq_ignore_ascii_case(input))
            .copied()
            .ok_or_else(|| format!("unknown output language '{}'", input))
    }
}

/// Base64-encoded image forwarded to the model as inline data.
///
/// `data` holds the raw base64 payload without any `data:` URI prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageAttachment {
    pub mime_type: String,
    pub data: String,
}

/// A fully assembled analysis request ready for submission.
///
/// Constructed only through [`AnalysisRequest::build`], which guarantees
/// that at least one of text/image was supplied and that both instruction
/// strings embed the output language token.
#[derive(Debug, Clone)]
pub struct AnalysisRequest {
    pub system_instruction: String,
    pub prompt: String,
    pub image: Option<ImageAttachment>,
    pub language: OutputLanguage,
    pub mode: Mode,
}

impl AnalysisRequest {
    /// Assemble a request from user inputs.
    ///
    /// Text takes precedence over an attached image when selecting the
    /// user-prompt template; the image bytes are still forwarded either
    /// way. Whitespace-only text counts as absent.
    pub fn build(
        content: Option<&str>,
        language: OutputLanguage,
        image: Option<ImageAttachment>,
        mode: Mode,
    ) -> Result<Self> {
        let content = content.map(str::trim).filter(|text| !text.is_empty());

        let kind = match (content, &image) {
            (Some(_), _) => InputKind::Text,
            (None, Some(_)) => InputKind::Image,
            (None, None) => return Err(Error::InvalidInput),
        };

        let lang = language.as_str();
        let system_instruction = prompts::render(prompts::system_instruction(mode), &[("language", lang)]);
        let prompt = match content {
            Some(text) => prompts::render(
                prompts::user_instruction(mode, kind),
                &[("language", lang), ("content", text)],
            ),
            None => prompts::render(prompts::user_instruction(mode, kind), &[("language", lang)]),
        };

        Ok(Self {
            system_instruction,
            prompt,
            image,
            language,
            mode,
        })
    }
}

// Configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub gemini_api_key: String,
    pub model: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        Ok(Self {
            gemini_api_key: std::env::var("GEMINI_API_KEY")
                .map_err(|_| Error::Config("GEMINI_API_KEY not set".to_string()))?,
            model: std::env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
        })
    }
}
