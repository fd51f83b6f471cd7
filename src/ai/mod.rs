//! AI service integration for mistake analysis
//!
//! Provides the analysis service trait, the Gemini-backed implementation,
//! and an in-crate mock for tests and harnesses.

pub mod gemini;
pub mod mock;

pub use gemini::GeminiAnalysisClient;
pub use mock::MockAnalysisClient;

use crate::models::AnalysisRequest;
use crate::Result;
use async_trait::async_trait;

/// Substituted when the provider reports success with an empty body.
pub const EMPTY_ANALYSIS_FALLBACK: &str = "No analysis could be generated.";

/// A single suspending analysis call. One external request per submission;
/// overlapping submissions must be prevented by the caller.
#[async_trait]
pub trait AnalysisService: Send + Sync {
    async fn analyze(&self, request: &AnalysisRequest) -> Result<String>;
}
