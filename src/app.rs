//! Application orchestration for a single analysis run.

use crate::ai::{AnalysisService, GeminiAnalysisClient};
use crate::models::{AnalysisRequest, Config, ImageAttachment, Mode, OutputLanguage};
use crate::Result;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Inputs for one analysis run.
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Text or code to analyze.
    pub text: Option<String>,
    /// Image source: a file path or a `data:` URI.
    pub image: Option<String>,
    pub language: OutputLanguage,
    pub mode: Mode,
    /// Also write the markdown report to this file.
    pub output: Option<PathBuf>,
}

/// Coordinates request building and submission for one analysis.
pub struct App {
    analysis: Box<dyn AnalysisService>,
}

impl App {
    /// Build an app from a concrete service dependency.
    ///
    /// This is primarily useful for tests and harnesses that need to
    /// inject mocks.
    pub fn with_service(analysis: Box<dyn AnalysisService>) -> Self {
        Self { analysis }
    }

    /// Construct an app from environment configuration (`Config::from_env`).
    pub fn new() -> Result<Self> {
        let config = Config::from_env()?;
        info!("Analysis provider: Gemini (model: {})", config.model);

        Ok(Self::with_service(Box::new(GeminiAnalysisClient::new(
            config.gemini_api_key,
            config.model,
        ))))
    }

    /// Run a single analysis and return the markdown report.
    pub async fn run(&self, options: &RunOptions) -> Result<String> {
        let image = match options.image.as_deref() {
            Some(source) if source.starts_with("data:") => {
                Some(ImageAttachment::from_data_uri(source))
            }
            Some(source) => Some(ImageAttachment::from_file(Path::new(source))?),
            None => None,
        };
        if let Some(attachment) = &image {
            info!(
                "Attached image ({}, {} base64 chars)",
                attachment.mime_type,
                attachment.data.len()
            );
        }

        let request =
            AnalysisRequest::build(options.text.as_deref(), options.language, image, options.mode)?;
        info!(
            "Requesting {} analysis in {}",
            request.mode, request.language
        );

        let report = self.analysis.analyze(&request).await?;
        info!("Received analysis report ({} chars)", report.len());

        if let Some(path) = &options.output {
            fs::write(path, &report)?;
            info!("Saved report to {}", path.display());
        }

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::{App, RunOptions};
    use crate::ai::MockAnalysisClient;
    use crate::models::{Mode, OutputLanguage};
    use crate::Error;
    use std::fs;

    fn options(text: Option<&str>, image: Option<String>) -> RunOptions {
        RunOptions {
            text: text.map(str::to_string),
            image,
            language: OutputLanguage::English,
            mode: Mode::Code,
            output: None,
        }
    }

    #[tokio::test]
    async fn test_run_returns_service_report() {
        let mock = MockAnalysisClient::new().with_response("## Bug Summary\nDone.".to_string());
        let probe = mock.clone();
        let app = App::with_service(Box::new(mock));

        let report = app
            .run(&options(Some("def f(): return 1/0"), None))
            .await
            .unwrap();

        assert_eq!(report, "## Bug Summary\nDone.");
        assert_eq!(probe.get_call_count(), 1);
        let request = probe.last_request().unwrap();
        assert!(request.prompt.contains("def f(): return 1/0"));
        assert!(request.system_instruction.contains("English"));
    }

    #[tokio::test]
    async fn test_run_without_inputs_is_invalid() {
        let mock = MockAnalysisClient::new();
        let probe = mock.clone();
        let app = App::with_service(Box::new(mock));

        let err = app.run(&options(None, None)).await.unwrap_err();
        assert!(matches!(err, Error::InvalidInput));
        // Never reached the service.
        assert_eq!(probe.get_call_count(), 0);
    }

    #[tokio::test]
    async fn test_run_accepts_data_uri_image() {
        let mock = MockAnalysisClient::new();
        let probe = mock.clone();
        let app = App::with_service(Box::new(mock));

        app.run(&options(
            None,
            Some("data:image/png;base64,iVBORw==".to_string()),
        ))
        .await
        .unwrap();

        let request = probe.last_request().unwrap();
        let image = request.image.unwrap();
        assert_eq!(image.mime_type, "image/png");
        assert_eq!(image.data, "iVBORw==");
    }

    #[tokio::test]
    async fn test_run_loads_image_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("shot.jpg");
        fs::write(&path, [0xFF, 0xD8, 0xFF, 0xE0]).unwrap();

        let mock = MockAnalysisClient::new();
        let probe = mock.clone();
        let app = App::with_service(Box::new(mock));

        app.run(&options(None, Some(path.to_string_lossy().into_owned())))
            .await
            .unwrap();

        let request = probe.last_request().unwrap();
        assert_eq!(request.image.unwrap().mime_type, "image/jpeg");
        // Image-only input selects the image-oriented instruction.
        assert!(request.prompt.contains("image"));
    }

    #[tokio::test]
    async fn test_run_writes_output_file() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("report.md");

        let mock = MockAnalysisClient::new().with_response("## Summary\nAll good.".to_string());
        let app = App::with_service(Box::new(mock));

        let mut opts = options(Some("2 + 2 = 5"), None);
        opts.output = Some(output.clone());

        app.run(&opts).await.unwrap();
        assert_eq!(fs::read_to_string(&output).unwrap(), "## Summary\nAll good.");
    }

    #[tokio::test]
    async fn test_run_propagates_service_failure() {
        let mock = MockAnalysisClient::new().with_failure("provider down".to_string());
        let app = App::with_service(Box::new(mock));

        let err = app.run(&options(Some("x"), None)).await.unwrap_err();
        assert!(matches!(err, Error::AnalysisFailed(_)));
    }
}
