use super::AnalysisService;
use crate::models::AnalysisRequest;
use crate::{Error, Result};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

/// Scriptable stand-in for the Gemini client.
///
/// Queued responses cycle per call; an injected failure takes priority.
/// Clones share state so tests can keep a probe handle.
#[derive(Clone)]
pub struct MockAnalysisClient {
    responses: Arc<Mutex<Vec<String>>>,
    failure: Arc<Mutex<Option<String>>>,
    requests: Arc<Mutex<Vec<AnalysisRequest>>>,
    call_count: Arc<Mutex<usize>>,
}

impl MockAnalysisClient {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(Vec::new())),
            failure: Arc::new(Mutex::new(None)),
            requests: Arc::new(Mutex::new(Vec::new())),
            call_count: Arc::new(Mutex::new(0)),
        }
    }

    pub fn with_response(self, response: String) -> Self {
        self.responses.lock().unwrap().push(response);
        self
    }

    pub fn with_failure(self, cause: String) -> Self {
        *self.failure.lock().unwrap() = Some(cause);
        self
    }

    pub fn get_call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }

    /// Most recent request passed to `analyze`, if any.
    pub fn last_request(&self) -> Option<AnalysisRequest> {
        self.requests.lock().unwrap().last().cloned()
    }
}

impl Default for MockAnalysisClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AnalysisService for MockAnalysisClient {
    async fn analyze(&self, request: &AnalysisRequest) -> Result<String> {
        let mut count = self.call_count.lock().unwrap();
        *count += 1;

        self.requests.lock().unwrap().push(request.clone());

        if let Some(cause) = self.failure.lock().unwrap().as_ref() {
            return Err(Error::AnalysisFailed(cause.clone()));
        }

        let responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            // Default mock report
            Ok(format!(
                "## Summary\nMock {} analysis written in {}.",
                request.mode, request.language
            ))
        } else {
            let index = (*count - 1) % responses.len();
            Ok(responses[index].clone())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Mode, OutputLanguage};

    fn make_request(mode: Mode) -> AnalysisRequest {
        AnalysisRequest::build(Some("1 + 1 = 3"), OutputLanguage::French, None, mode).unwrap()
    }

    #[tokio::test]
    async fn test_default_report_mentions_mode_and_language() {
        let client = MockAnalysisClient::new();
        let report = client.analyze(&make_request(Mode::Code)).await.unwrap();
        assert!(report.contains("code"));
        assert!(report.contains("French"));
    }

    #[tokio::test]
    async fn test_custom_responses_cycle() {
        let client = MockAnalysisClient::new()
            .with_response("First report".to_string())
            .with_response("Second report".to_string());

        let request = make_request(Mode::General);
        assert_eq!(client.analyze(&request).await.unwrap(), "First report");
        assert_eq!(client.analyze(&request).await.unwrap(), "Second report");
        // Cycles back around
        assert_eq!(client.analyze(&request).await.unwrap(), "First report");
    }

    #[tokio::test]
    async fn test_injected_failure_wins() {
        let client = MockAnalysisClient::new()
            .with_response("never returned".to_string())
            .with_failure("simulated outage".to_string());

        let err = client.analyze(&make_request(Mode::Code)).await.unwrap_err();
        assert!(matches!(err, Error::AnalysisFailed(_)));
        assert!(err.to_string().contains("simulated outage"));
    }

    #[tokio::test]
    async fn test_call_count_and_request_capture() {
        let client = MockAnalysisClient::new();
        let probe = client.clone();

        assert_eq!(probe.get_call_count(), 0);
        client.analyze(&make_request(Mode::Code)).await.unwrap();
        assert_eq!(probe.get_call_count(), 1);

        let captured = probe.last_request().unwrap();
        assert_eq!(captured.mode, Mode::Code);
        assert!(captured.prompt.contains("1 + 1 = 3"));
    }
}
