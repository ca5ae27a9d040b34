//! A scripted [`IngestBackend`] that records every query it receives.

use std::sync::{Arc, Mutex};

use ingest_core::{BackendError, BackendQuery, IngestBackend, IngestResult};

/// Backend returning a canned result (or failure) and remembering queries.
///
/// # Example
///
/// ```rust,no_run
/// use std::sync::Arc;
/// use ingest_core::{IngestRequest, IngestionService, ServiceConfig};
/// use ingest_test_utils::backend::RecordingBackend;
///
/// let backend = Arc::new(RecordingBackend::returning("S", "T", "C"));
/// let service = IngestionService::new(backend.clone(), ServiceConfig::default());
/// service.ingest_repository(&IngestRequest::new("https://github.com/user/repo")).unwrap();
/// assert_eq!(backend.calls().len(), 1);
/// ```
pub struct RecordingBackend {
    outcome: Outcome,
    calls: Mutex<Vec<BackendQuery>>,
}

enum Outcome {
    Result(IngestResult),
    Failure(String),
    Panic(String),
}

impl RecordingBackend {
    /// Succeed with the given parts.
    pub fn returning(summary: &str, tree: &str, content: &str) -> Self {
        Self::with_outcome(Outcome::Result(IngestResult::new(summary, tree, content)))
    }

    /// Fail every call with `message`.
    pub fn failing(message: &str) -> Self {
        Self::with_outcome(Outcome::Failure(message.to_string()))
    }

    /// Panic inside every call, simulating a crashing backend.
    pub fn panicking(message: &str) -> Self {
        Self::with_outcome(Outcome::Panic(message.to_string()))
    }

    fn with_outcome(outcome: Outcome) -> Self {
        Self {
            outcome,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Wrap in an `Arc`, the form services take.
    pub fn shared(self) -> Arc<Self> {
        Arc::new(self)
    }

    /// Every query received so far, oldest first.
    pub fn calls(&self) -> Vec<BackendQuery> {
        self.calls.lock().unwrap().clone()
    }

    /// The only query received.
    ///
    /// # Panics
    /// Panics unless exactly one call was made.
    pub fn single_call(&self) -> BackendQuery {
        let calls = self.calls();
        assert_eq!(calls.len(), 1, "expected exactly one backend call, got {calls:?}");
        calls.into_iter().next().unwrap()
    }
}

impl IngestBackend for RecordingBackend {
    fn ingest(&self, query: &BackendQuery) -> Result<IngestResult, BackendError> {
        self.calls.lock().unwrap().push(query.clone());
        match &self.outcome {
            Outcome::Result(result) => Ok(result.clone()),
            Outcome::Failure(message) => Err(BackendError::failed(message.clone())),
            Outcome::Panic(message) => panic!("{message}"),
        }
    }
}
