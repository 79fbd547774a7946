/// Test helper doubles and service wiring
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use kanri::modules::batch_import::application::ports::{ImportEndpoint, Notifier};
use kanri::modules::batch_import::domain::{ImportBatch, ImportResponse};
use kanri::modules::batch_import::BatchImportService;
use kanri::shared::errors::AppResult;

/// Endpoint double that replays scripted outcomes and records every batch
/// it was handed.
pub struct StubEndpoint {
    outcomes: Mutex<VecDeque<AppResult<ImportResponse>>>,
    submitted: Mutex<Vec<ImportBatch>>,
}

impl StubEndpoint {
    pub fn scripted(outcomes: Vec<AppResult<ImportResponse>>) -> Arc<Self> {
        Arc::new(Self {
            outcomes: Mutex::new(outcomes.into()),
            submitted: Mutex::new(Vec::new()),
        })
    }

    pub fn submitted_batches(&self) -> Vec<ImportBatch> {
        self.submitted.lock().unwrap().clone()
    }
}

#[async_trait]
impl ImportEndpoint for StubEndpoint {
    async fn import_batch(&self, batch: &ImportBatch) -> AppResult<ImportResponse> {
        self.submitted.lock().unwrap().push(batch.clone());
        self.outcomes
            .lock()
            .unwrap()
            .pop_front()
            .expect("a scripted outcome is available")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Success(String),
    Warning(String),
    Error(String),
}

/// Notifier double that records what would have been toasted.
#[derive(Default)]
pub struct RecordingNotifier {
    notices: Mutex<Vec<Notice>>,
}

impl RecordingNotifier {
    pub fn notices(&self) -> Vec<Notice> {
        self.notices.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn success(&self, message: &str) {
        self.notices
            .lock()
            .unwrap()
            .push(Notice::Success(message.to_string()));
    }

    fn warning(&self, message: &str) {
        self.notices
            .lock()
            .unwrap()
            .push(Notice::Warning(message.to_string()));
    }

    fn error(&self, message: &str) {
        self.notices
            .lock()
            .unwrap()
            .push(Notice::Error(message.to_string()));
    }
}

pub struct DialogHarness {
    pub service: BatchImportService,
    pub endpoint: Arc<StubEndpoint>,
    pub notifier: Arc<RecordingNotifier>,
}

/// Wire a dialog service against scripted endpoint outcomes.
pub fn build_dialog(outcomes: Vec<AppResult<ImportResponse>>) -> DialogHarness {
    let endpoint = StubEndpoint::scripted(outcomes);
    let notifier = Arc::new(RecordingNotifier::default());
    let service = BatchImportService::new(endpoint.clone(), notifier.clone());
    DialogHarness {
        service,
        endpoint,
        notifier,
    }
}
