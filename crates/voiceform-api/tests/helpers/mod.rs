//! Test helpers: build the router over a temp upload directory and a
//! recording mailer.
//!
//! Run from the workspace root: `cargo test -p voiceform-api`.

use async_trait::async_trait;
use axum_test::TestServer;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use tempfile::TempDir;
use voiceform_api::services::mailer::{DeliveryError, Mailer};
use voiceform_api::setup::routes;
use voiceform_api::state::AppState;
use voiceform_core::models::NotificationMessage;
use voiceform_core::Config;
use voiceform_storage::{LocalStorage, Storage};

/// Mailer test double: records every message instead of talking to a
/// relay; flips to failing when `fail` is set.
#[derive(Default)]
pub struct RecordingMailer {
    pub sent: Mutex<Vec<NotificationMessage>>,
    pub fail: AtomicBool,
}

impl RecordingMailer {
    pub fn sent_messages(&self) -> Vec<NotificationMessage> {
        self.sent.lock().expect("mailer lock").clone()
    }

    pub fn fail_next_sends(&self) {
        self.fail.store(true, Ordering::SeqCst);
    }
}

#[async_trait]
impl Mailer for RecordingMailer {
    async fn send(&self, message: &NotificationMessage) -> Result<(), DeliveryError> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(DeliveryError::Transport("relay unavailable".to_string()));
        }
        self.sent.lock().expect("mailer lock").push(message.clone());
        Ok(())
    }
}

/// Test application: server, recording mailer, and the upload directory.
pub struct TestApp {
    pub server: TestServer,
    pub mailer: Arc<RecordingMailer>,
    pub upload_dir: PathBuf,
    pub _temp_dir: TempDir,
}

impl TestApp {
    /// Names of the files currently in the upload directory.
    pub fn uploaded_files(&self) -> Vec<String> {
        let mut names: Vec<String> = std::fs::read_dir(&self.upload_dir)
            .expect("read upload dir")
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.file_name().to_string_lossy().to_string())
            .collect();
        names.sort();
        names
    }
}

pub fn test_config(upload_dir: &std::path::Path) -> Config {
    Config {
        server_port: 0,
        environment: "test".to_string(),
        cors_origins: vec!["*".to_string()],
        database_url: None,
        upload_dir: upload_dir.to_string_lossy().to_string(),
        max_audio_size_bytes: 10 * 1024 * 1024,
        smtp_host: "smtp.gmail.com".to_string(),
        smtp_port: 587,
        email_user: "relay@example.com".to_string(),
        oauth_client_id: None,
        oauth_client_secret: None,
        oauth_refresh_token: None,
        oauth_access_token: "test-token".to_string(),
    }
}

/// Setup a test app with isolated storage and a recording mailer.
pub async fn setup_test_app() -> TestApp {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp directory");
    let upload_dir = temp_dir.path().join("uploads");

    let config = test_config(&upload_dir);

    let storage: Arc<dyn Storage> = Arc::new(
        LocalStorage::new(&upload_dir)
            .await
            .expect("Failed to create local storage"),
    );

    let mailer = Arc::new(RecordingMailer::default());

    let state = Arc::new(AppState {
        config: config.clone(),
        storage,
        mailer: mailer.clone(),
        is_production: false,
    });

    let router = routes::setup_routes(&config, state)
        .await
        .expect("Failed to build router");

    let server = TestServer::new(router).expect("Failed to start test server");

    TestApp {
        server,
        mailer,
        upload_dir,
        _temp_dir: temp_dir,
    }
}
