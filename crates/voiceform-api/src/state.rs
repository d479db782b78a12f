//! Application state.
//!
//! Everything a handler depends on is injected here at router
//! construction: the storage sink and the mailer are trait objects, so
//! tests swap in doubles without touching the handlers.

use crate::services::mailer::Mailer;
use std::sync::Arc;
use voiceform_core::Config;
use voiceform_storage::Storage;

/// Main application state, shared across all request handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub storage: Arc<dyn Storage>,
    pub mailer: Arc<dyn Mailer>,
    pub is_production: bool,
}

fn _assert_app_state_send_sync() {
    fn assert_send<T: Send>() {}
    fn assert_sync<T: Sync>() {}
    assert_send::<AppState>();
    assert_sync::<AppState>();
}
