use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::config::SessionLimits;
use crate::services::session::SessionSeed;
use crate::services::session_registry::SessionSlot;

#[derive(Clone)]
pub struct AppState {
    /// Live sessions keyed by the `session_id` cookie value.
    pub sessions: Arc<Mutex<HashMap<String, SessionSlot>>>,
    pub flash_store: Arc<Mutex<HashMap<String, Vec<String>>>>,
    /// What every new session starts from.
    pub seed: Arc<SessionSeed>,
    pub session_limits: SessionLimits,
    pub public_base_url: String,
    pub custom_css: Option<String>,
}

impl AppState {
    pub fn new(seed: SessionSeed, public_base_url: String) -> Self {
        AppState {
            sessions: Arc::new(Mutex::new(HashMap::new())),
            flash_store: Arc::new(Mutex::new(HashMap::new())),
            seed: Arc::new(seed),
            session_limits: SessionLimits::default(),
            public_base_url,
            custom_css: None,
        }
    }

    // Handlers never panic while holding these locks, but a poisoned map is
    // still usable: every mutation leaves sessions consistent.
    pub fn lock_sessions(&self) -> MutexGuard<'_, HashMap<String, SessionSlot>> {
        self.sessions.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn lock_flashes(&self) -> MutexGuard<'_, HashMap<String, Vec<String>>> {
        self.flash_store.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn session_count(&self) -> usize {
        self.lock_sessions().len()
    }
}
