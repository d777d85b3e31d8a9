use std::env;
use std::path::Path;
use std::time::Duration;

use crate::seed::{sample_business, sample_listings, us_cities};
use crate::services::session::SessionSeed;

// Default configuration constants
pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_PUBLIC_BASE_URL: &str = "";
pub const DEFAULT_SEED: &str = "sample";
pub const SESSION_COOKIE: &str = "session_id";
pub const DEFAULT_MAX_SESSIONS: usize = 10_000;
pub const DEFAULT_SESSION_IDLE_SECS: u64 = 30 * 60;

/// Bounds on the in-memory session registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionLimits {
    pub max_sessions: usize,
    pub idle_timeout: Duration,
}

impl Default for SessionLimits {
    fn default() -> Self {
        SessionLimits {
            max_sessions: DEFAULT_MAX_SESSIONS,
            idle_timeout: Duration::from_secs(DEFAULT_SESSION_IDLE_SECS),
        }
    }
}

/// Which listings a new session starts with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedMode {
    /// The four sample listings.
    Sample,
    /// No listings; the whole catalog is offered.
    Empty,
}

impl SeedMode {
    pub fn from_str(s: &str) -> Option<SeedMode> {
        match s.trim().to_lowercase().as_str() {
            "sample" => Some(SeedMode::Sample),
            "empty" => Some(SeedMode::Empty),
            _ => None,
        }
    }

    pub fn build(&self) -> SessionSeed {
        SessionSeed {
            catalog: us_cities().into(),
            listings: match self {
                SeedMode::Sample => sample_listings(),
                SeedMode::Empty => Vec::new(),
            },
            business: sample_business(),
        }
    }
}

pub fn load_env_file(env_file: Option<&str>) {
    if let Some(path) = env_file {
        dotenvy::from_path(Path::new(path)).ok();
    } else {
        dotenvy::dotenv().ok();
    }
}

pub fn get_public_base_url() -> String {
    sanitize_base_url(&env::var("PUBLIC_BASE_URL").unwrap_or_else(|_| DEFAULT_PUBLIC_BASE_URL.to_string()))
}

/// `MULTILIST_SEED`; unknown values fall back to the sample seed.
pub fn get_seed_mode() -> SeedMode {
    let raw = env::var("MULTILIST_SEED").unwrap_or_else(|_| DEFAULT_SEED.to_string());
    match SeedMode::from_str(&raw) {
        Some(mode) => mode,
        None => {
            tracing::warn!(value = %raw, "Unknown MULTILIST_SEED, using sample data");
            SeedMode::Sample
        }
    }
}

/// `MULTILIST_MAX_SESSIONS` and `MULTILIST_SESSION_IDLE_SECS`.
pub fn get_session_limits() -> SessionLimits {
    SessionLimits {
        max_sessions: positive_env("MULTILIST_MAX_SESSIONS", DEFAULT_MAX_SESSIONS),
        idle_timeout: Duration::from_secs(positive_env("MULTILIST_SESSION_IDLE_SECS", DEFAULT_SESSION_IDLE_SECS)),
    }
}

fn positive_env<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr + PartialEq + Default,
{
    let Ok(raw) = env::var(key) else {
        return default;
    };
    match raw.trim().parse::<T>() {
        Ok(v) if v != T::default() => v,
        _ => {
            tracing::warn!(key, value = %raw, "Expected a positive number, using default");
            default
        }
    }
}

pub fn sanitize_base_url(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        format!("http://localhost:{}", DEFAULT_PORT)
    } else {
        trimmed.to_string()
    }
}
