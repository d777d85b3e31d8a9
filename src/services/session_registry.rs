use std::collections::HashMap;
use std::time::Instant;

use hex::encode as hex_encode;
use rand::RngCore;

use crate::config::SessionLimits;
use crate::models::AppState;
use crate::services::session::Session;

/// A registered session and when it was last used.
#[derive(Debug)]
pub struct SessionSlot {
    pub session: Session,
    pub last_seen: Instant,
}

pub fn random_session_id() -> String {
    let mut b = [0u8; 16];
    rand::rngs::OsRng.fill_bytes(&mut b);
    hex_encode(b)
}

/// Returns the id of a live session, creating a freshly seeded one when
/// `sid` is missing or unknown (e.g. after a restart or eviction). The bool
/// is true if a session was created.
pub fn ensure_session(state: &AppState, sid: Option<&str>) -> (String, bool) {
    let now = Instant::now();
    let mut sessions = state.lock_sessions();
    if let Some(sid) = sid {
        if let Some(slot) = sessions.get_mut(sid) {
            slot.last_seen = now;
            return (sid.to_string(), false);
        }
    }
    let evicted = evict_for_new_session(&mut sessions, &state.session_limits, now);
    let sid = random_session_id();
    sessions.insert(
        sid.clone(),
        SessionSlot {
            session: Session::new(&state.seed),
            last_seen: now,
        },
    );
    let live_sessions = sessions.len();
    drop(sessions);

    if !evicted.is_empty() {
        let mut flashes = state.lock_flashes();
        for old in &evicted {
            flashes.remove(old);
        }
        tracing::debug!(evicted = evicted.len(), "Evicted sessions");
    }
    tracing::info!(live_sessions, "Started new session");
    (sid, true)
}

/// Drops idle sessions, then the least recently used ones until one more
/// fits under the cap. Returns the evicted ids.
fn evict_for_new_session(
    sessions: &mut HashMap<String, SessionSlot>,
    limits: &SessionLimits,
    now: Instant,
) -> Vec<String> {
    let mut evicted: Vec<String> = sessions
        .iter()
        .filter(|(_, slot)| now.saturating_duration_since(slot.last_seen) >= limits.idle_timeout)
        .map(|(sid, _)| sid.clone())
        .collect();
    for sid in &evicted {
        sessions.remove(sid);
    }

    let cap = limits.max_sessions.max(1);
    while sessions.len() >= cap {
        let oldest = sessions
            .iter()
            .min_by_key(|(_, slot)| slot.last_seen)
            .map(|(sid, _)| sid.clone());
        match oldest {
            Some(sid) => {
                sessions.remove(&sid);
                evicted.push(sid);
            }
            None => break,
        }
    }
    evicted
}

/// Drops a session and its pending flash messages.
pub fn discard_session(state: &AppState, sid: &str) -> bool {
    state.lock_flashes().remove(sid);
    state.lock_sessions().remove(sid).is_some()
}

/// Runs `f` against the session `sid` and marks it as used; `None` if it
/// does not exist.
pub fn with_session<R>(state: &AppState, sid: &str, f: impl FnOnce(&mut Session) -> R) -> Option<R> {
    let mut sessions = state.lock_sessions();
    sessions.get_mut(sid).map(|slot| {
        slot.last_seen = Instant::now();
        f(&mut slot.session)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use crate::config::SeedMode;

    fn state() -> AppState {
        AppState::new(SeedMode::Sample.build(), "http://localhost:8080".into())
    }

    #[test]
    fn session_ids_are_hex_and_distinct() {
        let a = random_session_id();
        let b = random_session_id();
        assert_eq!(a.len(), 32);
        assert!(a.chars().all(|c| c.is_ascii_hexdigit()));
        assert_ne!(a, b);
    }

    #[test]
    fn ensure_reuses_known_and_replaces_unknown() {
        let state = state();
        let (sid, created) = ensure_session(&state, None);
        assert!(created);
        assert_eq!(ensure_session(&state, Some(&sid)), (sid.clone(), false));
        let (other, created) = ensure_session(&state, Some("stale"));
        assert!(created);
        assert_ne!(other, "stale");
        assert_eq!(state.session_count(), 2);
    }

    #[test]
    fn sessions_are_isolated() {
        let state = state();
        let (a, _) = ensure_session(&state, None);
        let (b, _) = ensure_session(&state, None);
        with_session(&state, &a, |s| s.remove_listing("1"));
        assert_eq!(with_session(&state, &a, |s| s.listings().len()), Some(3));
        assert_eq!(with_session(&state, &b, |s| s.listings().len()), Some(4));
    }

    #[test]
    fn discard_removes_session() {
        let state = state();
        let (sid, _) = ensure_session(&state, None);
        assert!(discard_session(&state, &sid));
        assert!(!discard_session(&state, &sid));
        assert!(with_session(&state, &sid, |_| ()).is_none());
    }

    fn limited_state(max_sessions: usize, idle_timeout: Duration) -> AppState {
        let mut state = state();
        state.session_limits = SessionLimits { max_sessions, idle_timeout };
        state
    }

    #[test]
    fn registry_never_exceeds_session_cap() {
        let state = limited_state(3, Duration::from_secs(3600));
        for _ in 0..50 {
            ensure_session(&state, None);
            assert!(state.session_count() <= 3);
        }
        assert_eq!(state.session_count(), 3);
    }

    #[test]
    fn least_recently_used_session_is_evicted_first() {
        let state = limited_state(3, Duration::from_secs(3600));
        let (a, _) = ensure_session(&state, None);
        let (b, _) = ensure_session(&state, None);
        let (c, _) = ensure_session(&state, None);
        {
            let later = Instant::now() + Duration::from_secs(60);
            let mut sessions = state.lock_sessions();
            sessions.get_mut(&a).unwrap().last_seen = later;
            sessions.get_mut(&c).unwrap().last_seen = later;
        }
        let (d, created) = ensure_session(&state, None);
        assert!(created);
        assert!(with_session(&state, &b, |_| ()).is_none());
        for live in [&a, &c, &d] {
            assert!(with_session(&state, live, |_| ()).is_some());
        }
    }

    #[test]
    fn idle_sessions_are_dropped_with_their_flashes() {
        let state = limited_state(100, Duration::ZERO);
        let (old, _) = ensure_session(&state, None);
        state.lock_flashes().insert(old.clone(), vec!["Added Miami, FL".into()]);
        let (fresh, _) = ensure_session(&state, None);
        assert_eq!(state.session_count(), 1);
        assert!(with_session(&state, &fresh, |_| ()).is_some());
        assert!(!state.lock_flashes().contains_key(&old));

        let (replacement, created) = ensure_session(&state, Some(&old));
        assert!(created);
        assert_ne!(replacement, old);
    }
}
