pub mod catalog_filter;
pub mod listing_store;
pub mod session;
pub mod session_registry;

// Re-export commonly used items
pub use catalog_filter::{filter_catalog, Candidates, EmptyCandidates};
pub use listing_store::ListingStore;
pub use session::{Applied, Session, SessionSeed, SessionSnapshot};
pub use session_registry::{discard_session, ensure_session, random_session_id, with_session, SessionSlot};
