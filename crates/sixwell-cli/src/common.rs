//! Shared helpers for loading and persisting the tracker.

use sixwell_core::{Database, Tracker};

pub const TRACKER_KEY: &str = "tracker";

/// Load the persisted tracker, or start fresh if none is stored or the
/// stored blob no longer parses.
pub fn load_tracker(db: &Database) -> Tracker {
    if let Ok(Some(json)) = db.kv_get(TRACKER_KEY) {
        if let Ok(tracker) = serde_json::from_str::<Tracker>(&json) {
            return tracker;
        }
    }
    Tracker::new()
}

/// Persist the tracker.
pub fn save_tracker(db: &Database, tracker: &Tracker) -> Result<(), Box<dyn std::error::Error>> {
    let json = serde_json::to_string(tracker)?;
    db.kv_set(TRACKER_KEY, &json)?;
    Ok(())
}
