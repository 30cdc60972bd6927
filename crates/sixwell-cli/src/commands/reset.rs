use sixwell_core::Database;

use crate::common::TRACKER_KEY;

pub fn run(yes: bool) -> Result<(), Box<dyn std::error::Error>> {
    if !yes {
        return Err("refusing to reset without --yes".into());
    }
    let db = Database::open()?;
    db.kv_delete(TRACKER_KEY)?;
    eprintln!("tracker state cleared");
    Ok(())
}
