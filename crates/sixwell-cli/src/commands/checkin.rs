use chrono::{Local, Utc};
use serde::Serialize;
use sixwell_core::{CheckIn, Database, Dimension, DimensionSnapshot};

use crate::catalog;
use crate::common::{load_tracker, save_tracker};

#[derive(Serialize)]
struct CheckInReport {
    outcome: CheckIn,
    snapshot: DimensionSnapshot,
}

pub fn run(dimension: &str) -> Result<(), Box<dyn std::error::Error>> {
    let dimension: Dimension = dimension.parse()?;

    let db = Database::open()?;
    let mut tracker = load_tracker(&db);

    let today = Local::now().date_naive();
    let outcome = tracker.check_in_on(dimension, today);

    if outcome == CheckIn::Recorded {
        // Persist state first, then the journal row.
        save_tracker(&db, &tracker)?;
        db.record_check_in(dimension, today, Utc::now())?;
    }

    let report = CheckInReport {
        outcome,
        snapshot: tracker.snapshot_on(dimension, today),
    };
    println!("{}", serde_json::to_string_pretty(&report)?);

    let info = catalog::info(dimension);
    match outcome {
        CheckIn::Recorded => eprintln!("{}", info.motivation),
        CheckIn::AlreadyLogged => eprintln!("{}: already logged for today", info.label),
    }
    Ok(())
}
