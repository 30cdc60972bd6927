use chrono::Local;
use serde::Serialize;
use sixwell_core::{Config, Database, Dimension, Tracker, WINDOW_DAYS};

use crate::catalog;
use crate::common::load_tracker;

/// One dimension's status, decorated with presentation fields.
#[derive(Serialize)]
pub struct DimensionStatus {
    pub dimension: Dimension,
    pub label: &'static str,
    pub prompt: &'static str,
    pub count: u32,
    pub streak: u32,
    pub checked_today: bool,
    /// Ring fill toward the configured monthly target, 0-100.
    pub progress_pct: f64,
    /// Last seven days, oldest first.
    pub week: [bool; WINDOW_DAYS],
}

fn status_of(tracker: &Tracker, dimension: Dimension, target: u32) -> DimensionStatus {
    let snapshot = tracker.snapshot_on(dimension, Local::now().date_naive());
    let info = catalog::info(dimension);
    DimensionStatus {
        dimension,
        label: info.label,
        prompt: info.prompt,
        count: snapshot.count,
        streak: snapshot.streak,
        checked_today: snapshot.checked_today,
        progress_pct: catalog::progress_pct(snapshot.count, target),
        week: *snapshot.window.days(),
    }
}

pub fn run(dimension: Option<&str>) -> Result<(), Box<dyn std::error::Error>> {
    let db = Database::open()?;
    let tracker = load_tracker(&db);
    let target = Config::load()?.goal.monthly_target;

    match dimension {
        Some(raw) => {
            let dimension: Dimension = raw.parse()?;
            let status = status_of(&tracker, dimension, target);
            println!("{}", serde_json::to_string_pretty(&status)?);
        }
        None => {
            let statuses: Vec<DimensionStatus> = Dimension::ALL
                .into_iter()
                .map(|d| status_of(&tracker, d, target))
                .collect();
            println!("{}", serde_json::to_string_pretty(&statuses)?);
        }
    }
    Ok(())
}
