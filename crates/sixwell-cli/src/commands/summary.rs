use chrono::{Local, NaiveDate};
use serde::Serialize;
use sixwell_core::{DailySummary, Database, Dimension};

use crate::catalog;
use crate::common::load_tracker;

/// The daily pill row: one entry per dimension, done or pending.
#[derive(Serialize)]
struct PillEntry {
    dimension: Dimension,
    label: &'static str,
    done: bool,
}

#[derive(Serialize)]
struct SummaryReport {
    date: NaiveDate,
    completed_today: u32,
    total_actions: u64,
    dimensions: Vec<PillEntry>,
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let db = Database::open()?;
    let tracker = load_tracker(&db);

    let today = Local::now().date_naive();
    let DailySummary {
        date,
        completed_today,
        total_actions,
    } = tracker.summary_on(today);

    let dimensions = Dimension::ALL
        .into_iter()
        .map(|d| PillEntry {
            dimension: d,
            label: catalog::info(d).label,
            done: tracker.snapshot_on(d, today).checked_today,
        })
        .collect();

    let report = SummaryReport {
        date,
        completed_today,
        total_actions,
        dimensions,
    };
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
