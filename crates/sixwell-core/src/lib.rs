//! # Sixwell Core Library
//!
//! This library provides the core business logic for Sixwell, a daily
//! wellness tracker covering six independent dimensions of well-being
//! (social, movement, brain, nutrition, purpose, self-care). It implements
//! a CLI-first philosophy: all operations are available through the
//! `sixwell-cli` binary, and any GUI would be a thin layer over the same
//! core library.
//!
//! ## Architecture
//!
//! - **Tracker Engine**: a pure, date-driven state machine that records at
//!   most one check-in per dimension per calendar day and maintains a
//!   cumulative count, a streak, and a rolling 7-day window
//! - **Storage**: SQLite-based state persistence and TOML-based configuration
//!
//! The engine performs no I/O and never reads the system clock directly in
//! its date-parameterized entry points, so day rollover is purely a matter
//! of the date the caller passes in.
//!
//! ## Key Components
//!
//! - [`Tracker`]: the check-in state machine
//! - [`Dimension`]: the fixed set of six tracked dimensions
//! - [`Database`]: tracker persistence and the check-in journal
//! - [`Config`]: application configuration management

pub mod dimension;
pub mod error;
pub mod storage;
pub mod tracker;
pub mod window;

pub use dimension::{Dimension, DIMENSION_COUNT};
pub use error::TrackerError;
pub use storage::{Config, Database};
pub use tracker::{CheckIn, DailySummary, DimensionRecord, DimensionSnapshot, Tracker};
pub use window::{WeekWindow, WINDOW_DAYS};
