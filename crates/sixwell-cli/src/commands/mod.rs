pub mod checkin;
pub mod config;
pub mod dimensions;
pub mod log;
pub mod reset;
pub mod status;
pub mod summary;
