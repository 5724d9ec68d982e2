pub mod backup;
pub mod calculator;
pub mod config_edit;
pub mod log;
pub mod profile;
pub mod punch;
pub mod reminder;
pub mod summary;
pub mod views;
