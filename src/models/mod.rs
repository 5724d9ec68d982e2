pub mod day_row;
pub mod profile;
pub mod punch;
pub mod punch_kind;
pub mod settings;
pub mod stats;
