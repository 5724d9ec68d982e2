pub mod add;
pub mod backup;
pub mod clear;
pub mod config;
pub mod db;
pub mod export;
pub mod init;
pub mod list;
pub mod log;
pub mod month;
pub mod profile;
pub mod punch;
pub mod remind;
pub mod settings;
pub mod status;
pub mod summary;
