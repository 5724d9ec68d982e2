//! Unified application error type.
//! All modules (db, core, cli, export) return AppError so that the binary
//! reports every failure the same way.
//!
//! The aggregation functions in `core::calculator` are total and never
//! produce an AppError.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Storage
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Database migration error: {0}")]
    Migration(String),

    #[error("Stored value for '{key}' is malformed: {reason}")]
    Store { key: String, reason: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // ---------------------------
    // Input validation
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid time format: {0}")]
    InvalidTime(String),

    #[error("Invalid punch kind: {0}")]
    InvalidPunchKind(String),

    #[error("Invalid period: {0}")]
    InvalidPeriod(String),

    #[error("Invalid workload: {0}")]
    InvalidWorkload(String),

    // ---------------------------
    // Profiles
    // ---------------------------
    #[error("Profile not found: {0}")]
    ProfileNotFound(String),

    #[error("Invalid profile name: {0}")]
    InvalidProfileName(String),

    // ---------------------------
    // Config
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Export
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Summary service
    // ---------------------------
    #[error("Summary request failed: {0}")]
    Summary(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

pub type AppResult<T> = Result<T, AppError>;
