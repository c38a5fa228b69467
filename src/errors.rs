//! Unified application error type.
//! All modules (store, core, cli, export) return AppError to keep the
//! error handling consistent and easy to manage.

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
    // Remote store
    // ---------------------------
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("No training record with id {0}")]
    RecordNotFound(i64),

    #[error("No user found for email {0}")]
    UserNotFound(String),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid month format (expected YYYY-MM): {0}")]
    InvalidMonth(String),

    #[error("Invalid day {0} for month {1}")]
    InvalidDay(u32, String),

    #[error("Invalid day state code: {0}")]
    InvalidDayState(String),

    #[error("Invalid weekday name: {0}")]
    InvalidWeekday(String),

    #[error("Invalid role: {0}")]
    InvalidRole(String),

    // ---------------------------
    // Logic errors
    // ---------------------------
    #[error("Weekend day {0} cannot be edited")]
    WeekendDay(String),

    #[error("Operation not permitted: {0}")]
    NotPermitted(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
