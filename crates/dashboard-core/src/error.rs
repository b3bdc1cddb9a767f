// File: crates/dashboard-core/src/error.rs
// Summary: Error type shared by the sparkline transform, tone lookups and page rendering.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, DashboardError>;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum DashboardError {
    /// Min/max and the x step are undefined over zero samples.
    #[error("sample series is empty")]
    EmptySeries,

    #[error("sample at index {index} is not finite")]
    NonFiniteSample { index: usize },

    #[error("invalid drawing surface {width}x{height}: both sides must be finite and > 0")]
    InvalidSurface { width: f64, height: f64 },

    #[error("no style token for key {key:?} in the {table} table")]
    UnknownToneKey { table: &'static str, key: String },

    #[error("failed to format markup")]
    Format(#[from] std::fmt::Error),
}
