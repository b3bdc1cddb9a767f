// File: crates/dashboard-core/src/types.rs
// Summary: Shared types and constants (drawing surface sizes).

use serde::Deserialize;

use crate::error::{DashboardError, Result};

/// Default sparkline surface width in user units.
pub const WIDTH: f64 = 320.0;
/// Default sparkline surface height in user units.
pub const HEIGHT: f64 = 140.0;

/// Fixed-size drawing surface the sparkline is projected into.
/// Contract: both sides are finite and strictly positive (see [`Surface::validate`]).
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct Surface {
    pub width: f64,
    pub height: f64,
}

impl Surface {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn validate(&self) -> Result<()> {
        let ok = |v: f64| v.is_finite() && v > 0.0;
        if ok(self.width) && ok(self.height) {
            Ok(())
        } else {
            Err(DashboardError::InvalidSurface { width: self.width, height: self.height })
        }
    }
}

impl Default for Surface {
    fn default() -> Self {
        Self::new(WIDTH, HEIGHT)
    }
}
