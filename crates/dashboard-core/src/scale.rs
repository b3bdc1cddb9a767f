// File: crates/dashboard-core/src/scale.rs
// Summary: Index (X) and value (Y) scales fitted to a sample series and a drawing surface.

use crate::error::{DashboardError, Result};
use crate::types::Surface;

/// Horizontal scale: evenly spaced sample indices across the surface width.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IndexScale {
    pub step: f64,
}

impl IndexScale {
    /// `width / max(len - 1, 1)`; a single sample keeps `step == width` and sits at x = 0.
    pub fn fit(len: usize, width: f64) -> Self {
        let gaps = len.saturating_sub(1).max(1);
        Self { step: width / gaps as f64 }
    }

    #[inline]
    pub fn to_px(&self, index: usize) -> f64 {
        index as f64 * self.step
    }
}

/// Vertical scale mapping `[min, min + range]` onto `[height, 0]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ValueScale {
    pub min: f64,
    pub max: f64,
    pub range: f64,
    pub height: f64,
}

impl ValueScale {
    /// Fit to the extent of `samples`. A flat series gets `range = 1`, so every
    /// sample maps to `y = height` (not the midpoint).
    pub fn fit(samples: &[f64], height: f64) -> Result<Self> {
        let first = *samples.first().ok_or(DashboardError::EmptySeries)?;
        let mut min = first;
        let mut max = first;
        for (index, &v) in samples.iter().enumerate() {
            if !v.is_finite() {
                return Err(DashboardError::NonFiniteSample { index });
            }
            min = min.min(v);
            max = max.max(v);
        }
        let span = max - min;
        let range = if span == 0.0 { 1.0 } else { span };
        Ok(Self { min, max, range, height })
    }

    #[inline]
    pub fn to_px(&self, value: f64) -> f64 {
        self.height - ((value - self.min) / self.range) * self.height
    }
}

/// Both scales for one series on one surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SeriesScale {
    pub x: IndexScale,
    pub y: ValueScale,
}

impl SeriesScale {
    pub fn fit(samples: &[f64], surface: Surface) -> Result<Self> {
        surface.validate()?;
        let y = ValueScale::fit(samples, surface.height)?;
        Ok(Self { x: IndexScale::fit(samples.len(), surface.width), y })
    }
}
