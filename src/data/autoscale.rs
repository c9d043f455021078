//! Axis bounds computation for autoscaling.
//!
//! Bounds are a pure function of the current snapshots: computed fresh each
//! tick when autoscale is on, taken verbatim from configuration when it is
//! off. Nothing here is persisted across ticks.

use crate::data::store::SeriesSnapshot;

/// Fraction of the data span added on each side so lines never sit exactly on
/// the viewport edge.
pub const PAD_FRACTION: f64 = 0.05;

/// Half-height of the fallback range used when the data span is degenerate
/// (all samples identical, or no samples at all).
const DEGENERATE_HALF_RANGE: f64 = 0.5;

/// Vertical axis bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisBounds {
    pub min: f64,
    pub max: f64,
}

impl AxisBounds {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Clamp a value into these bounds, then translate it to `0.0..=1.0`.
    ///
    /// Used for clipped rendering in pinned mode: samples outside the range
    /// stay in storage but draw on the nearest edge.
    pub fn translate_clamped(&self, value: f64) -> f64 {
        let span = self.span();
        if span <= 0.0 {
            return 0.0;
        }
        (value.clamp(self.min, self.max) - self.min) / span
    }

    /// Clamp a value into these bounds.
    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.min, self.max)
    }
}

impl Default for AxisBounds {
    fn default() -> Self {
        Self { min: 0.0, max: 1.0 }
    }
}

/// Raw `(min, max)` over every sample value of every snapshot, or `None` when
/// no series holds any sample.
pub fn data_extent(snapshots: &[SeriesSnapshot]) -> Option<(f64, f64)> {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    let mut seen = false;
    for snap in snapshots {
        for p in &snap.points {
            let v = p[1];
            if v < min {
                min = v;
            }
            if v > max {
                max = v;
            }
            seen = true;
        }
    }
    seen.then_some((min, max))
}

/// Compute padded autoscale bounds from the given snapshots.
///
/// The unpadded extent always brackets every sample; a 5% margin is applied
/// symmetrically on top. A degenerate extent (all values equal, or no data,
/// in which case the extent defaults to 0) expands to a unit range centered
/// on that value so the axis never has zero height.
pub fn compute_bounds(snapshots: &[SeriesSnapshot]) -> AxisBounds {
    let (min, max) = data_extent(snapshots).unwrap_or((0.0, 0.0));
    if min == max {
        return AxisBounds::new(min - DEGENERATE_HALF_RANGE, max + DEGENERATE_HALF_RANGE);
    }
    let pad = (max - min) * PAD_FRACTION;
    AxisBounds::new(min - pad, max + pad)
}
