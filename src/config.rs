//! Graph configuration.

use std::time::Duration;

use crate::data::autoscale::AxisBounds;

/// Configuration for a [`LineGraph`](crate::widget::LineGraph).
///
/// All fields may be changed through the widget setters at any time; changes
/// take effect on the next tick. The widget setters validate (capacity > 0,
/// pinned `min < max`); mutating this struct directly before construction is
/// unchecked.
#[derive(Debug, Clone)]
pub struct GraphConfig {
    /// Recompute axis bounds from the data each tick. When `false`, `pinned`
    /// is used verbatim and out-of-range samples are clipped at render time.
    pub autoscale: bool,
    /// Data points retained per series.
    pub dps: usize,
    /// Interval between sampling ticks.
    pub tick_interval: Duration,
    /// Axis bounds used when `autoscale` is off.
    pub pinned: AxisBounds,
    /// Draw horizontal gridlines at the y-axis ticks.
    pub show_grid: bool,
    /// Draw x-axis tick labels (sample age, newest at the right edge).
    pub show_x_labels: bool,
    /// Show the per-series legend.
    pub show_legend: bool,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            autoscale: true,
            dps: 100,
            tick_interval: Duration::from_secs(1),
            pinned: AxisBounds::default(),
            show_grid: true,
            show_x_labels: true,
            show_legend: true,
        }
    }
}
