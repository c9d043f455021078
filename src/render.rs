//! Projection and drawing of series polylines.
//!
//! The projection is index-based over a fixed `dps`-wide viewport: the newest
//! sample always sits on the right edge and the buffer fills leftward, so a
//! full ring buffer spans the whole plot and a partial one grows in from the
//! right. Rendering is stateless given its inputs; everything here is derived
//! per frame from the snapshots and the current axis bounds.

use egui::Vec2b;
use egui_plot::{Legend, Line, Plot};

use crate::data::autoscale::AxisBounds;
use crate::data::store::SeriesSnapshot;

/// Options controlling the drawing pass, derived from the graph config.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Width of the viewport in samples.
    pub dps: usize,
    /// Clamp values into the axis bounds (pinned mode).
    pub clip: bool,
    pub show_grid: bool,
    pub show_x_labels: bool,
    pub show_legend: bool,
    /// Seconds per sample slot, used for the x tick labels.
    pub tick_seconds: f64,
}

/// Horizontal position of sample `i` in a buffer holding `len` points.
///
/// Right-aligned: the newest sample (`i == len - 1`) lands at `dps - 1`, and
/// once the buffer is full the oldest sits at 0.
pub fn x_position(i: usize, len: usize, dps: usize) -> f64 {
    (dps - len.min(dps) + i) as f64
}

/// Project a snapshot's samples to plot points.
///
/// With `clip` set, values are clamped into `bounds` so out-of-range samples
/// draw on the nearest edge instead of escaping the viewport. Tolerates empty
/// and single-sample buffers (returns zero or one point).
pub fn polyline(points: &[[f64; 2]], dps: usize, bounds: &AxisBounds, clip: bool) -> Vec<[f64; 2]> {
    let len = points.len();
    points
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let y = if clip { bounds.clamp(p[1]) } else { p[1] };
            [x_position(i, len, dps), y]
        })
        .collect()
}

/// Draw every visible series into `ui` using the given bounds.
///
/// Returns `false` without drawing when the host has not allocated a usable
/// drawable area yet; the caller simply retries on the next frame.
pub fn draw(
    ui: &mut egui::Ui,
    id_salt: &str,
    bounds: &AxisBounds,
    snapshots: &[SeriesSnapshot],
    opts: &RenderOptions,
) -> bool {
    let size = ui.available_size();
    if size.x < 1.0 || size.y < 1.0 {
        return false;
    }

    let x_max = (opts.dps.saturating_sub(1)).max(1) as f64;
    let tick_seconds = opts.tick_seconds;

    let mut plot = Plot::new(id_salt.to_string())
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .show_grid(Vec2b::new(false, opts.show_grid))
        .show_axes(Vec2b::new(opts.show_x_labels, true))
        .x_axis_formatter(move |mark, _range| {
            // Label slots by their age relative to the newest sample.
            let age = (x_max - mark.value) * tick_seconds;
            if age <= 0.0 {
                "now".to_string()
            } else {
                format!("-{age:.0}s")
            }
        });
    if opts.show_legend {
        plot = plot.legend(Legend::default());
    }

    plot.show(ui, |plot_ui| {
        plot_ui.set_plot_bounds_x(0.0..=x_max);
        plot_ui.set_plot_bounds_y(bounds.min..=bounds.max);

        for snap in snapshots {
            if !snap.look.visible {
                continue;
            }
            let pts = polyline(&snap.points, opts.dps, bounds, opts.clip);
            plot_ui.line(
                Line::new(snap.look.label.clone(), pts)
                    .color(snap.look.color)
                    .width(snap.look.width),
            );
        }
    });
    true
}
