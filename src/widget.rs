//! The line graph widget: composition root over the store, sampler,
//! autoscale engine, and renderer.
//!
//! A [`LineGraph`] owns all of its state; embedding it is a single
//! [`LineGraph::show`] call from any egui container. `show` drives the
//! cooperative tick (sample, rescale, draw, schedule repaint), so the widget
//! keeps ticking for as long as the host keeps painting it.

use std::sync::atomic::{AtomicU32, Ordering};
use std::time::{Duration, Instant};

use egui::Color32;

use crate::config::GraphConfig;
use crate::data::autoscale::{self, AxisBounds};
use crate::data::series::{SeriesId, SeriesLook};
use crate::data::store::{SeriesSnapshot, SeriesStore};
use crate::error::GraphError;
use crate::render::{self, RenderOptions};
use crate::sampler::{DataFn, ErrorHook, Sampler, TickClock};

/// A live, autoscaling, multi-series line graph.
pub struct LineGraph {
    config: GraphConfig,
    store: SeriesStore,
    sampler: Sampler,
    clock: TickClock,
    bounds: AxisBounds,
    epoch: Instant,
    id_salt: String,
}

impl LineGraph {
    pub fn new(mut config: GraphConfig) -> Self {
        static NEXT_ID: AtomicU32 = AtomicU32::new(1);
        let n = NEXT_ID.fetch_add(1, Ordering::Relaxed);

        // Hand-built configs bypass the setters; a zero capacity becomes 1.
        config.dps = config.dps.max(1);
        let dps = config.dps;
        let bounds = if config.autoscale {
            autoscale::compute_bounds(&[])
        } else {
            config.pinned
        };
        Self {
            store: SeriesStore::new(dps),
            sampler: Sampler::new(),
            clock: TickClock::new(config.tick_interval),
            bounds,
            epoch: Instant::now(),
            id_salt: format!("livegraph-{n}"),
            config,
        }
    }

    // ── Series management ────────────────────────────────────────────────────

    /// Add a series with the given color and label; returns its handle.
    pub fn add_line(&mut self, color: Color32, label: impl Into<String>) -> SeriesId {
        self.store.add_series(SeriesLook::new(color, label))
    }

    /// Add a series with a palette-allocated color.
    pub fn add_line_auto(&mut self, label: impl Into<String>) -> SeriesId {
        let look = SeriesLook::from_index(self.store.len(), label);
        self.store.add_series(look)
    }

    /// Remove a series. Its data function is deregistered before the buffer
    /// is released, so no callback fires for it afterwards.
    pub fn remove_line(&mut self, id: SeriesId) -> Result<(), GraphError> {
        self.sampler.unbind(id);
        self.store.remove_series(id)
    }

    /// Bind the data-producing function invoked for `id` on every tick.
    pub fn set_data_func(&mut self, id: SeriesId, f: DataFn) -> Result<(), GraphError> {
        if !self.store.contains(id) {
            return Err(GraphError::UnknownSeries(id));
        }
        self.sampler.bind(id, f);
        Ok(())
    }

    /// Observe per-tick sampling failures (in addition to the log output).
    pub fn set_error_hook(&mut self, hook: ErrorHook) {
        self.sampler.set_error_hook(hook);
    }

    pub fn look_mut(&mut self, id: SeriesId) -> Result<&mut SeriesLook, GraphError> {
        self.store.look_mut(id)
    }

    /// Drop the buffered samples of one series.
    pub fn clear(&mut self, id: SeriesId) -> Result<(), GraphError> {
        self.store.clear(id)
    }

    /// Drop the buffered samples of every series.
    pub fn clear_all(&mut self) {
        self.store.clear_all();
    }

    // ── Configuration ────────────────────────────────────────────────────────

    /// Set the retained data points per series. Shrinking truncates from the
    /// oldest end immediately.
    pub fn set_dps(&mut self, dps: usize) -> Result<(), GraphError> {
        self.store.set_dps(dps)?;
        self.config.dps = dps;
        Ok(())
    }

    pub fn dps(&self) -> usize {
        self.store.dps()
    }

    pub fn set_autoscale(&mut self, autoscale: bool) {
        self.config.autoscale = autoscale;
    }

    pub fn autoscale(&self) -> bool {
        self.config.autoscale
    }

    /// Set the bounds used while autoscale is off.
    pub fn set_pinned_bounds(&mut self, min: f64, max: f64) -> Result<(), GraphError> {
        if !(min < max) {
            return Err(GraphError::InvalidBounds { min, max });
        }
        self.config.pinned = AxisBounds::new(min, max);
        Ok(())
    }

    pub fn set_tick_interval(&mut self, interval: Duration) {
        self.config.tick_interval = interval;
        self.clock.set_interval(interval);
    }

    /// Toggle the horizontal gridlines.
    pub fn set_show_grid(&mut self, show: bool) {
        self.config.show_grid = show;
    }

    /// Toggle the x-axis tick labels.
    pub fn set_show_x_labels(&mut self, show: bool) {
        self.config.show_x_labels = show;
    }

    /// Toggle the per-series legend.
    pub fn set_show_legend(&mut self, show: bool) {
        self.config.show_legend = show;
    }

    pub fn config(&self) -> &GraphConfig {
        &self.config
    }

    // ── Data access ──────────────────────────────────────────────────────────

    /// Axis bounds as of the last tick.
    pub fn bounds(&self) -> AxisBounds {
        self.bounds
    }

    /// Owned copy of one series' samples, oldest first.
    pub fn snapshot(&self, id: SeriesId) -> Result<Vec<[f64; 2]>, GraphError> {
        self.store.snapshot(id)
    }

    /// Number of samples currently buffered for a series.
    pub fn sample_count(&self, id: SeriesId) -> Result<usize, GraphError> {
        self.store.sample_count(id)
    }

    pub fn snapshots(&self) -> Vec<SeriesSnapshot> {
        self.store.snapshots()
    }

    // ── Ticking ──────────────────────────────────────────────────────────────

    /// Poll the tick clock; sample and rescale if a tick is due.
    ///
    /// Returns `true` when a tick ran. Called from `show` on every frame, but
    /// also usable directly by headless hosts.
    pub fn update(&mut self, now: Instant) -> bool {
        if !self.clock.poll(now) {
            return false;
        }
        self.sample_at(now);
        true
    }

    /// Run one sampling pass immediately, regardless of the tick schedule.
    pub fn tick_now(&mut self) {
        self.sample_at(Instant::now());
    }

    fn sample_at(&mut self, now: Instant) {
        let timestamp = now.duration_since(self.epoch).as_secs_f64();
        self.sampler.run_tick(&mut self.store, timestamp);
        self.bounds = if self.config.autoscale {
            autoscale::compute_bounds(&self.store.snapshots())
        } else {
            self.config.pinned
        };
    }

    // ── Embedding ────────────────────────────────────────────────────────────

    /// Tick if due, then draw into `ui` and schedule the next repaint.
    pub fn show(&mut self, ui: &mut egui::Ui) {
        self.update(Instant::now());

        let opts = RenderOptions {
            dps: self.store.dps(),
            clip: !self.config.autoscale,
            show_grid: self.config.show_grid,
            show_x_labels: self.config.show_x_labels,
            show_legend: self.config.show_legend,
            tick_seconds: self.config.tick_interval.as_secs_f64(),
        };
        render::draw(ui, &self.id_salt, &self.bounds, &self.store.snapshots(), &opts);

        let delay = self.config.tick_interval.min(Duration::from_millis(100));
        ui.ctx().request_repaint_after(delay);
    }
}

impl Default for LineGraph {
    fn default() -> Self {
        Self::new(GraphConfig::default())
    }
}
