//! Periodic invocation of the per-series data functions.
//!
//! The sampler owns the `(series, data function)` bindings and a cooperative
//! tick clock. The host frame callback polls the clock; when a tick is due,
//! every binding fires once, in series-registration order, and each result is
//! appended to the store. A tick is a discrete unit of work: if the host loop
//! falls behind, missed ticks are skipped rather than queued, so latency never
//! accumulates.

use std::time::{Duration, Instant};

use log::{debug, warn};

use crate::data::series::SeriesId;
use crate::data::store::SeriesStore;
use crate::error::{BoxError, GraphError};

/// A data-producing callback bound to one series.
///
/// Invoked once per tick with the series handle; returns the next scalar
/// value, or an error to skip this series for the tick. Expected to be fast
/// and non-blocking since it runs on the UI loop.
pub type DataFn = Box<dyn FnMut(SeriesId) -> Result<f64, BoxError> + 'static>;

/// Optional observer for per-tick sampling failures.
pub type ErrorHook = Box<dyn FnMut(&GraphError) + 'static>;

/// Decides when the next tick is due, skipping over missed intervals.
pub struct TickClock {
    interval: Duration,
    next: Option<Instant>,
}

impl TickClock {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            next: None,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Change the interval; the new cadence starts from the next poll.
    pub fn set_interval(&mut self, interval: Duration) {
        self.interval = interval;
        self.next = None;
    }

    /// Returns `true` when a tick is due at `now`, advancing the schedule.
    ///
    /// The first poll fires immediately. When `now` has overrun the schedule
    /// by more than one interval, the missed ticks are dropped and the next
    /// tick is rescheduled relative to `now`; overlapping invocations are
    /// never queued.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.next {
            None => {
                self.next = Some(now + self.interval);
                true
            }
            Some(next) if now >= next => {
                let mut scheduled = next + self.interval;
                if scheduled <= now {
                    debug!(
                        "tick clock overran by {:?}, skipping missed ticks",
                        now.duration_since(next)
                    );
                    scheduled = now + self.interval;
                }
                self.next = Some(scheduled);
                true
            }
            Some(_) => false,
        }
    }
}

/// Fires the bound data functions once per tick and appends their results.
pub struct Sampler {
    bindings: Vec<(SeriesId, DataFn)>,
    error_hook: Option<ErrorHook>,
}

impl Sampler {
    pub fn new() -> Self {
        Self {
            bindings: Vec::new(),
            error_hook: None,
        }
    }

    /// Bind a data function to a series.
    ///
    /// A rebind keeps the series' position in the firing order; a new binding
    /// appends at the end (registration order).
    pub fn bind(&mut self, id: SeriesId, f: DataFn) {
        if let Some(slot) = self.bindings.iter_mut().find(|(s, _)| *s == id) {
            slot.1 = f;
        } else {
            self.bindings.push((id, f));
        }
    }

    /// Remove the binding for a series. No further invocation happens for it.
    pub fn unbind(&mut self, id: SeriesId) {
        self.bindings.retain(|(s, _)| *s != id);
    }

    pub fn is_bound(&self, id: SeriesId) -> bool {
        self.bindings.iter().any(|(s, _)| *s == id)
    }

    pub fn set_error_hook(&mut self, hook: ErrorHook) {
        self.error_hook = Some(hook);
    }

    /// Run one tick: invoke every binding in order, appending each result to
    /// the store with the given timestamp.
    ///
    /// A failing data function skips its series for this tick only; the error
    /// is logged and forwarded to the error hook, and the remaining series
    /// still sample.
    pub fn run_tick(&mut self, store: &mut SeriesStore, timestamp: f64) {
        for (id, f) in self.bindings.iter_mut() {
            match f(*id) {
                Ok(value) => {
                    if let Err(e) = store.append(*id, timestamp, value) {
                        // Binding outlived its series; drop it on the next pass.
                        warn!("dropping sample: {e}");
                    }
                }
                Err(source) => {
                    let err = GraphError::DataFn {
                        series: *id,
                        source,
                    };
                    warn!("{err}");
                    if let Some(hook) = self.error_hook.as_mut() {
                        hook(&err);
                    }
                }
            }
        }
        // Prune bindings whose series has been removed from the store.
        self.bindings.retain(|(id, _)| store.contains(*id));
    }
}

impl Default for Sampler {
    fn default() -> Self {
        Self::new()
    }
}
