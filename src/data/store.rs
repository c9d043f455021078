//! The series store: owns every series buffer and the shared capacity.
//!
//! Renderers and the autoscale engine never look at live buffers directly;
//! they work from [`SeriesSnapshot`]s, which are owned copies taken at a
//! well-defined instant. An append that happens after a snapshot was taken is
//! not visible through that snapshot.

use std::collections::HashMap;

use crate::data::series::{SeriesData, SeriesId, SeriesLook};
use crate::error::GraphError;

/// Read-consistent view of one series, in insertion (= time) order.
#[derive(Debug, Clone)]
pub struct SeriesSnapshot {
    pub id: SeriesId,
    pub look: SeriesLook,
    pub points: Vec<[f64; 2]>,
}

/// Owns the per-series ring buffers. Series are independent of each other;
/// they share only the retained-points capacity (`dps`) and the time axis.
pub struct SeriesStore {
    dps: usize,
    next_id: u32,
    order: Vec<SeriesId>,
    series: HashMap<SeriesId, SeriesData>,
}

impl SeriesStore {
    pub fn new(dps: usize) -> Self {
        Self {
            dps,
            next_id: 1,
            order: Vec::new(),
            series: HashMap::new(),
        }
    }

    /// Register a new series and return its handle.
    pub fn add_series(&mut self, look: SeriesLook) -> SeriesId {
        let id = SeriesId(self.next_id);
        self.next_id += 1;
        self.order.push(id);
        self.series.insert(id, SeriesData::new(look, self.dps));
        id
    }

    /// Remove a series and release its buffer.
    pub fn remove_series(&mut self, id: SeriesId) -> Result<(), GraphError> {
        if self.series.remove(&id).is_none() {
            return Err(GraphError::UnknownSeries(id));
        }
        self.order.retain(|s| *s != id);
        Ok(())
    }

    /// Append one sample, evicting the oldest if the buffer is at capacity.
    pub fn append(&mut self, id: SeriesId, timestamp: f64, value: f64) -> Result<(), GraphError> {
        let data = self.series.get_mut(&id).ok_or(GraphError::UnknownSeries(id))?;
        data.append(timestamp, value, self.dps);
        Ok(())
    }

    /// Retained-points capacity shared by all series.
    pub fn dps(&self) -> usize {
        self.dps
    }

    /// Change the capacity. Takes effect immediately: smaller capacities
    /// truncate every buffer from the oldest end.
    pub fn set_dps(&mut self, dps: usize) -> Result<(), GraphError> {
        if dps == 0 {
            return Err(GraphError::InvalidCapacity);
        }
        self.dps = dps;
        for data in self.series.values_mut() {
            data.truncate_to(dps);
        }
        Ok(())
    }

    /// Owned copy of one series' samples, oldest first.
    pub fn snapshot(&self, id: SeriesId) -> Result<Vec<[f64; 2]>, GraphError> {
        let data = self.series.get(&id).ok_or(GraphError::UnknownSeries(id))?;
        Ok(data.samples.iter().copied().collect())
    }

    /// Snapshots of every series, in registration order.
    pub fn snapshots(&self) -> Vec<SeriesSnapshot> {
        self.order
            .iter()
            .filter_map(|id| {
                self.series.get(id).map(|data| SeriesSnapshot {
                    id: *id,
                    look: data.look.clone(),
                    points: data.samples.iter().copied().collect(),
                })
            })
            .collect()
    }

    pub fn contains(&self, id: SeriesId) -> bool {
        self.series.contains_key(&id)
    }

    /// Number of registered series.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Number of samples currently buffered for a series.
    pub fn sample_count(&self, id: SeriesId) -> Result<usize, GraphError> {
        let data = self.series.get(&id).ok_or(GraphError::UnknownSeries(id))?;
        Ok(data.samples.len())
    }

    pub fn look_mut(&mut self, id: SeriesId) -> Result<&mut SeriesLook, GraphError> {
        self.series
            .get_mut(&id)
            .map(|d| &mut d.look)
            .ok_or(GraphError::UnknownSeries(id))
    }

    /// Drop all samples for one series, keeping the series itself.
    pub fn clear(&mut self, id: SeriesId) -> Result<(), GraphError> {
        let data = self.series.get_mut(&id).ok_or(GraphError::UnknownSeries(id))?;
        data.clear();
        Ok(())
    }

    /// Drop all samples for every series.
    pub fn clear_all(&mut self) {
        for data in self.series.values_mut() {
            data.clear();
        }
    }
}
