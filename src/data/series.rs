//! Per-series sample buffer and display attributes.

use std::collections::VecDeque;

use egui::Color32;

/// Opaque handle identifying one series, assigned by the store on creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SeriesId(pub(crate) u32);

impl std::fmt::Display for SeriesId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The visual presentation of a series (color, label, visibility, width).
#[derive(Debug, Clone)]
pub struct SeriesLook {
    pub color: Color32,
    pub label: String,
    pub visible: bool,
    pub width: f32,
}

impl SeriesLook {
    pub fn new(color: Color32, label: impl Into<String>) -> Self {
        Self {
            color,
            label: label.into(),
            visible: true,
            width: 1.5,
        }
    }

    /// A look with a distinct palette color allocated from the series index.
    pub fn from_index(index: usize, label: impl Into<String>) -> Self {
        Self::new(Self::alloc_color(index), label)
    }

    /// Allocate a distinct color for the given series index.
    pub fn alloc_color(index: usize) -> Color32 {
        const PALETTE: [Color32; 10] = [
            Color32::from_rgb(31, 119, 180),
            Color32::from_rgb(255, 127, 14),
            Color32::from_rgb(44, 160, 44),
            Color32::from_rgb(214, 39, 40),
            Color32::from_rgb(148, 103, 189),
            Color32::from_rgb(140, 86, 75),
            Color32::from_rgb(227, 119, 194),
            Color32::from_rgb(127, 127, 127),
            Color32::from_rgb(188, 189, 34),
            Color32::from_rgb(23, 190, 207),
        ];
        PALETTE[index % PALETTE.len()]
    }
}

/// One series: its look plus the bounded `[timestamp, value]` buffer.
pub struct SeriesData {
    pub look: SeriesLook,
    pub samples: VecDeque<[f64; 2]>,
}

impl SeriesData {
    pub fn new(look: SeriesLook, capacity: usize) -> Self {
        Self {
            look,
            samples: VecDeque::with_capacity(capacity),
        }
    }

    /// Append one sample, evicting the oldest when the buffer is at capacity.
    pub fn append(&mut self, timestamp: f64, value: f64, capacity: usize) {
        if self.samples.len() >= capacity {
            self.samples.pop_front();
        }
        self.samples.push_back([timestamp, value]);
    }

    /// Drop samples from the oldest end until at most `capacity` remain.
    pub fn truncate_to(&mut self, capacity: usize) {
        while self.samples.len() > capacity {
            self.samples.pop_front();
        }
    }

    pub fn clear(&mut self) {
        self.samples.clear();
    }
}
