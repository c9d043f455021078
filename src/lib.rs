//! livegraph: a live, autoscaling, multi-series line-graph widget for
//! egui/eframe.
//!
//! Each [`LineGraph`] samples user-supplied data functions on a fixed tick,
//! retains a bounded rolling history per series, recomputes its axis bounds as
//! data arrives (or pins them to a configured range), and renders every series
//! as a colored polyline.
//!
//! Modules:
//! - `data`: series buffers, the store, and the autoscale engine
//! - `sampler`: data-function bindings and the cooperative tick clock
//! - `render`: index-based projection and egui_plot drawing
//! - `widget`: the [`LineGraph`] composition root
//! - `window`: a native window host stacking titled graphs
//! - `color`: hex color parsing
//!
//! ```no_run
//! use livegraph::{color, run_window, GraphWindow, LineGraph};
//!
//! let mut graph = LineGraph::default();
//! graph.set_autoscale(true);
//! let line = graph.add_line(color::parse("#729fcf").unwrap(), "Random");
//! graph
//!     .set_data_func(line, Box::new(|_| Ok(42.0)))
//!     .unwrap();
//!
//! let mut window = GraphWindow::new("Demo");
//! window.add_graph(graph, "Test");
//! run_window(window, None).unwrap();
//! ```

pub mod color;
pub mod config;
pub mod data;
pub mod error;
pub mod render;
pub mod sampler;
pub mod widget;
pub mod window;

// Public re-exports for a compact external API
pub use config::GraphConfig;
pub use data::autoscale::AxisBounds;
pub use data::series::{SeriesId, SeriesLook};
pub use data::store::{SeriesSnapshot, SeriesStore};
pub use error::{BoxError, GraphError};
pub use sampler::{DataFn, ErrorHook};
pub use widget::LineGraph;
pub use window::{run_window, GraphWindow};
