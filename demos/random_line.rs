//! Example: a single autoscaled line fed by a random data function.
//!
//! How to run
//! ```bash
//! cargo run --example random_line
//! ```
//! You should see one trace named "Random" stepping once per second.

use livegraph::{color, run_window, GraphConfig, GraphWindow, LineGraph};
use rand::Rng;

fn main() -> eframe::Result<()> {
    env_logger::init();

    let mut graph = LineGraph::new(GraphConfig {
        autoscale: true,
        ..GraphConfig::default()
    });

    let line = graph.add_line(color::parse("#729fcf").unwrap(), "Random");
    graph
        .set_data_func(line, Box::new(|_| Ok(rand::rng().random_range(0.0..100.0))))
        .unwrap();

    let mut window = GraphWindow::new("livegraph demo");
    window.add_graph(graph, "Test");
    window.on_close(|| log::info!("window closed"));
    run_window(window, None)
}
