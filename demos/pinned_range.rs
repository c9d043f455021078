//! Example: two graphs in one window, one pinned and one autoscaled.
//!
//! The "Load" graph pins its axis to 0..100 the way a percentage monitor
//! would; the sawtooth intentionally overshoots to show render-time clipping.
//! The "Signal" graph autoscales around a drifting sine, sampling faster than
//! the default one-second tick.
//!
//! How to run
//! ```bash
//! cargo run --example pinned_range
//! ```

use std::time::Duration;

use livegraph::{color, run_window, GraphConfig, GraphWindow, LineGraph};

fn main() -> eframe::Result<()> {
    env_logger::init();

    let mut load = LineGraph::new(GraphConfig {
        autoscale: false,
        tick_interval: Duration::from_millis(250),
        ..GraphConfig::default()
    });
    load.set_pinned_bounds(0.0, 100.0).unwrap();
    let saw = load.add_line(color::parse("#73d216").unwrap(), "sawtooth");
    let mut step = 0u64;
    load.set_data_func(
        saw,
        Box::new(move |_| {
            step += 1;
            // Ramps to 125 so the top of the tooth clips at the pinned max.
            Ok((step % 26) as f64 * 5.0)
        }),
    )
    .unwrap();

    let mut signal = LineGraph::new(GraphConfig {
        autoscale: true,
        dps: 200,
        tick_interval: Duration::from_millis(100),
        ..GraphConfig::default()
    });
    let sine = signal.add_line_auto("sine");
    let mut n = 0u64;
    signal
        .set_data_func(
            sine,
            Box::new(move |_| {
                n += 1;
                let t = n as f64 * 0.1;
                Ok((t * 0.8).sin() * (1.0 + t * 0.01))
            }),
        )
        .unwrap();

    let mut window = GraphWindow::new("livegraph pinned range demo");
    window.add_graph(load, "Load");
    window.add_graph(signal, "Signal");
    run_window(window, None)
}
