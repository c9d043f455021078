//! Native window host: stacks titled graphs and runs the eframe loop.
//!
//! This is the integration point with the host toolkit. The window owns its
//! graphs, forwards every frame to them, and exposes a single close hook that
//! fires when the user asks the window to close.

use eframe::egui;

use crate::widget::LineGraph;

/// A native window holding one or more titled [`LineGraph`]s stacked
/// vertically, each getting an equal share of the height.
pub struct GraphWindow {
    title: String,
    graphs: Vec<(String, LineGraph)>,
    on_close: Option<Box<dyn FnMut() + 'static>>,
}

impl GraphWindow {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            graphs: Vec::new(),
            on_close: None,
        }
    }

    /// Attach a graph under the given heading.
    pub fn add_graph(&mut self, graph: LineGraph, title: impl Into<String>) {
        self.graphs.push((title.into(), graph));
    }

    /// Register a callback invoked when the window is asked to close.
    pub fn on_close(&mut self, hook: impl FnMut() + 'static) {
        self.on_close = Some(Box::new(hook));
    }

    pub fn title(&self) -> &str {
        &self.title
    }
}

impl eframe::App for GraphWindow {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if ctx.input(|i| i.viewport().close_requested()) {
            if let Some(hook) = self.on_close.as_mut() {
                hook();
            }
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            let n = self.graphs.len().max(1);
            let spacing = ui.spacing().item_spacing.y;
            let height =
                (ui.available_height() - spacing * n.saturating_sub(1) as f32) / n as f32;
            let width = ui.available_width();
            for (title, graph) in self.graphs.iter_mut() {
                ui.allocate_ui(egui::vec2(width, height), |ui| {
                    ui.set_min_size(egui::vec2(width, height));
                    ui.strong(title.as_str());
                    graph.show(ui);
                });
            }
        });
    }
}

/// Open the window and run the event loop until it is closed.
///
/// Pass `None` to get a sensible default window size.
pub fn run_window(
    window: GraphWindow,
    native_options: Option<eframe::NativeOptions>,
) -> eframe::Result<()> {
    let title = window.title().to_string();
    let mut opts = native_options.unwrap_or_default();
    if opts.viewport.inner_size.is_none() {
        opts.viewport = opts.viewport.clone().with_inner_size(egui::vec2(800.0, 600.0));
    }
    eframe::run_native(&title, opts, Box::new(|_cc| Ok(Box::new(window))))
}
