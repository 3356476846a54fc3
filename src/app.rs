use eframe::egui;

use crate::config::WindowConfig;
use crate::state::app_state::AppState;
use crate::state::graph_state::GraphState;
use crate::ui::graph_panel;

/// The window showing the position and gain panels.
pub struct GainTraceApp {
    pub state: AppState,
}

impl GainTraceApp {
    pub fn new(cc: &eframe::CreationContext<'_>, state: AppState) -> Self {
        let ctx = &cc.egui_ctx;
        let mut style = (*ctx.style()).clone();
        style.text_styles.insert(
            egui::TextStyle::Body,
            egui::FontId::proportional(15.0),
        );
        style.spacing.item_spacing = egui::vec2(8.0, 6.0);
        ctx.set_style(style);

        Self { state }
    }
}

impl eframe::App for GainTraceApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let count = self.state.graphs.len().max(1) as f32;
            let spacing = ui.spacing().item_spacing.y * (count - 1.0);
            let panel_height = ((ui.available_height() - spacing) / count).max(80.0);

            for graph in &self.state.graphs {
                graph_panel::show_graph_panel(graph, ui, self.state.time_divisor, panel_height);
            }
        });
    }
}

/// Open the window and block until it is closed.
pub fn run(window: &WindowConfig, state: AppState) -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(window.title.as_str())
            .with_inner_size([window.width, window.height])
            .with_min_inner_size([480.0, 360.0]),
        wgpu_options: eframe::egui_wgpu::WgpuConfiguration {
            present_mode: eframe::wgpu::PresentMode::AutoVsync,
            ..Default::default()
        },
        ..Default::default()
    };

    tracing::info!(
        "Opening chart window: {} panels, {} points",
        state.graphs.len(),
        state.graphs.iter().map(GraphState::point_count).sum::<usize>()
    );
    let title = window.title.clone();
    eframe::run_native(
        &title,
        options,
        Box::new(move |cc| Ok(Box::new(GainTraceApp::new(cc, state)))),
    )
}
