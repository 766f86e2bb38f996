use eframe::egui;

use crate::state::AppState;
use crate::ui::{panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct YsoSedApp {
    pub state: AppState,
}

impl YsoSedApp {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }
}

impl eframe::App for YsoSedApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: class filter ----
        egui::SidePanel::left("filter_panel")
            .default_width(220.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Bottom panel: results table ----
        if self.state.show_table && !self.state.results.is_empty() {
            egui::TopBottomPanel::bottom("results_panel")
                .default_height(200.0)
                .resizable(true)
                .show(ctx, |ui| {
                    panels::results_table(ui, &self.state);
                });
        }

        // ---- Central panel: SED plot ----
        egui::CentralPanel::default().show(ctx, |ui| {
            plot::sed_plot(ui, &self.state);
        });
    }
}
