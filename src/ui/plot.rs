use eframe::egui::Ui;
use egui_plot::{Line, MarkerShape, Plot, PlotPoints, Points};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// SED plot (central panel)
// ---------------------------------------------------------------------------

/// Render the log-log SED of every visible source in the central panel.
pub fn sed_plot(ui: &mut Ui, state: &AppState) {
    if state.catalog.is_none() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Open a photometry catalog to view SEDs  (File → Open…)");
        });
        return;
    }

    Plot::new("sed_plot")
        .legend(egui_plot::Legend::default())
        .x_axis_label("log λ  [cm]")
        .y_axis_label("log λF_λ  [erg s⁻¹ cm⁻²]")
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            for &idx in &state.visible_indices {
                let result = &state.results[idx];
                let color = state.source_colors.color_for(idx);
                let name = format!("{} ({})", result.label, result.class);

                // Bands without a detection are left out of the curve.
                let coords: Vec<[f64; 2]> = result
                    .sed
                    .iter()
                    .filter_map(|p| p.log_lambda_f_lambda.map(|y| [p.log_wavelength_cm, y]))
                    .collect();
                if coords.is_empty() {
                    continue;
                }

                let line_points: PlotPoints = coords.iter().copied().collect();
                let marker_points: PlotPoints = coords.iter().copied().collect();

                plot_ui.line(Line::new(line_points).name(&name).color(color).width(1.5));
                plot_ui.points(
                    Points::new(marker_points)
                        .name(&name)
                        .color(color)
                        .shape(MarkerShape::Circle)
                        .radius(3.5),
                );
            }
        });
}
