use std::path::Path;

use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};
use egui_extras::{Column, TableBuilder};

use crate::color::class_color;
use crate::state::AppState;
use yso_sed::report;
use yso_sed::sed::classify::YsoClass;

// ---------------------------------------------------------------------------
// Left side panel – class filter and band constants
// ---------------------------------------------------------------------------

/// Render the left filter panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Classes");
    ui.separator();

    if state.catalog.is_none() {
        ui.label("No catalog loaded.");
        return;
    }

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            ui.horizontal(|ui: &mut Ui| {
                if ui.small_button("All").clicked() {
                    state.select_all();
                }
                if ui.small_button("None").clicked() {
                    state.select_none();
                }
            });

            let mut toggled: Option<YsoClass> = None;
            for class in YsoClass::ALL {
                let n = state.counts.get(&class).copied().unwrap_or(0);
                let text = RichText::new(format!("{class}  ({n})")).color(class_color(class));
                let mut checked = state.filter.contains(&class);
                if ui.checkbox(&mut checked, text).changed() {
                    toggled = Some(class);
                }
            }
            if let Some(class) = toggled {
                state.toggle_class(class);
            }

            ui.separator();

            egui::CollapsingHeader::new(RichText::new("Bands").strong())
                .default_open(false)
                .show(ui, |ui: &mut Ui| {
                    for spec in state.pipeline.bands().iter() {
                        ui.label(format!(
                            "{}: λ = {} µm, F₀ = {} Jy",
                            spec.band, spec.wavelength_um, spec.zero_point_jy
                        ));
                    }
                });
        });
}

// ---------------------------------------------------------------------------
// Bottom panel – results table
// ---------------------------------------------------------------------------

/// Render one row per visible source: position, label, α and class.
pub fn results_table(ui: &mut Ui, state: &AppState) {
    TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .column(Column::auto().at_least(40.0))
        .column(Column::auto().at_least(180.0))
        .column(Column::auto().at_least(80.0))
        .column(Column::remainder())
        .header(20.0, |mut header| {
            header.col(|ui| {
                ui.strong("#");
            });
            header.col(|ui| {
                ui.strong("Source");
            });
            header.col(|ui| {
                ui.strong("α");
            });
            header.col(|ui| {
                ui.strong("Class");
            });
        })
        .body(|mut body| {
            for &idx in &state.visible_indices {
                let result = &state.results[idx];
                body.row(18.0, |mut row| {
                    row.col(|ui| {
                        ui.colored_label(state.source_colors.color_for(idx), idx.to_string());
                    });
                    row.col(|ui| {
                        ui.label(result.label.as_str());
                    });
                    row.col(|ui| {
                        match result.spectral_index {
                            Some(alpha) => ui.label(format!("{alpha:+.3}")),
                            None => ui.weak("—"),
                        };
                    });
                    row.col(|ui| {
                        ui.colored_label(class_color(result.class), result.class.name());
                    });
                });
            }
        });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
            let has_results = !state.results.is_empty();
            if ui
                .add_enabled(has_results, egui::Button::new("Export results…"))
                .clicked()
            {
                export_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(catalog) = &state.catalog {
            ui.label(format!(
                "{} sources loaded, {} visible",
                catalog.len(),
                state.visible_indices.len()
            ));
        }

        if state.loading {
            ui.spinner();
        }

        ui.separator();

        if ui.selectable_label(state.show_table, "Results table").clicked() {
            state.show_table = !state.show_table;
        }

        if let Some(msg) = &state.status_message {
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialogs
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open photometry catalog")
        .add_filter("Supported files", &["parquet", "pq", "json", "csv"])
        .add_filter("Parquet", &["parquet", "pq"])
        .add_filter("JSON", &["json"])
        .add_filter("CSV", &["csv"])
        .pick_file();

    if let Some(path) = file {
        load_path(state, &path);
    }
}

/// Load and classify a catalog, reporting failures in the status bar.
pub fn load_path(state: &mut AppState, path: &Path) {
    state.loading = true;
    match yso_sed::data::loader::load_file(path) {
        Ok(catalog) => {
            state.set_catalog(catalog);
            log::info!("{}", report::summary_line(&state.results));
        }
        Err(e) => {
            log::error!("Failed to load file: {e:#}");
            state.status_message = Some(format!("Error: {e:#}"));
            state.loading = false;
        }
    }
}

fn export_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Export classification")
        .set_file_name("classification.csv")
        .add_filter("CSV", &["csv"])
        .add_filter("JSON", &["json"])
        .save_file();

    let Some(path) = file else {
        return;
    };

    let written = std::fs::File::create(&path)
        .map_err(anyhow::Error::from)
        .and_then(|f| {
            let writer = std::io::BufWriter::new(f);
            match path.extension().and_then(|e| e.to_str()) {
                Some("json") => report::write_json(&state.results, writer),
                _ => report::write_csv(&state.results, writer),
            }
        });

    match written {
        Ok(()) => {
            log::info!("Exported {} results to {}", state.results.len(), path.display());
            state.status_message = None;
        }
        Err(e) => {
            log::error!("Failed to export results: {e:#}");
            state.status_message = Some(format!("Error: {e:#}"));
        }
    }
}
