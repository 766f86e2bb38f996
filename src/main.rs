mod app;
mod color;
mod state;
mod ui;

use std::path::PathBuf;

use app::YsoSedApp;
use clap::Parser;
use eframe::egui;
use state::AppState;
use yso_sed::config::{resolve_band_set, CONFIG_ENV_VAR};
use yso_sed::sed::pipeline::Pipeline;

/// SED viewer and YSO classifier for WISE photometry catalogs
#[derive(Parser, Debug)]
#[command(name = "yso-sed", version)]
struct Args {
    /// Catalog to open on startup (.parquet, .json or .csv)
    file: Option<PathBuf>,

    /// TOML file overriding band wavelengths / zero points
    #[arg(long, value_name = "FILE", env = CONFIG_ENV_VAR)]
    bands: Option<PathBuf>,
}

fn main() -> eframe::Result {
    env_logger::init();
    let args = Args::parse();

    let bands = match resolve_band_set(args.bands.as_deref()) {
        Ok(bands) => bands,
        Err(e) => {
            log::error!("{e}");
            eprintln!("error: {e}");
            std::process::exit(2);
        }
    };

    let mut state = AppState::new(Pipeline::new(bands));
    if let Some(path) = &args.file {
        ui::panels::load_path(&mut state, path);
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "YSO SED – Classifier",
        options,
        Box::new(|_cc| Ok(Box::new(YsoSedApp::new(state)))),
    )
}
