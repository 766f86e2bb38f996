use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

use yso_sed::sed::classify::YsoClass;

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

fn hsl_to_color32(hue: f32, saturation: f32, lightness: f32) -> Color32 {
    let rgb: Srgb = Hsl::new(hue, saturation, lightness).into_color();
    Color32::from_rgb(
        (rgb.red * 255.0) as u8,
        (rgb.green * 255.0) as u8,
        (rgb.blue * 255.0) as u8,
    )
}

/// Generates `n` colours running from violet to red, evenly spaced in hue.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    match n {
        0 => Vec::new(),
        1 => vec![hsl_to_color32(0.0, 0.75, 0.55)],
        _ => (0..n)
            .map(|i| {
                let hue = 270.0 * (1.0 - i as f32 / (n - 1) as f32);
                hsl_to_color32(hue, 0.75, 0.55)
            })
            .collect(),
    }
}

// ---------------------------------------------------------------------------
// Source colours: input position → Color32
// ---------------------------------------------------------------------------

/// One colour per source, assigned by position in the loaded catalog.
#[derive(Debug, Clone, Default)]
pub struct SourceColors {
    colors: Vec<Color32>,
}

impl SourceColors {
    pub fn new(n_sources: usize) -> Self {
        SourceColors {
            colors: generate_palette(n_sources),
        }
    }

    pub fn color_for(&self, index: usize) -> Color32 {
        self.colors.get(index).copied().unwrap_or(Color32::GRAY)
    }
}

/// Fixed colour per class for the filter panel and results table.
pub fn class_color(class: YsoClass) -> Color32 {
    match class {
        YsoClass::ClassI => hsl_to_color32(0.0, 0.75, 0.55),
        YsoClass::FlatSpectrum => hsl_to_color32(35.0, 0.85, 0.5),
        YsoClass::ClassII => hsl_to_color32(120.0, 0.6, 0.45),
        YsoClass::ClassIII => hsl_to_color32(220.0, 0.75, 0.6),
        YsoClass::NotClassified => Color32::GRAY,
    }
}
