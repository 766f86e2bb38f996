use serde::Serialize;

use super::band::{Band, BandSpec};

/// 1 Jy in erg s⁻¹ cm⁻² Hz⁻¹.
pub const JANSKY_TO_CGS: f64 = 1e-23;
/// Speed of light in cm s⁻¹.
pub const SPEED_OF_LIGHT_CGS: f64 = 2.99792458e10;
/// Micrometres to centimetres.
pub const MICRON_TO_CM: f64 = 1e-4;

// ---------------------------------------------------------------------------
// FluxPoint – magnitude converted to physical flux densities
// ---------------------------------------------------------------------------

/// Flux densities of one source in one band.
///
/// Every field is `None` when the band has no detection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FluxPoint {
    pub band: Band,
    pub magnitude: Option<f64>,
    /// F_ν in Jansky.
    pub f_nu_jy: Option<f64>,
    /// F_λ in erg s⁻¹ cm⁻² cm⁻¹.
    pub f_lambda_cgs: Option<f64>,
    /// λ·F_λ in erg s⁻¹ cm⁻².
    pub lambda_f_lambda_cgs: Option<f64>,
}

/// One point of the log-log SED: `log10(λ)` against `log10(λF_λ)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SedPoint {
    pub band: Band,
    pub log_wavelength_cm: f64,
    pub log_lambda_f_lambda: Option<f64>,
}

/// Convert a catalog magnitude into flux densities for `spec`.
pub fn convert(magnitude: Option<f64>, spec: &BandSpec) -> FluxPoint {
    let magnitude = magnitude.filter(|m| m.is_finite());
    let lambda_cm = spec.wavelength_um * MICRON_TO_CM;

    let f_nu_jy = magnitude.map(|m| spec.zero_point_jy * 10f64.powf(-0.4 * m));
    let f_lambda_cgs =
        f_nu_jy.map(|f_nu| f_nu * JANSKY_TO_CGS * SPEED_OF_LIGHT_CGS / lambda_cm.powi(2));
    let lambda_f_lambda_cgs = f_lambda_cgs.map(|f_lambda| f_lambda * lambda_cm);

    FluxPoint {
        band: spec.band,
        magnitude,
        f_nu_jy,
        f_lambda_cgs,
        lambda_f_lambda_cgs,
    }
}

/// Project a flux point onto log-log SED axes.
///
/// The ordinate is undefined unless `λF_λ` is a positive finite number.
pub fn sed_point(flux: &FluxPoint, spec: &BandSpec) -> SedPoint {
    SedPoint {
        band: spec.band,
        log_wavelength_cm: (spec.wavelength_um * MICRON_TO_CM).log10(),
        log_lambda_f_lambda: flux
            .lambda_f_lambda_cgs
            .filter(|v| v.is_finite() && *v > 0.0)
            .map(f64::log10),
    }
}
