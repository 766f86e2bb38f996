use std::fmt;

use serde::{Deserialize, Serialize};

/// Lower bound (exclusive) of α for Class I sources.
pub const CLASS_I_MIN_ALPHA: f64 = 0.3;
/// Lower bound (exclusive) of α for flat-spectrum sources.
pub const FLAT_SPECTRUM_MIN_ALPHA: f64 = -0.3;
/// Lower bound (exclusive) of α for Class II sources. Anything at or below is Class III.
pub const CLASS_II_MIN_ALPHA: f64 = -1.6;

/// Evolutionary stage of a young stellar object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum YsoClass {
    #[serde(rename = "Class I")]
    ClassI,
    #[serde(rename = "Flat Spectrum")]
    FlatSpectrum,
    #[serde(rename = "Class II")]
    ClassII,
    #[serde(rename = "Class III")]
    ClassIII,
    #[serde(rename = "Not Classified")]
    NotClassified,
}

impl YsoClass {
    pub const ALL: [YsoClass; 5] = [
        YsoClass::ClassI,
        YsoClass::FlatSpectrum,
        YsoClass::ClassII,
        YsoClass::ClassIII,
        YsoClass::NotClassified,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            YsoClass::ClassI => "Class I",
            YsoClass::FlatSpectrum => "Flat Spectrum",
            YsoClass::ClassII => "Class II",
            YsoClass::ClassIII => "Class III",
            YsoClass::NotClassified => "Not Classified",
        }
    }
}

impl fmt::Display for YsoClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Map a spectral index to its YSO class.
///
/// Each interval is open below and closed above, so every real α lands in
/// exactly one class. An undefined index is `NotClassified`.
pub fn classify(alpha: Option<f64>) -> YsoClass {
    match alpha {
        Some(a) if a > CLASS_I_MIN_ALPHA => YsoClass::ClassI,
        Some(a) if a > FLAT_SPECTRUM_MIN_ALPHA => YsoClass::FlatSpectrum,
        Some(a) if a > CLASS_II_MIN_ALPHA => YsoClass::ClassII,
        Some(a) if a <= CLASS_II_MIN_ALPHA => YsoClass::ClassIII,
        // None, NaN
        _ => YsoClass::NotClassified,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thresholds() {
        assert_eq!(CLASS_I_MIN_ALPHA, 0.3);
        assert_eq!(FLAT_SPECTRUM_MIN_ALPHA, -0.3);
        assert_eq!(CLASS_II_MIN_ALPHA, -1.6);
    }

    #[test]
    fn boundaries_are_exact() {
        assert_eq!(classify(Some(0.3)), YsoClass::FlatSpectrum);
        assert_eq!(classify(Some(0.30000001)), YsoClass::ClassI);
        assert_eq!(classify(Some(-0.3)), YsoClass::ClassII);
        assert_eq!(classify(Some(-0.29999999)), YsoClass::FlatSpectrum);
        assert_eq!(classify(Some(-1.6)), YsoClass::ClassIII);
        assert_eq!(classify(Some(-1.59999999)), YsoClass::ClassII);
    }

    #[test]
    fn whole_line_is_covered() {
        assert_eq!(classify(Some(f64::INFINITY)), YsoClass::ClassI);
        assert_eq!(classify(Some(2.0)), YsoClass::ClassI);
        assert_eq!(classify(Some(0.0)), YsoClass::FlatSpectrum);
        assert_eq!(classify(Some(-1.0)), YsoClass::ClassII);
        assert_eq!(classify(Some(-3.0)), YsoClass::ClassIII);
        assert_eq!(classify(Some(f64::NEG_INFINITY)), YsoClass::ClassIII);
    }

    #[test]
    fn undefined_is_not_classified() {
        assert_eq!(classify(None), YsoClass::NotClassified);
        assert_eq!(classify(Some(f64::NAN)), YsoClass::NotClassified);
    }

    #[test]
    fn display_names() {
        assert_eq!(YsoClass::FlatSpectrum.to_string(), "Flat Spectrum");
        assert_eq!(
            serde_json::to_string(&YsoClass::NotClassified).unwrap(),
            "\"Not Classified\""
        );
    }
}
