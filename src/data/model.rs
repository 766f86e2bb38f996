use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::sed::band::{Band, BAND_COUNT};

// ---------------------------------------------------------------------------
// PhotometryRecord – one catalog source
// ---------------------------------------------------------------------------

/// Observed magnitudes of one source. A band without an entry is a
/// non-detection.
#[derive(Debug, Clone, PartialEq)]
pub struct PhotometryRecord {
    label: String,
    magnitudes: BTreeMap<Band, f64>,
}

impl PhotometryRecord {
    /// Build a record from `(band, magnitude)` pairs.
    ///
    /// Non-finite magnitudes are dropped, so NaN placeholders written by
    /// catalog tools read back as non-detections.
    pub fn new(
        label: impl Into<String>,
        magnitudes: impl IntoIterator<Item = (Band, f64)>,
    ) -> Self {
        PhotometryRecord {
            label: label.into(),
            magnitudes: magnitudes
                .into_iter()
                .filter(|(_, m)| m.is_finite())
                .collect(),
        }
    }

    /// Build a record with a magnitude (or non-detection) for every band, in
    /// band order.
    pub fn from_bands(label: impl Into<String>, magnitudes: [Option<f64>; BAND_COUNT]) -> Self {
        Self::new(
            label,
            Band::ALL
                .into_iter()
                .zip(magnitudes)
                .filter_map(|(band, m)| m.map(|m| (band, m))),
        )
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn magnitude(&self, band: Band) -> Option<f64> {
        self.magnitudes.get(&band).copied()
    }

    /// Number of bands with a detection.
    pub fn detections(&self) -> usize {
        self.magnitudes.len()
    }
}

// ---------------------------------------------------------------------------
// PhotometryCatalog – the complete loaded table
// ---------------------------------------------------------------------------

/// All sources read from one catalog file, in file order.
#[derive(Debug, Clone)]
pub struct PhotometryCatalog {
    pub records: Vec<PhotometryRecord>,
    /// File the catalog was read from, if any.
    pub source: Option<PathBuf>,
}

impl PhotometryCatalog {
    pub fn new(records: Vec<PhotometryRecord>, source: Option<PathBuf>) -> Self {
        PhotometryCatalog { records, source }
    }

    /// Number of sources.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_finite_magnitudes_are_non_detections() {
        let rec = PhotometryRecord::new(
            "J000000.00+000000.0",
            [(Band::W1, 8.0), (Band::W2, f64::NAN), (Band::W4, f64::INFINITY)],
        );
        assert_eq!(rec.magnitude(Band::W1), Some(8.0));
        assert_eq!(rec.magnitude(Band::W2), None);
        assert_eq!(rec.magnitude(Band::W3), None);
        assert_eq!(rec.magnitude(Band::W4), None);
        assert_eq!(rec.detections(), 1);
    }

    #[test]
    fn from_bands_keeps_order() {
        let rec = PhotometryRecord::from_bands("src", [Some(1.0), None, Some(3.0), Some(4.0)]);
        assert_eq!(rec.label(), "src");
        assert_eq!(rec.magnitude(Band::W1), Some(1.0));
        assert_eq!(rec.magnitude(Band::W2), None);
        assert_eq!(rec.magnitude(Band::W3), Some(3.0));
        assert_eq!(rec.magnitude(Band::W4), Some(4.0));
    }
}
