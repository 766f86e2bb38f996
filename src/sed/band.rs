use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Band – one of the four WISE photometric channels
// ---------------------------------------------------------------------------

/// A WISE photometric band, ordered from shortest to longest wavelength.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Band {
    W1,
    W2,
    W3,
    W4,
}

/// Number of bands in every SED.
pub const BAND_COUNT: usize = 4;

impl Band {
    /// All bands in wavelength order.
    pub const ALL: [Band; BAND_COUNT] = [Band::W1, Band::W2, Band::W3, Band::W4];

    /// Central wavelength in micrometres.
    pub const fn wavelength_um(self) -> f64 {
        match self {
            Band::W1 => 3.4,
            Band::W2 => 4.6,
            Band::W3 => 12.0,
            Band::W4 => 22.0,
        }
    }

    /// Flux density in Jansky of a magnitude-zero source.
    pub const fn zero_point_jy(self) -> f64 {
        match self {
            Band::W1 => 309.54,
            Band::W2 => 171.79,
            Band::W3 => 31.676,
            Band::W4 => 8.3635,
        }
    }

    /// Short identifier, e.g. `"w1"`.
    pub const fn id(self) -> &'static str {
        match self {
            Band::W1 => "w1",
            Band::W2 => "w2",
            Band::W3 => "w3",
            Band::W4 => "w4",
        }
    }

    /// Profile-fit magnitude column in AllWISE source tables.
    pub const fn catalog_column(self) -> &'static str {
        match self {
            Band::W1 => "w1mpro",
            Band::W2 => "w2mpro",
            Band::W3 => "w3mpro",
            Band::W4 => "w4mpro",
        }
    }

    /// Position of the band in [`Band::ALL`].
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Band {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Band {
    type Err = BandConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Band::ALL
            .into_iter()
            .find(|b| b.id().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| BandConfigError::UnknownBand(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// BandSpec / BandSet – the constants in effect for a run
// ---------------------------------------------------------------------------

/// Constants of one band as used by the conversion stage.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BandSpec {
    pub band: Band,
    pub wavelength_um: f64,
    pub zero_point_jy: f64,
}

impl BandSpec {
    /// The built-in WISE constants for `band`.
    pub const fn wise(band: Band) -> Self {
        BandSpec {
            band,
            wavelength_um: band.wavelength_um(),
            zero_point_jy: band.zero_point_jy(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BandConfigError {
    #[error("unknown band '{0}' (expected one of w1, w2, w3, w4)")]
    UnknownBand(String),
    #[error("band {band} is in slot {slot}; bands must be listed in w1..w4 order")]
    OutOfOrder { band: Band, slot: usize },
    #[error("band {band}: wavelength must be a positive finite number of micrometres, got {value}")]
    InvalidWavelength { band: Band, value: f64 },
    #[error("band {band}: zero point must be a positive finite flux in Jy, got {value}")]
    InvalidZeroPoint { band: Band, value: f64 },
    #[error("band {longer} ({longer_um} um) must have a longer wavelength than {shorter} ({shorter_um} um)")]
    NotIncreasing {
        shorter: Band,
        shorter_um: f64,
        longer: Band,
        longer_um: f64,
    },
}

/// Validated constants for all four bands, in wavelength order.
///
/// Wavelengths are strictly increasing, so the first band is the shortest,
/// the last is the longest, and the spectral-index baseline is never zero.
#[derive(Debug, Clone, PartialEq)]
pub struct BandSet {
    specs: [BandSpec; BAND_COUNT],
}

impl BandSet {
    /// Validate and wrap a full set of band constants.
    pub fn new(specs: [BandSpec; BAND_COUNT]) -> Result<Self, BandConfigError> {
        for (slot, spec) in specs.iter().enumerate() {
            if spec.band.index() != slot {
                return Err(BandConfigError::OutOfOrder {
                    band: spec.band,
                    slot,
                });
            }
            if !(spec.wavelength_um.is_finite() && spec.wavelength_um > 0.0) {
                return Err(BandConfigError::InvalidWavelength {
                    band: spec.band,
                    value: spec.wavelength_um,
                });
            }
            if !(spec.zero_point_jy.is_finite() && spec.zero_point_jy > 0.0) {
                return Err(BandConfigError::InvalidZeroPoint {
                    band: spec.band,
                    value: spec.zero_point_jy,
                });
            }
        }
        for pair in specs.windows(2) {
            if pair[1].wavelength_um <= pair[0].wavelength_um {
                return Err(BandConfigError::NotIncreasing {
                    shorter: pair[0].band,
                    shorter_um: pair[0].wavelength_um,
                    longer: pair[1].band,
                    longer_um: pair[1].wavelength_um,
                });
            }
        }
        Ok(BandSet { specs })
    }

    /// The standard WISE band set.
    pub fn wise() -> Self {
        BandSet {
            specs: Band::ALL.map(BandSpec::wise),
        }
    }

    pub fn spec(&self, band: Band) -> &BandSpec {
        &self.specs[band.index()]
    }

    pub fn specs(&self) -> &[BandSpec; BAND_COUNT] {
        &self.specs
    }

    pub fn iter(&self) -> impl Iterator<Item = &BandSpec> {
        self.specs.iter()
    }
}

impl Default for BandSet {
    fn default() -> Self {
        Self::wise()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wise_set_is_valid() {
        let wise = BandSet::wise();
        assert_eq!(BandSet::new(*wise.specs()), Ok(wise.clone()));
        assert_eq!(wise.spec(Band::W1).wavelength_um, 3.4);
        assert_eq!(wise.spec(Band::W4).zero_point_jy, 8.3635);
    }

    #[test]
    fn band_order_matches_index() {
        for (i, band) in Band::ALL.into_iter().enumerate() {
            assert_eq!(band.index(), i);
        }
        assert!(Band::W1 < Band::W4);
    }

    #[test]
    fn parse_band_ids() {
        assert_eq!("w3".parse::<Band>(), Ok(Band::W3));
        assert_eq!(" W2 ".parse::<Band>(), Ok(Band::W2));
        assert!(matches!(
            "k".parse::<Band>(),
            Err(BandConfigError::UnknownBand(_))
        ));
    }

    #[test]
    fn rejects_equal_wavelengths() {
        let mut specs = *BandSet::wise().specs();
        specs[3].wavelength_um = specs[2].wavelength_um;
        let err = BandSet::new(specs).unwrap_err();
        assert!(matches!(
            err,
            BandConfigError::NotIncreasing {
                shorter: Band::W3,
                longer: Band::W4,
                ..
            }
        ));
    }

    #[test]
    fn rejects_non_positive_constants() {
        let mut specs = *BandSet::wise().specs();
        specs[0].wavelength_um = 0.0;
        assert!(matches!(
            BandSet::new(specs),
            Err(BandConfigError::InvalidWavelength { band: Band::W1, .. })
        ));

        let mut specs = *BandSet::wise().specs();
        specs[2].zero_point_jy = f64::NAN;
        assert!(matches!(
            BandSet::new(specs),
            Err(BandConfigError::InvalidZeroPoint { band: Band::W3, .. })
        ));
    }

    #[test]
    fn rejects_shuffled_bands() {
        let mut specs = *BandSet::wise().specs();
        specs.swap(1, 2);
        assert!(matches!(
            BandSet::new(specs),
            Err(BandConfigError::OutOfOrder { band: Band::W3, slot: 1 })
        ));
    }
}
