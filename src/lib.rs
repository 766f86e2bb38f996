//! Classify young stellar objects from WISE four-band photometry.
//!
//! Catalog magnitudes are converted to flux densities, projected onto a
//! log-log spectral energy distribution, reduced to the infrared spectral
//! index α and mapped to an evolutionary class.
//!
//! ```
//! use yso_sed::data::model::PhotometryRecord;
//! use yso_sed::sed::classify::YsoClass;
//! use yso_sed::sed::pipeline::Pipeline;
//!
//! let records = vec![PhotometryRecord::from_bands(
//!     "J053512.34-052318.9",
//!     [Some(8.0), Some(7.5), Some(6.0), Some(4.0)],
//! )];
//! let results = Pipeline::default().run(&records);
//! assert_eq!(results[0].class, YsoClass::ClassII);
//! ```

pub mod config;
pub mod data;
pub mod report;
pub mod sed;
