use std::collections::BTreeMap;

use rayon::prelude::*;
use serde::Serialize;

use super::band::{BandSet, BAND_COUNT};
use super::classify::{classify, YsoClass};
use super::flux::{convert, sed_point, FluxPoint, SedPoint};
use super::index::spectral_index;
use crate::data::model::PhotometryRecord;

/// Outcome of classifying one source.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassificationResult {
    pub label: String,
    pub spectral_index: Option<f64>,
    pub class: YsoClass,
    pub flux: [FluxPoint; BAND_COUNT],
    pub sed: [SedPoint; BAND_COUNT],
}

/// Runs magnitude → flux → spectral index → class for batches of sources.
#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    bands: BandSet,
}

impl Pipeline {
    pub fn new(bands: BandSet) -> Self {
        Pipeline { bands }
    }

    pub fn bands(&self) -> &BandSet {
        &self.bands
    }

    /// Classify a single source.
    pub fn classify_record(&self, record: &PhotometryRecord) -> ClassificationResult {
        let specs = *self.bands.specs();
        let flux = specs.map(|spec| convert(record.magnitude(spec.band), &spec));
        let sed: [SedPoint; BAND_COUNT] =
            std::array::from_fn(|i| sed_point(&flux[i], &specs[i]));

        let spectral_index = spectral_index(&sed);
        let class = classify(spectral_index);
        if class == YsoClass::NotClassified {
            log::debug!(
                "{}: no spectral index ({} of {BAND_COUNT} bands detected)",
                record.label(),
                record.detections()
            );
        }

        ClassificationResult {
            label: record.label().to_string(),
            spectral_index,
            class,
            flux,
            sed,
        }
    }

    /// Classify a batch in parallel. Results keep the input order.
    pub fn run(&self, records: &[PhotometryRecord]) -> Vec<ClassificationResult> {
        let results: Vec<ClassificationResult> = records
            .par_iter()
            .map(|record| self.classify_record(record))
            .collect();
        log_summary(&results);
        results
    }

    /// Single-threaded equivalent of [`Pipeline::run`].
    pub fn run_sequential(&self, records: &[PhotometryRecord]) -> Vec<ClassificationResult> {
        let results: Vec<ClassificationResult> = records
            .iter()
            .map(|record| self.classify_record(record))
            .collect();
        log_summary(&results);
        results
    }
}

/// Number of results per class. Every class is present, possibly with zero.
pub fn class_counts(results: &[ClassificationResult]) -> BTreeMap<YsoClass, usize> {
    let mut counts: BTreeMap<YsoClass, usize> =
        YsoClass::ALL.into_iter().map(|c| (c, 0)).collect();
    for r in results {
        *counts.entry(r.class).or_default() += 1;
    }
    counts
}

fn log_summary(results: &[ClassificationResult]) {
    let counts = class_counts(results);
    log::info!(
        "Classified {} sources: {}",
        results.len(),
        counts
            .iter()
            .map(|(class, n)| format!("{class}={n}"))
            .collect::<Vec<_>>()
            .join(", ")
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sed::band::{Band, BandSpec};
    use approx::assert_relative_eq;

    fn scenario() -> Vec<PhotometryRecord> {
        vec![
            PhotometryRecord::from_bands("src-a", [Some(8.0), Some(7.5), Some(6.0), Some(4.0)]),
            PhotometryRecord::from_bands("src-b", [Some(9.0), Some(9.2), Some(9.5), Some(9.8)]),
        ]
    }

    #[test]
    fn two_source_regression() {
        let results = Pipeline::default().run(&scenario());
        assert_eq!(results.len(), 2);

        assert_eq!(results[0].label, "src-a");
        assert_relative_eq!(
            results[0].spectral_index.unwrap(),
            -0.9609451550169955,
            epsilon = 1e-9
        );
        assert_eq!(results[0].class, YsoClass::ClassII);

        assert_eq!(results[1].label, "src-b");
        assert_relative_eq!(
            results[1].spectral_index.unwrap(),
            -3.328556925098985,
            epsilon = 1e-9
        );
        assert_eq!(results[1].class, YsoClass::ClassIII);
    }

    #[test]
    fn sed_points_cover_all_bands() {
        let result = Pipeline::default().classify_record(&scenario()[0]);
        for (i, band) in Band::ALL.into_iter().enumerate() {
            assert_eq!(result.flux[i].band, band);
            assert_eq!(result.sed[i].band, band);
            assert!(result.sed[i].log_lambda_f_lambda.is_some());
        }
        assert_relative_eq!(result.sed[3].log_lambda_f_lambda.unwrap(), -10.543213916652967, epsilon = 1e-9);
    }

    #[test]
    fn missing_endpoint_band_is_not_classified() {
        let pipeline = Pipeline::default();
        for missing in [0, 3] {
            let mut mags = [Some(8.0), Some(7.5), Some(6.0), Some(4.0)];
            mags[missing] = None;
            let result = pipeline.classify_record(&PhotometryRecord::from_bands("x", mags));
            assert_eq!(result.spectral_index, None);
            assert_eq!(result.class, YsoClass::NotClassified);
            assert_eq!(result.sed[missing].log_lambda_f_lambda, None);
        }
    }

    #[test]
    fn middle_bands_do_not_affect_index() {
        let pipeline = Pipeline::default();
        let full = pipeline.classify_record(&scenario()[0]);
        let gaps = pipeline.classify_record(&PhotometryRecord::from_bands(
            "src-a",
            [Some(8.0), None, None, Some(4.0)],
        ));
        assert_eq!(full.spectral_index, gaps.spectral_index);
        assert_eq!(full.class, gaps.class);
    }

    #[test]
    fn bad_record_does_not_abort_batch() {
        let mut records = scenario();
        records.insert(1, PhotometryRecord::from_bands("empty", [None; 4]));
        let results = Pipeline::default().run(&records);
        let labels: Vec<&str> = results.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(labels, ["src-a", "empty", "src-b"]);
        assert_eq!(results[1].class, YsoClass::NotClassified);
        assert_eq!(results[0].class, YsoClass::ClassII);
        assert_eq!(results[2].class, YsoClass::ClassIII);
    }

    #[test]
    fn parallel_matches_sequential_and_keeps_order() {
        let records: Vec<PhotometryRecord> = (0..500)
            .map(|i| {
                let m = 6.0 + (i % 37) as f64 * 0.1;
                let slope = (i % 11) as f64 * 0.6 - 3.0;
                PhotometryRecord::from_bands(
                    format!("src-{i}"),
                    [Some(m), Some(m - 0.1 * slope), Some(m - 0.5 * slope), Some(m - slope)],
                )
            })
            .collect();

        let pipeline = Pipeline::default();
        let parallel = pipeline.run(&records);
        let sequential = pipeline.run_sequential(&records);
        assert_eq!(parallel, sequential);
        for (record, result) in records.iter().zip(&parallel) {
            assert_eq!(record.label(), result.label);
        }
    }

    #[test]
    fn custom_band_set_is_used() {
        let mut specs = *BandSet::wise().specs();
        specs[3] = BandSpec {
            band: Band::W4,
            wavelength_um: 22.88,
            zero_point_jy: 8.284,
        };
        let pipeline = Pipeline::new(BandSet::new(specs).unwrap());
        let result = pipeline.classify_record(&scenario()[0]);
        assert_relative_eq!(
            result.sed[3].log_wavelength_cm,
            (22.88e-4f64).log10(),
            epsilon = 1e-12
        );
        assert_ne!(
            result.spectral_index,
            Pipeline::default().classify_record(&scenario()[0]).spectral_index
        );
    }

    #[test]
    fn counts_include_every_class() {
        let results = Pipeline::default().run(&scenario());
        let counts = class_counts(&results);
        assert_eq!(counts.len(), YsoClass::ALL.len());
        assert_eq!(counts[&YsoClass::ClassII], 1);
        assert_eq!(counts[&YsoClass::ClassIII], 1);
        assert_eq!(counts[&YsoClass::ClassI], 0);
    }
}
