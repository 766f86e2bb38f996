use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use arrow::array::{ArrayRef, Float64Array, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;
use serde::Serialize;

use yso_sed::data::loader::{load_file, LABEL_COLUMN};
use yso_sed::report::summary_line;
use yso_sed::sed::band::{Band, BandSet, BAND_COUNT};
use yso_sed::sed::pipeline::Pipeline;

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    fn uniform(&mut self, lo: f64, hi: f64) -> f64 {
        lo + (hi - lo) * self.next_f64()
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

/// Magnitudes of a power-law SED with λF_λ ∝ λ^α, normalised to `w1_mag`.
///
/// F_ν = λF_λ · λ / c, so F_ν scales as λ^(α+1).
fn power_law_magnitudes(bands: &BandSet, alpha: f64, w1_mag: f64) -> [f64; BAND_COUNT] {
    let w1 = bands.spec(Band::W1);
    let f_nu_w1 = w1.zero_point_jy * 10f64.powf(-0.4 * w1_mag);
    bands.specs().map(|spec| {
        let f_nu = f_nu_w1 * (spec.wavelength_um / w1.wavelength_um).powf(alpha + 1.0);
        -2.5 * (f_nu / spec.zero_point_jy).log10()
    })
}

/// AllWISE-style designation, e.g. `J053512.34-052318.9`.
fn designation(rng: &mut SimpleRng) -> String {
    let ra_s = rng.uniform(0.0, 86400.0);
    let dec = rng.uniform(-89.0, 89.0);
    let sign = if dec < 0.0 { '-' } else { '+' };
    let dec_s = dec.abs() * 3600.0;
    format!(
        "J{:02}{:02}{:05.2}{sign}{:02}{:02}{:04.1}",
        (ra_s / 3600.0) as u32,
        ((ra_s % 3600.0) / 60.0) as u32,
        ra_s % 60.0,
        (dec_s / 3600.0) as u32,
        ((dec_s % 3600.0) / 60.0) as u32,
        dec_s % 60.0,
    )
}

#[derive(Serialize)]
struct SampleRow {
    designation: String,
    w1mpro: Option<f64>,
    w2mpro: Option<f64>,
    w3mpro: Option<f64>,
    w4mpro: Option<f64>,
}

fn main() -> Result<()> {
    env_logger::init();
    let mut rng = SimpleRng::new(42);
    let bands = BandSet::wise();

    // Spectral-index ranges well inside each class.
    let populations = [
        ("Class I", 0.5, 1.5),
        ("Flat Spectrum", -0.2, 0.2),
        ("Class II", -1.4, -0.5),
        ("Class III", -2.8, -1.8),
    ];
    let per_class = 12;

    let mut rows: Vec<SampleRow> = Vec::new();
    for (name, alpha_lo, alpha_hi) in populations {
        for _ in 0..per_class {
            let alpha = rng.uniform(alpha_lo, alpha_hi);
            let w1_mag = rng.uniform(7.0, 13.0);
            let mut mags: [Option<f64>; BAND_COUNT] = power_law_magnitudes(&bands, alpha, w1_mag)
                .map(|m| Some(m + rng.gauss(0.0, 0.02)));

            // Faint sources drop out of the long-wavelength bands.
            if mags[3].is_some_and(|m| m > 9.0) && rng.next_f64() < 0.15 {
                mags[3] = None;
            }
            if rng.next_f64() < 0.05 {
                mags[1] = None;
            }

            log::debug!("{name}: alpha={alpha:.3} mags={mags:?}");
            let [w1mpro, w2mpro, w3mpro, w4mpro] = mags;
            rows.push(SampleRow {
                designation: designation(&mut rng),
                w1mpro,
                w2mpro,
                w3mpro,
                w4mpro,
            });
        }
    }

    // ---- Parquet ----
    let mut columns: Vec<ArrayRef> = vec![Arc::new(StringArray::from(
        rows.iter().map(|r| r.designation.as_str()).collect::<Vec<_>>(),
    ))];
    let mut fields = vec![Field::new(LABEL_COLUMN, DataType::Utf8, false)];
    for band in Band::ALL {
        let values: Vec<Option<f64>> = rows
            .iter()
            .map(|r| match band {
                Band::W1 => r.w1mpro,
                Band::W2 => r.w2mpro,
                Band::W3 => r.w3mpro,
                Band::W4 => r.w4mpro,
            })
            .collect();
        columns.push(Arc::new(Float64Array::from(values)));
        fields.push(Field::new(band.catalog_column(), DataType::Float64, true));
    }
    let schema = Arc::new(Schema::new(fields));
    let batch =
        RecordBatch::try_new(schema.clone(), columns).context("Failed to create RecordBatch")?;

    let parquet_path = "sample_photometry.parquet";
    let file = std::fs::File::create(parquet_path).context("Failed to create output file")?;
    let mut writer = ArrowWriter::try_new(file, schema, None).context("Failed to create writer")?;
    writer.write(&batch).context("Failed to write batch")?;
    writer.close().context("Failed to close writer")?;

    // ---- JSON ----
    let json_path = "sample_photometry.json";
    let file = std::fs::File::create(json_path).context("Failed to create output file")?;
    serde_json::to_writer_pretty(std::io::BufWriter::new(file), &rows)
        .context("Failed to write JSON")?;

    // ---- CSV ----
    let csv_path = "sample_photometry.csv";
    let mut wtr = csv::Writer::from_path(csv_path).context("Failed to create output file")?;
    for row in &rows {
        wtr.serialize(row).context("Failed to write CSV row")?;
    }
    wtr.flush().context("Failed to flush CSV")?;

    println!(
        "Wrote {} sources to {parquet_path}, {json_path} and {csv_path}",
        rows.len()
    );

    let catalog = load_file(Path::new(parquet_path))?;
    let results = Pipeline::new(bands).run(&catalog.records);
    println!("{}", summary_line(&results));
    Ok(())
}
