use std::path::Path;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use arrow::array::{Array, Float32Array, Float64Array, LargeStringArray, StringArray};
use arrow::datatypes::DataType;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use serde::Deserialize;

use super::model::{PhotometryCatalog, PhotometryRecord};
use crate::sed::band::Band;

/// Column holding the source name.
pub const LABEL_COLUMN: &str = "designation";

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a photometry catalog from a file.  Dispatch by extension.
///
/// Every format uses AllWISE column names: `designation` plus the
/// profile-fit magnitudes `w1mpro` … `w4mpro`. A null, empty or NaN
/// magnitude is a non-detection; other columns are ignored.
///
/// Supported formats:
/// * `.parquet` – as exported by Pandas, Polars or astropy
/// * `.json`    – `[{ "designation": "...", "w1mpro": 8.1, ... }, ...]`
/// * `.csv`     – header row with the column names above
pub fn load_file(path: &Path) -> Result<PhotometryCatalog> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let records = match ext.as_str() {
        "parquet" | "pq" => load_parquet(path)?,
        "json" => load_json(path)?,
        "csv" => load_csv(path)?,
        other => bail!("Unsupported file extension: .{other}"),
    };

    log::info!("Loaded {} sources from {}", records.len(), path.display());
    Ok(PhotometryCatalog::new(records, Some(path.to_path_buf())))
}

// ---------------------------------------------------------------------------
// CatalogEntry – one row as the catalog service delivers it
// ---------------------------------------------------------------------------

/// A catalog row before validation.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogEntry {
    #[serde(alias = "label")]
    pub designation: String,
    pub w1mpro: Option<f64>,
    pub w2mpro: Option<f64>,
    pub w3mpro: Option<f64>,
    pub w4mpro: Option<f64>,
}

impl CatalogEntry {
    /// Validate the row and turn it into a [`PhotometryRecord`].
    pub fn into_record(self, row: usize) -> Result<PhotometryRecord> {
        let label = self.designation.trim();
        if label.is_empty() {
            bail!("Row {row}: empty '{LABEL_COLUMN}'");
        }
        Ok(PhotometryRecord::from_bands(
            label,
            [self.w1mpro, self.w2mpro, self.w3mpro, self.w4mpro],
        ))
    }
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Expected JSON schema (records-oriented, `df.to_json(orient='records')`):
///
/// ```json
/// [
///   { "designation": "J053512.34-052318.9", "w1mpro": 8.1, "w2mpro": 7.4,
///     "w3mpro": 5.9, "w4mpro": null },
///   ...
/// ]
/// ```
fn load_json(path: &Path) -> Result<Vec<PhotometryRecord>> {
    let text = std::fs::read_to_string(path).context("reading JSON file")?;
    let entries: Vec<CatalogEntry> = serde_json::from_str(&text).context("parsing JSON")?;

    entries
        .into_iter()
        .enumerate()
        .map(|(i, entry)| entry.into_record(i))
        .collect()
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// CSV layout: header row with column names, one source per row. Empty
/// magnitude cells are non-detections.
fn load_csv(path: &Path) -> Result<Vec<PhotometryRecord>> {
    let mut reader = csv::Reader::from_path(path).context("opening CSV")?;
    let headers = reader.headers().context("reading CSV headers")?.clone();

    if !headers.iter().any(|h| h == LABEL_COLUMN || h == "label") {
        bail!("CSV missing '{LABEL_COLUMN}' column");
    }
    for band in Band::ALL {
        if !headers.iter().any(|h| h == band.catalog_column()) {
            log::warn!(
                "CSV has no '{}' column; treating {band} as undetected",
                band.catalog_column()
            );
        }
    }

    let mut records = Vec::new();
    for (row_no, result) in reader.deserialize::<CatalogEntry>().enumerate() {
        let entry = result.with_context(|| format!("CSV row {row_no}"))?;
        records.push(entry.into_record(row_no)?);
    }
    Ok(records)
}

// ---------------------------------------------------------------------------
// Parquet loader
// ---------------------------------------------------------------------------

/// Load a Parquet photometry table.
///
/// Expected schema:
/// - `designation`: Utf8 or LargeUtf8
/// - `w1mpro` … `w4mpro`: nullable Float64 or Float32
/// - Any other columns are ignored
fn load_parquet(path: &Path) -> Result<Vec<PhotometryRecord>> {
    let file = std::fs::File::open(path).context("opening parquet file")?;
    let builder =
        ParquetRecordBatchReaderBuilder::try_new(file).context("reading parquet metadata")?;
    let reader = builder.build().context("building parquet reader")?;

    let mut records = Vec::new();

    for batch_result in reader {
        let batch = batch_result.context("reading parquet record batch")?;
        let schema = batch.schema();
        let n_rows = batch.num_rows();

        let label_idx = schema
            .index_of(LABEL_COLUMN)
            .map_err(|_| anyhow::anyhow!("Parquet file missing '{LABEL_COLUMN}' column"))?;
        let label_col = batch.column(label_idx);

        let band_cols: Vec<(Band, Option<&Arc<dyn Array>>)> = Band::ALL
            .into_iter()
            .map(|band| {
                let col = schema
                    .index_of(band.catalog_column())
                    .ok()
                    .map(|i| batch.column(i));
                if col.is_none() {
                    log::warn!(
                        "Parquet file has no '{}' column; treating {band} as undetected",
                        band.catalog_column()
                    );
                }
                (band, col)
            })
            .collect();

        for row in 0..n_rows {
            let row_no = records.len();
            let label = extract_label(label_col, row)
                .with_context(|| format!("Row {row_no}: failed to read '{LABEL_COLUMN}'"))?;

            let mut entry = CatalogEntry {
                designation: label,
                ..CatalogEntry::default()
            };
            for (band, col) in &band_cols {
                let Some(col) = col else {
                    continue;
                };
                let mag = extract_magnitude(col, row).with_context(|| {
                    format!("Row {row_no}: failed to read '{}'", band.catalog_column())
                })?;
                match band {
                    Band::W1 => entry.w1mpro = mag,
                    Band::W2 => entry.w2mpro = mag,
                    Band::W3 => entry.w3mpro = mag,
                    Band::W4 => entry.w4mpro = mag,
                }
            }

            records.push(entry.into_record(row_no)?);
        }
    }

    Ok(records)
}

// -- Parquet / Arrow helpers --

/// Read a string cell. Null becomes an empty string, which validation rejects.
fn extract_label(col: &Arc<dyn Array>, row: usize) -> Result<String> {
    if col.is_null(row) {
        return Ok(String::new());
    }
    match col.data_type() {
        DataType::Utf8 => {
            let arr = col
                .as_any()
                .downcast_ref::<StringArray>()
                .context("expected StringArray")?;
            Ok(arr.value(row).to_string())
        }
        DataType::LargeUtf8 => {
            let arr = col
                .as_any()
                .downcast_ref::<LargeStringArray>()
                .context("expected LargeStringArray")?;
            Ok(arr.value(row).to_string())
        }
        other => bail!("Expected a string column, got {other:?}"),
    }
}

/// Read a magnitude cell. Null is a non-detection.
fn extract_magnitude(col: &Arc<dyn Array>, row: usize) -> Result<Option<f64>> {
    if col.is_null(row) {
        return Ok(None);
    }
    match col.data_type() {
        DataType::Float64 => {
            let arr = col
                .as_any()
                .downcast_ref::<Float64Array>()
                .context("expected Float64Array")?;
            Ok(Some(arr.value(row)))
        }
        DataType::Float32 => {
            let arr = col
                .as_any()
                .downcast_ref::<Float32Array>()
                .context("expected Float32Array")?;
            Ok(Some(arr.value(row) as f64))
        }
        other => bail!("Expected Float64 or Float32 column, got {other:?}"),
    }
}
