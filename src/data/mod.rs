//! Data layer: catalog records, loading, and result filtering.
//!
//! Architecture:
//! ```text
//!  .parquet / .json / .csv
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  loader   │  parse file → CatalogEntry → PhotometryCatalog
//!   └──────────┘
//!        │
//!        ▼
//!   ┌──────────────────┐
//!   │ PhotometryCatalog │  Vec<PhotometryRecord>, file order
//!   └──────────────────┘
//!        │   (sed::pipeline)
//!        ▼
//!   ┌──────────┐
//!   │  filter   │  selected classes → visible result indices
//!   └──────────┘
//! ```

pub mod loader;
pub mod model;
pub mod filter;
