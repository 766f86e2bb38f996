//! SED core: magnitudes in, YSO classes out.
//!
//! Architecture:
//! ```text
//!  PhotometryRecord  (label, band → magnitude)
//!        │
//!        ▼
//!   ┌──────────┐
//!   │   flux    │  magnitude → F_ν, F_λ, λF_λ  (per band)
//!   └──────────┘
//!        │
//!        ▼
//!   ┌──────────┐
//!   │   index   │  log λ vs log λF_λ → spectral index α
//!   └──────────┘
//!        │
//!        ▼
//!   ┌──────────┐
//!   │ classify  │  α → Class I / Flat / II / III
//!   └──────────┘
//! ```
//!
//! [`pipeline::Pipeline`] runs the three stages over a batch of sources.

pub mod band;
pub mod classify;
pub mod flux;
pub mod index;
pub mod pipeline;
