use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::sed::band::{Band, BandConfigError, BandSet};

/// Environment variable holding the path of the band configuration file.
pub const CONFIG_ENV_VAR: &str = "YSO_SED_CONFIG";

// ---------------------------------------------------------------------------
// TOML layout
// ---------------------------------------------------------------------------

/// Band overrides read from a TOML file:
///
/// ```toml
/// [bands.w3]
/// wavelength_um = 11.56
/// zero_point_jy = 31.674
/// ```
///
/// Bands that are not mentioned keep their WISE defaults.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SedConfig {
    #[serde(default)]
    pub bands: BTreeMap<String, BandOverride>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BandOverride {
    pub wavelength_um: Option<f64>,
    pub zero_point_jy: Option<f64>,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("reading config file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("parsing config file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("invalid band configuration: {0}")]
    Bands(#[from] BandConfigError),
}

impl SedConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Apply the overrides on top of the WISE defaults and validate.
    pub fn band_set(&self) -> Result<BandSet, ConfigError> {
        let mut specs = *BandSet::wise().specs();
        for (key, over) in &self.bands {
            let band: Band = key.parse()?;
            let spec = &mut specs[band.index()];
            if let Some(wavelength_um) = over.wavelength_um {
                spec.wavelength_um = wavelength_um;
            }
            if let Some(zero_point_jy) = over.zero_point_jy {
                spec.zero_point_jy = zero_point_jy;
            }
        }
        Ok(BandSet::new(specs)?)
    }
}

/// Resolve the band set for a run: the given file, else the file named by
/// [`CONFIG_ENV_VAR`], else the WISE defaults.
pub fn resolve_band_set(path: Option<&Path>) -> Result<BandSet, ConfigError> {
    let from_env = std::env::var_os(CONFIG_ENV_VAR).map(PathBuf::from);
    match path.map(Path::to_path_buf).or(from_env) {
        Some(path) => {
            log::info!("Loading band configuration from {}", path.display());
            SedConfig::load(&path)?.band_set()
        }
        None => Ok(BandSet::wise()),
    }
}
