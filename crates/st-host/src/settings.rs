//! Settings file loading.
//!
//! One TOML file, one `[tally]` table mirroring `TallyConfig`. Absent keys
//! keep their defaults and unknown keys are ignored, so an old settings
//! file keeps working across versions. A missing file is simply the
//! default configuration.

use std::path::Path;

use serde::Deserialize;
use tracing::info;

use st_core::TallyConfig;

use crate::error::{HostError, Result};

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct SettingsFile {
    tally: TallyConfig,
}

/// Parse settings from TOML text.
pub fn parse_settings(text: &str) -> Result<TallyConfig> {
    let file: SettingsFile =
        toml::from_str(text).map_err(|e| HostError::InvalidSettings(e.to_string()))?;
    Ok(file.tally)
}

/// Load settings from `path`; a missing file yields the defaults.
pub fn load_settings(path: &Path) -> Result<TallyConfig> {
    match std::fs::read_to_string(path) {
        Ok(text) => {
            let config = parse_settings(&text)?;
            info!(path = %path.display(), "settings loaded");
            Ok(config)
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(TallyConfig::default()),
        Err(e) => Err(HostError::InvalidSettings(format!(
            "failed to read {}: {e}",
            path.display()
        ))),
    }
}
