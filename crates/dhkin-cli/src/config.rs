//! Engine settings file (`fk.toml`).
//!
//! ```toml
//! [base]
//! translation = [0.0, 0.0, 0.8]
//! rotation = [0.0, 0.0, 0.0, 1.0]   # x, y, z, w
//! ```

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use dhkin_fk::FkSettings;

/// Load settings from `path`, or defaults (identity base) when absent.
pub fn load(path: Option<&Path>) -> Result<FkSettings> {
    let Some(path) = path else {
        return Ok(FkSettings::default());
    };

    let raw = fs::read_to_string(path)
        .with_context(|| format!("reading settings from {}", path.display()))?;
    let settings = parse(&raw).with_context(|| format!("in {}", path.display()))?;
    tracing::debug!(path = %path.display(), ?settings, "loaded settings");
    Ok(settings)
}

/// Parse and validate settings text.
pub fn parse(raw: &str) -> Result<FkSettings> {
    let settings: FkSettings = toml::from_str(raw).context("malformed settings")?;
    settings.validate()?;
    Ok(settings)
}
