//! Optional configuration stored in `primer.toml`.

use std::fs;
use std::ops::RangeInclusive;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::binary_table::DEFAULT_RANGE;
use crate::core::oldest::default_roster;
use crate::core::person::Person;

/// Default config file name, resolved against the current directory.
pub const DEFAULT_CONFIG_PATH: &str = "primer.toml";

/// Program inputs (TOML).
///
/// Every field is optional. Missing fields fall back to the built-in inputs,
/// so an absent or empty file reproduces the fixed behavior of both programs.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct PrimerConfig {
    pub oldest: OldestConfig,
    pub binary_table: BinaryTableConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct OldestConfig {
    /// People to choose from, in tie-break order.
    pub roster: Vec<Person>,
}

impl Default for OldestConfig {
    fn default() -> Self {
        Self {
            roster: default_roster(),
        }
    }
}

/// Closed character range for the binary table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct BinaryTableConfig {
    pub start: char,
    pub end: char,
}

impl Default for BinaryTableConfig {
    fn default() -> Self {
        Self {
            start: *DEFAULT_RANGE.start(),
            end: *DEFAULT_RANGE.end(),
        }
    }
}

impl BinaryTableConfig {
    pub fn range(&self) -> RangeInclusive<char> {
        self.start..=self.end
    }
}

impl PrimerConfig {
    pub fn validate(&self) -> Result<()> {
        for (idx, person) in self.oldest.roster.iter().enumerate() {
            if person.name.trim().is_empty() {
                return Err(anyhow!("oldest.roster[{idx}].name must be non-empty"));
            }
        }
        let BinaryTableConfig { start, end } = self.binary_table;
        if start > end {
            return Err(anyhow!(
                "binary_table.start ({start:?}) must not be after binary_table.end ({end:?})"
            ));
        }
        Ok(())
    }
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `PrimerConfig::default()`.
pub fn load_config(path: &Path) -> Result<PrimerConfig> {
    if !path.exists() {
        debug!(path = %path.display(), "config missing, using defaults");
        let cfg = PrimerConfig::default();
        cfg.validate()?;
        return Ok(cfg);
    }
    debug!(path = %path.display(), "loading config");
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: PrimerConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()
        .with_context(|| format!("validate {}", path.display()))?;
    Ok(cfg)
}
