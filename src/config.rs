//! Colour file (tint.yaml) loading.
//!
//! A colour file defines named colours that override or extend the
//! built-in table:
//!
//! ```yaml
//! colours:
//!   brand: "#ff00ff"
//!   ink: "#1a1a2e"
//! ```
//!
//! YAML (`.yaml`, `.yml`) and JSON (`.json`) are both accepted.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, TintError};
use crate::registry::ColourTable;

/// File name looked up in the working directory when none is given.
pub const DEFAULT_FILE: &str = "tint.yaml";

/// Hint for empty values: an unquoted `#` starts a YAML comment.
pub const QUOTE_HEX_HELP: &str = "Quote hex values in YAML, e.g. brand: \"#ff00ff\"";

/// User colour definitions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColourFile {
    /// Colour name -> hex string.
    pub colours: BTreeMap<String, String>,
}

impl ColourFile {
    /// Load a colour file, picking the format from the extension.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| TintError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read colour file: {}", e),
        })?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::parse_json(&content),
            _ => Self::parse_yaml(&content),
        }
    }

    /// Load `tint.yaml` from `dir` if it exists.
    pub fn discover(dir: &Path) -> Result<Option<Self>> {
        let path = dir.join(DEFAULT_FILE);
        if path.is_file() {
            Self::load(&path).map(Some)
        } else {
            Ok(None)
        }
    }

    /// Parse from a YAML string.
    pub fn parse_yaml(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).map_err(|e| TintError::Parse {
            message: format!("Invalid colour file: {}", e),
            help: Some("Expected a `colours:` map of names to hex strings".to_string()),
        })
    }

    /// Parse from a JSON string.
    pub fn parse_json(content: &str) -> Result<Self> {
        serde_json::from_str(content).map_err(|e| TintError::Parse {
            message: format!("Invalid colour file: {}", e),
            help: Some("Expected {\"colours\": {\"name\": \"#RRGGBB\"}}".to_string()),
        })
    }

    /// Build a table of the built-in colours overridden by this file.
    pub fn into_table(self) -> ColourTable {
        ColourTable::with_overrides(self.colours)
    }
}

/// Load the colour table for a run: an explicit file, else `tint.yaml`
/// in the working directory, else the built-ins alone.
pub fn load_table(explicit: Option<&PathBuf>) -> Result<ColourTable> {
    let file = match explicit {
        Some(path) => Some(ColourFile::load(path)?),
        None => ColourFile::discover(&std::env::current_dir()?)?,
    };
    Ok(file.map(ColourFile::into_table).unwrap_or_default())
}
