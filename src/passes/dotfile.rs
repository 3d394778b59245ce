use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use thiserror::Error;

/// Key/value pairs read from a `key: value` dotfile, ordered by key
pub type Properties = BTreeMap<String, String>;

#[derive(Debug, Error)]
pub enum DotfileError {
    #[error("{path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
}

/// Read a property-style dotfile such as `.env` or `.location`.
///
/// Blank lines and lines starting with `#` are skipped, as are lines
/// without a `:` separator.
pub fn read_properties(path: &Path) -> Result<Properties, DotfileError> {
    let content = fs::read_to_string(path).map_err(|source| DotfileError::Io {
        path: path.display().to_string(),
        source,
    })?;
    Ok(parse_properties(&content))
}

pub fn parse_properties(content: &str) -> Properties {
    let mut properties = Properties::new();

    for line in content.lines().map(str::trim) {
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if let Some((key, value)) = line.split_once(':') {
            properties.insert(key.trim().to_string(), value.trim().to_string());
        }
    }

    properties
}
