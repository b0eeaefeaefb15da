//! Catalog file loading.
//!
//! Reads a catalog document from YAML (`.yaml`/`.yml`) or JSON (`.json`)
//! with proper error context (file path, parse location). Loading only
//! parses; validation and fallback resolution happen in
//! [`Catalog::from_document`](crate::Catalog::from_document).

use std::path::Path;

use crate::error::{CatalogError, CatalogResult};
use crate::types::CatalogDocument;

/// Supported catalog serialization formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogFormat {
    /// YAML document.
    Yaml,
    /// JSON document.
    Json,
}

impl CatalogFormat {
    /// Infer the format from a file extension.
    pub fn from_path(path: &Path) -> CatalogResult<Self> {
        match path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .as_deref()
        {
            Some("yaml") | Some("yml") => Ok(Self::Yaml),
            Some("json") => Ok(Self::Json),
            _ => Err(CatalogError::UnsupportedFormat {
                path: path.to_path_buf(),
            }),
        }
    }
}

fn read_file(path: &Path) -> CatalogResult<String> {
    std::fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            CatalogError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            CatalogError::Io(e)
        }
    })
}

/// Load a catalog document from a YAML or JSON file.
pub fn load_document(path: &Path) -> CatalogResult<CatalogDocument> {
    let format = CatalogFormat::from_path(path)?;
    let content = read_file(path)?;
    let document = parse_document(&content, format).map_err(|e| match e {
        ParseFailure::Yaml(source) => CatalogError::YamlParse {
            path: path.to_path_buf(),
            source,
        },
        ParseFailure::Json(source) => CatalogError::JsonParse {
            path: path.to_path_buf(),
            source,
        },
    })?;
    tracing::debug!(
        path = %path.display(),
        packages = document.packages.len(),
        activities = document.activities.len(),
        visa_types = document.visa_types.len(),
        "loaded catalog document"
    );
    Ok(document)
}

/// Parse failure before a file path is attached.
#[derive(Debug)]
pub enum ParseFailure {
    /// YAML syntax or shape error.
    Yaml(serde_yaml::Error),
    /// JSON syntax or shape error.
    Json(serde_json::Error),
}

impl std::fmt::Display for ParseFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Yaml(e) => write!(f, "{e}"),
            Self::Json(e) => write!(f, "{e}"),
        }
    }
}

/// Parse a catalog document from an in-memory string.
pub fn parse_document(content: &str, format: CatalogFormat) -> Result<CatalogDocument, ParseFailure> {
    match format {
        CatalogFormat::Yaml => serde_yaml::from_str(content).map_err(ParseFailure::Yaml),
        CatalogFormat::Json => serde_json::from_str(content).map_err(ParseFailure::Json),
    }
}
