// src/config/loader.rs

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::config::model::{RawRequestFile, RequestFile};
use crate::errors::Result;

/// On-disk encoding of a request file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestFormat {
    Toml,
    Json,
}

impl RequestFormat {
    /// `.json` files are JSON; anything else is read as TOML.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => RequestFormat::Json,
            _ => RequestFormat::Toml,
        }
    }
}

/// Parse request contents without semantic validation.
pub fn parse_str(contents: &str, format: RequestFormat) -> Result<RawRequestFile> {
    let raw = match format {
        RequestFormat::Toml => toml::from_str(contents)?,
        RequestFormat::Json => serde_json::from_str(contents)?,
    };
    Ok(raw)
}

/// Load a request file and return the raw `RawRequestFile`.
///
/// This only performs deserialization; use [`load_and_validate`] to also run
/// the boundary checks.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<RawRequestFile> {
    let path = path.as_ref();
    let format = RequestFormat::from_path(path);
    let contents = fs::read_to_string(path)?;

    debug!(path = %path.display(), ?format, "loading request file");
    parse_str(&contents, format)
}

/// Load a request file from path and validate it.
///
/// This is the recommended entry point for callers: it reads TOML or JSON,
/// applies `[config]` defaults, and rejects malformed tasks.
pub fn load_and_validate(path: impl AsRef<Path>) -> Result<RequestFile> {
    let raw = load_from_path(&path)?;
    let request = RequestFile::try_from(raw)?;
    Ok(request)
}
