//! Loading and validation of the JSON project list.
//!
//! The loader is deliberately strict about the container and lenient about
//! the rows: a missing file, malformed JSON, or a top-level value that is
//! not an array aborts the run, while individual entries missing required
//! fields are surfaced to the caller for a warning-and-skip treatment.

use std::{fs, path::Path};

use serde::Deserialize;
use serde_json::Value;

use crate::error::{self, Error};

/// Raw project row as it appears in the projects file before validation.
///
/// All fields are optional so an incomplete entry deserializes cleanly and
/// can be skipped with a warning instead of failing the whole parse.
#[derive(Debug, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct RawProjectEntry {
    /// Human readable project name rendered on the badge.
    #[serde(default)]
    pub name:     Option<String>,
    /// Free-form language label matched against the alias catalog.
    #[serde(default)]
    pub language: Option<String>,
    /// Repository identifier under the configured owner.
    #[serde(default)]
    pub repo:     Option<String>
}

/// Validated project entry with all required fields present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectEntry {
    /// Human readable project name rendered on the badge.
    pub name:     String,
    /// Free-form language label matched against the alias catalog.
    pub language: String,
    /// Repository identifier under the configured owner.
    pub repo:     String
}

impl RawProjectEntry {
    /// Promotes the raw row into a [`ProjectEntry`] when every required
    /// field is present and non-blank. `null` values count as missing.
    /// Returns `None` otherwise; the caller is expected to warn and
    /// continue.
    pub fn validate(&self) -> Option<ProjectEntry> {
        let name = self.name.as_deref().unwrap_or("").trim();
        let language = self.language.as_deref().unwrap_or("").trim();
        let repo = self.repo.as_deref().unwrap_or("").trim();

        if name.is_empty() || language.is_empty() || repo.is_empty() {
            return None;
        }

        Some(ProjectEntry {
            name:     name.to_owned(),
            language: language.to_owned(),
            repo:     repo.to_owned()
        })
    }
}

/// Loads raw project entries from the provided JSON file path.
///
/// # Errors
///
/// Returns [`Error::Io`] when the file cannot be read, [`Error::Parse`]
/// when the contents are not valid JSON, and [`Error::Validation`] when the
/// top-level value is not an array of entries.
pub fn load_projects(path: &Path) -> Result<Vec<RawProjectEntry>, Error> {
    let contents = fs::read_to_string(path).map_err(|source| error::io_error(path, source))?;
    parse_projects(&contents)
}

/// Parses raw project entries from the provided JSON document string.
///
/// This function is suitable for unit tests and higher-level callers that
/// already obtained the file contents.
///
/// # Errors
///
/// Propagates [`Error::Parse`] when the JSON cannot be decoded and
/// [`Error::Validation`] when the document is not shaped as an entry list.
pub fn parse_projects(contents: &str) -> Result<Vec<RawProjectEntry>, Error> {
    let document: Value = serde_json::from_str(contents)?;

    if !document.is_array() {
        return Err(Error::validation(
            "projects file must be a list of objects"
        ));
    }

    let entries = serde_json::from_value(document)?;
    Ok(entries)
}
