//! Runtime configuration for a single updater invocation.
//!
//! All environment-derived values are resolved once by the CLI and carried
//! in an explicit struct, keeping the reconciler and formatter free of
//! ambient globals and easy to exercise in isolation.

use std::path::PathBuf;

/// GitHub account used when no owner is supplied via flag or environment.
pub const DEFAULT_OWNER: &str = "Thhundder";
/// Projects file consumed when no override is supplied.
pub const DEFAULT_PROJECTS_PATH: &str = "projects.json";
/// Document rewritten when no override is supplied.
pub const DEFAULT_README_PATH: &str = "README.md";

/// Resolved settings consumed by the orchestrator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdaterConfig {
    /// Account that owns the referenced repositories.
    pub owner:         String,
    /// Personal access token. `None` skips repository reconciliation.
    pub token:         Option<String>,
    /// Location of the JSON project list.
    pub projects_path: PathBuf,
    /// Location of the README document to rewrite.
    pub readme_path:   PathBuf,
    /// When set, no repository is created and no file is written.
    pub dry_run:       bool
}

impl UpdaterConfig {
    /// Builds a configuration with resolved owner and token values.
    ///
    /// A blank owner falls back to [`DEFAULT_OWNER`]; a blank token is
    /// treated as absent so CI secrets that expand to empty strings do not
    /// masquerade as credentials.
    pub fn new(
        owner: Option<String>,
        token: Option<String>,
        projects_path: PathBuf,
        readme_path: PathBuf,
        dry_run: bool
    ) -> Self {
        let owner = owner
            .map(|value| value.trim().to_owned())
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| DEFAULT_OWNER.to_owned());
        let token = token
            .map(|value| value.trim().to_owned())
            .filter(|value| !value.is_empty());

        Self {
            owner,
            token,
            projects_path,
            readme_path,
            dry_run
        }
    }
}
