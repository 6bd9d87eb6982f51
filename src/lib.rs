//! Utilities for regenerating the projects section of a README document.
//!
//! The library loads a JSON project list, normalizes language labels into
//! marker keys, renders deterministic badge markup, rewrites the content
//! between paired `PROJECTS` sentinel comments, and reconciles the
//! referenced GitHub repositories through a narrow hosting interface. All
//! public APIs are documented with invariants, error semantics, and minimal
//! examples to facilitate integration in automation tooling.

mod badge;
mod config;
mod error;
mod github;
mod language;
mod markers;
mod projects;
mod reconcile;
mod update;

pub use badge::badge_markdown;
pub use config::{DEFAULT_OWNER, DEFAULT_PROJECTS_PATH, DEFAULT_README_PATH, UpdaterConfig};
pub use error::{Error, io_error};
pub use github::{CreateRepoOptions, GithubHost, RepositoryHost};
pub use language::{LanguageCatalog, LanguageSpec};
pub use markers::{replace_marker_region, scan_marker_keys};
pub use projects::{ProjectEntry, RawProjectEntry, load_projects, parse_projects};
pub use reconcile::{ReconcileSummary, reconcile_repositories};
pub use update::{BadgeGroups, UpdateOutcome, collect_badge_groups, render_document, run_update};
