// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! End-to-end README update sequence.
//!
//! The orchestrator loads the project list, groups badges per marker key,
//! reconciles the referenced repositories when a host is available, and
//! rewrites every marker region found in the README. The file is written
//! back only when the resulting text differs byte-for-byte from the
//! original.

use std::{
    collections::{HashMap, HashSet},
    fs
};

use tracing::{info, warn};

use crate::{
    badge::badge_markdown,
    config::UpdaterConfig,
    error::{self, Error},
    github::RepositoryHost,
    language::LanguageCatalog,
    markers::{replace_marker_region, scan_marker_keys},
    projects::{RawProjectEntry, load_projects},
    reconcile::{ReconcileSummary, reconcile_repositories}
};

/// Badges grouped per marker key, plus the repositories they reference.
///
/// Within a key, badges keep insertion order and are deduplicated by
/// repository (the first occurrence wins). The repository list is
/// deduplicated globally in first-reference order for the reconciler.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BadgeGroups {
    badges_by_key: HashMap<String, Vec<String>>,
    repositories:  Vec<String>
}

impl BadgeGroups {
    /// Returns the ordered badges collected for `key`, empty when none.
    pub fn badges_for(&self, key: &str) -> &[String] {
        self.badges_by_key
            .get(key)
            .map_or(&[], |badges| badges.as_slice())
    }

    /// Repositories referenced by valid entries, first-reference order.
    pub fn repositories(&self) -> &[String] {
        &self.repositories
    }

    /// Number of marker keys that collected at least one badge.
    pub fn key_count(&self) -> usize {
        self.badges_by_key.len()
    }
}

/// Outcome of a full update run, reported for logging and tests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UpdateOutcome {
    /// Whether the README content changed.
    pub changed:   bool,
    /// Result of the reconciliation pass, when one ran.
    pub reconcile: Option<ReconcileSummary>
}

/// Builds badge groups from raw project entries.
///
/// Incomplete entries and entries with unmapped languages are skipped with
/// one warning each; the run proceeds regardless.
pub fn collect_badge_groups(
    entries: &[RawProjectEntry],
    catalog: &LanguageCatalog,
    owner: &str
) -> BadgeGroups {
    let mut groups = BadgeGroups::default();
    let mut seen_by_key: HashMap<String, HashSet<String>> = HashMap::new();
    let mut referenced: HashSet<String> = HashSet::new();

    for (index, raw) in entries.iter().enumerate() {
        let Some(entry) = raw.validate() else {
            warn!(
                "entry #{} is incomplete (requires name, language, repo), skipped",
                index + 1
            );
            continue;
        };

        let Some(spec) = catalog.normalize(&entry.language) else {
            warn!("language '{}' is not mapped, skipped", entry.language);
            continue;
        };

        let key = spec.marker_key.to_owned();
        let seen = seen_by_key.entry(key.clone()).or_default();
        if seen.insert(entry.repo.clone()) {
            let badge = badge_markdown(&entry.name, owner, &entry.repo);
            groups.badges_by_key.entry(key).or_default().push(badge);
        }

        if referenced.insert(entry.repo.clone()) {
            groups.repositories.push(entry.repo);
        }
    }

    groups
}

/// Rewrites every marker region found in `document` from the badge groups.
///
/// Keys present in the document but absent from the groups are cleared to
/// an empty region, so stale badges never survive a run. Pure and
/// deterministic; repeated application yields byte-identical output.
pub fn render_document(document: &str, groups: &BadgeGroups) -> String {
    let keys = scan_marker_keys(document);
    if keys.is_empty() {
        warn!("no PROJECTS markers found in README, nothing to update");
        return document.to_owned();
    }

    let mut updated = document.to_owned();
    for key in keys {
        let inner = groups.badges_for(&key).join(" ");
        updated = replace_marker_region(&updated, &key, &inner);
    }

    updated
}

/// Runs the full update sequence described by `config`.
///
/// Passing `None` for `host` skips repository reconciliation with a
/// warning; the document update proceeds independently. In dry-run mode
/// the reconciliation pass and the README write are both skipped and the
/// would-be effects are logged instead.
///
/// # Errors
///
/// Returns an error only for the fatal conditions: the projects file is
/// missing or malformed, its top-level value is not a list, or the README
/// cannot be read or written.
pub async fn run_update<H>(
    config: &UpdaterConfig,
    catalog: &LanguageCatalog,
    host: Option<&H>
) -> Result<UpdateOutcome, Error>
where
    H: RepositoryHost + Sync
{
    let entries = load_projects(&config.projects_path)?;
    info!(
        "Loaded {} project entries from {}",
        entries.len(),
        config.projects_path.display()
    );

    let readme = fs::read_to_string(&config.readme_path)
        .map_err(|source| error::io_error(&config.readme_path, source))?;

    let groups = collect_badge_groups(&entries, catalog, &config.owner);
    info!(
        "Collected badges for {} marker keys, {} repositories referenced",
        groups.key_count(),
        groups.repositories().len()
    );

    let reconcile = if groups.repositories().is_empty() {
        None
    } else if config.dry_run {
        info!(
            "Dry run: skipping reconciliation of {} repositories",
            groups.repositories().len()
        );
        None
    } else if let Some(host) = host {
        Some(reconcile_repositories(host, &config.owner, groups.repositories()).await)
    } else {
        warn!("no token provided, skipping repository existence/creation step");
        None
    };

    if let Some(summary) = &reconcile {
        info!(
            "Reconciliation finished: {} existing, {} created, {} failed",
            summary.existing, summary.created, summary.failed
        );
    }

    let updated = render_document(&readme, &groups);

    let changed = updated != readme;
    if !changed {
        info!("No changes to {}", config.readme_path.display());
    } else if config.dry_run {
        info!("Dry run: {} would be updated", config.readme_path.display());
    } else {
        fs::write(&config.readme_path, &updated)
            .map_err(|source| error::io_error(&config.readme_path, source))?;
        info!("{} updated", config.readme_path.display());
    }

    Ok(UpdateOutcome {
        changed,
        reconcile
    })
}
