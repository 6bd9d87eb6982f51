// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Check-then-create reconciliation of referenced repositories.
//!
//! Each repository moves through a small state machine: unknown, then
//! exists or missing, then created or create-failed. Failures are logged
//! and counted but never abort the loop; the batch always visits every
//! repository once, in the order first referenced, without retries or
//! parallel fan-out.

use tracing::{debug, info, warn};

use crate::{
    error::Error,
    github::{CreateRepoOptions, RepositoryHost}
};

/// Aggregated result of one reconciliation pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReconcileSummary {
    /// Repositories that already existed.
    pub existing: usize,
    /// Repositories created during this pass.
    pub created:  usize,
    /// Repositories that could not be checked or created.
    pub failed:   usize
}

/// Ensures every referenced repository exists under `owner`.
///
/// Existence checks and creations run strictly sequentially. A repository
/// whose check fails is counted as failed and skipped; a creation that
/// reports a validation conflict is counted as failed with a warning. No
/// outcome of this pass affects the process exit code.
///
/// # Example
///
/// ```no_run
/// use gh_readme_updater::{GithubHost, reconcile_repositories};
///
/// # async fn example() -> Result<(), gh_readme_updater::Error> {
/// let host = GithubHost::new("ghp_token")?;
/// let repos = vec!["foo-repo".to_owned(), "bar-repo".to_owned()];
/// let summary = reconcile_repositories(&host, "octocat", &repos).await;
/// println!("created {} repositories", summary.created);
/// # Ok(())
/// # }
/// ```
pub async fn reconcile_repositories<H>(host: &H, owner: &str, repos: &[String]) -> ReconcileSummary
where
    H: RepositoryHost + Sync
{
    let mut summary = ReconcileSummary::default();
    let options = CreateRepoOptions::default();

    for repo in repos {
        let exists = match host.repo_exists(owner, repo).await {
            Ok(exists) => exists,
            Err(error) => {
                warn!(
                    "existence check for {}/{} failed: {}",
                    owner,
                    repo,
                    error.to_display_string()
                );
                summary.failed += 1;
                continue;
            }
        };

        if exists {
            debug!("repository {}/{} already exists", owner, repo);
            summary.existing += 1;
            continue;
        }

        match host.create_repo(owner, repo, &options).await {
            Ok(true) => {
                info!("Created repository: {}/{}", owner, repo);
                summary.created += 1;
            }
            Ok(false) => {
                warn!("Could not create repository: {}/{}", owner, repo);
                summary.failed += 1;
            }
            Err(error) => {
                warn!(
                    "creation of {}/{} failed: {}",
                    owner,
                    repo,
                    error.to_display_string()
                );
                summary.failed += 1;
            }
        }
    }

    summary
}
