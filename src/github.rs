// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! GitHub hosting API client behind a narrow reconciliation seam.
//!
//! The updater needs exactly two remote operations: check whether a
//! repository exists and create one. [`RepositoryHost`] captures that
//! surface so the reconcile loop and the orchestrator can be exercised
//! against an in-memory fake, while [`GithubHost`] provides the
//! octocrab-backed implementation used in production.

use async_trait::async_trait;
use octocrab::Octocrab;
use serde_json::json;
use tracing::warn;

use crate::error::Error;

/// Options applied when creating a missing repository.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateRepoOptions {
    /// Whether the repository is created as private.
    pub private:     bool,
    /// Description attached to the new repository.
    pub description: String
}

/// Narrow interface over the repository hosting API.
///
/// Implementations map hosting responses onto the updater's error split:
/// a definite answer (exists / missing, created / conflicted) is an `Ok`
/// value, anything else is an [`Error::Service`] the caller logs without
/// aborting the batch.
#[async_trait]
pub trait RepositoryHost {
    /// Returns whether `owner/repo` exists.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Service`] for any response that is neither a
    /// success nor a plain not-found, including transport failures.
    async fn repo_exists(&self, owner: &str, repo: &str) -> Result<bool, Error>;

    /// Creates `repo` under the authenticated account.
    ///
    /// The repository is auto-initialized with a default file so it is
    /// immediately clonable. Returns `false` without an error when the
    /// hosting API reports a validation conflict (the name is already
    /// taken).
    ///
    /// # Errors
    ///
    /// Returns [`Error::Service`] for any other failure.
    async fn create_repo(
        &self,
        owner: &str,
        repo: &str,
        options: &CreateRepoOptions
    ) -> Result<bool, Error>;
}

/// Octocrab-backed implementation of [`RepositoryHost`].
#[derive(Debug, Clone)]
pub struct GithubHost {
    client: Octocrab
}

impl GithubHost {
    /// Builds a client authenticated with the provided personal token
    /// against the public GitHub API.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Service`] when the underlying client cannot be
    /// constructed.
    pub fn new(token: &str) -> Result<Self, Error> {
        let client = Octocrab::builder()
            .personal_token(token.to_owned())
            .build()
            .map_err(|e| Error::service(format!("failed to initialize GitHub client: {e}")))?;

        Ok(Self {
            client
        })
    }

    /// Builds a client against a custom API base URI.
    ///
    /// Intended for GitHub Enterprise deployments and for tests that point
    /// the client at a local mock server.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Service`] when the URI is invalid or the client
    /// cannot be constructed.
    pub fn with_base_uri(token: &str, base_uri: &str) -> Result<Self, Error> {
        let client = Octocrab::builder()
            .base_uri(base_uri)
            .map_err(|e| Error::service(format!("invalid GitHub API base URI: {e}")))?
            .personal_token(token.to_owned())
            .build()
            .map_err(|e| Error::service(format!("failed to initialize GitHub client: {e}")))?;

        Ok(Self {
            client
        })
    }
}

#[async_trait]
impl RepositoryHost for GithubHost {
    async fn repo_exists(&self, owner: &str, repo: &str) -> Result<bool, Error> {
        match self.client.repos(owner, repo).get().await {
            Ok(_) => Ok(true),
            Err(error) => match github_status(&error) {
                Some(404) => Ok(false),
                Some(status) => Err(Error::service(format!(
                    "GET /repos/{owner}/{repo} failed: HTTP {status}"
                ))),
                None => Err(Error::service(format!(
                    "GET /repos/{owner}/{repo} failed: {error}"
                )))
            }
        }
    }

    async fn create_repo(
        &self,
        owner: &str,
        repo: &str,
        options: &CreateRepoOptions
    ) -> Result<bool, Error> {
        let body = json!({
            "name": repo,
            "private": options.private,
            "description": options.description,
            "auto_init": true,
        });

        let response: Result<serde_json::Value, octocrab::Error> =
            self.client.post("/user/repos", Some(&body)).await;

        match response {
            Ok(_) => Ok(true),
            Err(error) => match github_status(&error) {
                // Validation conflict, the name is most likely already taken.
                Some(422) => {
                    warn!("create repo '{owner}/{repo}' returned 422 (possibly already exists)");
                    Ok(false)
                }
                Some(status) => Err(Error::service(format!(
                    "POST /user/repos for '{repo}' failed: HTTP {status}"
                ))),
                None => Err(Error::service(format!(
                    "POST /user/repos for '{repo}' failed: {error}"
                )))
            }
        }
    }
}

/// Extracts the HTTP status code from a GitHub API error response.
fn github_status(error: &octocrab::Error) -> Option<u16> {
    match error {
        octocrab::Error::GitHub {
            source, ..
        } => Some(source.status_code.as_u16()),
        _ => None
    }
}
