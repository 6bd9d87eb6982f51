//! Command-line interface for the README updater binary.
//!
//! The CLI resolves owner and token values from flags or the environment,
//! wires up the GitHub client when a credential is available, and runs the
//! one-shot update sequence. Diagnostics go to stderr so stdout stays clean
//! for scripting.

use std::{io, path::PathBuf, process};

use clap::{ArgAction, Parser};
use gh_readme_updater::{
    DEFAULT_PROJECTS_PATH, DEFAULT_README_PATH, Error, GithubHost, LanguageCatalog, UpdaterConfig,
    run_update,
};
use tracing::warn;
use tracing_subscriber::EnvFilter;

/// Command line interface for regenerating README project badges.
#[derive(Debug, Parser)]
#[command(
    name = "gh-readme-updater",
    version,
    about = "Regenerate README project badges and reconcile GitHub repositories"
)]
struct Cli {
    /// Path to the JSON project list.
    #[arg(long = "projects", value_name = "PATH", default_value = DEFAULT_PROJECTS_PATH)]
    projects: PathBuf,

    /// Path to the README document to rewrite.
    #[arg(long = "readme", value_name = "PATH", default_value = DEFAULT_README_PATH)]
    readme: PathBuf,

    /// GitHub account that owns the referenced repositories.
    #[arg(long = "owner", value_name = "ACCOUNT", env = "GH_OWNER")]
    owner: Option<String>,

    /// Personal access token used for repository existence checks and
    /// creation. Reconciliation is skipped when absent.
    #[arg(long = "token", value_name = "TOKEN", env = "GH_PAT", hide_env_values = true)]
    token: Option<String>,

    /// Base URL of the GitHub API, for GitHub Enterprise deployments.
    #[arg(long = "github-api", value_name = "URL", env = "GITHUB_API_URL")]
    github_api: Option<String>,

    /// Compute the update without creating repositories or writing files.
    #[arg(long = "dry-run", action = ArgAction::SetTrue)]
    dry_run: bool
}

/// Entry point that reports errors and sets the appropriate exit status.
#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
        )
        .with_writer(io::stderr)
        .init();

    if let Err(error) = run().await {
        eprintln!("{}", error.to_display_string());
        process::exit(1);
    }
}

/// Executes the CLI using parsed arguments.
///
/// # Errors
///
/// Propagates only the fatal loader and document I/O errors; every other
/// anomaly is logged and the run completes with exit status zero.
async fn run() -> Result<(), Error> {
    let cli = Cli::parse();

    let config = UpdaterConfig::new(cli.owner, cli.token, cli.projects, cli.readme, cli.dry_run);
    let catalog = LanguageCatalog::default();

    let host = build_host(&config, cli.github_api.as_deref());

    run_update(&config, &catalog, host.as_ref()).await?;

    Ok(())
}

/// Builds the GitHub client when a token is configured.
///
/// A client construction failure is downgraded to a warning: the README
/// update is still worth performing without reconciliation.
fn build_host(config: &UpdaterConfig, base_uri: Option<&str>) -> Option<GithubHost> {
    let token = config.token.as_deref()?;

    let built = match base_uri {
        Some(uri) => GithubHost::with_base_uri(token, uri),
        None => GithubHost::new(token)
    };

    match built {
        Ok(host) => Some(host),
        Err(error) => {
            warn!(
                "GitHub client unavailable, skipping reconciliation: {}",
                error.to_display_string()
            );
            None
        }
    }
}
