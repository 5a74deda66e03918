use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use release_plan::config;
use release_plan::conventional;
use release_plan::domain::ConventionalCommit;
use release_plan::host::GitHost;
use release_plan::strategy::{ManifestStrategy, ReleaseStrategy};
use release_plan::ui;
use release_plan::versioning::{DefaultVersioning, SnapshotVersioning};

#[derive(clap::Parser)]
#[command(
    name = "release-plan",
    about = "Compute next release versions from conventional commits and plan the file edits to apply them"
)]
struct Args {
    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(short, long, default_value = ".", help = "Path to the local repository clone")]
    path: PathBuf,

    #[arg(short, long, help = "Target branch (overrides configuration)")]
    branch: Option<String>,

    #[arg(long, help = "Module root within the repository (overrides configuration)")]
    module_root: Option<String>,

    #[arg(
        short,
        long,
        help = "Artifact whose version leads the release (defaults to the first manifest entry)"
    )]
    artifact: Option<String>,

    #[arg(long, help = "Repository identifier used in diagnostics (e.g. owner/name)")]
    repository: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let args = Args::parse();

    let mut config = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            ui::display_error(&format!("Error loading config: {}", e));
            std::process::exit(1);
        }
    };
    if let Some(branch) = args.branch {
        config.target_branch = branch;
    }
    if let Some(module_root) = args.module_root {
        config.module_root = module_root;
    }
    if let Some(repository) = args.repository {
        config.repository = repository;
    }

    let host = match GitHost::open(&args.path) {
        Ok(host) => host,
        Err(e) => {
            ui::display_error(&format!("Git repository error: {}", e));
            std::process::exit(1);
        }
    };

    // Collect the history the release decision is based on: everything on
    // the target branch since the last version tag.
    let since = host.latest_version_tag()?;
    let raw = host.commits_since(&config.target_branch, since.as_deref())?;
    let parsed: Vec<ConventionalCommit> = raw
        .iter()
        .map(|(sha, message)| conventional::parse_commit(sha, message))
        .collect();

    match since.as_deref() {
        Some(tag) => ui::display_status(&format!("{} commits since {}", parsed.len(), tag)),
        None => ui::display_status(&format!("{} commits, no previous release tag", parsed.len())),
    }

    let mut strategy =
        ManifestStrategy::new(config, Arc::new(host), Box::new(DefaultVersioning));

    let commits = strategy.post_process_commits(parsed);
    let snapshot = strategy.needs_snapshot().await?;
    if snapshot {
        strategy.set_versioning(Box::new(SnapshotVersioning));
    }

    let current = strategy.build_versions_map().await?;
    let next = strategy.update_versions_map(current.clone(), &commits)?;

    let new_version = match args.artifact.as_deref() {
        Some(artifact) => next.get(artifact).cloned().ok_or_else(|| {
            anyhow::anyhow!("artifact '{}' not found in the versions manifest", artifact)
        })?,
        None => next
            .values()
            .next()
            .cloned()
            .unwrap_or_else(|| strategy.initial_release_version()),
    };

    let entry = ui::format_changelog_entry(&new_version, &commits);
    let updates = strategy
        .build_updates(&new_version, &next, snapshot, &entry)
        .await?;

    ui::display_version_changes(&current, &next);
    ui::display_plan(&updates);
    if snapshot {
        ui::display_status("snapshot release: intermediate build, changelog omitted");
    }

    Ok(())
}
