use anyhow::{Context, Result};
use log::{debug, info};
use std::io::Write;

use crate::{
    cli::Options,
    filter::filter_by_tag,
    provider::Provider,
    report::write_report,
};

pub mod config;

use config::Config;

/// Fetch releases for the repository in `options` and print the download report.
#[tracing::instrument(skip(options), fields(repo = %options.repo_id()))]
pub async fn stats(options: &Options) -> Result<()> {
    let config = Config::new(&options.api_url)?;
    run(options, &config.provider, &mut std::io::stdout()).await
}

/// List, filter and render, writing the report to `out`.
#[tracing::instrument(skip(options, provider, out))]
pub async fn run<P: Provider, W: Write>(options: &Options, provider: &P, out: &mut W) -> Result<()> {
    let repo = options.repo_id();
    debug!("Listing releases of {} from {}", repo, provider.api_url());

    let releases = provider
        .list_releases(&repo)
        .await
        .with_context(|| format!("Failed to list releases of {}", repo))?;
    info!("Found {} releases for {}", releases.len(), repo);

    let releases = match options.tag_filter() {
        Some(tag) => filter_by_tag(releases, Some(tag)),
        None => releases,
    };

    let total = write_report(&releases, out).context("Failed to write report")?;
    out.flush().context("Failed to write report")?;
    debug!("Total download count for {}: {}", repo, total);

    Ok(())
}
