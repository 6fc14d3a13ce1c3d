use super::output::{JsonReporter, NdjsonReporter, Reporter, TextReporter};
use super::report;
use crate::config::{Config, OutputFormat};
use crate::github::GitHubClient;
use anyhow::Context;
use tracing::debug;

pub fn exec(config: &Config) -> anyhow::Result<()> {
    let client = GitHubClient::new(&config.api).context("Failed to build API client")?;
    debug!(api = client.base_url(), repository = %config.identity, "starting report");

    let stdout = std::io::stdout().lock();
    let mut reporter: Box<dyn Reporter> = match config.format {
        OutputFormat::Text => Box::new(TextReporter::new(stdout)),
        OutputFormat::Json => Box::new(JsonReporter::new(stdout, &config.identity)),
        OutputFormat::Ndjson => Box::new(NdjsonReporter::new(stdout)),
    };

    let stats = report(&client, &config.identity, reporter.as_mut())
        .with_context(|| format!("Failed to collect stats for {}", config.identity))?;
    reporter.finish().context("Failed to write report")?;

    debug!(users = stats.len(), "report complete");
    Ok(())
}
