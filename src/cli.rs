use crate::config::{ApiConfig, Config, OutputFormat, DEFAULT_API_URL, DEFAULT_TIMEOUT_SECS};
use crate::error::Result;
use anyhow::Context;
use clap::Parser;
use std::time::Duration;

#[derive(Parser)]
#[command(name = "repostats")]
#[command(about = "A tool to report collaborator, branch and commit stats for a hosted repository")]
#[command(version)]
pub struct Cli {
    #[arg(short, long, env = "GITHUB_TOKEN", hide_env_values = true, help = "GitHub OAuth token")]
    pub token: String,

    #[arg(short, long, help = "Repository owner (e.g., 'MyName')")]
    pub owner: String,

    #[arg(short, long, help = "Repository name (e.g., 'MyRepoIsCool')")]
    pub repo: String,

    #[arg(long, env = "GITHUB_API_URL", default_value = DEFAULT_API_URL, help = "Base URL of the REST API")]
    pub api_url: String,

    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS, help = "Request timeout in seconds")]
    pub timeout: u64,

    #[arg(long, help = "Maximum number of pages to follow per listing")]
    pub max_pages: Option<u32>,

    #[arg(long, conflicts_with = "ndjson", help = "Output as JSON")]
    pub json: bool,

    #[arg(long, help = "Output as NDJSON")]
    pub ndjson: bool,

    #[arg(short, long, help = "Enable debug logging on stderr")]
    pub verbose: bool,
}

impl Cli {
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    pub fn format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else if self.ndjson {
            OutputFormat::Ndjson
        } else {
            OutputFormat::Text
        }
    }

    pub fn into_config(self) -> Result<Config> {
        let format = self.format();
        let api = ApiConfig::new(&self.api_url, self.token)?
            .with_timeout(Duration::from_secs(self.timeout))
            .with_max_pages(self.max_pages);
        Ok(Config::new(&self.owner, &self.repo, api)?
            .with_format(format)
            .with_verbose(self.verbose))
    }

    pub fn execute(self) -> anyhow::Result<()> {
        crate::logging::init(self.verbose);
        let config = self.into_config().context("Invalid configuration")?;
        crate::stats::exec(&config)
    }
}
