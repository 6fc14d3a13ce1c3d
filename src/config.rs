use crate::error::{Result, StatsError};
use crate::model::RepositoryIdentity;
use std::time::Duration;

pub const DEFAULT_API_URL: &str = "https://api.github.com";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
    Ndjson,
}

#[derive(Clone)]
pub struct ApiConfig {
    pub base_url: String,
    pub token: String,
    pub timeout: Duration,
    /// Upper bound on pages followed per listing; `None` follows every page.
    pub max_pages: Option<u32>,
}

impl ApiConfig {
    pub fn new(base_url: &str, token: impl Into<String>) -> Result<Self> {
        let base_url = base_url.trim().trim_end_matches('/');
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(StatsError::Config(format!(
                "API URL must start with http:// or https://, got '{base_url}'"
            )));
        }
        Ok(Self {
            base_url: base_url.to_string(),
            token: token.into(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            max_pages: None,
        })
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_max_pages(mut self, max_pages: Option<u32>) -> Self {
        self.max_pages = max_pages;
        self
    }
}

// Hand-written so the token never ends up in logs.
impl std::fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiConfig")
            .field("base_url", &self.base_url)
            .field("token", &"<redacted>")
            .field("timeout", &self.timeout)
            .field("max_pages", &self.max_pages)
            .finish()
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub identity: RepositoryIdentity,
    pub api: ApiConfig,
    pub format: OutputFormat,
    pub verbose: bool,
}

impl Config {
    pub fn new(owner: &str, repo: &str, api: ApiConfig) -> Result<Self> {
        let owner = owner.trim();
        let repo = repo.trim();
        if owner.is_empty() {
            return Err(StatsError::Config("repository owner must not be empty".into()));
        }
        if repo.is_empty() {
            return Err(StatsError::Config("repository name must not be empty".into()));
        }
        Ok(Self {
            identity: RepositoryIdentity::new(owner, repo),
            api,
            format: OutputFormat::Text,
            verbose: false,
        })
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }
}
