use chrono::{DateTime, Utc};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Account {
    pub login: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RepositoryInfo {
    pub owner: Account,
    #[serde(default)]
    pub default_branch: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Collaborator {
    pub login: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Branch {
    pub name: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Signature {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub date: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CommitDetail {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub author: Option<Signature>,
    #[serde(default)]
    pub committer: Option<Signature>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Commit {
    pub sha: String,
    pub commit: CommitDetail,
}

impl Commit {
    /// Committer name, falling back to the author name. Web-flow commits
    /// carry the service user here rather than the person's login.
    pub fn display_name(&self) -> Option<&str> {
        let detail = &self.commit;
        detail
            .committer
            .as_ref()
            .and_then(|s| s.name.as_deref())
            .or_else(|| detail.author.as_ref().and_then(|s| s.name.as_deref()))
    }

    pub fn timestamp(&self) -> Option<DateTime<Utc>> {
        let detail = &self.commit;
        detail
            .committer
            .as_ref()
            .and_then(|s| s.date)
            .or_else(|| detail.author.as_ref().and_then(|s| s.date))
    }
}

/// Body of a non-2xx response.
#[derive(Debug, Deserialize)]
pub(crate) struct ApiErrorBody {
    pub message: String,
}
