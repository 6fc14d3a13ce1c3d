use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

pub const SCHEMA_VERSION: u32 = 1;

/// Name the hosting service uses for its own web-flow commits.
pub const SERVICE_USER: &str = "GitHub";

pub const NO_MESSAGE: &str = "No message";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    Owner,
    Collaborator,
    Contributor,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Owner => "Owner",
            Role::Collaborator => "Collaborator",
            Role::Contributor => "Contributor",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserStat {
    pub role: Role,
    pub commit_count: u64,
}

impl UserStat {
    pub fn new(role: Role) -> Self {
        Self { role, commit_count: 0 }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryIdentity {
    pub owner: String,
    pub name: String,
}

impl RepositoryIdentity {
    pub fn new(owner: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            name: name.into(),
        }
    }
}

impl fmt::Display for RepositoryIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRole {
    pub name: String,
    pub role: Role,
}

/// Branch name plus the timestamp of the first commit the branch listing
/// returns. That listing is newest-first, so this is the branch head.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BranchSummary {
    pub name: String,
    pub first_commit_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitRecord {
    pub timestamp: DateTime<Utc>,
    pub sha: String,
    pub author: String,
    pub message: String,
}

impl CommitRecord {
    /// Builds a record, substituting the placeholder for an empty message.
    pub fn new(timestamp: DateTime<Utc>, sha: String, author: String, message: String) -> Self {
        let message = if message.is_empty() {
            NO_MESSAGE.to_string()
        } else {
            message
        };
        Self {
            timestamp,
            sha,
            author,
            message,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatEntry {
    pub name: String,
    pub role: Role,
    pub commit_count: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportOutput {
    pub version: u32,
    pub generated_at: DateTime<Utc>,
    pub repository: String,
    pub users: Vec<UserRole>,
    pub branches: Vec<BranchSummary>,
    pub commits: Vec<CommitRecord>,
    pub stats: Vec<StatEntry>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn empty_message_becomes_placeholder() {
        let ts = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
        let rec = CommitRecord::new(ts, "abc".into(), "bob".into(), String::new());
        assert_eq!(rec.message, "No message");

        let rec = CommitRecord::new(ts, "abc".into(), "bob".into(), "fix".into());
        assert_eq!(rec.message, "fix");
    }

    #[test]
    fn identity_displays_as_slug() {
        assert_eq!(RepositoryIdentity::new("alice", "tool").to_string(), "alice/tool");
    }
}
