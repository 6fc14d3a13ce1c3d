use super::types::{Account, CommitDetail, Signature};
use super::{Branch, Collaborator, Commit, RepoApi, RepositoryInfo};
use crate::error::{Result, StatsError};
use crate::model::RepositoryIdentity;
use chrono::{DateTime, TimeZone, Utc};
use std::cell::RefCell;
use std::collections::HashMap;

/// In-memory `RepoApi` with optional failure injection per call.
#[derive(Default)]
pub struct FakeApi {
    pub owner: String,
    pub collaborators: Vec<String>,
    pub branches: Vec<(String, Option<Commit>)>,
    pub commits: Vec<Commit>,
    pub fail_on: Option<&'static str>,
    pub calls: RefCell<Vec<String>>,
}

impl FakeApi {
    pub fn new(owner: &str) -> Self {
        Self {
            owner: owner.to_string(),
            ..Default::default()
        }
    }

    pub fn collaborator(mut self, login: &str) -> Self {
        self.collaborators.push(login.to_string());
        self
    }

    pub fn branch(mut self, name: &str, head: Option<Commit>) -> Self {
        self.branches.push((name.to_string(), head));
        self
    }

    pub fn commit(mut self, commit: Commit) -> Self {
        self.commits.push(commit);
        self
    }

    pub fn failing_on(mut self, call: &'static str) -> Self {
        self.fail_on = Some(call);
        self
    }

    fn enter(&self, call: &'static str) -> Result<()> {
        self.calls.borrow_mut().push(call.to_string());
        if self.fail_on == Some(call) {
            return Err(StatsError::api(500, format!("{call} unavailable")));
        }
        Ok(())
    }
}

pub fn ts(day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, day, 12, 0, 0).unwrap()
}

pub fn commit(sha: &str, name: &str, message: &str, day: u32) -> Commit {
    let signature = Signature {
        name: Some(name.to_string()),
        date: Some(ts(day)),
    };
    Commit {
        sha: sha.to_string(),
        commit: CommitDetail {
            message: message.to_string(),
            author: Some(signature.clone()),
            committer: Some(signature),
        },
    }
}

impl RepoApi for FakeApi {
    fn repository(&self, _id: &RepositoryIdentity) -> Result<RepositoryInfo> {
        self.enter("repository")?;
        Ok(RepositoryInfo {
            owner: Account {
                login: self.owner.clone(),
            },
            default_branch: Some("main".to_string()),
        })
    }

    fn collaborators(&self, _id: &RepositoryIdentity) -> Result<Vec<Collaborator>> {
        self.enter("collaborators")?;
        Ok(self
            .collaborators
            .iter()
            .map(|login| Collaborator {
                login: login.clone(),
            })
            .collect())
    }

    fn branches(&self, _id: &RepositoryIdentity) -> Result<Vec<Branch>> {
        self.enter("branches")?;
        Ok(self
            .branches
            .iter()
            .map(|(name, _)| Branch { name: name.clone() })
            .collect())
    }

    fn latest_commit(&self, _id: &RepositoryIdentity, branch: &str) -> Result<Option<Commit>> {
        self.enter("latest_commit")?;
        let heads: HashMap<&str, &Option<Commit>> =
            self.branches.iter().map(|(n, c)| (n.as_str(), c)).collect();
        Ok(heads.get(branch).and_then(|c| (*c).clone()))
    }

    fn commits(&self, _id: &RepositoryIdentity) -> Result<Vec<Commit>> {
        self.enter("commits")?;
        Ok(self.commits.clone())
    }
}
