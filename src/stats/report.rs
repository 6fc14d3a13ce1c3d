use super::aggregate::{is_service_user, role_for, UserStats};
use super::output::{Reporter, Section};
use crate::error::{Result, StatsError};
use crate::github::{Commit, RepoApi};
use crate::model::{BranchSummary, CommitRecord, RepositoryIdentity, UserRole};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;
use tracing::{debug, info};

fn spinner(message: String) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message(message);
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

/// Runs `fetch` behind a stderr spinner, clearing it before returning.
fn fetching<T>(message: impl Into<String>, fetch: impl FnOnce() -> Result<T>) -> Result<T> {
    let pb = spinner(message.into());
    let result = fetch();
    pb.finish_and_clear();
    result
}

fn to_record(commit: Commit) -> Result<CommitRecord> {
    let timestamp = commit
        .timestamp()
        .ok_or_else(|| StatsError::Incomplete(format!("commit {} has no date", commit.sha)))?;
    let author = commit.display_name().unwrap_or_default().to_string();
    Ok(CommitRecord::new(timestamp, commit.sha, author, commit.commit.message))
}

/// Builds the four-section report for `id`, emitting each line as soon as it
/// is known. The first failing call aborts the report; whatever was already
/// emitted stays emitted.
pub fn report<A: RepoApi + ?Sized>(
    api: &A,
    id: &RepositoryIdentity,
    out: &mut dyn Reporter,
) -> Result<UserStats> {
    let mut stats = UserStats::new();

    let collaborators = fetching("Fetching collaborators...", || api.collaborators(id))?;
    let repository = fetching("Fetching repository...", || api.repository(id))?;
    let owner_login = repository.owner.login;
    debug!(collaborators = collaborators.len(), owner = %owner_login, "resolved repository owner");

    out.begin_section(Section::Users)?;
    for user in &collaborators {
        if is_service_user(&user.login) {
            continue;
        }
        let role = role_for(&user.login, &owner_login);
        stats.insert_collaborator(&user.login, role);
        out.user(&UserRole {
            name: user.login.clone(),
            role,
        })?;
    }

    let branches = fetching("Fetching branches...", || api.branches(id))?;
    out.begin_section(Section::Branches)?;
    for branch in branches {
        let head = fetching(format!("Fetching head of {}...", branch.name), || {
            api.latest_commit(id, &branch.name)
        })?;
        let first_commit_at = match head {
            Some(commit) => Some(commit.timestamp().ok_or_else(|| {
                StatsError::Incomplete(format!("commit {} has no date", commit.sha))
            })?),
            None => None,
        };
        out.branch(&BranchSummary {
            name: branch.name,
            first_commit_at,
        })?;
    }

    let commits = fetching("Fetching commits...", || api.commits(id))?;
    info!(count = commits.len(), repository = %id, "fetched commit history");
    out.begin_section(Section::Commits)?;
    for commit in commits {
        let record = to_record(commit)?;
        stats.record_commit(&record.author);
        out.commit(&record)?;
    }

    out.begin_section(Section::Stats)?;
    for entry in stats.entries() {
        out.stat(&entry)?;
    }

    Ok(stats)
}
