pub mod client;
pub mod paginate;
pub mod types;

#[cfg(test)]
pub(crate) mod fake;

pub use client::GitHubClient;
pub use types::{Branch, Collaborator, Commit, RepositoryInfo};

use crate::error::Result;
use crate::model::RepositoryIdentity;

/// Read-only queries the stats report needs from a hosting service.
pub trait RepoApi {
    fn repository(&self, id: &RepositoryIdentity) -> Result<RepositoryInfo>;

    fn collaborators(&self, id: &RepositoryIdentity) -> Result<Vec<Collaborator>>;

    fn branches(&self, id: &RepositoryIdentity) -> Result<Vec<Branch>>;

    /// First entry of the commit listing filtered to `branch`.
    fn latest_commit(&self, id: &RepositoryIdentity, branch: &str) -> Result<Option<Commit>>;

    /// Commit history in the service's default order for the default branch.
    fn commits(&self, id: &RepositoryIdentity) -> Result<Vec<Commit>>;
}
