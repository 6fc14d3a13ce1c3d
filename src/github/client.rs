use super::paginate::next_link;
use super::types::{ApiErrorBody, Branch, Collaborator, Commit, RepositoryInfo};
use super::RepoApi;
use crate::config::ApiConfig;
use crate::error::{Result, StatsError};
use crate::model::RepositoryIdentity;
use reqwest::blocking::{Client, Response};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, AUTHORIZATION};
use serde::de::DeserializeOwned;
use tracing::{debug, trace};

const USER_AGENT: &str = concat!("repostats/", env!("CARGO_PKG_VERSION"));
const ACCEPT_JSON: &str = "application/vnd.github+json";
const API_VERSION: &str = "2022-11-28";
const PER_PAGE: &str = "100";

/// Blocking client for the GitHub REST API.
pub struct GitHubClient {
    http: Client,
    base_url: String,
    max_pages: Option<u32>,
}

impl GitHubClient {
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(ACCEPT_JSON));
        headers.insert(
            HeaderName::from_static("x-github-api-version"),
            HeaderValue::from_static(API_VERSION),
        );
        let mut auth = HeaderValue::from_str(&format!("Bearer {}", config.token))
            .map_err(|_| StatsError::Config("token contains characters not allowed in a header".into()))?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);

        let http = Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.clone(),
            max_pages: config.max_pages,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn repo_url(&self, id: &RepositoryIdentity, path: &str) -> String {
        format!("{}/repos/{}/{}{}", self.base_url, id.owner, id.name, path)
    }

    fn get_page<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, &str)],
    ) -> Result<(T, Option<String>)> {
        debug!(method = "GET", %url, "api request");
        let resp = self.http.get(url).query(query).send()?;
        let resp = check_status(resp)?;
        let next = next_link(resp.headers());
        let body = resp.bytes()?;
        let value = serde_json::from_slice(&body)?;
        Ok((value, next))
    }

    fn get_all<T: DeserializeOwned>(&self, url: &str, query: &[(&str, &str)]) -> Result<Vec<T>> {
        let mut query: Vec<(&str, &str)> = query.to_vec();
        query.push(("per_page", PER_PAGE));

        let (mut items, mut next): (Vec<T>, _) = self.get_page(url, &query)?;
        let mut pages = 1u32;
        while let Some(next_url) = next {
            if self.max_pages.is_some_and(|max| pages >= max) {
                debug!(pages, "page limit reached");
                break;
            }
            // The next link already carries the query string.
            let (page, following): (Vec<T>, _) = self.get_page(&next_url, &[])?;
            items.extend(page);
            next = following;
            pages += 1;
        }
        trace!(pages, items = items.len(), %url, "listing complete");
        Ok(items)
    }
}

fn check_status(resp: Response) -> Result<Response> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let body = resp.text().unwrap_or_default();
    let message = serde_json::from_str::<ApiErrorBody>(&body)
        .map(|b| b.message)
        .unwrap_or_else(|_| {
            status
                .canonical_reason()
                .unwrap_or("request failed")
                .to_string()
        });
    Err(StatsError::api(status.as_u16(), message))
}

impl RepoApi for GitHubClient {
    fn repository(&self, id: &RepositoryIdentity) -> Result<RepositoryInfo> {
        let (info, _) = self.get_page(&self.repo_url(id, ""), &[])?;
        Ok(info)
    }

    fn collaborators(&self, id: &RepositoryIdentity) -> Result<Vec<Collaborator>> {
        self.get_all(&self.repo_url(id, "/collaborators"), &[])
    }

    fn branches(&self, id: &RepositoryIdentity) -> Result<Vec<Branch>> {
        self.get_all(&self.repo_url(id, "/branches"), &[])
    }

    fn latest_commit(&self, id: &RepositoryIdentity, branch: &str) -> Result<Option<Commit>> {
        let (commits, _): (Vec<Commit>, _) = self.get_page(
            &self.repo_url(id, "/commits"),
            &[("sha", branch), ("per_page", "1")],
        )?;
        Ok(commits.into_iter().next())
    }

    fn commits(&self, id: &RepositoryIdentity) -> Result<Vec<Commit>> {
        self.get_all(&self.repo_url(id, "/commits"), &[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_repo_urls() {
        let api = ApiConfig::new("https://ghe.example.com/api/v3/", "tok").unwrap();
        let client = GitHubClient::new(&api).unwrap();
        let id = RepositoryIdentity::new("alice", "tool");
        assert_eq!(client.base_url(), "https://ghe.example.com/api/v3");
        assert_eq!(
            client.repo_url(&id, "/branches"),
            "https://ghe.example.com/api/v3/repos/alice/tool/branches"
        );
    }

    #[test]
    fn rejects_token_with_newline() {
        let api = ApiConfig::new("https://api.github.com", "bad\ntoken").unwrap();
        assert!(matches!(GitHubClient::new(&api), Err(StatsError::Config(_))));
    }
}
