//! GitHub provider implementation.

use anyhow::Result;
use async_trait::async_trait;
use log::debug;

use crate::http::HttpClient;

use super::{Provider, Release, ReleaseAsset, RepoId};

/// Public GitHub REST API endpoint.
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Releases requested per page; a shorter page is the last one.
const PER_PAGE: usize = 100;

/// GitHub API response types (internal).
mod api {
    use chrono::{DateTime, Utc};
    use serde::Deserialize;

    #[derive(Deserialize, Debug)]
    pub struct Release {
        pub tag_name: String,
        pub name: Option<String>,
        pub published_at: Option<DateTime<Utc>>,
        pub prerelease: bool,
        pub assets: Vec<Asset>,
    }

    #[derive(Deserialize, Debug)]
    pub struct Asset {
        pub name: String,
        pub updated_at: DateTime<Utc>,
        pub download_count: u64,
    }
}

/// GitHub provider implementation.
pub struct GitHubProvider {
    http_client: HttpClient,
    api_url: String,
}

impl GitHubProvider {
    /// Create from an existing HttpClient.
    pub fn from_http_client(http_client: HttpClient, api_url: &str) -> Self {
        Self {
            http_client,
            api_url: api_url.trim_end_matches('/').to_string(),
        }
    }

    async fn fetch_releases(&self, repo: &RepoId) -> Result<Vec<api::Release>> {
        let url = format!(
            "{}/repos/{}/{}/releases",
            self.api_url, repo.owner, repo.repo
        );
        let per_page = PER_PAGE.to_string();
        let mut releases = Vec::new();

        for page in 1.. {
            debug!("Fetching releases page {} from {}...", page, url);
            let page = page.to_string();

            let parsed: Vec<api::Release> = self
                .http_client
                .get_json_with_query(&url, &[("per_page", per_page.as_str()), ("page", page.as_str())])
                .await?;

            let len = parsed.len();
            releases.extend(parsed);

            if len < PER_PAGE {
                break;
            }
        }

        debug!("Fetched {} releases for {}", releases.len(), repo);
        Ok(releases)
    }
}

#[async_trait]
impl Provider for GitHubProvider {
    fn api_url(&self) -> &str {
        &self.api_url
    }

    #[tracing::instrument(skip(self))]
    async fn list_releases(&self, repo: &RepoId) -> Result<Vec<Release>> {
        let releases = self.fetch_releases(repo).await?;
        Ok(releases.into_iter().map(Release::from).collect())
    }
}

impl From<api::Release> for Release {
    fn from(r: api::Release) -> Self {
        Release {
            name: r.name,
            tag: r.tag_name,
            prerelease: r.prerelease,
            published_at: r.published_at,
            assets: r.assets.into_iter().map(ReleaseAsset::from).collect(),
        }
    }
}

impl From<api::Asset> for ReleaseAsset {
    fn from(a: api::Asset) -> Self {
        ReleaseAsset {
            name: a.name,
            updated_at: a.updated_at,
            download_count: a.download_count,
        }
    }
}
