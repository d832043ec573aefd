//! Provider abstraction for release listings.
//!
//! A provider knows how to ask a code hosting platform for every release of a
//! repository, together with the download counters of the attached assets.

mod github;

use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::fmt;

pub use github::{DEFAULT_API_URL, GitHubProvider};

/// Repository identifier (owner/repo format).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepoId {
    pub owner: String,
    pub repo: String,
}

impl RepoId {
    pub fn new(owner: impl Into<String>, repo: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            repo: repo.into(),
        }
    }
}

impl fmt::Display for RepoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.repo)
    }
}

/// A downloadable file attached to a release.
#[derive(Debug, Clone, PartialEq)]
pub struct ReleaseAsset {
    /// File name
    pub name: String,
    /// Last time the asset was updated
    pub updated_at: DateTime<Utc>,
    /// How many times the asset was downloaded
    pub download_count: u64,
}

/// A release from the provider.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Release {
    /// Release name/title
    pub name: Option<String>,
    /// Version tag (e.g., "v1.0.0")
    pub tag: String,
    /// Whether this is a pre-release
    pub prerelease: bool,
    /// Publication date, absent for unpublished releases
    pub published_at: Option<DateTime<Utc>>,
    /// Downloadable assets, in the order the provider lists them
    pub assets: Vec<ReleaseAsset>,
}

/// Trait for release providers.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Provider: Send + Sync {
    /// Get the API base URL.
    fn api_url(&self) -> &str;

    /// Fetch all releases for a repository, in the order the platform returns them.
    async fn list_releases(&self, repo: &RepoId) -> Result<Vec<Release>>;
}
