use anyhow::{Context, Result};
use log::debug;
use reqwest::{
    Client,
    header::{ACCEPT, HeaderMap, HeaderValue},
};

use crate::{http::HttpClient, provider::GitHubProvider};

const USER_AGENT: &str = "ghstats";
const GITHUB_ACCEPT: &str = "application/vnd.github+json";

/// Collaborators for one run, wired from the parsed options.
pub struct Config {
    pub provider: GitHubProvider,
}

impl Config {
    pub fn new(api_url: &str) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(GITHUB_ACCEPT));

        let client = Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .build()
            .context("Failed to build HTTP client")?;

        debug!("Using API URL {}", api_url);
        let provider = GitHubProvider::from_http_client(HttpClient::new(client), api_url);

        Ok(Self { provider })
    }
}
