//! External web-search collaborator.
//!
//! A thin client for a JSON search API. A missing credential is a normal
//! empty-result case, not an error; upstream failures surface as typed
//! errors for the call site to degrade on.

use crate::errors::PipelineError;
use crate::types::WebSearchResult;
use reqwest::Client as ReqwestClient;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

/// Timeout for one search request.
const SEARCH_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Serialize, Debug)]
struct SearchRequest<'a> {
    q: &'a str,
    num: usize,
}

#[derive(Deserialize, Debug, Default)]
struct SearchResponse {
    #[serde(default)]
    organic: Vec<OrganicResult>,
}

#[derive(Deserialize, Debug)]
struct OrganicResult {
    #[serde(default)]
    title: String,
    #[serde(default)]
    link: String,
    #[serde(default)]
    snippet: String,
}

/// Client for the external web-search API.
#[derive(Clone, Debug)]
pub struct WebSearchClient {
    client: ReqwestClient,
    api_url: String,
    api_key: Option<String>,
}

impl WebSearchClient {
    pub fn new(api_url: String, api_key: Option<String>) -> Result<Self, PipelineError> {
        let client = ReqwestClient::builder()
            .timeout(SEARCH_TIMEOUT)
            .build()
            .map_err(PipelineError::ReqwestClientBuild)?;
        Ok(Self {
            client,
            api_url,
            api_key,
        })
    }

    /// Runs a search and returns up to `max_results` hits. Without a
    /// configured credential this returns an empty list immediately.
    pub async fn search(
        &self,
        query: &str,
        max_results: usize,
    ) -> Result<Vec<WebSearchResult>, PipelineError> {
        let Some(api_key) = &self.api_key else {
            debug!("No web search credential configured; returning no results.");
            return Ok(Vec::new());
        };

        let request_body = SearchRequest {
            q: query,
            num: max_results,
        };
        let response = self
            .client
            .post(&self.api_url)
            .header("X-API-KEY", api_key)
            .json(&request_body)
            .send()
            .await
            .map_err(PipelineError::SearchRequest)?;

        if !response.status().is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(PipelineError::SearchApi(error_text));
        }

        let parsed: SearchResponse = response
            .json()
            .await
            .map_err(PipelineError::SearchDeserialization)?;

        Ok(parsed
            .organic
            .into_iter()
            .take(max_results)
            .map(|hit| WebSearchResult {
                title: hit.title,
                url: hit.link,
                snippet: hit.snippet,
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn missing_credential_is_an_empty_result_not_an_error() {
        let client = WebSearchClient::new("https://unreachable.invalid".to_string(), None).unwrap();
        let results = client.search("anything", 3).await.unwrap();
        assert!(results.is_empty());
    }
}
