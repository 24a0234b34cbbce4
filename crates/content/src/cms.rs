// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::ContentError;
use serde::Deserialize;
use serde::de::DeserializeOwned;

/// Content store access configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmsConfig {
    /// The content project identifier.
    pub project_id: String,
    /// The dataset to query.
    pub dataset: String,
    /// Optional read token for non-public datasets.
    pub token: Option<String>,
}

impl CmsConfig {
    /// Resolves configuration through a variable lookup.
    ///
    /// Returns `None` when `CMS_PROJECT_ID` or `CMS_DATASET` is absent;
    /// pages then render their literal default content. `CMS_TOKEN` is
    /// optional (public datasets need none).
    ///
    /// # Arguments
    ///
    /// * `lookup` - Returns the value of a named variable, if set
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Option<Self> {
        Some(Self {
            project_id: lookup("CMS_PROJECT_ID")?,
            dataset: lookup("CMS_DATASET")?,
            token: lookup("CMS_TOKEN"),
        })
    }

    /// Resolves configuration from the process environment.
    #[must_use]
    pub fn from_env() -> Option<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }
}

/// Envelope the content store wraps query results in.
#[derive(Debug, Deserialize)]
struct QueryEnvelope<T> {
    /// The matched documents.
    result: Vec<T>,
}

/// Thin read-only client for the content store's query endpoint.
pub struct CmsClient {
    /// The content store's base URL.
    base_url: String,
    /// Access configuration.
    config: CmsConfig,
    /// Shared HTTP client.
    http: reqwest::Client,
}

impl CmsClient {
    /// Creates a client for the given content store.
    ///
    /// # Arguments
    ///
    /// * `base_url` - The content store's base URL (no trailing slash)
    /// * `config` - Access configuration
    #[must_use]
    pub fn new(base_url: impl Into<String>, config: CmsConfig) -> Self {
        Self {
            base_url: base_url.into(),
            config,
            http: reqwest::Client::new(),
        }
    }

    /// Returns the query endpoint URL for this client's project and
    /// dataset.
    #[must_use]
    pub fn endpoint_url(&self) -> String {
        format!(
            "{}/projects/{}/datasets/{}/query",
            self.base_url, self.config.project_id, self.config.dataset
        )
    }

    /// Runs a read-only query, decoding the matched documents.
    ///
    /// Consumers pass partial document types (every field optional) and
    /// resolve them against their literal defaults; a failure here means
    /// the caller renders fully-default content.
    ///
    /// # Errors
    ///
    /// Returns a `ContentError` if the store cannot be reached, answers
    /// a non-success status, or the body does not decode.
    pub async fn fetch<T: DeserializeOwned>(&self, query: &str) -> Result<Vec<T>, ContentError> {
        let mut request = self.http.get(self.endpoint_url()).query(&[("query", query)]);
        if let Some(token) = &self.config.token {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .map_err(|e| ContentError::Http(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ContentError::Http(format!(
                "Content store answered {status}"
            )));
        }

        let envelope: QueryEnvelope<T> = response
            .json()
            .await
            .map_err(|e| ContentError::Decode(e.to_string()))?;

        Ok(envelope.result)
    }
}
