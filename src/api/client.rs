// Copyright 2025 dentsusoken
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::api::models::{ApiErrorResponse, CommentsResponse, SearchResponse};
use crate::api::query::SearchQuery;
use crate::api::tracker::BugTracker;
use crate::config::TrackerConfig;
use crate::error::{BugHuntError, Result};
use crate::models::{BugRecord, Comment};
use crate::user_agent;
use attohttpc::{RequestBuilder, Session};
use log::{debug, trace};
use serde::de::DeserializeOwned;
use std::time::Duration;

pub const BUGZILLA_BASE_URL: &str = "https://bugzilla.mozilla.org";
const DEFAULT_TIMEOUT: u64 = 30;

/// Blocking client for the Bugzilla REST API.
#[derive(Debug, Clone)]
pub struct BugzillaClient {
    pub(crate) session: Session,
    pub(crate) base_url: String,
}

impl BugzillaClient {
    pub fn new() -> Self {
        let mut session = Session::new();
        session.header("User-Agent", user_agent::tracker_client());
        session.header("Accept", "application/json");
        session.timeout(Duration::from_secs(DEFAULT_TIMEOUT));
        session.proxy_settings(attohttpc::ProxySettings::from_env());

        Self {
            session,
            base_url: BUGZILLA_BASE_URL.to_string(),
        }
    }

    pub fn from_config(config: &TrackerConfig) -> Self {
        Self::new()
            .with_base_url(config.base_url.clone())
            .with_timeout(Duration::from_secs(config.timeout_secs))
    }

    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.session.timeout(timeout);
        self
    }

    /// Web page of a bug.
    pub fn bug_url(&self, bug_id: u64) -> String {
        format!("{}/show_bug.cgi?id={bug_id}", self.base_url)
    }

    fn execute<T: DeserializeOwned>(&self, request: RequestBuilder, what: &str) -> Result<T> {
        let response = request.send().map_err(|e| {
            BugHuntError::TrackerFetch(format!(
                "Network error connecting to {}: {e}",
                self.base_url
            ))
        })?;

        let status = response.status();
        let body = response.text().map_err(|e| {
            BugHuntError::TrackerFetch(format!("Failed to read {what} response body: {e}"))
        })?;

        // Bugzilla may answer an error with any status, including 200
        if let Ok(api_error) = serde_json::from_str::<ApiErrorResponse>(&body)
            && api_error.error
        {
            let code = api_error
                .code
                .map(|c| format!(" (code {c})"))
                .unwrap_or_default();
            return Err(BugHuntError::TrackerFetch(format!(
                "{}{code}",
                api_error.message
            )));
        }

        if !status.is_success() {
            let message = match status.as_u16() {
                404 => format!(
                    "The {what} endpoint was not found on {}. Is this a Bugzilla server?",
                    self.base_url
                ),
                401 | 403 => format!("Access to {what} was denied by {}", self.base_url),
                500..=599 => format!(
                    "Server error ({}) from {}. Please try again later.",
                    status.as_u16(),
                    self.base_url
                ),
                code => format!(
                    "HTTP error ({code}) from {}: {}",
                    self.base_url,
                    status.canonical_reason().unwrap_or("Unknown error")
                ),
            };
            return Err(BugHuntError::TrackerFetch(message));
        }

        serde_json::from_str::<T>(&body).map_err(|e| {
            debug!("Failed to parse {what} response: {e}");
            trace!("Response body: {body}");
            BugHuntError::InvalidResponse(format!("Failed to parse {what} response: {e}"))
        })
    }
}

impl BugTracker for BugzillaClient {
    fn search_bugs(&self, query: &SearchQuery) -> Result<Vec<BugRecord>> {
        let url = format!("{}/rest/bug", self.base_url);
        let params = query.to_params();

        debug!(
            "Tracker search: {url}?{}",
            params
                .iter()
                .map(|(k, v)| format!("{k}={v}"))
                .collect::<Vec<_>>()
                .join("&")
        );

        let mut request = self.session.get(&url);
        for (key, value) in &params {
            request = request.param(key, value);
        }

        let response: SearchResponse = self.execute(request, "search")?;
        debug!("Tracker returned {} bugs", response.bugs.len());
        Ok(response.bugs)
    }

    fn bug_comments(&self, bug_id: u64) -> Result<Vec<Comment>> {
        let url = format!("{}/rest/bug/{bug_id}/comment", self.base_url);
        debug!("Fetching comments for bug {bug_id}");

        let response: CommentsResponse = self.execute(self.session.get(&url), "comment")?;
        let comments = response
            .bugs
            .into_iter()
            .find(|(id, _)| id.parse::<u64>().ok() == Some(bug_id))
            .map(|(_, bug)| bug.comments)
            .ok_or_else(|| {
                BugHuntError::InvalidResponse(format!(
                    "comment response does not mention bug {bug_id}"
                ))
            })?;

        Ok(comments)
    }
}

impl Default for BugzillaClient {
    fn default() -> Self {
        Self::new()
    }
}
