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

use crate::error::BugHuntError;
use std::fmt;

pub struct ErrorContext<'a> {
    pub error: &'a BugHuntError,
    pub suggestion: Option<String>,
    pub details: Option<String>,
}

impl<'a> ErrorContext<'a> {
    pub fn new(error: &'a BugHuntError) -> Self {
        let (suggestion, details) = match error {
            BugHuntError::TrackerFetch(msg) => {
                let suggestion = Some(
                    "Check your internet connection and proxy settings, or point \
                     BUGHUNT_TRACKER__BASE_URL at a reachable Bugzilla instance."
                        .to_string(),
                );
                let details = Some(format!("Tracker request failed: {msg}"));
                (suggestion, details)
            }
            BugHuntError::InvalidResponse(msg) => {
                let suggestion = Some(
                    "The tracker returned data in an unexpected format. Verify that the base \
                     URL points to a Bugzilla REST endpoint."
                        .to_string(),
                );
                let details = Some(msg.clone());
                (suggestion, details)
            }
            BugHuntError::NoComments(id) => {
                let suggestion = Some(format!(
                    "Open the bug in a browser to check its history: \
                     https://bugzilla.mozilla.org/show_bug.cgi?id={id}"
                ));
                (suggestion, None)
            }
            BugHuntError::UnknownTool { key, available } => {
                let suggestion = Some(format!(
                    "Available tools:\n{}",
                    available
                        .iter()
                        .map(|k| format!("  - {k}"))
                        .collect::<Vec<_>>()
                        .join("\n")
                ));
                let details = Some(format!(
                    "'{key}' is not a key of the component catalog. Run 'bughunt tools' to list \
                     the catalog."
                ));
                (suggestion, details)
            }
            BugHuntError::InvalidSearchType(_) => {
                let suggestion = Some(
                    "Search type should be one of: good-first, all-mentored, all-polish, \
                     all-bugs."
                        .to_string(),
                );
                (suggestion, None)
            }
            BugHuntError::InvalidCommand(_) => {
                let suggestion = Some("Type 'help' to list session commands.".to_string());
                (suggestion, None)
            }
            BugHuntError::ConfigError(msg) | BugHuntError::InvalidConfig(msg) => {
                let suggestion = Some(
                    "Check ~/.bughunt/config.toml and any BUGHUNT_* environment variables."
                        .to_string(),
                );
                let details = Some(format!("Configuration issue: {msg}"));
                (suggestion, details)
            }
            BugHuntError::HomeNotFound => {
                let suggestion =
                    Some("Set BUGHUNT_HOME to a writable directory.".to_string());
                (suggestion, None)
            }
            BugHuntError::Http(http_err) => {
                let error_string = http_err.to_string();
                let suggestion = if error_string.contains("timeout")
                    || error_string.contains("Timeout")
                {
                    Some(
                        "Try increasing the timeout with BUGHUNT_TRACKER__TIMEOUT_SECS."
                            .to_string(),
                    )
                } else if error_string.contains("429") {
                    Some(
                        "Tracker rate limit exceeded. Please wait a few minutes and try again."
                            .to_string(),
                    )
                } else {
                    Some("Check your internet connection and try again.".to_string())
                };
                let details = Some(format!("HTTP error: {http_err}"));
                (suggestion, details)
            }
            BugHuntError::Io(io_err) => {
                let suggestion = match io_err.kind() {
                    std::io::ErrorKind::PermissionDenied => {
                        Some("Check file permissions of the bughunt home directory.".to_string())
                    }
                    std::io::ErrorKind::NotFound => Some(
                        "Ensure the file or directory exists and the path is correct.".to_string(),
                    ),
                    _ => None,
                };
                let details = Some(format!("I/O error: {io_err}"));
                (suggestion, details)
            }
            _ => (None, None),
        };

        ErrorContext {
            error,
            suggestion,
            details,
        }
    }

    pub fn with_suggestion(mut self, suggestion: String) -> Self {
        self.suggestion = Some(suggestion);
        self
    }

    pub fn with_details(mut self, details: String) -> Self {
        self.details = Some(details);
        self
    }
}

impl<'a> fmt::Display for ErrorContext<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Error: {}", self.error)?;

        if let Some(details) = &self.details {
            write!(f, "\n\nDetails: {details}")?;
        }

        if let Some(suggestion) = &self.suggestion {
            write!(f, "\n\nSuggestion: {suggestion}")?;
        }

        Ok(())
    }
}
