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

mod context;
mod exit_codes;
mod format;

pub use context::ErrorContext;
pub use exit_codes::get_exit_code;
pub use format::{format_error_chain, format_error_with_color};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum BugHuntError {
    #[error("Failed to fetch bugs from tracker: {0}")]
    TrackerFetch(String),

    #[error("Invalid tracker response: {0}")]
    InvalidResponse(String),

    #[error("Bug {0} has no comments")]
    NoComments(u64),

    #[error("Unknown tool '{key}'")]
    UnknownTool {
        key: String,
        available: Vec<String>,
    },

    #[error("Invalid search type: {0}")]
    InvalidSearchType(String),

    #[error("Invalid command: {0}")]
    InvalidCommand(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Home directory not found")]
    HomeNotFound,

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Http(#[from] attohttpc::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl From<config::ConfigError> for BugHuntError {
    fn from(e: config::ConfigError) -> Self {
        BugHuntError::ConfigError(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, BugHuntError>;
