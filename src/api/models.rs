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

use crate::models::{BugRecord, Comment};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Envelope of `GET /rest/bug`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    pub bugs: Vec<BugRecord>,
}

/// Envelope of `GET /rest/bug/{id}/comment`, keyed by bug id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentsResponse {
    pub bugs: HashMap<String, BugComments>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BugComments {
    pub comments: Vec<Comment>,
}

/// Bugzilla reports failures as `{"error": true, "message": ..., "code": ...}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    #[serde(default)]
    pub error: bool,
    pub message: String,
    #[serde(default)]
    pub code: Option<i64>,
}
