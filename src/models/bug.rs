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

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A bug as returned by the tracker's search endpoint.
///
/// Only the fields requested through `include_fields` are populated, so
/// everything beyond the id is tolerant of being absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BugRecord {
    pub id: u64,
    #[serde(default)]
    pub assigned_to: String,
    #[serde(default)]
    pub summary: String,
    pub last_change_time: DateTime<Utc>,
    #[serde(default)]
    pub component: String,
    #[serde(default)]
    pub whiteboard: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mentors: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mentors_detail: Option<Vec<UserDetail>>,
}

impl BugRecord {
    /// Display name of the first mentor, if the bug is mentored.
    pub fn mentor_display_name(&self) -> Option<&str> {
        if let Some(first) = self.mentors_detail.as_ref().and_then(|d| d.first()) {
            if let Some(real_name) = first.real_name.as_deref().filter(|n| !n.is_empty()) {
                return Some(real_name);
            }
            return Some(first.name.as_str());
        }

        self.mentors
            .as_ref()
            .and_then(|m| m.first())
            .map(|s| s.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserDetail {
    #[serde(default)]
    pub id: Option<u64>,
    pub name: String,
    #[serde(default)]
    pub real_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    #[serde(default)]
    pub id: Option<u64>,
    pub text: String,
    #[serde(default)]
    pub creator: Option<String>,
    #[serde(default)]
    pub creation_time: Option<DateTime<Utc>>,
}
