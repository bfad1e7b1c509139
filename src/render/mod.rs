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

//! Display-side view of bugs and the renderers that print them.

mod table;

pub use table::{TableRenderer, format_bug_table};

use crate::catalog::ComponentCatalog;
use crate::filter::ActivityFilter;
use crate::models::BugRecord;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// A bug plus everything derived for display.
#[derive(Debug, Clone, Serialize)]
pub struct BugView {
    #[serde(flatten)]
    pub bug: BugRecord,
    pub url: String,
    pub tool_key: Option<String>,
    pub tool_label: Option<String>,
    pub is_inactive: bool,
    pub mentor_display_name: Option<String>,
    /// First comment, present only while expanded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

/// Derives [`BugView`]s from raw records.
#[derive(Debug, Clone)]
pub struct ViewBuilder {
    base_url: String,
    bug_url_base: String,
    activity: ActivityFilter,
}

impl ViewBuilder {
    pub fn new(tracker_base_url: &str, activity: ActivityFilter) -> Self {
        let base_url = tracker_base_url.trim_end_matches('/').to_string();
        Self {
            bug_url_base: format!("{base_url}/show_bug.cgi?id="),
            base_url,
            activity,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn inactive_after_days(&self) -> i64 {
        self.activity.threshold_days
    }

    pub fn view(&self, bug: &BugRecord, catalog: &ComponentCatalog, now: DateTime<Utc>) -> BugView {
        BugView {
            url: format!("{}{}", self.bug_url_base, bug.id),
            tool_key: catalog.key_for(&bug.component).map(str::to_string),
            tool_label: catalog.label_for(&bug.component).map(str::to_string),
            is_inactive: self.activity.is_inactive(bug, now),
            mentor_display_name: bug.mentor_display_name().map(str::to_string),
            comment: None,
            bug: bug.clone(),
        }
    }
}

/// Receives the list to show whenever a search or filter change commits.
pub trait Renderer: Send + Sync {
    fn render(&self, bugs: &[BugView]);
}

/// Prints the list as a JSON array.
#[derive(Debug, Default)]
pub struct JsonRenderer;

impl Renderer for JsonRenderer {
    fn render(&self, bugs: &[BugView]) {
        match serde_json::to_string_pretty(bugs) {
            Ok(json) => println!("{json}"),
            Err(e) => log::error!("Failed to serialize bugs: {e}"),
        }
    }
}
