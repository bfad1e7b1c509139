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

use crate::catalog::ComponentCatalog;
use crate::models::SearchType;
use serde::{Deserialize, Serialize};

pub const DEFAULT_PRODUCT: &str = "Firefox";
pub const OPEN_STATUSES: [&str; 3] = ["NEW", "REOPENED", "UNCONFIRMED"];
pub const WHITEBOARD_MODE: &str = "contains_all";
pub const INCLUDED_FIELDS: [&str; 7] = [
    "id",
    "assigned_to",
    "summary",
    "last_change_time",
    "component",
    "whiteboard",
    "mentors",
];
pub const GOOD_FIRST_BUG_FLAG: &str = "good first bug";
pub const POLISH_BACKLOG_FLAG: &str = "polish-backlog";

/// A custom search clause (`f1`/`o1` in Bugzilla's advanced search).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtraFilter {
    pub field: String,
    pub operator: String,
}

impl ExtraFilter {
    pub fn mentor_is_set() -> Self {
        Self {
            field: "bug_mentor".to_string(),
            operator: "isnotempty".to_string(),
        }
    }
}

/// A tracker search, built fresh for every search.
///
/// The field order is fixed, so the serialized form doubles as the cache
/// key: identical selections always produce identical keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchQuery {
    pub product: String,
    pub components: Vec<String>,
    pub statuses: Vec<String>,
    pub include_fields: Vec<String>,
    pub whiteboard_mode: String,
    pub whiteboard_flags: Vec<String>,
    pub extra_filter: Option<ExtraFilter>,
}

impl SearchQuery {
    /// Canonical serialization used as the result cache key.
    pub fn cache_key(&self) -> String {
        // Only strings and vectors of strings; serialization cannot fail
        serde_json::to_string(self).unwrap_or_else(|_| format!("{self:?}"))
    }

    pub fn has_components(&self) -> bool {
        !self.components.is_empty()
    }

    /// Query-string parameters, in a stable order.
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![("product", self.product.clone())];

        params.extend(self.components.iter().map(|c| ("component", c.clone())));
        params.extend(self.statuses.iter().map(|s| ("bug_status", s.clone())));
        params.push(("include_fields", self.include_fields.join(",")));
        params.push(("whiteboard_type", self.whiteboard_mode.clone()));
        params.extend(
            self.whiteboard_flags
                .iter()
                .map(|f| ("status_whiteboard", f.clone())),
        );

        if let Some(ref filter) = self.extra_filter {
            params.push(("f1", filter.field.clone()));
            params.push(("o1", filter.operator.clone()));
        }

        params
    }
}

/// Turns a tool selection into a [`SearchQuery`].
#[derive(Debug, Clone)]
pub struct QueryBuilder {
    product: String,
    statuses: Vec<String>,
}

impl QueryBuilder {
    pub fn new() -> Self {
        Self {
            product: DEFAULT_PRODUCT.to_string(),
            statuses: OPEN_STATUSES.iter().map(|s| s.to_string()).collect(),
        }
    }

    pub fn product(mut self, product: impl Into<String>) -> Self {
        self.product = product.into();
        self
    }

    pub fn statuses(mut self, statuses: Vec<String>) -> Self {
        self.statuses = statuses;
        self
    }

    pub fn build<S: AsRef<str>>(
        &self,
        catalog: &ComponentCatalog,
        selected_keys: &[S],
        search_type: SearchType,
    ) -> SearchQuery {
        let mut query = SearchQuery {
            product: self.product.clone(),
            components: catalog.tracker_components_for(selected_keys),
            statuses: self.statuses.clone(),
            include_fields: INCLUDED_FIELDS.iter().map(|f| f.to_string()).collect(),
            whiteboard_mode: WHITEBOARD_MODE.to_string(),
            whiteboard_flags: Vec::new(),
            extra_filter: None,
        };

        match search_type {
            SearchType::GoodFirst => query.whiteboard_flags.push(GOOD_FIRST_BUG_FLAG.to_string()),
            SearchType::AllMentored => query.extra_filter = Some(ExtraFilter::mentor_is_set()),
            SearchType::Polish => query.whiteboard_flags.push(POLISH_BACKLOG_FLAG.to_string()),
            SearchType::AllBugs | SearchType::Unspecified => {}
        }

        query
    }
}

impl Default for QueryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Build a query against the default product and open statuses.
pub fn build_query<S: AsRef<str>>(
    catalog: &ComponentCatalog,
    selected_keys: &[S],
    search_type: SearchType,
) -> SearchQuery {
    QueryBuilder::new().build(catalog, selected_keys, search_type)
}
