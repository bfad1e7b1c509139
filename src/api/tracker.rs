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

use crate::api::query::SearchQuery;
use crate::error::{BugHuntError, Result};
use crate::models::{BugRecord, Comment};
use std::sync::Arc;

/// The bug tracker as seen by the rest of the crate.
///
/// Implementations block until the tracker answers. An in-flight call
/// cannot be aborted; callers that no longer care about the answer simply
/// ignore it.
pub trait BugTracker: Send + Sync {
    /// Run a search and return every matching bug.
    fn search_bugs(&self, query: &SearchQuery) -> Result<Vec<BugRecord>>;

    /// All comments of a bug, oldest first.
    fn bug_comments(&self, bug_id: u64) -> Result<Vec<Comment>>;
}

/// The opening comment of a bug, usually its description.
pub fn first_comment<T: BugTracker + ?Sized>(tracker: &T, bug_id: u64) -> Result<Comment> {
    tracker
        .bug_comments(bug_id)?
        .into_iter()
        .next()
        .ok_or(BugHuntError::NoComments(bug_id))
}

impl<T: BugTracker + ?Sized> BugTracker for Arc<T> {
    fn search_bugs(&self, query: &SearchQuery) -> Result<Vec<BugRecord>> {
        (**self).search_bugs(query)
    }

    fn bug_comments(&self, bug_id: u64) -> Result<Vec<Comment>> {
        (**self).bug_comments(bug_id)
    }
}

impl<T: BugTracker + ?Sized> BugTracker for Box<T> {
    fn search_bugs(&self, query: &SearchQuery) -> Result<Vec<BugRecord>> {
        (**self).search_bugs(query)
    }

    fn bug_comments(&self, bug_id: u64) -> Result<Vec<Comment>> {
        (**self).bug_comments(bug_id)
    }
}
