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

mod client;
mod models;
mod query;
mod tracker;


pub use client::{BUGZILLA_BASE_URL, BugzillaClient};
pub use models::{ApiErrorResponse, BugComments, CommentsResponse, SearchResponse};
pub use query::{
    DEFAULT_PRODUCT, ExtraFilter, GOOD_FIRST_BUG_FLAG, INCLUDED_FIELDS, OPEN_STATUSES,
    POLISH_BACKLOG_FLAG, QueryBuilder, SearchQuery, WHITEBOARD_MODE, build_query,
};
pub use tracker::{BugTracker, first_comment};
