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

use crate::models::BugRecord;

/// Case-insensitive match on the summary, or substring match on the id.
///
/// An empty query matches every bug.
pub fn matches(bug: &BugRecord, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }

    let query = query.to_lowercase();
    bug.summary.to_lowercase().contains(&query) || bug.id.to_string().contains(&query)
}

/// Bugs matching `query`, in their original order.
pub fn filter_bugs<'a>(bugs: &'a [BugRecord], query: &str) -> Vec<&'a BugRecord> {
    bugs.iter().filter(|b| matches(b, query)).collect()
}
