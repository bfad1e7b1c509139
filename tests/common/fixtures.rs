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

/// Tracker payloads shared by the integration tests
use serde_json::{Map, Value, json};

/// A `/rest/bug` search answer holding the given bugs.
#[allow(dead_code)]
pub fn search_body(bugs: &[Value]) -> String {
    json!({ "bugs": bugs }).to_string()
}

/// A bug as the tracker returns it for the requested fields.
///
/// # Arguments
/// * `id` - The bug number
/// * `assigned_to` - Assignee login (e.g., "nobody@mozilla.org")
/// * `last_change_time` - RFC 3339 timestamp of the last change
/// * `component` - Tracker component name
#[allow(dead_code)]
pub fn bug_json(id: u64, assigned_to: &str, last_change_time: &str, component: &str) -> Value {
    json!({
        "id": id,
        "assigned_to": assigned_to,
        "summary": format!("Bug number {id}"),
        "last_change_time": last_change_time,
        "component": component,
        "whiteboard": "[good first bug]",
        "mentors": [],
        "mentors_detail": []
    })
}

/// A `/rest/bug/{id}/comment` answer.
#[allow(dead_code)]
pub fn comments_body(bug_id: u64, texts: &[&str]) -> String {
    let comments: Vec<Value> = texts
        .iter()
        .enumerate()
        .map(|(i, text)| json!({ "id": i + 1, "text": text, "creator": "reporter@example.com" }))
        .collect();

    let mut bugs = Map::new();
    bugs.insert(bug_id.to_string(), json!({ "comments": comments }));
    json!({ "bugs": bugs }).to_string()
}
