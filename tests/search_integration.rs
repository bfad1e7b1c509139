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

mod common;

use bughunt::api::{BugTracker, BugzillaClient, build_query};
use bughunt::catalog::ComponentCatalog;
use bughunt::models::SearchType;
use bughunt::render::{BugView, Renderer};
use bughunt::session::{BugBrowser, SearchOutcome};
use chrono::{TimeZone, Utc};
use common::fixtures::{bug_json, comments_body, search_body};
use mockito::{Matcher, Server};
use std::sync::{Arc, Mutex};

#[derive(Clone, Default)]
struct CapturingRenderer {
    renders: Arc<Mutex<Vec<Vec<BugView>>>>,
}

impl Renderer for CapturingRenderer {
    fn render(&self, bugs: &[BugView]) {
        self.renders.lock().unwrap().push(bugs.to_vec());
    }
}

fn browser(server: &Server, renderer: &CapturingRenderer) -> BugBrowser<BugzillaClient> {
    let client = BugzillaClient::new().with_base_url(server.url());
    BugBrowser::new(
        client,
        ComponentCatalog::devtools(),
        Box::new(renderer.clone()),
    )
    .with_bug_url_base(&server.url())
    .with_clock(|| Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap())
}

#[test]
fn test_inspector_good_first_over_http() {
    let mut server = Server::new();
    let mock = server
        .mock("GET", "/rest/bug")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("product".into(), "Firefox".into()),
            Matcher::UrlEncoded("component".into(), "Developer Tools: Inspector".into()),
            Matcher::UrlEncoded("whiteboard_type".into(), "contains_all".into()),
            Matcher::UrlEncoded("status_whiteboard".into(), "good first bug".into()),
        ]))
        .with_status(200)
        .with_body(search_body(&[
            bug_json(1, "nobody@mozilla.org", "2025-05-31T00:00:00Z", "Developer Tools: Inspector"),
            bug_json(2, "Jane Doe", "2025-05-02T00:00:00Z", "Developer Tools: Inspector"),
            bug_json(3, "Jane Doe", "2025-05-27T00:00:00Z", "Developer Tools: Inspector"),
        ]))
        .expect(1)
        .create();

    let renderer = CapturingRenderer::default();
    let browser = browser(&server, &renderer);

    let outcome = browser.search(&["inspector"], SearchType::GoodFirst).unwrap();
    let SearchOutcome::Committed(bugs) = outcome else {
        panic!("expected a committed result, got {outcome:?}");
    };
    assert_eq!(bugs.iter().map(|b| b.id).collect::<Vec<_>>(), vec![1, 2]);

    let renders = renderer.renders.lock().unwrap();
    assert_eq!(renders.len(), 1);
    let stale = &renders[0][1];
    assert!(stale.is_inactive);
    assert_eq!(stale.tool_label.as_deref(), Some("Inspector"));
    assert_eq!(stale.url, format!("{}/show_bug.cgi?id=2", server.url()));

    mock.assert();
}

#[test]
fn test_identical_search_uses_one_request() {
    let mut server = Server::new();
    let mock = server
        .mock("GET", "/rest/bug")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(search_body(&[bug_json(
            10,
            "nobody@mozilla.org",
            "2025-01-01T00:00:00Z",
            "Developer Tools: Netmonitor",
        )]))
        .expect(1)
        .create();

    let renderer = CapturingRenderer::default();
    let browser = browser(&server, &renderer);

    let first = browser.search(&["network"], SearchType::AllMentored).unwrap();
    let second = browser.search(&["network"], SearchType::AllMentored).unwrap();

    assert_eq!(first, second);
    assert_eq!(renderer.renders.lock().unwrap().len(), 2);
    mock.assert();
}

#[test]
fn test_failed_search_renders_nothing() {
    let mut server = Server::new();
    let _m = server
        .mock("GET", "/rest/bug")
        .match_query(Matcher::Any)
        .with_status(502)
        .create();

    let renderer = CapturingRenderer::default();
    let browser = browser(&server, &renderer);

    let outcome = browser.search(&["debugger"], SearchType::AllBugs).unwrap();

    assert_eq!(outcome, SearchOutcome::Unavailable);
    assert!(renderer.renders.lock().unwrap().is_empty());
    assert_eq!(browser.cached_queries(), 0);
}

#[test]
fn test_comment_toggle_over_http() {
    let mut server = Server::new();
    let _m = server
        .mock("GET", "/rest/bug")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(search_body(&[bug_json(
            77,
            "nobody@mozilla.org",
            "2025-01-01T00:00:00Z",
            "Developer Tools: Console",
        )]))
        .create();
    let comments = server
        .mock("GET", "/rest/bug/77/comment")
        .with_status(200)
        .with_body(comments_body(77, &["Type `foo` in the console", "Still happens"]))
        .expect(1)
        .create();

    let renderer = CapturingRenderer::default();
    let browser = browser(&server, &renderer);
    browser.search(&["console"], SearchType::AllBugs).unwrap();

    assert!(browser.toggle_comment(77).unwrap().expanded);
    assert!(!browser.toggle_comment(77).unwrap().expanded);

    let renders = renderer.renders.lock().unwrap();
    assert_eq!(
        renders[1][0].comment.as_deref(),
        Some("Type `foo` in the console")
    );
    assert_eq!(renders[2][0].comment, None);
    comments.assert();
}

#[test]
#[cfg_attr(not(feature = "integration_tests"), ignore)]
fn test_search_real_tracker() {
    // Skip if explicitly disabled
    if std::env::var("SKIP_NETWORK_TESTS").is_ok() {
        println!("Skipping network test due to SKIP_NETWORK_TESTS env var");
        return;
    }

    let client = BugzillaClient::new();
    let query = build_query(&ComponentCatalog::devtools(), &["main"], SearchType::AllBugs);
    let result = client.search_bugs(&query);

    assert!(result.is_ok(), "Failed to search bugs: {result:?}");
    for bug in result.unwrap() {
        assert!(bug.id > 0);
    }
}
