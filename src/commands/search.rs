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

use crate::api::{BugTracker, BugzillaClient};
use crate::commands::progress::Spinner;
use crate::commands::resolve_selection;
use crate::config::BugHuntConfig;
use crate::error::{BugHuntError, Result};
use crate::models::SearchType;
use crate::render::{JsonRenderer, Renderer, TableRenderer};
use crate::session::{BugBrowser, SearchOutcome};
use colored::*;
use log::info;

/// Options of a one-shot search.
#[derive(Debug, Clone, Default)]
pub struct SearchOptions {
    pub tools: Vec<String>,
    pub all: bool,
    pub search_type: SearchType,
    pub filter: Option<String>,
    pub json: bool,
    pub no_progress: bool,
}

pub struct SearchCommand<'a> {
    config: &'a BugHuntConfig,
}

impl<'a> SearchCommand<'a> {
    pub fn new(config: &'a BugHuntConfig) -> Result<Self> {
        Ok(Self { config })
    }

    pub fn execute(&self, options: &SearchOptions) -> Result<()> {
        let client = BugzillaClient::from_config(&self.config.tracker);
        self.execute_with(client, options)
    }

    pub(crate) fn execute_with<T: BugTracker>(
        &self,
        tracker: T,
        options: &SearchOptions,
    ) -> Result<()> {
        let catalog = self.config.component_catalog()?;
        let keys = resolve_selection(&catalog, &options.tools, options.all)?;

        let renderer: Box<dyn Renderer> = if options.json {
            Box::new(JsonRenderer)
        } else {
            Box::new(TableRenderer::new(self.config.filter.inactive_after_days))
        };

        let mut browser = BugBrowser::from_config(self.config, tracker, renderer)?;
        if let Some(ref filter) = options.filter {
            browser = browser.with_text_filter(filter);
        }

        if keys.is_empty() && !options.json {
            eprintln!(
                "{} Select tools with {} or search them all with {}",
                "Hint:".cyan(),
                "-t <KEY>".bold(),
                "--all".bold()
            );
        }

        info!(
            "Searching {} tool(s) for {}",
            keys.len(),
            options.search_type.description()
        );

        let spinner = Spinner::start(
            format!("Searching {}", options.search_type.description().to_lowercase()),
            options.no_progress || options.json || keys.is_empty(),
        );

        match browser.search(&keys, options.search_type)? {
            SearchOutcome::Unavailable => {
                spinner.fail("Search failed");
                Err(BugHuntError::TrackerFetch(format!(
                    "No answer from {}",
                    self.config.tracker.base_url
                )))
            }
            SearchOutcome::Committed(bugs) => {
                spinner.finish();
                if !options.json {
                    let shown = browser.visible_views().len();
                    eprintln!(
                        "{}",
                        format!("{shown} of {} bugs shown", bugs.len()).dimmed()
                    );
                }
                Ok(())
            }
            SearchOutcome::Empty | SearchOutcome::Superseded => {
                spinner.finish();
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::SearchQuery;
    use crate::models::{BugRecord, Comment};
    use crate::test::fixtures::create_test_bug_with_summary;
    use std::path::PathBuf;

    struct FixedTracker {
        result: Option<Vec<BugRecord>>,
    }

    impl BugTracker for FixedTracker {
        fn search_bugs(&self, _query: &SearchQuery) -> Result<Vec<BugRecord>> {
            self.result
                .clone()
                .ok_or_else(|| BugHuntError::TrackerFetch("down".to_string()))
        }

        fn bug_comments(&self, _bug_id: u64) -> Result<Vec<Comment>> {
            Ok(vec![])
        }
    }

    fn config() -> BugHuntConfig {
        BugHuntConfig::new(PathBuf::from("/tmp/bughunt-search-test"))
    }

    #[test]
    fn test_search_renders_results() {
        let config = config();
        let command = SearchCommand::new(&config).unwrap();
        let tracker = FixedTracker {
            result: Some(vec![create_test_bug_with_summary(1, "Broken layout")]),
        };
        let options = SearchOptions {
            tools: vec!["inspector".to_string()],
            no_progress: true,
            ..Default::default()
        };

        assert!(command.execute_with(tracker, &options).is_ok());
    }

    #[test]
    fn test_search_unknown_tool() {
        let config = config();
        let command = SearchCommand::new(&config).unwrap();
        let options = SearchOptions {
            tools: vec!["nope".to_string()],
            no_progress: true,
            ..Default::default()
        };

        let err = command
            .execute_with(FixedTracker { result: None }, &options)
            .unwrap_err();
        assert!(matches!(err, BugHuntError::UnknownTool { .. }));
    }

    #[test]
    fn test_search_tracker_down() {
        let config = config();
        let command = SearchCommand::new(&config).unwrap();
        let options = SearchOptions {
            all: true,
            json: true,
            ..Default::default()
        };

        let err = command
            .execute_with(FixedTracker { result: None }, &options)
            .unwrap_err();
        assert!(matches!(err, BugHuntError::TrackerFetch(_)));
    }
}
