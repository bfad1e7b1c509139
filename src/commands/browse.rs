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

//! Interactive browsing session driven by line commands on stdin.
//!
//! Selection changes start a background search right away. Filter input
//! goes through a [`Debouncer`] so that typing several filters in a row
//! only re-renders once.

use crate::api::{BugTracker, BugzillaClient};
use crate::catalog::ComponentCatalog;
use crate::config::BugHuntConfig;
use crate::error::{BugHuntError, Result, format_error_chain};
use crate::models::SearchType;
use crate::render::TableRenderer;
use crate::session::{BugBrowser, Debouncer, SearchOutcome};
use colored::*;
use log::{debug, warn};
use std::io::{self, BufRead, IsTerminal, Write};
use std::str::FromStr;
use std::sync::Arc;
use std::thread::JoinHandle;
use std::time::Duration;

const HELP: &str = "\
Commands:
  tool +KEY | tool -KEY   add or remove a tool
  all                     select every tool
  type TYPE               good-first, all-mentored, all-polish or all-bugs
  filter TEXT             show bugs whose summary or id contains TEXT
  toggle ID               expand or collapse a bug's first comment
  show                    print the current list again
  help                    show this help
  quit                    leave the session";

/// One line of session input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowseInput {
    AddTool(String),
    RemoveTool(String),
    All,
    Type(SearchType),
    Filter(String),
    Toggle(u64),
    Show,
    Help,
    Quit,
}

impl FromStr for BrowseInput {
    type Err = BugHuntError;

    fn from_str(line: &str) -> Result<Self> {
        let line = line.trim();
        let (command, rest) = match line.split_once(char::is_whitespace) {
            Some((command, rest)) => (command, rest.trim()),
            None => (line, ""),
        };

        match command.to_lowercase().as_str() {
            "tool" => {
                if let Some(key) = rest.strip_prefix('+') {
                    Ok(BrowseInput::AddTool(key.trim().to_string()))
                } else if let Some(key) = rest.strip_prefix('-') {
                    Ok(BrowseInput::RemoveTool(key.trim().to_string()))
                } else {
                    Err(BugHuntError::InvalidCommand(format!(
                        "expected 'tool +KEY' or 'tool -KEY', got '{line}'"
                    )))
                }
            }
            "all" => Ok(BrowseInput::All),
            "type" => Ok(BrowseInput::Type(rest.parse()?)),
            "filter" => Ok(BrowseInput::Filter(rest.to_string())),
            "toggle" => rest.parse::<u64>().map(BrowseInput::Toggle).map_err(|_| {
                BugHuntError::InvalidCommand(format!("'{rest}' is not a bug id"))
            }),
            "show" => Ok(BrowseInput::Show),
            "help" | "?" => Ok(BrowseInput::Help),
            "quit" | "exit" | "q" => Ok(BrowseInput::Quit),
            _ => Err(BugHuntError::InvalidCommand(line.to_string())),
        }
    }
}

/// Tools and search type currently picked in the session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    keys: Vec<String>,
    search_type: SearchType,
}

impl Selection {
    pub fn new(keys: Vec<String>, search_type: SearchType) -> Self {
        let mut selection = Self {
            keys: Vec::new(),
            search_type,
        };
        for key in keys {
            selection.add(&key);
        }
        selection
    }

    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    pub fn search_type(&self) -> SearchType {
        self.search_type
    }

    /// Returns whether the selection changed.
    pub fn add(&mut self, key: &str) -> bool {
        if self.keys.iter().any(|k| k == key) {
            return false;
        }
        self.keys.push(key.to_string());
        true
    }

    pub fn remove(&mut self, key: &str) -> bool {
        let before = self.keys.len();
        self.keys.retain(|k| k != key);
        self.keys.len() != before
    }

    pub fn select_all(&mut self, catalog: &ComponentCatalog) -> bool {
        let mut changed = false;
        for key in catalog.all_keys() {
            changed |= self.add(key);
        }
        changed
    }

    pub fn set_search_type(&mut self, search_type: SearchType) -> bool {
        let changed = self.search_type != search_type;
        self.search_type = search_type;
        changed
    }
}

pub struct BrowseCommand<'a> {
    config: &'a BugHuntConfig,
}

impl<'a> BrowseCommand<'a> {
    pub fn new(config: &'a BugHuntConfig) -> Result<Self> {
        Ok(Self { config })
    }

    pub fn execute(&self, tools: &[String], search_type: SearchType) -> Result<()> {
        let client = BugzillaClient::from_config(&self.config.tracker);
        let stdin = io::stdin();
        let interactive = stdin.is_terminal();
        self.execute_with(client, tools, search_type, stdin.lock(), interactive)
    }

    pub(crate) fn execute_with<T, R>(
        &self,
        tracker: T,
        tools: &[String],
        search_type: SearchType,
        input: R,
        interactive: bool,
    ) -> Result<()>
    where
        T: BugTracker + 'static,
        R: BufRead,
    {
        let renderer = TableRenderer::new(self.config.filter.inactive_after_days);
        let browser = Arc::new(BugBrowser::from_config(
            self.config,
            tracker,
            Box::new(renderer),
        )?);
        browser.catalog().validate_keys(tools)?;

        let filter_target = Arc::clone(&browser);
        let debouncer = Debouncer::new(
            Duration::from_millis(self.config.filter.debounce_ms),
            move |text: String| filter_target.set_text_filter(&text),
        );

        let mut session = BrowseSession {
            browser,
            selection: Selection::new(tools.to_vec(), search_type),
            debouncer,
            pending: Vec::new(),
        };

        if interactive {
            println!("{}", "Type 'help' for commands, 'quit' to leave.".dimmed());
        }
        session.run(input, interactive)
    }
}

struct BrowseSession<T: BugTracker + 'static> {
    browser: Arc<BugBrowser<T>>,
    selection: Selection,
    debouncer: Debouncer<String>,
    pending: Vec<JoinHandle<Result<SearchOutcome>>>,
}

impl<T: BugTracker + 'static> BrowseSession<T> {
    fn run<R: BufRead>(&mut self, input: R, interactive: bool) -> Result<()> {
        self.start_search();

        let mut lines = input.lines();
        loop {
            if interactive {
                print!("{} ", "bughunt>".green());
                io::stdout().flush()?;
            }

            let Some(line) = lines.next() else {
                break;
            };
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }

            match line.parse::<BrowseInput>() {
                Ok(BrowseInput::Quit) => break,
                Ok(input) => {
                    if let Err(e) = self.handle(input) {
                        eprintln!("{}", format_error_chain(&e));
                    }
                }
                Err(e) => eprintln!("{}", format_error_chain(&e)),
            }
        }

        self.finish();
        Ok(())
    }

    fn handle(&mut self, input: BrowseInput) -> Result<()> {
        let changed = match input {
            BrowseInput::AddTool(key) => {
                self.browser.catalog().validate_keys(&[key.as_str()])?;
                self.selection.add(&key)
            }
            BrowseInput::RemoveTool(key) => self.selection.remove(&key),
            BrowseInput::All => self.selection.select_all(self.browser.catalog()),
            BrowseInput::Type(search_type) => self.selection.set_search_type(search_type),
            BrowseInput::Filter(text) => {
                self.debouncer.call(text);
                false
            }
            BrowseInput::Toggle(bug_id) => {
                self.browser.toggle_comment(bug_id)?;
                false
            }
            BrowseInput::Show => {
                self.browser.render_current();
                false
            }
            BrowseInput::Help => {
                println!("{HELP}");
                false
            }
            BrowseInput::Quit => false,
        };

        if changed {
            self.start_search();
        }
        Ok(())
    }

    fn start_search(&mut self) {
        self.pending.retain(|handle| !handle.is_finished());

        debug!(
            "Selection changed: [{}] ({})",
            self.selection.keys().join(", "),
            self.selection.search_type().id()
        );
        let handle = self
            .browser
            .spawn_search(self.selection.keys().to_vec(), self.selection.search_type());
        self.pending.push(handle);
    }

    /// Wait for searches still in flight so their cache writes complete.
    fn finish(&mut self) {
        for handle in self.pending.drain(..) {
            match handle.join() {
                Ok(Ok(outcome)) => debug!("Search finished: {outcome:?}"),
                Ok(Err(e)) => warn!("Search failed: {e}"),
                Err(_) => warn!("Search thread panicked"),
            }
        }
    }
}
