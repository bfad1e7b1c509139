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

//! The browsing session: search orchestration and per-session state.
//!
//! [`BugBrowser`] owns everything that lives as long as one session does.
//! That covers the result cache, the generation counter, the committed bug
//! list, the text filter and the comment slots. Searches may run on
//! several threads at once; only the most recently issued one is allowed
//! to reach the renderer.

mod comments;
mod debounce;
mod sequencer;


pub use comments::{CommentSlot, CommentSlots};
pub use debounce::Debouncer;
pub use sequencer::{Generation, RequestSequencer};

use crate::api::{BugTracker, QueryBuilder, first_comment};
use crate::cache::ResultCache;
use crate::catalog::ComponentCatalog;
use crate::config::BugHuntConfig;
use crate::error::Result;
use crate::filter::{ActivityFilter, text};
use crate::models::{BugRecord, SearchType};
use crate::render::{BugView, Renderer, ViewBuilder};
use chrono::{DateTime, Utc};
use log::{debug, warn};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::thread::{self, JoinHandle};

type Clock = Box<dyn Fn() -> DateTime<Utc> + Send + Sync>;

/// How a single call to [`BugBrowser::search`] ended.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    /// Nothing was selected; an empty list was rendered.
    Empty,
    /// The result was rendered and became the current list.
    Committed(Vec<BugRecord>),
    /// A newer search was issued before this one finished.
    Superseded,
    /// The tracker failed; nothing was rendered or cached.
    Unavailable,
}

impl SearchOutcome {
    pub fn is_committed(&self) -> bool {
        matches!(self, SearchOutcome::Committed(_))
    }
}

#[derive(Debug, Default)]
struct SessionState {
    current_bugs: Vec<BugRecord>,
    text_filter: String,
    comments: CommentSlots,
}

pub struct BugBrowser<T: BugTracker> {
    tracker: T,
    catalog: ComponentCatalog,
    query_builder: QueryBuilder,
    activity: ActivityFilter,
    view_builder: ViewBuilder,
    renderer: Box<dyn Renderer>,
    clock: Clock,
    sequencer: RequestSequencer,
    cache: Mutex<ResultCache>,
    state: Mutex<SessionState>,
}

impl<T: BugTracker> BugBrowser<T> {
    pub fn new(tracker: T, catalog: ComponentCatalog, renderer: Box<dyn Renderer>) -> Self {
        let activity = ActivityFilter::default();
        Self {
            tracker,
            catalog,
            query_builder: QueryBuilder::new(),
            activity,
            view_builder: ViewBuilder::new(crate::api::BUGZILLA_BASE_URL, activity),
            renderer,
            clock: Box::new(Utc::now),
            sequencer: RequestSequencer::new(),
            cache: Mutex::new(ResultCache::new()),
            state: Mutex::new(SessionState::default()),
        }
    }

    /// A session wired from configuration: catalog, product, threshold,
    /// cache bound and bug link base.
    pub fn from_config(
        config: &BugHuntConfig,
        tracker: T,
        renderer: Box<dyn Renderer>,
    ) -> Result<Self> {
        let catalog = config.component_catalog()?;
        let activity = ActivityFilter::new(config.filter.inactive_after_days);
        let cache = match config.cache.max_entries {
            Some(max) => ResultCache::with_capacity_limit(max),
            None => ResultCache::new(),
        };

        Ok(Self::new(tracker, catalog, renderer)
            .with_query_builder(QueryBuilder::new().product(config.tracker.product.clone()))
            .with_activity_filter(activity)
            .with_bug_url_base(&config.tracker.base_url)
            .with_cache(cache))
    }

    pub fn with_query_builder(mut self, query_builder: QueryBuilder) -> Self {
        self.query_builder = query_builder;
        self
    }

    pub fn with_activity_filter(mut self, activity: ActivityFilter) -> Self {
        self.activity = activity;
        self.view_builder = ViewBuilder::new(self.view_builder.base_url(), activity);
        self
    }

    /// Base of the links shown for each bug.
    pub fn with_bug_url_base(mut self, tracker_base_url: &str) -> Self {
        self.view_builder = ViewBuilder::new(tracker_base_url, self.activity);
        self
    }

    pub fn with_cache(mut self, cache: ResultCache) -> Self {
        self.cache = Mutex::new(cache);
        self
    }

    /// Start with a text filter already set, without rendering.
    pub fn with_text_filter(mut self, text: &str) -> Self {
        self.state
            .get_mut()
            .unwrap_or_else(PoisonError::into_inner)
            .text_filter = text.to_string();
        self
    }

    /// Replace the source of "now" used for the activity rule.
    pub fn with_clock<F>(mut self, clock: F) -> Self
    where
        F: Fn() -> DateTime<Utc> + Send + Sync + 'static,
    {
        self.clock = Box::new(clock);
        self
    }

    pub fn catalog(&self) -> &ComponentCatalog {
        &self.catalog
    }

    pub fn sequencer(&self) -> &RequestSequencer {
        &self.sequencer
    }

    /// Snapshot of the last committed list, before text filtering.
    pub fn current_bugs(&self) -> Vec<BugRecord> {
        self.lock_state().current_bugs.clone()
    }

    pub fn text_filter(&self) -> String {
        self.lock_state().text_filter.clone()
    }

    pub fn cached_queries(&self) -> usize {
        self.lock_cache().len()
    }

    /// Run a search for the selected tools and render it if it is still
    /// the newest search when it completes.
    pub fn search<S: AsRef<str>>(
        &self,
        selected_keys: &[S],
        search_type: SearchType,
    ) -> Result<SearchOutcome> {
        self.lock_state().current_bugs.clear();

        if selected_keys.is_empty() {
            // Still supersedes anything in flight
            let generation = self.sequencer.issue();
            debug!("Generation {generation}: empty selection, skipping tracker");
            let state = self.lock_state();
            if self.sequencer.is_current(generation) {
                self.render_locked(&state);
            }
            return Ok(SearchOutcome::Empty);
        }

        let query = self
            .query_builder
            .build(&self.catalog, selected_keys, search_type);
        let generation = self.sequencer.issue();

        let cached = self.lock_cache().get(&query).map(<[BugRecord]>::to_vec);
        let bugs = match cached {
            Some(bugs) => {
                debug!("Generation {generation}: cache hit ({} bugs)", bugs.len());
                bugs
            }
            None => {
                debug!("Generation {generation}: cache miss, querying tracker");
                let fetched = match self.tracker.search_bugs(&query) {
                    Ok(fetched) => fetched,
                    Err(e) => {
                        warn!("Generation {generation}: search failed: {e}");
                        return Ok(SearchOutcome::Unavailable);
                    }
                };

                let survivors = self.activity.apply(fetched, (self.clock)());
                self.lock_cache().put(&query, survivors.clone());
                survivors
            }
        };

        let mut state = self.lock_state();
        if !self.sequencer.is_current(generation) {
            debug!(
                "Generation {generation} superseded by {}, discarding result",
                self.sequencer.current()
            );
            return Ok(SearchOutcome::Superseded);
        }

        state.current_bugs = bugs.clone();
        self.render_locked(&state);
        Ok(SearchOutcome::Committed(bugs))
    }

    /// Change the free-text filter and re-render the current list.
    pub fn set_text_filter(&self, text: &str) {
        let mut state = self.lock_state();
        state.text_filter = text.to_string();
        self.render_locked(&state);
    }

    /// Expand or collapse a bug's first comment, fetching it once.
    pub fn toggle_comment(&self, bug_id: u64) -> Result<CommentSlot> {
        if !self.lock_state().comments.is_loaded(bug_id) {
            debug!("Fetching first comment of bug {bug_id}");
            let first = first_comment(&self.tracker, bug_id)?;
            self.lock_state().comments.fill(bug_id, first.text);
        }

        let mut state = self.lock_state();
        let slot = state.comments.toggle(bug_id).clone();
        self.render_locked(&state);
        Ok(slot)
    }

    /// Render the current list through the text filter.
    pub fn render_current(&self) {
        let state = self.lock_state();
        self.render_locked(&state);
    }

    /// Views of the current list as they would be rendered.
    pub fn visible_views(&self) -> Vec<BugView> {
        let state = self.lock_state();
        self.views_locked(&state)
    }

    fn views_locked(&self, state: &SessionState) -> Vec<BugView> {
        let now = (self.clock)();
        state
            .current_bugs
            .iter()
            .filter(|bug| text::matches(bug, &state.text_filter))
            .map(|bug| {
                let mut view = self.view_builder.view(bug, &self.catalog, now);
                view.comment = state.comments.visible_text(bug.id).map(str::to_string);
                view
            })
            .collect()
    }

    fn render_locked(&self, state: &SessionState) {
        let views = self.views_locked(state);
        self.renderer.render(&views);
    }

    fn lock_state(&self) -> MutexGuard<'_, SessionState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn lock_cache(&self) -> MutexGuard<'_, ResultCache> {
        self.cache.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<T: BugTracker + 'static> BugBrowser<T> {
    /// Run [`BugBrowser::search`] on a worker thread.
    pub fn spawn_search(
        self: &Arc<Self>,
        selected_keys: Vec<String>,
        search_type: SearchType,
    ) -> JoinHandle<Result<SearchOutcome>> {
        let browser = Arc::clone(self);
        thread::spawn(move || browser.search(&selected_keys, search_type))
    }
}
