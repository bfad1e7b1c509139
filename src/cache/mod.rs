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

//! In-memory memo of filtered search results.
//!
//! Entries live for the whole session and are never invalidated, so a
//! repeated search is answered without touching the tracker even if the
//! tracker has changed in the meantime.


use crate::api::SearchQuery;
use crate::models::BugRecord;
use log::debug;
use std::collections::{HashMap, VecDeque};

#[derive(Debug, Default)]
pub struct ResultCache {
    entries: HashMap<String, Vec<BugRecord>>,
    /// Insertion order, used only when a capacity is set
    order: VecDeque<String>,
    max_entries: Option<usize>,
}

impl ResultCache {
    /// An unbounded cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// A cache that evicts its oldest entry once `max_entries` is exceeded.
    pub fn with_capacity_limit(max_entries: usize) -> Self {
        Self {
            max_entries: Some(max_entries.max(1)),
            ..Self::default()
        }
    }

    pub fn get(&self, query: &SearchQuery) -> Option<&[BugRecord]> {
        self.entries.get(&query.cache_key()).map(|v| v.as_slice())
    }

    pub fn contains(&self, query: &SearchQuery) -> bool {
        self.entries.contains_key(&query.cache_key())
    }

    pub fn put(&mut self, query: &SearchQuery, bugs: Vec<BugRecord>) {
        let key = query.cache_key();

        if self.entries.insert(key.clone(), bugs).is_none() {
            self.order.push_back(key);
        }

        if let Some(max) = self.max_entries {
            while self.entries.len() > max {
                let Some(oldest) = self.order.pop_front() else {
                    break;
                };
                self.entries.remove(&oldest);
                debug!("Evicted cached result ({max} entries max)");
            }
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.order.clear();
    }
}
