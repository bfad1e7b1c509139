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

use std::sync::atomic::{AtomicU64, Ordering};

/// Stamp carried by one search from issue to completion.
pub type Generation = u64;

/// Last-request-wins ordering for overlapping searches.
///
/// Every search takes a new generation when it starts. When its answer
/// arrives it may only be displayed if no newer generation was issued in
/// the meantime. Nothing is cancelled; stale answers are just dropped.
#[derive(Debug, Default)]
pub struct RequestSequencer {
    current: AtomicU64,
}

impl RequestSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new search and return its generation.
    pub fn issue(&self) -> Generation {
        self.current.fetch_add(1, Ordering::SeqCst) + 1
    }

    pub fn current(&self) -> Generation {
        self.current.load(Ordering::SeqCst)
    }

    /// Whether `generation` is still the newest search.
    pub fn is_current(&self, generation: Generation) -> bool {
        self.current() == generation
    }
}
