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

use std::collections::HashMap;

/// Expansion state of one bug's first comment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommentSlot {
    pub expanded: bool,
    pub text: Option<String>,
}

impl CommentSlot {
    pub fn is_loaded(&self) -> bool {
        self.text.is_some()
    }

    /// The text to show, only while expanded.
    pub fn visible_text(&self) -> Option<&str> {
        if self.expanded {
            self.text.as_deref()
        } else {
            None
        }
    }
}

#[derive(Debug, Default)]
pub struct CommentSlots {
    slots: HashMap<u64, CommentSlot>,
}

impl CommentSlots {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, bug_id: u64) -> Option<&CommentSlot> {
        self.slots.get(&bug_id)
    }

    pub fn is_loaded(&self, bug_id: u64) -> bool {
        self.get(bug_id).is_some_and(CommentSlot::is_loaded)
    }

    /// Flip expansion and return the new state.
    pub fn toggle(&mut self, bug_id: u64) -> &CommentSlot {
        let slot = self.slots.entry(bug_id).or_default();
        slot.expanded = !slot.expanded;
        slot
    }

    /// Store fetched text. Text that is already present wins.
    pub fn fill(&mut self, bug_id: u64, text: String) -> &CommentSlot {
        let slot = self.slots.entry(bug_id).or_default();
        if slot.text.is_none() {
            slot.text = Some(text);
        }
        slot
    }

    pub fn visible_text(&self, bug_id: u64) -> Option<&str> {
        self.get(bug_id).and_then(CommentSlot::visible_text)
    }
}
