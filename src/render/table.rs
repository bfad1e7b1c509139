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

use super::{BugView, Renderer};
use colored::*;
use comfy_table::{Cell, Color, ContentArrangement, Table};

const EMPTY_LIST_MESSAGE: &str = "No bugs found";

/// Prints bugs as a terminal table, followed by any expanded comments.
#[derive(Debug, Clone)]
pub struct TableRenderer {
    inactive_after_days: i64,
}

impl TableRenderer {
    pub fn new(inactive_after_days: i64) -> Self {
        Self {
            inactive_after_days,
        }
    }
}

impl Renderer for TableRenderer {
    fn render(&self, bugs: &[BugView]) {
        println!("{}", format_bug_table(bugs, self.inactive_after_days));

        for view in bugs {
            if let Some(ref comment) = view.comment {
                println!(
                    "\n{} {}",
                    format!("Bug {}", view.bug.id).cyan().bold(),
                    "first comment:".dimmed()
                );
                println!("{comment}");
            }
        }
    }
}

pub fn format_bug_table(bugs: &[BugView], inactive_after_days: i64) -> String {
    if bugs.is_empty() {
        return EMPTY_LIST_MESSAGE.to_string();
    }

    let mut table = Table::new();
    table.load_preset(comfy_table::presets::UTF8_BORDERS_ONLY);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        Cell::new("Bug"),
        Cell::new("Summary"),
        Cell::new("Tool"),
        Cell::new("Mentor"),
        Cell::new("Activity"),
    ]);

    for view in bugs {
        let activity = if view.is_inactive {
            Cell::new(format!("inactive {inactive_after_days}+ days")).fg(Color::Yellow)
        } else {
            Cell::new("-").fg(Color::DarkGrey)
        };

        table.add_row(vec![
            Cell::new(view.bug.id).fg(Color::Cyan),
            Cell::new(&view.bug.summary),
            Cell::new(view.tool_label.as_deref().unwrap_or("-")),
            Cell::new(view.mentor_display_name.as_deref().unwrap_or("")),
            activity,
        ]);
    }

    table.to_string()
}
