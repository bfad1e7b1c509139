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

use crate::error::{BugHuntError, ErrorContext};

const RED: &str = "\x1b[31m";
const YELLOW: &str = "\x1b[33m";
const CYAN: &str = "\x1b[36m";
const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";

pub fn format_error_chain(error: &BugHuntError) -> String {
    ErrorContext::new(error).to_string()
}

/// Format an error for the terminal, with ANSI colors when `use_color` is set.
pub fn format_error_with_color(error: &BugHuntError, use_color: bool) -> String {
    let paint = |code: &'static str| if use_color { code } else { "" };
    let (red, yellow, cyan, bold, reset) =
        (paint(RED), paint(YELLOW), paint(CYAN), paint(BOLD), paint(RESET));

    let context = ErrorContext::new(error);
    let mut output = format!("{red}{bold}Error:{reset} {error}\n");

    if let Some(details) = &context.details {
        output.push_str(&format!("\n{details}\n"));
    }

    if let Some(suggestion) = &context.suggestion {
        output.push_str(&format!("\n{yellow}{bold}Suggestions:{reset}\n"));
        for line in suggestion.lines().filter(|l| !l.trim().is_empty()) {
            output.push_str(&format!("{cyan}• {}{reset}\n", line.trim_start()));
        }
    }

    // Terminate with a reset so colors never bleed into the shell prompt
    output.push_str(reset);
    output
}
