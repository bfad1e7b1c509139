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

use crate::api::{BugzillaClient, first_comment};
use crate::config::BugHuntConfig;
use crate::error::Result;
use colored::*;

pub struct CommentCommand<'a> {
    config: &'a BugHuntConfig,
}

impl<'a> CommentCommand<'a> {
    pub fn new(config: &'a BugHuntConfig) -> Result<Self> {
        Ok(Self { config })
    }

    pub fn execute(&self, bug_id: u64) -> Result<()> {
        let client = BugzillaClient::from_config(&self.config.tracker);
        let comment = first_comment(&client, bug_id)?;

        println!(
            "{} {}",
            format!("Bug {bug_id}").cyan().bold(),
            client.bug_url(bug_id).dimmed()
        );
        if let Some(ref creator) = comment.creator {
            println!("{} {creator}", "Reported by".dimmed());
        }
        println!();
        println!("{}", comment.text);
        Ok(())
    }
}
