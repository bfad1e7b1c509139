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

use crate::catalog::ComponentCatalog;
use crate::config::BugHuntConfig;
use crate::error::Result;
use comfy_table::{Cell, Color, ContentArrangement, Table};

pub struct ToolsCommand<'a> {
    config: &'a BugHuntConfig,
}

impl<'a> ToolsCommand<'a> {
    pub fn new(config: &'a BugHuntConfig) -> Result<Self> {
        Ok(Self { config })
    }

    pub fn execute(&self, sorted: bool) -> Result<()> {
        let catalog = self.config.component_catalog()?;
        println!("{}", format_tools_table(&catalog, sorted));
        Ok(())
    }
}

/// Catalog listing, in catalog order or sorted by label.
pub fn format_tools_table(catalog: &ComponentCatalog, sorted: bool) -> String {
    let keys = if sorted {
        catalog.keys_sorted_by_label()
    } else {
        catalog.all_keys()
    };

    let mut table = Table::new();
    table.load_preset(comfy_table::presets::UTF8_BORDERS_ONLY);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        Cell::new("Key"),
        Cell::new("Tool"),
        Cell::new("Tracker components"),
    ]);

    for entry in keys.into_iter().filter_map(|key| catalog.get(key)) {
        table.add_row(vec![
            Cell::new(&entry.key).fg(Color::Cyan),
            Cell::new(&entry.label),
            Cell::new(entry.tracker_components.join("\n")),
        ]);
    }

    table.to_string()
}
