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

pub mod browse;
pub mod comment;
pub mod progress;
pub mod search;
pub mod tools;

use crate::catalog::ComponentCatalog;
use crate::error::Result;

/// The tool keys a command should search: every key with `all`, otherwise
/// the given ones after checking them against the catalog.
pub(crate) fn resolve_selection(
    catalog: &ComponentCatalog,
    tools: &[String],
    all: bool,
) -> Result<Vec<String>> {
    if all {
        return Ok(catalog.all_keys().into_iter().map(str::to_string).collect());
    }

    catalog.validate_keys(tools)?;
    Ok(tools.to_vec())
}
