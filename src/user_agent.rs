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

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// User-Agent for requests made on behalf of `feature`.
pub fn for_feature(feature: &str) -> String {
    format!("bughunt/{feature}/{VERSION}")
}

pub fn tracker_client() -> String {
    for_feature("tracker")
}
