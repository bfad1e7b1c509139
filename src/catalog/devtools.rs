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

use super::ComponentEntry;

/// Firefox DevTools tools, keyed the way users pick them.
pub(super) fn entries() -> Vec<ComponentEntry> {
    vec![
        ComponentEntry::new("inspector", "Inspector", &["Developer Tools: Inspector"]),
        ComponentEntry::new("console", "Web Console", &["Developer Tools: Console"]),
        ComponentEntry::new("debugger", "JS Debugger", &["Developer Tools: Debugger"]),
        ComponentEntry::new("network", "Network Monitor", &["Developer Tools: Netmonitor"]),
        ComponentEntry::new("style", "Style Editor", &["Developer Tools: Style Editor"]),
        ComponentEntry::new(
            "perf",
            "Performance Tools",
            &[
                "Developer Tools: Memory",
                "Developer Tools: Performance Tools (Profiler/Timeline)",
            ],
        ),
        ComponentEntry::new(
            "storage",
            "Storage Inspector",
            &["Developer Tools: Storage Inspector"],
        ),
        ComponentEntry::new("canvas", "Canvas Debugger", &["Developer Tools: Canvas Debugger"]),
        ComponentEntry::new(
            "gcli",
            "Command Line",
            &["Developer Tools: Graphic Commandline and Toolbar"],
        ),
        ComponentEntry::new(
            "responsive",
            "Responsive Mode",
            &["Developer Tools: Responsive Mode"],
        ),
        ComponentEntry::new("scratchpad", "Scratchpad", &["Developer Tools: Scratchpad"]),
        ComponentEntry::new(
            "audio",
            "Web Audio Editor",
            &["Developer Tools: Web Audio Editor"],
        ),
        ComponentEntry::new(
            "shader",
            "WebGL Shader Editor",
            &["Developer Tools: WebGL Shader Editor"],
        ),
        ComponentEntry::new("webide", "WebIDE", &["Developer Tools: WebIDE"]),
        ComponentEntry::new("tilt", "3D View", &["Developer Tools: 3D View"]),
        ComponentEntry::new(
            "main",
            "Everything Else",
            &[
                "Developer Tools",
                "Developer Tools: Framework",
                "Developer Tools: Object Inspector",
                "Developer Tools: Source Editor",
            ],
        ),
    ]
}
