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

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A throwaway BUGHUNT_HOME, removed when the guard is dropped.
pub struct TestHomeGuard {
    dir: TempDir,
}

impl TestHomeGuard {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create test home directory");
        Self { dir }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn bughunt_home(&self) -> PathBuf {
        self.dir.path().join(".bughunt")
    }

    /// Write `config.toml` with the given contents.
    #[allow(dead_code)]
    pub fn write_config(&self, contents: &str) -> &Self {
        let home = self.bughunt_home();
        fs::create_dir_all(&home).expect("Failed to create .bughunt directory");
        fs::write(home.join("config.toml"), contents).expect("Failed to write config.toml");
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cleans_up_directory() {
        let path = {
            let guard = TestHomeGuard::new();
            assert!(guard.path().exists());
            guard.path().to_path_buf()
        };
        assert!(!path.exists());
    }

    #[test]
    fn test_write_config() {
        let guard = TestHomeGuard::new();
        guard.write_config("[filter]\ninactive_after_days = 3\n");
        assert!(guard.bughunt_home().join("config.toml").exists());
    }
}
