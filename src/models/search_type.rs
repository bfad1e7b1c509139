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

use crate::error::{BugHuntError, Result};
use clap::ValueEnum;
use std::fmt;
use std::str::FromStr;

/// Which flavour of open bugs to look for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, ValueEnum)]
pub enum SearchType {
    /// No type selected; behaves like `AllBugs`
    #[default]
    #[value(skip)]
    Unspecified,
    /// Bugs tagged "good first bug" on the whiteboard
    #[value(name = "good-first")]
    GoodFirst,
    /// Bugs that have a mentor assigned
    #[value(name = "all-mentored")]
    AllMentored,
    /// Bugs tagged "polish-backlog" on the whiteboard
    #[value(name = "all-polish")]
    Polish,
    /// Every open bug in the selected components
    #[value(name = "all-bugs")]
    AllBugs,
}

impl SearchType {
    pub fn id(&self) -> &'static str {
        match self {
            SearchType::Unspecified => "",
            SearchType::GoodFirst => "good-first",
            SearchType::AllMentored => "all-mentored",
            SearchType::Polish => "all-polish",
            SearchType::AllBugs => "all-bugs",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            SearchType::Unspecified | SearchType::AllBugs => "All bugs",
            SearchType::GoodFirst => "Good first bugs",
            SearchType::AllMentored => "Mentored bugs",
            SearchType::Polish => "Polish backlog",
        }
    }
}

impl fmt::Display for SearchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description())
    }
}

impl FromStr for SearchType {
    type Err = BugHuntError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "" => Ok(SearchType::Unspecified),
            "good-first" => Ok(SearchType::GoodFirst),
            "all-mentored" => Ok(SearchType::AllMentored),
            "all-polish" => Ok(SearchType::Polish),
            "all-bugs" => Ok(SearchType::AllBugs),
            other => Err(BugHuntError::InvalidSearchType(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_search_types() {
        assert_eq!(
            "good-first".parse::<SearchType>().unwrap(),
            SearchType::GoodFirst
        );
        assert_eq!(
            "ALL-MENTORED".parse::<SearchType>().unwrap(),
            SearchType::AllMentored
        );
        assert_eq!("all-polish".parse::<SearchType>().unwrap(), SearchType::Polish);
        assert_eq!("all-bugs".parse::<SearchType>().unwrap(), SearchType::AllBugs);
        assert_eq!("".parse::<SearchType>().unwrap(), SearchType::Unspecified);
    }

    #[test]
    fn test_parse_invalid_search_type() {
        let err = "fresh".parse::<SearchType>().unwrap_err();
        assert!(matches!(err, BugHuntError::InvalidSearchType(s) if s == "fresh"));
    }

    #[test]
    fn test_descriptions() {
        assert_eq!(SearchType::GoodFirst.to_string(), "Good first bugs");
        assert_eq!(SearchType::AllMentored.description(), "Mentored bugs");
    }

    #[test]
    fn test_unspecified_is_default() {
        assert_eq!(SearchType::default(), SearchType::Unspecified);
        assert_eq!(SearchType::Unspecified.to_string(), "All bugs");
    }
}
