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

//! Post-fetch filtering the tracker cannot express: keep a bug if nobody
//! owns it, or if its owner has not touched it for a while.

use crate::models::BugRecord;
use chrono::{DateTime, Utc};
use log::trace;

/// Days without activity after which an assigned bug counts as abandoned.
pub const INACTIVE_AFTER_DAYS: i64 = 25;

const UNASSIGNED_MARKER: &str = "nobody";
const MILLIS_PER_DAY: i64 = 1000 * 60 * 60 * 24;

/// Whole days elapsed since `last_change`, rounded up.
///
/// A bug changed 24.1 days ago is 25 days old. Changes in the future
/// yield zero or negative values.
pub fn days_since(last_change: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    let millis = now.signed_duration_since(last_change).num_milliseconds();
    // Ceiling division that is also correct for negative spans
    let days = millis.div_euclid(MILLIS_PER_DAY);
    if millis.rem_euclid(MILLIS_PER_DAY) == 0 {
        days
    } else {
        days + 1
    }
}

/// False only for the tracker's placeholder assignee.
pub fn is_assigned(bug: &BugRecord) -> bool {
    !bug.assigned_to.contains(UNASSIGNED_MARKER)
}

pub fn is_inactive(bug: &BugRecord, now: DateTime<Utc>, threshold_days: i64) -> bool {
    days_since(bug.last_change_time, now) >= threshold_days
}

pub fn keep_bug(bug: &BugRecord, now: DateTime<Utc>, threshold_days: i64) -> bool {
    !is_assigned(bug) || is_inactive(bug, now, threshold_days)
}

/// The unassigned-or-stale rule with a configurable threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActivityFilter {
    pub threshold_days: i64,
}

impl ActivityFilter {
    pub fn new(threshold_days: i64) -> Self {
        Self { threshold_days }
    }

    pub fn is_inactive(&self, bug: &BugRecord, now: DateTime<Utc>) -> bool {
        is_inactive(bug, now, self.threshold_days)
    }

    pub fn keeps(&self, bug: &BugRecord, now: DateTime<Utc>) -> bool {
        keep_bug(bug, now, self.threshold_days)
    }

    /// Drop every bug that is assigned and still active. Order is kept.
    pub fn apply(&self, bugs: Vec<BugRecord>, now: DateTime<Utc>) -> Vec<BugRecord> {
        let total = bugs.len();
        let kept: Vec<BugRecord> = bugs.into_iter().filter(|b| self.keeps(b, now)).collect();
        trace!(
            "Activity filter kept {} of {total} bugs (threshold {} days)",
            kept.len(),
            self.threshold_days
        );
        kept
    }
}

impl Default for ActivityFilter {
    fn default() -> Self {
        Self::new(INACTIVE_AFTER_DAYS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::fixtures::create_test_bug;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap()
    }

    fn days_ago(days: f64) -> DateTime<Utc> {
        now() - Duration::milliseconds((days * MILLIS_PER_DAY as f64).round() as i64)
    }

    #[test]
    fn test_days_since_rounds_up() {
        assert_eq!(days_since(days_ago(24.0), now()), 24);
        assert_eq!(days_since(days_ago(24.1), now()), 25);
        assert_eq!(days_since(now() - Duration::milliseconds(1), now()), 1);
        assert_eq!(days_since(now(), now()), 0);
    }

    #[test]
    fn test_days_since_future_change() {
        assert_eq!(days_since(now() + Duration::hours(12), now()), 0);
        assert_eq!(days_since(now() + Duration::days(2), now()), -2);
    }

    #[test]
    fn test_is_assigned() {
        assert!(!is_assigned(&create_test_bug(1, "nobody@mozilla.org", now())));
        assert!(is_assigned(&create_test_bug(1, "Jane Doe", now())));
        // Match is case-sensitive
        assert!(is_assigned(&create_test_bug(1, "Nobody Special", now())));
    }

    #[test]
    fn test_stale_boundary() {
        let stale = create_test_bug(1, "Jane Doe", days_ago(24.1));
        let fresh = create_test_bug(2, "Jane Doe", days_ago(24.0));

        assert!(keep_bug(&stale, now(), INACTIVE_AFTER_DAYS));
        assert!(!keep_bug(&fresh, now(), INACTIVE_AFTER_DAYS));
    }

    #[test]
    fn test_unassigned_kept_regardless_of_activity() {
        let bug = create_test_bug(1, "nobody@mozilla.org", now());
        assert!(keep_bug(&bug, now(), INACTIVE_AFTER_DAYS));
    }

    #[test]
    fn test_assigned_bug_thirty_and_five_days() {
        let abandoned = create_test_bug(1, "Jane Doe", days_ago(30.0));
        let active = create_test_bug(2, "Jane Doe", days_ago(5.0));

        let filter = ActivityFilter::default();
        assert!(filter.keeps(&abandoned, now()));
        assert!(!filter.keeps(&active, now()));
    }

    #[test]
    fn test_apply_keeps_order() {
        let bugs = vec![
            create_test_bug(3, "nobody@mozilla.org", now()),
            create_test_bug(1, "Jane Doe", days_ago(5.0)),
            create_test_bug(2, "Jane Doe", days_ago(40.0)),
        ];

        let kept = ActivityFilter::default().apply(bugs, now());
        let ids: Vec<u64> = kept.iter().map(|b| b.id).collect();
        assert_eq!(ids, vec![3, 2]);
    }

    #[test]
    fn test_custom_threshold() {
        let bug = create_test_bug(1, "Jane Doe", days_ago(5.0));
        assert!(ActivityFilter::new(5).keeps(&bug, now()));
        assert!(!ActivityFilter::new(6).keeps(&bug, now()));
    }
}
