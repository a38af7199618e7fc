// SPDX-License-Identifier: MPL-2.0

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Workspaces, projects, tasks and tags all come back from the listing endpoints
/// with at least an id and a display name.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Named {
    pub id: String,
    pub name: String,
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: String,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TimeEntry {
    pub id: String,
    pub project_id: Option<String>,
    pub task_id: Option<String>,
    // the service sends `null` rather than `[]` for untagged entries
    #[serde(default)]
    pub tag_ids: Option<Vec<String>>,
    pub time_interval: TimeInterval,
}

impl TimeEntry {
    pub fn tag_ids(&self) -> &[String] {
        self.tag_ids.as_deref().unwrap_or_default()
    }

    pub fn duration(&self) -> Option<Duration> {
        self.time_interval
            .end
            .map(|end| end - self.time_interval.start)
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct TimeInterval {
    pub start: DateTime<Utc>,
    pub end: Option<DateTime<Utc>>,
}

/// Request body for both creating and replacing a time entry.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewTimeEntry {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub project_id: String,
    pub task_id: String,
    pub tag_ids: Vec<String>,
    pub billable: bool,
}

/// Filters for the per-user time entry search.  `start` and `end` bound the
/// entry start time, inclusively.
#[derive(Debug, Clone, Copy)]
pub struct EntryQuery<'a> {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub project_id: &'a str,
    pub task_id: &'a str,
}
