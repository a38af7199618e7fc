// SPDX-License-Identifier: MPL-2.0

use std::fmt::Display;

use clap::ValueEnum;
use serde::Deserialize;

pub const STAFFING_PROJECT: &str = "Jupiter Staffing APAC";
pub const NON_BILLABLE_PROJECT: &str = "Jupiter Non-Billable";

/// The kinds of work hours can be booked against.
#[derive(ValueEnum, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum TaskSelector {
    /// hours spent on live work
    Live,
    /// hours spent in training
    Training,
    /// out of office
    #[value(name = "OOO", alias = "ooo")]
    #[serde(rename = "OOO", alias = "ooo")]
    OutOfOffice,
    /// public or annual holiday
    Holiday,
}

impl TaskSelector {
    #[cfg(test)]
    pub const ALL: [TaskSelector; 4] = [
        TaskSelector::Live,
        TaskSelector::Training,
        TaskSelector::OutOfOffice,
        TaskSelector::Holiday,
    ];

    /// Name of the project the task lives under.
    pub fn project_name(self) -> &'static str {
        match self {
            TaskSelector::Live | TaskSelector::Training => STAFFING_PROJECT,
            TaskSelector::OutOfOffice | TaskSelector::Holiday => NON_BILLABLE_PROJECT,
        }
    }

    pub fn task_name(self) -> &'static str {
        match self {
            TaskSelector::Live => "Live hours",
            TaskSelector::Training => "Training",
            TaskSelector::OutOfOffice => "Out Of Office",
            TaskSelector::Holiday => "Holiday",
        }
    }

    pub fn billable(self) -> bool {
        self.project_name() == STAFFING_PROJECT
    }
}

impl Display for TaskSelector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            TaskSelector::Live => "live",
            TaskSelector::Training => "training",
            TaskSelector::OutOfOffice => "OOO",
            TaskSelector::Holiday => "holiday",
        };
        f.write_str(name)
    }
}
