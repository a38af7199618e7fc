// SPDX-License-Identifier: MPL-2.0

use chrono::{Datelike, NaiveDate, Weekday};

pub fn is_working_day(date: NaiveDate) -> bool {
    !matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// The first `count` working days (Monday to Friday) on or after `start`.
pub fn working_days(start: NaiveDate, count: usize) -> Vec<NaiveDate> {
    std::iter::successors(Some(start), |day| day.succ_opt())
        .filter(|day| is_working_day(*day))
        .take(count)
        .collect()
}
