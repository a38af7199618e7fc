// SPDX-License-Identifier: MPL-2.0

use std::{fmt::Display, io::Write};

use anyhow::Result;
use chrono::{DateTime, Datelike, Duration, TimeZone, Timelike};

use crate::clockify::{TaskSelector, TimeEntry};

/// How entries are labelled in the listing.
pub struct Labels<'a> {
    pub task: TaskSelector,
    pub locale: &'a str,
    pub locale_id: &'a str,
}

pub fn print_header(writer: &mut impl Write) -> Result<()> {
    writeln!(
        writer,
        "{:15}{:19} {:>10}  {:10}  {:6}  {}",
        "Date", "Times", "Duration", "Task", "Locale", "Id"
    )?;
    Ok(())
}

/// Prints one line per entry, showing the date only on the first line.  An
/// entry whose tags aren't exactly the locale tag is flagged with `?`.
pub fn print_entries<Tz>(
    writer: &mut impl Write,
    mut entries: Vec<TimeEntry>,
    labels: &Labels<'_>,
    tz: &Tz,
) -> Result<()>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    entries.sort_by_key(|entry| entry.time_interval.start);

    let mut last_date = None;
    for entry in entries {
        let started_at = entry.time_interval.start.with_timezone(tz);
        if Some(started_at.date_naive()) != last_date {
            last_date = Some(started_at.date_naive());
            print_date(writer, &started_at)?;
        } else {
            write!(writer, "             ")?;
        }

        write!(writer, "  ")?;
        let ended_at = entry.time_interval.end.map(|e| e.with_timezone(tz));
        print_times(writer, &started_at, &ended_at)?;

        let duration = entry
            .duration()
            .map(duration_to_string)
            .unwrap_or_else(|| "running".into());
        let locale = if entry.tag_ids() == [labels.locale_id] {
            labels.locale
        } else {
            "?"
        };
        writeln!(
            writer,
            " {:>10}  {:10}  {:6}  {}",
            duration,
            labels.task.to_string(),
            locale,
            entry.id,
        )?;
    }
    Ok(())
}

fn print_date<Tz>(writer: &mut impl Write, started_at: &DateTime<Tz>) -> Result<()>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let weekday = &started_at.weekday().to_string()[..2];
    let date = started_at.format("%e %b '%y");

    write!(writer, "{weekday} {date}")?;
    Ok(())
}

fn duration_to_string(mut duration: Duration) -> String {
    let mut buf = String::new();
    let days = duration.num_days();
    if days > 0 {
        buf.push_str(&days.to_string());
        buf.push('d');
    }
    duration -= Duration::days(days);
    let hours = duration.num_hours();
    if hours > 0 || !buf.is_empty() {
        if !buf.is_empty() {
            buf.push(' ');
        }
        buf.push_str(&hours.to_string());
        buf.push('h');
    }
    duration -= Duration::hours(hours);
    let minutes = duration.num_minutes();
    if minutes > 0 || !buf.is_empty() {
        if !buf.is_empty() {
            buf.push(' ');
        }
        buf.push_str(&minutes.to_string());
        buf.push('m');
    }

    buf
}

fn print_times<Tz>(
    writer: &mut impl Write,
    started_at: &DateTime<Tz>,
    ended_at: &Option<DateTime<Tz>>,
) -> Result<()>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    write!(
        writer,
        "{:02}:{:02}:{:02}-",
        started_at.hour(),
        started_at.minute(),
        started_at.second()
    )?;

    match ended_at {
        Some(ended_at) => {
            write!(
                writer,
                "{:02}:{:02}:{:02}",
                ended_at.hour(),
                ended_at.minute(),
                ended_at.second(),
            )?;
            let end_date = ended_at.date_naive();
            let start_date = started_at.date_naive();
            let day_gap = (end_date - start_date).num_days();
            if day_gap > 0 {
                write!(writer, "+{day_gap}")?;
            } else {
                write!(writer, "  ")?;
            }
        }
        None => {
            write!(writer, "          ")?;
        }
    }

    Ok(())
}
