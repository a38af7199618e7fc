// SPDX-License-Identifier: MPL-2.0

use anyhow::{anyhow, Context as _, Result};
use chrono::{Local, NaiveDate, Utc};
use tp_timesheet::{
    calendar::working_days,
    clockify::{DayEntryManager, TaskSelector, Upserted},
    commands::{Remove, Show, Submit},
    config::Config,
    parse::parse_date,
    print::{print_entries, print_header, Labels},
};

fn connect(config: &Config, task: Option<TaskSelector>) -> Result<DayEntryManager> {
    let task = task.unwrap_or(config.task);
    DayEntryManager::connect(
        &config.base_url,
        &config.workspace,
        &config.credentials(),
        task,
    )
    .with_context(|| format!("could not look up the {task} task in {}", config.workspace))
}

fn date_arg(date: &str) -> Result<NaiveDate> {
    let today = Local::now().naive_local().date();
    parse_date(date, today).ok_or(anyhow!("could not parse date {date}"))
}

pub fn submit(config: Config, submit: Submit) -> Result<()> {
    let start = date_arg(&submit.start)?;
    let hours = submit.hours.unwrap_or(config.hours);
    let days = working_days(start, submit.count.into());

    let manager = connect(&config, submit.task)?;
    for day in days {
        match manager.upsert(day, hours)? {
            Upserted::Created { .. } => {
                log::info!("Submitted {hours}h of {} for {day}", manager.task())
            }
            Upserted::Updated { removed, .. } if removed > 0 => log::warn!(
                "Replaced {} entries with {hours}h of {} for {day}",
                removed + 1,
                manager.task()
            ),
            Upserted::Updated { .. } => {
                log::info!("Resubmitted {hours}h of {} for {day}", manager.task())
            }
        }
    }

    Ok(())
}

pub fn ls(config: Config, show: Show) -> Result<()> {
    let date = date_arg(&show.date)?;
    let manager = connect(&config, show.task)?;
    let entries = manager.time_entries(date)?;
    if entries.is_empty() {
        log::info!("No {} entries for {date}", manager.task());
        return Ok(());
    }

    let labels = Labels {
        task: manager.task(),
        locale: manager.locale(),
        locale_id: manager.locale_id(),
    };
    let mut stdout = std::io::stdout().lock();
    print_header(&mut stdout)?;
    print_entries(&mut stdout, entries, &labels, &Utc)?;
    Ok(())
}

pub fn rm(config: Config, remove: Remove) -> Result<()> {
    let date = date_arg(&remove.date)?;
    let manager = connect(&config, remove.task)?;
    manager.delete_time_entry(date)?;
    Ok(())
}
