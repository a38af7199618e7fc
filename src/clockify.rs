// SPDX-License-Identifier: MPL-2.0

mod api;
#[cfg(test)]
mod fake;
mod resolve;
mod schema;
mod task;

use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Utc};

pub use api::{ClockifyApi, HttpApi, DEFAULT_BASE_URL};
pub use resolve::resolve;
pub use schema::{EntryQuery, Named, NewTimeEntry, TimeEntry, TimeInterval, User};
pub use task::TaskSelector;

use crate::error::{Error, ResourceKind, Result};

/// Hour of the day (UTC) at which submitted entries start.
const WORK_DAY_START_HOUR: i64 = 9;

pub struct Credentials {
    pub api_key: String,
    pub locale: String,
}

/// What `upsert` did to make the day hold exactly one entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Upserted {
    Created { id: String },
    /// An existing entry was rewritten; `removed` duplicates were deleted.
    Updated { id: String, removed: usize },
}

/// Books hours for one task against single calendar days.
///
/// All the remote ids this needs are looked up once, when the manager is
/// built.  After that, each operation is a short fixed sequence of requests.
///
/// The manager keeps at most one entry per day for its task, but only by
/// reading before it writes.  Nothing stops another client from adding an
/// entry for the same day in between, so it must be the only writer for the
/// task while it runs.
pub struct DayEntryManager<A = HttpApi> {
    api: A,
    task: TaskSelector,
    locale: String,
    user_id: String,
    workspace_id: String,
    project_id: String,
    task_id: String,
    locale_id: String,
}

impl DayEntryManager<HttpApi> {
    pub fn connect(
        base_url: &str,
        workspace: &str,
        credentials: &Credentials,
        task: TaskSelector,
    ) -> Result<Self> {
        let api = HttpApi::new(base_url, &credentials.api_key);
        Self::new(api, workspace, task, &credentials.locale)
    }
}

impl<A: ClockifyApi> DayEntryManager<A> {
    pub fn new(api: A, workspace: &str, task: TaskSelector, locale: &str) -> Result<Self> {
        let workspace_id = resolve(ResourceKind::Workspace, workspace, &api.workspaces()?)?;
        log::debug!("Workspace {workspace:?} resolved to {workspace_id}");

        let project_name = task.project_name();
        let project_id = resolve(
            ResourceKind::Project,
            project_name,
            &api.projects(&workspace_id, project_name)?,
        )?;
        log::debug!("Project {project_name:?} resolved to {project_id}");

        let task_name = task.task_name();
        let task_id = resolve(
            ResourceKind::Task,
            task_name,
            &api.tasks(&workspace_id, &project_id, task_name)?,
        )?;
        log::debug!("Task {task_name:?} resolved to {task_id}");

        let locale_id = resolve(ResourceKind::Tag, locale, &api.tags(&workspace_id, locale)?)?;
        log::debug!("Locale tag {locale:?} resolved to {locale_id}");

        let user_id = api.current_user()?.id;
        log::trace!("Authenticated as user {user_id}");

        Ok(Self {
            api,
            task,
            locale: locale.to_owned(),
            user_id,
            workspace_id,
            project_id,
            task_id,
            locale_id,
        })
    }

    pub fn task(&self) -> TaskSelector {
        self.task
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    pub fn workspace_id(&self) -> &str {
        &self.workspace_id
    }

    pub fn project_id(&self) -> &str {
        &self.project_id
    }

    pub fn task_id(&self) -> &str {
        &self.task_id
    }

    pub fn locale_id(&self) -> &str {
        &self.locale_id
    }

    /// All of this task's entries starting on `date`, in the order the
    /// service returned them.
    pub fn time_entries(&self, date: NaiveDate) -> Result<Vec<TimeEntry>> {
        let day_start = start_of_day(date);
        let query = EntryQuery {
            start: day_start,
            end: day_start + Duration::days(1) - Duration::seconds(1),
            project_id: &self.project_id,
            task_id: &self.task_id,
        };
        let entries = self
            .api
            .find_time_entries(&self.workspace_id, &self.user_id, &query)?
            .into_iter()
            // the service's project/task filters are advisory for some plans
            .filter(|entry| {
                entry.project_id.as_deref() == Some(self.project_id.as_str())
                    && entry.task_id.as_deref() == Some(self.task_id.as_str())
                    && entry.time_interval.start.date_naive() == date
            })
            .collect();
        Ok(entries)
    }

    /// Ids of this task's entries on `date`.  Normally zero or one, but this
    /// is a plain query and doesn't check.
    pub fn get_time_entry_id(&self, date: NaiveDate) -> Result<Vec<String>> {
        Ok(self
            .time_entries(date)?
            .into_iter()
            .map(|entry| entry.id)
            .collect())
    }

    pub fn time_entry(&self, entry_id: &str) -> Result<TimeEntry> {
        Ok(self.api.time_entry(&self.workspace_id, entry_id)?)
    }

    /// The remote name of the tag every entry is labelled with.
    pub fn locale_tag_name(&self) -> Result<String> {
        Ok(self.api.tag(&self.workspace_id, &self.locale_id)?.name)
    }

    /// Makes `date` hold exactly one entry for this task, lasting `hours`.
    ///
    /// If the day already has entries the first is rewritten in place and any
    /// others are deleted.
    pub fn upsert(&self, date: NaiveDate, hours: f64) -> Result<Upserted> {
        let body = self.entry_body(date, hours)?;
        let existing = self.time_entries(date)?;

        let Some((first, duplicates)) = existing.split_first() else {
            let created = self.api.create_time_entry(&self.workspace_id, &body)?;
            log::debug!("Created {} entry {} for {date} ({hours}h)", self.task, created.id);
            return Ok(Upserted::Created { id: created.id });
        };

        for duplicate in duplicates {
            log::warn!(
                "Removing duplicate {} entry {} for {date}",
                self.task,
                duplicate.id
            );
            self.api
                .delete_time_entry(&self.workspace_id, &duplicate.id)?;
        }

        let updated = self
            .api
            .update_time_entry(&self.workspace_id, &first.id, &body)?;
        log::debug!("Updated {} entry {} for {date} ({hours}h)", self.task, updated.id);
        Ok(Upserted::Updated {
            id: updated.id,
            removed: duplicates.len(),
        })
    }

    pub fn submit(&self, date: NaiveDate, hours: f64) -> Result<()> {
        self.upsert(date, hours)?;
        Ok(())
    }

    /// Removes every entry this task has on `date`.  Nothing to remove is
    /// not an error.
    pub fn delete_time_entry(&self, date: NaiveDate) -> Result<()> {
        let ids = self.get_time_entry_id(date)?;
        for id in &ids {
            self.api.delete_time_entry(&self.workspace_id, id)?;
            log::info!("Deleted {} entry {id} for {date}", self.task);
        }
        if ids.is_empty() {
            log::debug!("No {} entries to delete for {date}", self.task);
        }
        Ok(())
    }

    fn entry_body(&self, date: NaiveDate, hours: f64) -> Result<NewTimeEntry> {
        if !(hours > 0.0 && hours <= 24.0) {
            return Err(Error::InvalidHours(hours));
        }

        let start = start_of_day(date) + Duration::hours(WORK_DAY_START_HOUR);
        let end = start + Duration::milliseconds((hours * 3_600_000.0).round() as i64);
        Ok(NewTimeEntry {
            start,
            end,
            project_id: self.project_id.clone(),
            task_id: self.task_id.clone(),
            tag_ids: vec![self.locale_id.clone()],
            billable: self.task.billable(),
        })
    }
}

fn start_of_day(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(NaiveTime::MIN).and_utc()
}
