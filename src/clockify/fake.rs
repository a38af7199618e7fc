// SPDX-License-Identifier: MPL-2.0

//! In-memory stand-in for the time-tracking service, seeded with the same
//! workspace layout the real account has.

use std::cell::{Cell, RefCell};

use super::api::{ApiResult, ClockifyApi};
use super::schema::{EntryQuery, Named, NewTimeEntry, TimeEntry, TimeInterval, User};
use super::task::{NON_BILLABLE_PROJECT, STAFFING_PROJECT};
use crate::error::{RemoteServiceError, ResourceKind};

pub const WORKSPACE_ID: &str = "5fa423e902f38d2ce68f3169";
pub const USER_ID: &str = "user-1";
pub const PROJECT_IDS: [&str; 2] = ["6377ce7d0c7a4c4566b89d41", "63120a634420051596d195ee"];
pub const TASK_IDS: [&str; 4] = [
    "6377ce9c0c7a4c4566b89ef7",
    "6377cea7d3400c1c832e48cb",
    "63120a6db1479f58e2d04b77",
    "6368f01245b6796dca64e8f5",
];
pub const LOCALE: &str = "SG";
pub const LOCALE_TAG_ID: &str = "tag-sg";

#[derive(Debug, Clone)]
pub struct FakeTask {
    pub project_id: String,
    pub task: Named,
}

pub struct FakeClockify {
    pub workspaces: Vec<Named>,
    pub projects: Vec<Named>,
    pub tasks: Vec<FakeTask>,
    pub tags: Vec<Named>,
    pub entries: RefCell<Vec<TimeEntry>>,
    /// When set, every listing or search call fails with this HTTP status.
    pub fail_reads: Cell<Option<u16>>,
    /// When set, only listings of this kind fail, with the given HTTP status.
    pub fail_listing: Cell<Option<(ResourceKind, u16)>>,
    /// When set, every call that writes fails with this HTTP status.
    pub fail_writes: Cell<Option<u16>>,
    pub calls: RefCell<Vec<String>>,
    next_id: Cell<u32>,
}

fn named(id: &str, name: &str) -> Named {
    Named {
        id: id.into(),
        name: name.into(),
    }
}

impl FakeClockify {
    pub fn new() -> Self {
        let task = |project_id: &str, id: &str, name: &str| FakeTask {
            project_id: project_id.into(),
            task: named(id, name),
        };
        Self {
            workspaces: vec![named("other-ws", "Personal"), named(WORKSPACE_ID, "Jupiter")],
            projects: vec![
                named(PROJECT_IDS[0], STAFFING_PROJECT),
                named(PROJECT_IDS[1], NON_BILLABLE_PROJECT),
                named("archived", "Jupiter Staffing APAC (2021)"),
            ],
            tasks: vec![
                task(PROJECT_IDS[0], TASK_IDS[0], "Live hours"),
                task(PROJECT_IDS[0], TASK_IDS[1], "Training"),
                task(PROJECT_IDS[1], TASK_IDS[2], "Out Of Office"),
                task(PROJECT_IDS[1], TASK_IDS[3], "Holiday"),
                task(PROJECT_IDS[1], "training-nb", "Training"),
            ],
            tags: vec![named(LOCALE_TAG_ID, LOCALE), named("tag-sgp", "SGP")],
            entries: RefCell::new(Vec::new()),
            fail_reads: Cell::new(None),
            fail_listing: Cell::new(None),
            fail_writes: Cell::new(None),
            calls: RefCell::new(Vec::new()),
            next_id: Cell::new(1),
        }
    }

    /// Places an entry directly into the store, bypassing the API.
    pub fn insert(&self, entry: TimeEntry) {
        self.entries.borrow_mut().push(entry);
    }

    pub fn entry(&self, id: &str) -> Option<TimeEntry> {
        self.entries.borrow().iter().find(|e| e.id == id).cloned()
    }

    fn record(&self, call: String) {
        self.calls.borrow_mut().push(call);
    }

    fn check_read(&self, path: String) -> ApiResult<()> {
        Self::injected(self.fail_reads.get(), "GET", path)
    }

    fn check_listing(&self, kind: ResourceKind, path: String) -> ApiResult<()> {
        let failure = match self.fail_listing.get() {
            Some((failing, status)) if failing == kind => Some(status),
            _ => self.fail_reads.get(),
        };
        Self::injected(failure, "GET", path)
    }

    fn check_write(&self, method: &str, path: String) -> ApiResult<()> {
        Self::injected(self.fail_writes.get(), method, path)
    }

    fn injected(failure: Option<u16>, method: &str, path: String) -> ApiResult<()> {
        match failure {
            Some(status) => Err(RemoteServiceError::Status {
                method: method.into(),
                url: path,
                status,
                body: "rejected by fake".into(),
            }),
            None => Ok(()),
        }
    }

    fn not_found(path: String) -> RemoteServiceError {
        RemoteServiceError::Status {
            method: "GET".into(),
            url: path,
            status: 404,
            body: "not found".into(),
        }
    }

    fn to_entry(id: String, entry: &NewTimeEntry) -> TimeEntry {
        TimeEntry {
            id,
            project_id: Some(entry.project_id.clone()),
            task_id: Some(entry.task_id.clone()),
            tag_ids: Some(entry.tag_ids.clone()),
            time_interval: TimeInterval {
                start: entry.start,
                end: Some(entry.end),
            },
        }
    }
}

fn containing(items: &[Named], name: &str) -> Vec<Named> {
    items
        .iter()
        .filter(|item| item.name.contains(name))
        .cloned()
        .collect()
}

impl ClockifyApi for FakeClockify {
    fn current_user(&self) -> ApiResult<User> {
        Ok(User {
            id: USER_ID.into(),
        })
    }

    fn workspaces(&self) -> ApiResult<Vec<Named>> {
        self.check_listing(ResourceKind::Workspace, "workspaces".into())?;
        Ok(self.workspaces.clone())
    }

    fn projects(&self, _workspace_id: &str, name: &str) -> ApiResult<Vec<Named>> {
        self.check_listing(ResourceKind::Project, "projects".into())?;
        Ok(containing(&self.projects, name))
    }

    fn tasks(&self, _workspace_id: &str, project_id: &str, name: &str) -> ApiResult<Vec<Named>> {
        self.check_listing(ResourceKind::Task, format!("projects/{project_id}/tasks"))?;
        let tasks = self
            .tasks
            .iter()
            .filter(|task| task.project_id == project_id)
            .map(|task| task.task.clone())
            .collect::<Vec<_>>();
        Ok(containing(&tasks, name))
    }

    fn tags(&self, _workspace_id: &str, name: &str) -> ApiResult<Vec<Named>> {
        self.check_listing(ResourceKind::Tag, "tags".into())?;
        Ok(containing(&self.tags, name))
    }

    fn tag(&self, _workspace_id: &str, tag_id: &str) -> ApiResult<Named> {
        self.tags
            .iter()
            .find(|tag| tag.id == tag_id)
            .cloned()
            .ok_or_else(|| Self::not_found(format!("tags/{tag_id}")))
    }

    fn find_time_entries(
        &self,
        _workspace_id: &str,
        _user_id: &str,
        query: &EntryQuery<'_>,
    ) -> ApiResult<Vec<TimeEntry>> {
        self.check_read("time-entries".into())?;
        self.record(format!("find {}", query.start.date_naive()));
        Ok(self
            .entries
            .borrow()
            .iter()
            .filter(|entry| {
                let start = entry.time_interval.start;
                start >= query.start
                    && start <= query.end
                    && entry.project_id.as_deref() == Some(query.project_id)
                    && entry.task_id.as_deref() == Some(query.task_id)
            })
            .cloned()
            .collect())
    }

    fn time_entry(&self, _workspace_id: &str, entry_id: &str) -> ApiResult<TimeEntry> {
        self.entry(entry_id)
            .ok_or_else(|| Self::not_found(format!("time-entries/{entry_id}")))
    }

    fn create_time_entry(&self, _workspace_id: &str, entry: &NewTimeEntry) -> ApiResult<TimeEntry> {
        self.check_write("POST", "time-entries".into())?;
        let id = format!("entry-{}", self.next_id.get());
        self.next_id.set(self.next_id.get() + 1);
        self.record(format!("create {id}"));
        let created = Self::to_entry(id, entry);
        self.entries.borrow_mut().push(created.clone());
        Ok(created)
    }

    fn update_time_entry(
        &self,
        _workspace_id: &str,
        entry_id: &str,
        entry: &NewTimeEntry,
    ) -> ApiResult<TimeEntry> {
        self.check_write("PUT", format!("time-entries/{entry_id}"))?;
        self.record(format!("update {entry_id}"));
        let mut entries = self.entries.borrow_mut();
        let existing = entries
            .iter_mut()
            .find(|e| e.id == entry_id)
            .ok_or_else(|| Self::not_found(format!("time-entries/{entry_id}")))?;
        *existing = Self::to_entry(entry_id.to_owned(), entry);
        Ok(existing.clone())
    }

    fn delete_time_entry(&self, _workspace_id: &str, entry_id: &str) -> ApiResult<()> {
        self.check_write("DELETE", format!("time-entries/{entry_id}"))?;
        self.record(format!("delete {entry_id}"));
        let mut entries = self.entries.borrow_mut();
        let before = entries.len();
        entries.retain(|e| e.id != entry_id);
        if entries.len() == before {
            return Err(Self::not_found(format!("time-entries/{entry_id}")));
        }
        Ok(())
    }
}
