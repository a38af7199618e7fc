// SPDX-License-Identifier: MPL-2.0

use std::time::Duration;

use serde::{de::DeserializeOwned, Serialize};
use ureq::{Agent, AgentBuilder, Request, Response};

use super::schema::{EntryQuery, Named, NewTimeEntry, TimeEntry, User};
use crate::error::RemoteServiceError;

pub const DEFAULT_BASE_URL: &str = "https://api.clockify.me/api/v1";

const READ_TIMEOUT: Duration = Duration::from_secs(2);
const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);
const PAGE_SIZE: &str = "200";

pub type ApiResult<T> = Result<T, RemoteServiceError>;

/// The subset of the time-tracking REST API that day entries need.
///
/// Listing methods that take a `name` ask the service to pre-filter by that
/// name; callers must still check for an exact match.
pub trait ClockifyApi {
    fn current_user(&self) -> ApiResult<User>;
    fn workspaces(&self) -> ApiResult<Vec<Named>>;
    fn projects(&self, workspace_id: &str, name: &str) -> ApiResult<Vec<Named>>;
    fn tasks(&self, workspace_id: &str, project_id: &str, name: &str) -> ApiResult<Vec<Named>>;
    fn tags(&self, workspace_id: &str, name: &str) -> ApiResult<Vec<Named>>;
    fn tag(&self, workspace_id: &str, tag_id: &str) -> ApiResult<Named>;

    fn find_time_entries(
        &self,
        workspace_id: &str,
        user_id: &str,
        query: &EntryQuery<'_>,
    ) -> ApiResult<Vec<TimeEntry>>;
    fn time_entry(&self, workspace_id: &str, entry_id: &str) -> ApiResult<TimeEntry>;
    fn create_time_entry(&self, workspace_id: &str, entry: &NewTimeEntry) -> ApiResult<TimeEntry>;
    fn update_time_entry(
        &self,
        workspace_id: &str,
        entry_id: &str,
        entry: &NewTimeEntry,
    ) -> ApiResult<TimeEntry>;
    fn delete_time_entry(&self, workspace_id: &str, entry_id: &str) -> ApiResult<()>;
}

/// Blocking HTTPS transport, authenticated with the user's API key.
pub struct HttpApi {
    agent: Agent,
    base_url: String,
    api_key: String,
}

impl HttpApi {
    pub fn new(base_url: &str, api_key: &str) -> Self {
        let agent = AgentBuilder::new()
            .timeout_connect(CONNECT_TIMEOUT)
            .timeout_read(READ_TIMEOUT)
            .build();
        Self {
            agent,
            base_url: base_url.trim_end_matches('/').to_owned(),
            api_key: api_key.to_owned(),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn request(&self, method: &str, path: &str) -> Request {
        self.agent
            .request(method, &self.endpoint(path))
            .set("X-Api-Key", &self.api_key)
    }

    fn get<T: DeserializeOwned>(&self, request: Request) -> ApiResult<T> {
        let url = request.url().to_owned();
        decode(url, send(request, None::<&()>)?)
    }

    fn send_body<T: DeserializeOwned>(
        &self,
        request: Request,
        body: &impl Serialize,
    ) -> ApiResult<T> {
        let url = request.url().to_owned();
        decode(url, send(request, Some(body))?)
    }
}

fn send<B: Serialize>(request: Request, body: Option<&B>) -> ApiResult<Response> {
    let method = request.method().to_owned();
    let url = request.url().to_owned();
    log::trace!("{method} {url}");

    let result = match body {
        Some(body) => request.send_json(body),
        None => request.call(),
    };
    match result {
        Ok(response) => Ok(response),
        Err(ureq::Error::Status(status, response)) => Err(RemoteServiceError::Status {
            method,
            url,
            status,
            body: response.into_string().unwrap_or_default(),
        }),
        Err(ureq::Error::Transport(transport)) => Err(RemoteServiceError::Transport {
            method,
            url,
            source: Box::new(transport),
        }),
    }
}

fn decode<T: DeserializeOwned>(url: String, response: Response) -> ApiResult<T> {
    response
        .into_json()
        .map_err(|source| RemoteServiceError::Decode { url, source })
}

impl ClockifyApi for HttpApi {
    fn current_user(&self) -> ApiResult<User> {
        self.get(self.request("GET", "user"))
    }

    fn workspaces(&self) -> ApiResult<Vec<Named>> {
        self.get(self.request("GET", "workspaces"))
    }

    fn projects(&self, workspace_id: &str, name: &str) -> ApiResult<Vec<Named>> {
        self.get(
            self.request("GET", &format!("workspaces/{workspace_id}/projects"))
                .query("name", name)
                .query("page-size", PAGE_SIZE),
        )
    }

    fn tasks(&self, workspace_id: &str, project_id: &str, name: &str) -> ApiResult<Vec<Named>> {
        self.get(
            self.request(
                "GET",
                &format!("workspaces/{workspace_id}/projects/{project_id}/tasks"),
            )
            .query("name", name)
            .query("page-size", PAGE_SIZE),
        )
    }

    fn tags(&self, workspace_id: &str, name: &str) -> ApiResult<Vec<Named>> {
        self.get(
            self.request("GET", &format!("workspaces/{workspace_id}/tags"))
                .query("name", name)
                .query("page-size", PAGE_SIZE),
        )
    }

    fn tag(&self, workspace_id: &str, tag_id: &str) -> ApiResult<Named> {
        self.get(self.request("GET", &format!("workspaces/{workspace_id}/tags/{tag_id}")))
    }

    fn find_time_entries(
        &self,
        workspace_id: &str,
        user_id: &str,
        query: &EntryQuery<'_>,
    ) -> ApiResult<Vec<TimeEntry>> {
        self.get(
            self.request(
                "GET",
                &format!("workspaces/{workspace_id}/user/{user_id}/time-entries"),
            )
            .query("start", &format_timestamp(query.start))
            .query("end", &format_timestamp(query.end))
            .query("project", query.project_id)
            .query("task", query.task_id)
            .query("page-size", PAGE_SIZE),
        )
    }

    fn time_entry(&self, workspace_id: &str, entry_id: &str) -> ApiResult<TimeEntry> {
        self.get(self.request(
            "GET",
            &format!("workspaces/{workspace_id}/time-entries/{entry_id}"),
        ))
    }

    fn create_time_entry(&self, workspace_id: &str, entry: &NewTimeEntry) -> ApiResult<TimeEntry> {
        self.send_body(
            self.request("POST", &format!("workspaces/{workspace_id}/time-entries")),
            entry,
        )
    }

    fn update_time_entry(
        &self,
        workspace_id: &str,
        entry_id: &str,
        entry: &NewTimeEntry,
    ) -> ApiResult<TimeEntry> {
        self.send_body(
            self.request(
                "PUT",
                &format!("workspaces/{workspace_id}/time-entries/{entry_id}"),
            ),
            entry,
        )
    }

    fn delete_time_entry(&self, workspace_id: &str, entry_id: &str) -> ApiResult<()> {
        send(
            self.request(
                "DELETE",
                &format!("workspaces/{workspace_id}/time-entries/{entry_id}"),
            ),
            None::<&()>,
        )?;
        Ok(())
    }
}

fn format_timestamp(timestamp: chrono::DateTime<chrono::Utc>) -> String {
    timestamp.format("%Y-%m-%dT%H:%M:%SZ").to_string()
}
