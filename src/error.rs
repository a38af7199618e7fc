// SPDX-License-Identifier: MPL-2.0

use std::fmt::Display;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Resolution(#[from] ResolutionError),

    #[error(transparent)]
    Remote(#[from] RemoteServiceError),

    #[error("hours must be greater than 0 and at most 24, got {0}")]
    InvalidHours(f64),
}

/// A human-readable name could not be mapped to exactly one remote id.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ResolutionError {
    #[error("no {kind} named {name:?} was found")]
    Missing { kind: ResourceKind, name: String },

    #[error("found {count} {kind}s named {name:?}, expected exactly one")]
    Ambiguous {
        kind: ResourceKind,
        name: String,
        count: usize,
    },
}

/// Any failed exchange with the time-tracking service.
#[derive(Debug, Error)]
pub enum RemoteServiceError {
    #[error("{method} {url} returned HTTP {status}: {body}")]
    Status {
        method: String,
        url: String,
        status: u16,
        body: String,
    },

    #[error("{method} {url} failed: {source}")]
    Transport {
        method: String,
        url: String,
        #[source]
        source: Box<ureq::Transport>,
    },

    #[error("could not decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    Workspace,
    Project,
    Task,
    Tag,
}

impl Display for ResourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ResourceKind::Workspace => "workspace",
            ResourceKind::Project => "project",
            ResourceKind::Task => "task",
            ResourceKind::Tag => "tag",
        };
        f.write_str(name)
    }
}
