// SPDX-License-Identifier: MPL-2.0

pub mod calendar;
pub mod clockify;
pub mod commands;
pub mod config;
pub mod error;
pub mod parse;
pub mod print;

pub use error::{Error, Result};
