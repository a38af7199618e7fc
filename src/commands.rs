// SPDX-License-Identifier: MPL-2.0

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::clockify::TaskSelector;

const MAX_SUBMIT_DAYS: i64 = 366;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Arguments {
    /// increase the verbosity
    ///
    /// This flag can be used multiple times to increase the amount of information
    /// produced by tpt
    #[arg(global = true, short, long, action = clap::ArgAction::Count, help_heading = "Logging")]
    pub verbose: u8,

    /// output no logging
    ///
    /// Setting quiet disables all logging to stderr.  Data will only be printed
    /// to stdout, and only for commands that output information as their main
    /// action.
    #[arg(global = true, long, action = clap::ArgAction::SetTrue, help_heading = "Logging")]
    pub quiet: bool,

    /// path to the configuration file
    ///
    /// Defaults to tp-timesheet/config.toml in the OS configuration directory.
    #[arg(global = true, long)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Submit hours for one or more working days
    ///
    /// Books the given number of hours against the task for each working
    /// day (Monday to Friday) starting from the start date.  A day that
    /// already has an entry for the task is updated rather than duplicated.
    ///
    /// Aliases: push
    #[clap(aliases = &["push"])]
    Submit(Submit),

    /// Show the entries booked against a task on a day
    #[clap(aliases = &["list", "show"])]
    Ls(Show),

    /// Delete the entries booked against a task on a day
    ///
    /// Deleting a day with no entries does nothing.
    #[clap(aliases = &["delete", "remove"])]
    Rm(Remove),
}

#[derive(Args, Debug)]
pub struct Submit {
    /// first day to submit
    ///
    /// Can be specified as a date (yyyy-mm-dd), as "today", "yesterday" or
    /// "tomorrow", or as a weekday name, meaning the most recent such day.
    #[arg(short = 's', long, default_value = "today")]
    pub start: String,

    /// number of working days to submit, at most a year's worth
    #[arg(
        short = 'c',
        long,
        default_value_t = 1,
        value_parser = clap::value_parser!(u16).range(1..=MAX_SUBMIT_DAYS)
    )]
    pub count: u16,

    /// task to book the hours against
    ///
    /// Defaults to the task set in the configuration file.
    #[arg(short = 't', long)]
    pub task: Option<TaskSelector>,

    /// hours per day
    ///
    /// Defaults to the hours set in the configuration file.
    #[arg(long)]
    pub hours: Option<f64>,
}

#[derive(Args, Debug)]
pub struct Show {
    /// day to show
    #[arg(short = 'd', long, default_value = "today")]
    pub date: String,

    /// task whose entries should be shown
    #[arg(short = 't', long)]
    pub task: Option<TaskSelector>,
}

#[derive(Args, Debug)]
pub struct Remove {
    /// day to clear
    #[arg(short = 'd', long)]
    pub date: String,

    /// task whose entries should be deleted
    #[arg(short = 't', long)]
    pub task: Option<TaskSelector>,
}
