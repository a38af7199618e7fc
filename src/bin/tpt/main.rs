// SPDX-License-Identifier: MPL-2.0

use anyhow::Result;
use clap::Parser;
use dotenvy::dotenv;
use tp_timesheet::{
    commands::{Arguments, Commands},
    config::load_config,
};

mod commands;

fn main() -> Result<()> {
    dotenv().ok();
    let args = Arguments::parse();

    stderrlog::new()
        .quiet(args.quiet)
        .verbosity(args.verbose as usize + 2)
        .init()?;

    let config = load_config(args.config)?;
    match args.command {
        Commands::Submit(submit) => commands::submit(config, submit)?,
        Commands::Ls(show) => commands::ls(config, show)?,
        Commands::Rm(remove) => commands::rm(config, remove)?,
    }
    Ok(())
}
