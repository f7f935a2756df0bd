mod commands;
mod config;
mod error;
mod manifest;
mod options;
mod platforms;
mod utils;

use clap::{CommandFactory, Parser};
use colored::Colorize;
use std::process;

fn main() -> anyhow::Result<()> {
    let cli = match options::Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // Usage problems exit 1, not clap's default 2.
            let _ = err.print();
            process::exit(1);
        }
    };

    options::verbose::set_verbose(cli.verbose);

    if cli.version {
        options::version::show();
        return Ok(());
    }

    let Some(target_version) = cli.target_version else {
        let mut cmd = options::Cli::command();
        cmd.print_help()?;
        println!();
        process::exit(1);
    };

    if let Err(err) = commands::update::execute(&target_version, &cli.repo) {
        eprintln!("{} {err:#}", "error:".red().bold());
        process::exit(1);
    }

    Ok(())
}
