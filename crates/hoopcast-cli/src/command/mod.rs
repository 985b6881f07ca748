use clap::{Parser, Subcommand};

use self::{generate_data::GenerateDataArg, profile::ProfileArg, project::ProjectArg};

mod generate_data;
mod profile;
mod project;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// What to run
    #[command(subcommand)]
    mode: Mode,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Generate a sample dataset with synthetic game logs
    GenerateData(#[clap(flatten)] GenerateDataArg),
    /// Print a player's per-minute profile
    Profile(#[clap(flatten)] ProfileArg),
    /// Project a player's next game against an opponent
    Project(#[clap(flatten)] ProjectArg),
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    match args.mode {
        Mode::GenerateData(arg) => generate_data::run(&arg)?,
        Mode::Profile(arg) => profile::run(&arg)?,
        Mode::Project(arg) => project::run(&arg)?,
    }
    Ok(())
}
