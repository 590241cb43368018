pub mod init;
pub mod new;
pub mod week;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Create the logbook entry for the current week")]
    New(new::NewArgs),
    #[command(about = "Configure template and output locations")]
    Init(init::InitArgs),
    #[command(about = "Show the week range and entry file for a date")]
    Week(week::WeekArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::New(args) => new::cmd(args),
            Commands::Init(args) => init::cmd(args),
            Commands::Week(args) => week::cmd(args),
        }
    }
}
