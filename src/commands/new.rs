//! Entry creation command.
//!
//! Every flag pre-answers one question of the interview; whatever is left
//! open is asked interactively.

use crate::libs::{
    config::Config,
    logbook::{self, EntryMode, EntryOptions, LogbookContext},
    prompt::ConsolePrompt,
    week::parse_date,
};
use anyhow::Result;
use chrono::Local;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct NewArgs {
    /// Title of the entry
    #[arg(short, long)]
    title: Option<String>,

    /// Enter the content interactively
    #[arg(short, long, conflicts_with = "human")]
    manual: bool,

    /// Use the pre-written template instead of the interview
    #[arg(long)]
    human: bool,

    /// Create the entry for the week of this date (YYYY-MM-DD)
    #[arg(short, long)]
    date: Option<String>,

    /// Directory containing the templates
    #[arg(long)]
    templates: Option<PathBuf>,

    /// Directory the entry is written to
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl NewArgs {
    fn mode(&self) -> Option<EntryMode> {
        match (self.manual, self.human) {
            (true, _) => Some(EntryMode::Manual),
            (_, true) => Some(EntryMode::Human),
            _ => None,
        }
    }
}

pub fn cmd(args: NewArgs) -> Result<()> {
    let mut config = Config::read()?;
    if let Some(dir) = &args.templates {
        config.template_dir = dir.clone();
    }
    if let Some(dir) = &args.output {
        config.output_dir = Some(dir.clone());
    }

    let now = Local::now().naive_local();
    let now = match &args.date {
        Some(date) => parse_date(date)?.and_time(now.time()),
        None => now,
    };

    let ctx = LogbookContext::new(&config, now);
    let options = EntryOptions {
        title: args.title.clone(),
        mode: args.mode(),
    };
    logbook::generate(&ctx, &mut ConsolePrompt::new(), &options)?;
    Ok(())
}
