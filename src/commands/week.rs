use crate::{
    libs::{
        config::Config,
        logbook::LogbookContext,
        messages::Message,
        week::parse_date,
    },
    msg_print,
};
use anyhow::Result;
use chrono::Local;
use clap::Args;

#[derive(Debug, Args)]
pub struct WeekArgs {
    /// Any day of the week, as YYYY-MM-DD (defaults to today)
    #[arg(short, long)]
    date: Option<String>,
}

pub fn cmd(args: WeekArgs) -> Result<()> {
    let now = Local::now().naive_local();
    let now = match args.date {
        Some(date) => parse_date(&date)?.and_time(now.time()),
        None => now,
    };
    let ctx = LogbookContext::new(&Config::read()?, now);

    msg_print!(Message::WeekRange(ctx.week.start_formatted(), ctx.week.end_formatted()));
    msg_print!(Message::EntryFile(ctx.output_path().display().to_string()));
    Ok(())
}
