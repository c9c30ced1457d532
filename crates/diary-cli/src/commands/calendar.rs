use chrono::{Datelike, Utc};

use diary_core::calendar::days_in_month;

use crate::app::open_service;
use crate::cli::{CalendarArgs, Cli, OnArgs};
use crate::commands::entries::list_format;
use crate::helpers::{parse_day, parse_month};
use crate::output::{entries_json, print_entries};

pub fn handle_on(cli: &Cli, args: &OnArgs) -> anyhow::Result<()> {
    let day = parse_day(&args.day)?;
    let format = list_format(args.json, args.format.as_deref())?;
    let service = open_service(cli)?;
    let entries = service.entries_by_date(day);

    match format {
        None => println!("{}", serde_json::to_string_pretty(&entries_json(&entries)?)?),
        Some(format) => print_entries(&entries, format, cli.quiet),
    }
    Ok(())
}

pub fn handle_calendar(cli: &Cli, args: &CalendarArgs) -> anyhow::Result<()> {
    let (year, month) = match &args.month {
        Some(value) => parse_month(value)?,
        None => {
            let today = Utc::now().date_naive();
            (today.year(), today.month())
        }
    };

    let service = open_service(cli)?;
    let days = days_in_month(&service.entry_days(), year, month);

    if args.json {
        let values: Vec<String> = days.iter().map(|day| day.to_string()).collect();
        println!("{}", serde_json::to_string_pretty(&values)?);
        return Ok(());
    }

    if !cli.quiet {
        println!("Days with entries in {:04}-{:02}:", year, month);
    }
    if days.is_empty() {
        if !cli.quiet {
            println!("No entries found.");
        }
        return Ok(());
    }
    for day in days {
        println!("{}", day);
    }
    Ok(())
}
