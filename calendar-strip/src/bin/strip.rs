use std::env;
use std::process::ExitCode;

use chrono::{Local, NaiveDate};

use calendar_strip::host::{HostCommand, Recorder};
use calendar_strip::{DayStrip, StripConfig};

const CELL_WIDTH: f64 = 64.0;
const DAYS_BEFORE: u32 = 5;
const DAYS_AFTER: u32 = 30;

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = env::args().skip(1);

    let current_date = match args.next() {
        Some(raw) => NaiveDate::parse_from_str(&raw, "%Y-%m-%d")?,
        None => Local::now().date_naive(),
    };

    let days_after = match args.next() {
        Some(raw) => raw.parse()?,
        None => DAYS_AFTER,
    };

    let config = StripConfig::default()
        .with_current_date(current_date)
        .with_days_before(DAYS_BEFORE)
        .with_days_after(days_after);

    let mut strip = DayStrip::with_host(config, Recorder::default())?;
    println!(" - date: {current_date}");
    println!(" - days: {:?}", strip.days());
    println!(" - label: {}", strip.label());

    for index in 0..strip.len() {
        strip.record_cell_width(index, CELL_WIDTH)?;
    }

    for command in strip.host_mut().take() {
        match command {
            HostCommand::ScrollTo(x) => {
                println!(" - scroll to: {x}");
                strip.set_scroll_offset(x);
            }
            HostCommand::SelectDate(day) => println!(" - selected: {day}"),
            HostCommand::Label(label) => println!(" - label: {label}"),
        }
    }

    print_visible(&strip);

    let end = strip.len() as f64 * CELL_WIDTH - strip.viewport_width();
    strip.set_scroll_offset(end.max(0.0));
    println!("---");
    println!(" - scrolled to: {}", strip.scroll_offset());
    print_visible(&strip);
    Ok(())
}

fn print_visible(strip: &DayStrip<Recorder>) {
    println!("{}:", strip.label());

    let Some(visible) = strip.visible_range() else {
        println!(" (not measured)");
        return;
    };

    for cell in strip.cells().filter(|cell| visible.contains(&cell.day)) {
        let marker = if cell.is_active { "*" } else { " " };
        println!(" {marker} {} {}", cell.weekday, cell.day_number);
    }
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
