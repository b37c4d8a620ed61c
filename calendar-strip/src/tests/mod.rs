mod range;
mod widths;

use crate::host::Recorder;
use crate::{DayStrip, StripConfig};

#[macro_export]
macro_rules! date {
    ( $date: expr ) => {{
        use chrono::NaiveDate;
        NaiveDate::parse_from_str($date, "%Y-%m-%d").expect("invalid date literal")
    }};
}

#[macro_export]
macro_rules! datetime {
    ( $date: expr ) => {{
        use chrono::NaiveDateTime;
        NaiveDateTime::parse_from_str($date, "%Y-%m-%d %H:%M").expect("invalid datetime literal")
    }};
}

/// Build a strip around `date` with a recording host, before any cell is
/// measured.
fn strip_at(date: &str, before: u32, after: u32, viewport: f64) -> DayStrip<Recorder> {
    let config = StripConfig::default()
        .with_current_date(date!(date))
        .with_days_before(before)
        .with_days_after(after)
        .with_viewport_width(viewport);

    DayStrip::with_host(config, Recorder::default()).expect("invalid strip config")
}

/// Record given widths, in order, and forget about commands sent to the host.
fn measure(strip: &mut DayStrip<Recorder>, widths: &[f64]) {
    for (index, width) in widths.iter().enumerate() {
        strip
            .record_cell_width(index, *width)
            .expect("failed to record width");
    }

    strip.host_mut().take();
}
