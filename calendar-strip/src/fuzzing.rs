use arbitrary::Arbitrary;
use chrono::NaiveDate;

use std::fmt::Debug;

use crate::host::Recorder;
use crate::{DayStrip, StripConfig, StripState};

#[derive(Arbitrary, Clone, Debug)]
pub enum Operation {
    Measure { index: u8, width: u16 },
    Scroll(i32),
    Select(u8),
}

#[derive(Arbitrary, Clone)]
pub struct Data {
    pub days_from_ce: i32,
    pub days_before: u8,
    pub days_after: u8,
    pub viewport_width: u16,
    pub operations: Vec<Operation>,
}

impl Data {
    fn current_date(&self) -> Option<NaiveDate> {
        NaiveDate::from_num_days_from_ce_opt(self.days_from_ce)
    }
}

impl Debug for Data {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug = f.debug_struct("Data");

        if let Some(date) = self.current_date() {
            debug.field("date", &date);
        }

        debug.field("days_before", &self.days_before);
        debug.field("days_after", &self.days_after);
        debug.field("viewport_width", &self.viewport_width);
        debug.field("operations", &self.operations);
        debug.finish()
    }
}

/// Replay a sequence of host notifications on a strip and check that it
/// keeps its invariants. Return `false` if the input was not relevant.
pub fn run_fuzz_strip(data: Data) -> bool {
    let Some(date) = data.current_date() else {
        return false;
    };

    let config = StripConfig::default()
        .with_current_date(date)
        .with_days_before(data.days_before.into())
        .with_days_after(data.days_after.into())
        .with_viewport_width(data.viewport_width.into());

    let Ok(mut strip) = DayStrip::with_host(config, Recorder::default()) else {
        return false;
    };

    let len = strip.len();
    assert_eq!(len, usize::from(data.days_before) + usize::from(data.days_after) + 1);
    assert_eq!(strip.days()[usize::from(data.days_before)], date);

    for operation in &data.operations {
        let was_ready = strip.state() == StripState::Ready;
        let selected = strip.selected_index();
        let count_scrolls = strip.host().count_scrolls();

        match *operation {
            Operation::Measure { index, width } => {
                let index = usize::from(index);
                let res = strip.record_cell_width(index, width.into());
                assert_eq!(res.is_ok(), index < len);
                assert_eq!(strip.selected_index(), selected);

                let expected_scrolls = {
                    if !was_ready && strip.state() == StripState::Ready {
                        count_scrolls + 1
                    } else {
                        count_scrolls
                    }
                };

                assert_eq!(strip.host().count_scrolls(), expected_scrolls);
            }
            Operation::Scroll(x) => {
                strip.set_scroll_offset(x.into());
                assert_eq!(strip.selected_index(), selected);
                assert_eq!(strip.host().count_scrolls(), count_scrolls);
            }
            Operation::Select(index) => {
                let index = usize::from(index);

                if index < len {
                    strip.select_day(index).expect("valid index was rejected");
                    assert_eq!(strip.selected_index(), index);
                } else {
                    assert!(strip.select_day(index).is_err());
                    assert_eq!(strip.selected_index(), selected);
                }
            }
        }

        let ready = strip.state() == StripState::Ready;
        assert!(!was_ready || ready, "strip left the ready state");
        assert_eq!(strip.visible_range().is_some(), ready);
        assert_eq!(strip.centering_offset(strip.selected_index()).is_ok(), ready);

        if ready {
            let total = strip.widths().total().expect("complete map has no total");
            let max_x = (total - strip.viewport_width()).max(0.0);

            for index in [0, strip.selected_index(), len - 1] {
                let x = strip.centering_offset(index).expect("ready strip can't center");
                assert!((0.0..=max_x).contains(&x), "offset {x} is out of [0, {max_x}]");
            }
        }
    }

    true
}
