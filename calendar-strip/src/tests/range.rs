use chrono::Duration;

use crate::{date, DayStrip, Error, StripConfig};

#[test]
fn length_and_steps() {
    for (before, after) in [(0, 0), (5, 5), (0, 30), (12, 1)] {
        let config = StripConfig::default()
            .with_current_date(date!("2024-06-15"))
            .with_days_before(before)
            .with_days_after(after);

        let strip = DayStrip::new(config).unwrap();
        assert_eq!(strip.len(), (before + after + 1) as usize);
        assert_eq!(strip.days()[before as usize], date!("2024-06-15"));
        assert_eq!(strip.selected_index(), before as usize);
        assert_eq!(strip.selected_day(), date!("2024-06-15"));

        for pair in strip.days().as_slice().windows(2) {
            assert_eq!(pair[1] - pair[0], Duration::days(1));
        }
    }
}

#[test]
fn defaults_around_today() {
    let strip = DayStrip::new(StripConfig::default()).unwrap();
    let today = chrono::Local::now().date_naive();

    assert_eq!(strip.len(), 11);
    assert_eq!(strip.selected_index(), 5);

    // Test may run around midnight
    assert!(strip.selected_day() == today || strip.selected_day() + Duration::days(1) == today);
}

#[test]
fn invalid_config() {
    assert_eq!(
        StripConfig::from_signed(-1, 5),
        Err(Error::InvalidRange("number of days can't be negative")),
    );

    assert!(StripConfig::from_signed(5, -3).is_err());
    assert!(StripConfig::from_signed(0, i64::from(u32::MAX) + 1).is_err());
    assert_eq!(StripConfig::from_signed(2, 3).unwrap().days_after, 3);

    let overflow = StripConfig::default()
        .with_current_date(chrono::NaiveDate::MAX)
        .with_days_after(1);

    assert!(matches!(DayStrip::new(overflow), Err(Error::InvalidRange(_))));

    for viewport in [0.0, -10.0, f64::NAN, f64::INFINITY] {
        let config = StripConfig::default().with_viewport_width(viewport);
        assert!(matches!(DayStrip::new(config), Err(Error::InvalidRange(_))));
    }
}

#[test]
fn cells() {
    let strip = super::strip_at("2024-03-02", 1, 1, 300.0);
    let cells: Vec<_> = strip.cells().collect();

    assert_eq!(cells.len(), 3);
    assert_eq!(cells[0].weekday, "FRI");
    assert_eq!(cells[0].day_number, "01");
    assert_eq!(cells[1].weekday, "SAT");
    assert!(cells[1].is_active);
    assert_eq!(cells[2].day, date!("2024-03-03"));
    assert_eq!(cells.iter().filter(|cell| cell.is_active).count(), 1);
}
