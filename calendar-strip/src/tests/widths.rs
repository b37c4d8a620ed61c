use crate::widths::WidthMap;
use crate::Error;

#[test]
fn idempotent_record() {
    let mut once = WidthMap::new(4);
    once.record(2, 64.5).unwrap();

    let mut twice = WidthMap::new(4);
    twice.record(2, 64.5).unwrap();
    twice.record(2, 64.5).unwrap();

    assert_eq!(once, twice);
    assert_eq!(twice.measured(), 1);
}

#[test]
fn last_write_wins() {
    let mut widths = WidthMap::new(2);
    widths.record(0, 10.0).unwrap();
    widths.record(0, 12.0).unwrap();
    assert_eq!(widths.width(0), Some(12.0));
    assert_eq!(widths.width(1), None);
    assert_eq!(widths.total(), None);
}

#[test]
fn completes_once() {
    let mut widths = WidthMap::new(3);
    let completions: Vec<_> = [(1, 5.0), (1, 6.0), (2, 5.0), (0, 5.0), (0, 7.0), (2, 1.0)]
        .into_iter()
        .map(|(index, width)| widths.record(index, width).unwrap())
        .collect();

    assert_eq!(completions, [false, false, false, true, false, false]);
    assert!(widths.is_complete());
    assert_eq!(widths.total(), Some(14.0));
    assert_eq!(widths.iter().unwrap().collect::<Vec<_>>(), [7.0, 6.0, 1.0]);
}

#[test]
fn rejected_values_are_not_stored() {
    let mut widths = WidthMap::new(1);
    assert_eq!(widths.record(1, 5.0), Err(Error::IndexOutOfRange { index: 1, len: 1 }));
    assert!(widths.record(0, f64::INFINITY).is_err());
    assert!(widths.record(0, -0.5).is_err());
    assert_eq!(widths.measured(), 0);

    assert_eq!(
        widths.ensure_complete(),
        Err(Error::NotReady { measured: 0, expected: 1 }),
    );

    // Zero-width cells are legit
    assert_eq!(widths.record(0, 0.0), Ok(true));
    assert_eq!(widths.ensure_complete(), Ok(()));
}
