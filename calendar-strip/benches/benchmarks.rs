use calendar_strip::label::format_range;
use calendar_strip::format::English;
use calendar_strip::{DayStrip, StripConfig};

use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

const DAYS_AROUND: u32 = 365;
const VIEWPORT_WIDTH: f64 = 360.0;

fn ready_strip() -> DayStrip {
    let config = StripConfig::default()
        .with_current_date(NaiveDate::from_ymd_opt(2024, 6, 15).unwrap())
        .with_days_before(DAYS_AROUND)
        .with_days_after(DAYS_AROUND)
        .with_viewport_width(VIEWPORT_WIDTH);

    let mut strip = DayStrip::new(config).unwrap();

    for index in 0..strip.len() {
        let width = 52.0 + (index % 3) as f64 * 4.0;
        strip.record_cell_width(index, width).unwrap();
    }

    strip
}

fn bench_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout");
    let mut strip = ready_strip();

    group.bench_function("centering_offset", |b| {
        b.iter(|| black_box(&strip).centering_offset(black_box(DAYS_AROUND as usize)))
    });

    strip.set_scroll_offset(20_000.0);

    group.bench_function("visible_range", |b| {
        b.iter(|| black_box(&strip).visible_range().map(<[_]>::len))
    });

    group.bench_function("scroll", |b| {
        let mut x = 0.0;

        b.iter(|| {
            x = (x + 37.0) % 40_000.0;
            strip.set_scroll_offset(black_box(x));
        })
    });
}

fn bench_label(c: &mut Criterion) {
    let mut group = c.benchmark_group("label");
    let strip = ready_strip();
    let days = &strip.days().as_slice()[150..157];

    group.bench_function("format_range", |b| {
        b.iter(|| format_range(&English, black_box(days)))
    });
}

criterion_group!(benches, bench_layout, bench_label);
criterion_main!(benches);
