// File: crates/gdpchart-core/src/grid.rs
// Summary: Tick layout helpers (1/2/5 decade ladder, year ticks).

use chrono::{Datelike, NaiveDate};

/// Candidate year steps for multi-decade time axes.
const YEAR_STEPS: [i32; 6] = [1, 2, 5, 10, 25, 50];

/// Round tick step for `count` ticks over `[start, end]`, from the
/// 1/2/5 decade ladder with square-root break points.
pub fn tick_step(start: f64, end: f64, count: usize) -> f64 {
    let span = (end - start).abs();
    if span == 0.0 || count == 0 {
        return 0.0;
    }
    let step0 = span / count as f64;
    let mag = 10f64.powi(step0.log10().floor() as i32);
    let err = step0 / mag;
    let factor = if err >= 50f64.sqrt() {
        10.0
    } else if err >= 10f64.sqrt() {
        5.0
    } else if err >= 2f64.sqrt() {
        2.0
    } else {
        1.0
    };
    mag * factor
}

/// Evenly spaced round values covering `[start, end]`, at most `count`-ish
/// of them. Same inputs always yield the same sequence.
pub fn ticks(start: f64, end: f64, count: usize) -> Vec<f64> {
    if start == end {
        return vec![start];
    }
    let step = tick_step(start, end, count);
    if step <= 0.0 {
        return Vec::new();
    }
    let first = (start / step).ceil();
    let last = (end / step).floor();
    let mut out = Vec::with_capacity((last - first) as usize + 1);
    let mut i = first;
    while i <= last {
        out.push(i * step);
        i += 1.0;
    }
    out
}

/// January-1st ticks over a date span, stepping whole years so the label
/// count lands near `count`.
pub fn year_ticks(start: NaiveDate, end: NaiveDate, count: usize) -> Vec<NaiveDate> {
    let y0 = start.year();
    let y1 = end.year();
    if y1 < y0 || count == 0 {
        return Vec::new();
    }
    let span = (y1 - y0).max(1);
    let mut step = *YEAR_STEPS.last().unwrap_or(&1);
    for s in YEAR_STEPS {
        if span / s <= count as i32 {
            step = s;
            break;
        }
    }
    let first = ((y0 + step - 1) / step) * step;
    let mut out = Vec::new();
    let mut y = first;
    while y <= y1 {
        if let Some(d) = NaiveDate::from_ymd_opt(y, 1, 1) {
            if d >= start && d <= end {
                out.push(d);
            }
        }
        y += step;
    }
    out
}
