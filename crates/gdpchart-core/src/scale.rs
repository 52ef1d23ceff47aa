// File: crates/gdpchart-core/src/scale.rs
// Summary: Linear (Y) and time (X) scale transforms mapping domains to pixel ranges.

use chrono::NaiveDate;

use crate::grid::{tick_step, ticks};

/// Linear scale mapping `domain [d0, d1]` onto `range [r0, r1]`.
///
/// Degenerate-dataset fallback: when the domain collapses to a point
/// (`d0 == d1`), every input maps to the midpoint of the range instead of
/// dividing by zero.
#[derive(Clone, Copy, Debug)]
pub struct LinearScale {
    pub d0: f64,
    pub d1: f64,
    pub r0: f64,
    pub r1: f64,
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { d0: domain.0, d1: domain.1, r0: range.0, r1: range.1 }
    }

    #[inline]
    pub fn to_px(&self, v: f64) -> f64 {
        let span = self.d1 - self.d0;
        if span == 0.0 {
            return (self.r0 + self.r1) * 0.5;
        }
        self.r0 + (v - self.d0) / span * (self.r1 - self.r0)
    }

    /// Expand the domain outward to multiples of the tick step, so the
    /// outermost gridlines land on round numbers. Pixel positions of raw
    /// values shift with the wider domain; the mapping itself stays linear.
    pub fn nice(mut self, count: usize) -> Self {
        if self.d0 == self.d1 {
            return self;
        }
        let step = tick_step(self.d0, self.d1, count);
        if step > 0.0 {
            self.d0 = (self.d0 / step).floor() * step;
            self.d1 = (self.d1 / step).ceil() * step;
        }
        self
    }

    /// Representative domain values for axis labeling. Deterministic.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        ticks(self.d0, self.d1, count)
    }
}

/// Horizontal time scale over calendar dates, linear in epoch milliseconds.
#[derive(Clone, Copy, Debug)]
pub struct TimeScale {
    pub start: NaiveDate,
    pub end: NaiveDate,
    inner: LinearScale,
}

pub(crate) fn date_ms(d: NaiveDate) -> f64 {
    d.and_hms_opt(0, 0, 0)
        .map(|t| t.and_utc().timestamp_millis() as f64)
        .unwrap_or(0.0)
}

impl TimeScale {
    pub fn new(domain: (NaiveDate, NaiveDate), range: (f64, f64)) -> Self {
        let inner = LinearScale::new((date_ms(domain.0), date_ms(domain.1)), range);
        Self { start: domain.0, end: domain.1, inner }
    }

    #[inline]
    pub fn to_px(&self, d: NaiveDate) -> f64 {
        self.inner.to_px(date_ms(d))
    }

    pub fn range(&self) -> (f64, f64) {
        (self.inner.r0, self.inner.r1)
    }
}
