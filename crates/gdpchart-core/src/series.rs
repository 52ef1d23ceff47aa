// File: crates/gdpchart-core/src/series.rs
// Summary: Time-series data model and JSON wire decoding for the GDP dataset.

use chrono::NaiveDate;
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DataError {
    #[error("payload is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("row {index}: unparseable date {stamp:?}")]
    BadDate { index: usize, stamp: String },
    #[error("row {index}: non-finite value {value}")]
    BadValue { index: usize, value: f64 },
}

/// One observation: the raw ISO stamp (unique, ordering-stable bar key),
/// its parsed calendar date, and the measured value.
#[derive(Clone, Debug, PartialEq)]
pub struct DataPoint {
    pub stamp: String,
    pub date: NaiveDate,
    pub value: f64,
}

/// Chronologically ordered sequence of observations, immutable once loaded.
#[derive(Clone, Debug, Default)]
pub struct Series {
    pub points: Vec<DataPoint>,
}

/// Wire shape: `{ "data": [["1947-01-01", 243.1], ...] }`.
#[derive(Deserialize)]
struct Payload {
    data: Vec<(String, f64)>,
}

impl Series {
    pub fn new(points: Vec<DataPoint>) -> Self {
        Self { points }
    }

    /// Decode the GDP JSON payload. Order is preserved as received; the
    /// source contract says it is chronological.
    pub fn from_json(raw: &str) -> Result<Self, DataError> {
        let payload: Payload = serde_json::from_str(raw)?;
        let mut points = Vec::with_capacity(payload.data.len());
        for (index, (stamp, value)) in payload.data.into_iter().enumerate() {
            let date = NaiveDate::parse_from_str(&stamp, "%Y-%m-%d")
                .map_err(|_| DataError::BadDate { index, stamp: stamp.clone() })?;
            if !value.is_finite() {
                return Err(DataError::BadValue { index, value });
            }
            points.push(DataPoint { stamp, date, value });
        }
        Ok(Self { points })
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// `[first, last]` date extent. Relies on chronological order.
    pub fn x_extent(&self) -> Option<(NaiveDate, NaiveDate)> {
        match (self.points.first(), self.points.last()) {
            (Some(a), Some(b)) => Some((a.date, b.date)),
            _ => None,
        }
    }

    /// `[min, max]` value extent.
    pub fn y_extent(&self) -> Option<(f64, f64)> {
        let mut lo = f64::INFINITY;
        let mut hi = f64::NEG_INFINITY;
        for p in &self.points {
            lo = lo.min(p.value);
            hi = hi.max(p.value);
        }
        if lo.is_finite() && hi.is_finite() {
            Some((lo, hi))
        } else {
            None
        }
    }
}
