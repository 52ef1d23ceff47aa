// File: crates/gdpchart-core/tests/format.rs
// Purpose: Validate quarter labels and thousands-grouped number formatting.

use gdpchart_core::format::{axis_number, decimal_grouped, quarter_label};

#[test]
fn quarter_labels_map_quarter_start_months() {
    assert_eq!(quarter_label("1952-01-01"), "1952 Q1");
    assert_eq!(quarter_label("1952-04-01"), "1952 Q2");
    assert_eq!(quarter_label("1952-07-01"), "1952 Q3");
    assert_eq!(quarter_label("1952-10-01"), "1952 Q4");
}

#[test]
fn quarter_label_falls_back_on_off_quarter_month() {
    assert_eq!(quarter_label("1952-02-15"), "1952-02-15");
    assert_eq!(quarter_label("1952-12-01"), "1952-12-01");
}

#[test]
fn quarter_label_falls_back_on_short_input() {
    assert_eq!(quarter_label(""), "");
    assert_eq!(quarter_label("1952"), "1952");
}

#[test]
fn one_fraction_digit_with_grouping() {
    assert_eq!(decimal_grouped(243.1), "243.1");
    assert_eq!(decimal_grouped(1087.6), "1,087.6");
    assert_eq!(decimal_grouped(15000.0), "15,000.0");
}

#[test]
fn grouping_handles_wide_and_negative_values() {
    assert_eq!(decimal_grouped(1234567.8), "1,234,567.8");
    assert_eq!(decimal_grouped(-1087.6), "-1,087.6");
    assert_eq!(decimal_grouped(0.0), "0.0");
}

#[test]
fn axis_numbers_drop_trailing_fraction() {
    assert_eq!(axis_number(4000.0), "4,000");
    assert_eq!(axis_number(0.0), "0");
    assert_eq!(axis_number(243.5), "243.5");
    assert_eq!(axis_number(18000.0), "18,000");
}
