// File: crates/gdpchart-core/src/format.rs
// Summary: Label formatting (calendar quarters, thousands grouping).

/// Map an ISO date stamp to a `"<year> Q<n>"` label. The dataset carries
/// quarter starts only, so month 01/04/07/10 selects Q1..Q4; any other
/// month is a data-format violation and the raw stamp comes back unchanged.
pub fn quarter_label(stamp: &str) -> String {
    let (year, month) = match (stamp.get(0..4), stamp.get(5..7)) {
        (Some(y), Some(m)) => (y, m),
        _ => return stamp.to_string(),
    };
    let quarter = match month {
        "01" => "Q1",
        "04" => "Q2",
        "07" => "Q3",
        "10" => "Q4",
        _ => return stamp.to_string(),
    };
    format!("{} {}", year, quarter)
}

/// Thousands-comma-grouped decimal with exactly one fractional digit:
/// `1087.6` -> `"1,087.6"`.
pub fn decimal_grouped(value: f64) -> String {
    let fixed = format!("{:.1}", value);
    match fixed.split_once('.') {
        Some((int_part, frac)) => format!("{}.{}", group_digits(int_part), frac),
        None => group_digits(&fixed),
    }
}

/// Thousands-comma-grouped axis number, no forced fraction:
/// `4000.0` -> `"4,000"`, `243.5` -> `"243.5"`.
pub fn axis_number(value: f64) -> String {
    if value.fract() == 0.0 {
        group_digits(&format!("{}", value as i64))
    } else {
        decimal_grouped(value)
    }
}

fn group_digits(int_part: &str) -> String {
    let (sign, digits) = match int_part.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", int_part),
    };
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    let len = digits.len();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    format!("{}{}", sign, out)
}

/// Four-digit year for bottom-axis labels.
pub fn year_label(date: chrono::NaiveDate) -> String {
    use chrono::Datelike;
    format!("{}", date.year())
}
