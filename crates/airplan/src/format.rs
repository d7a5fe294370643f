//! Number formatting for table cells

/// Format a currency value without cents, with thousands separators
pub fn format_currency(value: f64) -> String {
    let abs_value = value.abs();
    let dollars = abs_value.round() as i64;

    // Add thousands separators
    let dollars_str = dollars.to_string();
    let mut result = String::new();
    for (i, c) in dollars_str.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    let dollars_formatted: String = result.chars().rev().collect();

    if value >= 0.0 {
        format!("${}", dollars_formatted)
    } else {
        format!("-${}", dollars_formatted)
    }
}

/// Combined cost cell: upfront plus yearly running cost, e.g. `$1,000 + $80 pa`
pub fn cost_label(upfront: f64, running: f64) -> String {
    format!("{} + {} pa", format_currency(upfront), format_currency(running))
}

/// Format a decibel level, e.g. `58 dB`
pub fn format_db(value: f64) -> String {
    format!("{:.0} dB", value)
}
