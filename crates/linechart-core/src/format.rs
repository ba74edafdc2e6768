// File: crates/linechart-core/src/format.rs
// Summary: Scientific-notation text for tick and value labels (`2.5E+01`).

/// One fractional digit and a signed exponent of at least two digits.
pub fn format_value(v: f64) -> String {
    let raw = format!("{:.1E}", v);
    match raw.split_once('E') {
        Some((mantissa, exp)) => match exp.parse::<i32>() {
            Ok(e) => {
                let sign = if e < 0 { '-' } else { '+' };
                format!("{mantissa}E{sign}{:02}", e.unsigned_abs())
            }
            Err(_) => raw,
        },
        None => raw,
    }
}
