//! Formatting helpers for presenting step metrics.

/// Step count with thousands separators, e.g. `12,000`.
pub fn format_steps(value: u32) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

pub fn format_percent(value: u32) -> String {
    format!("{value}%")
}

/// Compact axis tick, e.g. `2.4k` for 2 400 and `12k` for 12 000.
pub fn format_axis_tick(value: u32) -> String {
    if value < 1_000 {
        return value.to_string();
    }
    let tenths = (u64::from(value) + 50) / 100;
    if tenths % 10 == 0 {
        format!("{}k", tenths / 10)
    } else {
        format!("{}.{}k", tenths / 10, tenths % 10)
    }
}
