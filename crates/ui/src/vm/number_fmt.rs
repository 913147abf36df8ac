/// Render a table value the way it is written in class: integers without a
/// fraction, decimals with a comma.
#[must_use]
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        return "0".into();
    }
    if value.fract() == 0.0 && value.abs() < 1e15 {
        return format!("{value:.0}");
    }
    value.to_string().replace('.', ",")
}

/// "Frage 2 von 5" style label for a one-based position.
#[must_use]
pub fn position_label(noun: &str, index: usize, total: usize) -> String {
    format!("{noun} {} von {total}", index + 1)
}

/// Inline style for a position bar at `(index + 1) / total`.
#[must_use]
pub fn bar_style(index: usize, total: usize) -> String {
    let percent = if total == 0 {
        0.0
    } else {
        ((index + 1).min(total) as f64 / total as f64) * 100.0
    };
    format!("width: {percent:.1}%")
}
