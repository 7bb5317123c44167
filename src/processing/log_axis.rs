//! Projection of raw counts into a log10 plot space.
//!
//! egui_plot has no logarithmic axis, so the plot draws `log10(count)` against
//! the row position and relabels the y grid with powers of ten.

/// Map counts to `[row, log10(count)]` line segments.
///
/// A zero count has no logarithm; the line is broken there instead of being
/// drawn through a made-up value.
pub fn log_segments(counts: &[u64]) -> Vec<Vec<[f64; 2]>> {
    let mut segments = Vec::new();
    let mut current = Vec::new();

    for (row, &count) in counts.iter().enumerate() {
        if count == 0 {
            if !current.is_empty() {
                segments.push(std::mem::take(&mut current));
            }
            continue;
        }
        current.push([row as f64, (count as f64).log10()]);
    }
    if !current.is_empty() {
        segments.push(current);
    }

    segments
}

/// Undo the log projection for display.
pub fn count_at(log_value: f64) -> f64 {
    10f64.powf(log_value)
}

/// Label for a y grid mark given in log space.
pub fn format_decade(log_value: f64) -> String {
    let rounded = log_value.round();
    if (log_value - rounded).abs() < 1e-9 {
        let exp = rounded as i32;
        return if (0..=6).contains(&exp) {
            format!("{}", 10u64.pow(exp as u32))
        } else {
            format!("1e{exp}")
        };
    }

    let value = count_at(log_value);
    if value >= 1.0 {
        format!("{value:.0}")
    } else {
        format!("{value:.2}")
    }
}

/// Entry name for an x position, or an empty label between rows.
pub fn entry_label(names: &[String], x: f64) -> &str {
    let rounded = x.round();
    if (x - rounded).abs() > 1e-6 || rounded < 0.0 {
        return "";
    }
    names.get(rounded as usize).map(String::as_str).unwrap_or("")
}
