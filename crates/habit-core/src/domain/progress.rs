//! Progress Rule
//!
//! Share of the target reached, in whole percent.

/// Percentage of `target` covered by `days`, rounded and capped at 100.
///
/// The target is parsed here rather than on input. A target of zero, or one
/// that is not a finite number, counts as reached once any day is logged.
/// A negative target never shows progress.
pub fn progress_percent(days: usize, target: &str) -> u32 {
    let target = match target.trim().parse::<f64>() {
        Ok(value) if value.is_finite() && value != 0.0 => value,
        _ => return if days > 0 { 100 } else { 0 },
    };

    let percent = (days as f64 / target * 100.0).round();
    percent.clamp(0.0, 100.0) as u32
}
