//! Display formatting helpers

/// Format a number of seconds as `MM:SS`, truncating fractional seconds
pub fn format_mmss(seconds: f64) -> String {
    let whole = if seconds.is_finite() && seconds > 0.0 {
        seconds as u64
    } else {
        0
    };
    format!("{:02}:{:02}", whole / 60, whole % 60)
}
