#[cfg(test)]
#[path = "duration_test.rs"]
mod tests;

use once_cell::sync::Lazy;
use regex::Regex;

static HOURS: Lazy<Regex> = Lazy::new(|| {
    return Regex::new(r"(?i)(\d+)\s*h").unwrap();
});

static MINUTES: Lazy<Regex> = Lazy::new(|| {
    return Regex::new(r"(?i)(\d+)\s*m").unwrap();
});

/// Converts free text travel time to minutes: "2h 30m" -> 150. The hour
/// and minute components may appear in either order with arbitrary
/// surrounding text; a missing component counts as zero. Total on any
/// input, including the empty string.
pub fn parse_duration(text: &str) -> u32 {
    let hours = capture_number(&HOURS, text);
    let minutes = capture_number(&MINUTES, text);

    return hours.saturating_mul(60).saturating_add(minutes);
}

fn capture_number(pattern: &Regex, text: &str) -> u32 {
    return pattern
        .captures(text)
        .and_then(|caps| return caps.get(1))
        .and_then(|digits| return digits.as_str().parse::<u32>().ok())
        .unwrap_or(0);
}
