use super::parse_duration;

#[test]
fn it_parses_hours_and_minutes() {
    assert_eq!(parse_duration("2h 30m"), 150);
}

#[test]
fn it_parses_minutes_only() {
    assert_eq!(parse_duration("45m"), 45);
}

#[test]
fn it_parses_hours_only() {
    assert_eq!(parse_duration("3h"), 180);
}

#[test]
fn it_parses_the_empty_string_to_zero() {
    assert_eq!(parse_duration(""), 0);
}

#[test]
fn it_parses_garbage_to_zero() {
    assert_eq!(parse_duration("garbage"), 0);
}

#[test]
fn it_ignores_component_order() {
    assert_eq!(parse_duration("30m 2h"), 150);
}

#[test]
fn it_is_case_insensitive() {
    assert_eq!(parse_duration("2H 30M"), 150);
}

#[test]
fn it_tolerates_surrounding_text() {
    assert_eq!(parse_duration("roughly 1h and 5m total"), 65);
}

#[test]
fn it_accepts_attached_units() {
    assert_eq!(parse_duration("1h30m"), 90);
}

#[test]
fn it_matches_the_product_formula() {
    for (hours, minutes) in [(0, 0), (1, 0), (0, 59), (4, 45), (12, 1)] {
        let text = format!("{hours}h {minutes}m");
        assert_eq!(parse_duration(&text), hours * 60 + minutes);
    }
}

#[test]
fn it_defaults_overflowing_components_to_zero() {
    assert_eq!(parse_duration("99999999999999999999h"), 0);
}
