#[cfg(test)]
#[path = "ui_test.rs"]
mod tests;

use yansi::Paint;

use crate::domain::models::ClientError;
use crate::domain::models::DelayResult;
use crate::domain::models::OptionsSet;
use crate::domain::models::PredictionResult;
use crate::domain::models::PriceResult;
use crate::domain::models::Profile;
use crate::domain::models::RiskBand;
use crate::domain::models::Session;

/// Groups digits for fare display: 4521.5 -> "4,521.50".
pub fn format_amount(value: f64) -> String {
    let formatted = format!("{value:.2}");
    let (int_part, frac_part) = formatted.split_once('.').unwrap();
    let (sign, digits) = match int_part.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", int_part),
    };

    let mut grouped = String::new();
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    return format!("{sign}{grouped}.{frac_part}");
}

pub fn format_delay(result: &DelayResult) -> String {
    let band = match result.risk_band() {
        RiskBand::Elevated => "ELEVATED",
        RiskBand::Nominal => "NOMINAL",
    };

    return [
        format!("Delay probability: {}%", result.risk_score),
        format!("Status: {}", result.prediction),
        format!("Model probability: {}", result.probability),
        format!("Risk band: {band}"),
    ]
    .join("\n");
}

pub fn format_price(result: &PriceResult) -> String {
    return [
        format!("Estimated fare: ${}", format_amount(result.estimated_price)),
        "Market oracle verified".to_string(),
    ]
    .join("\n");
}

pub fn format_options(options: &OptionsSet) -> String {
    let mut lines = vec!["AIRLINES:".to_string()];
    if options.airlines.is_empty() {
        lines.push("  (none)".to_string());
    }
    for airline in &options.airlines {
        lines.push(format!("  - {airline}"));
    }

    lines.push("CITIES:".to_string());
    if options.cities.is_empty() {
        lines.push("  (none)".to_string());
    }
    for city in &options.cities {
        lines.push(format!("  - {city}"));
    }

    return lines.join("\n");
}

pub fn format_profile(profile: &Profile) -> String {
    return format!("{} <{}>", profile.name, profile.email);
}

pub fn print_prediction(result: &PredictionResult) {
    match result {
        PredictionResult::Delay(delay) => {
            let card = format_delay(delay);
            match delay.risk_band() {
                RiskBand::Elevated => println!("{}", Paint::red(card)),
                RiskBand::Nominal => println!("{}", Paint::green(card)),
            }
        }
        PredictionResult::Price(price) => {
            println!("{}", Paint::blue(format_price(price)));
        }
    }
}

pub fn print_failure(err: &ClientError) {
    if let ClientError::Auth(_) = err {
        eprintln!(
            "{}",
            Paint::red(format!(
                "Request failed: {err}. Run `windbreaker login` and try again."
            ))
        );
        return;
    }

    eprintln!("{}", Paint::red(format!("Request failed: {err}")));
}

pub fn print_redirect_to_login() {
    println!(
        "{}",
        Paint::yellow("You are signed out. Run `windbreaker login` to access this view.")
    );
}

pub fn print_pending() {
    println!("Processing model...");
}

pub fn print_awaiting_input() {
    println!("{}", Paint::new("Awaiting input stream...").dimmed());
}

pub fn print_signed_in(session: &Session) {
    println!("Welcome back, {}.", session.display_name);
}

pub fn print_signed_out() {
    println!("Signed out.");
}

pub fn print_status_online() {
    println!("{}", Paint::green("STATUS: SYSTEMS_OPERATIONAL"));
}

pub fn print_status_offline(err: &ClientError) {
    println!("{}", Paint::red(format!("STATUS: UNREACHABLE ({err})")));
}
