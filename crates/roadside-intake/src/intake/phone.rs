//! Nigerian mobile number checks and display formatting.

use once_cell::sync::Lazy;
use regex::Regex;

use super::text::is_form_whitespace;

const COUNTRY_CODE: &str = "234";

static NIGERIAN_MOBILE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\+234|0)[789][01][0-9]{8}$").expect("nigerian mobile pattern compiles")
});

/// Whether `phone`, with all whitespace removed, is a Nigerian mobile number
/// in `+234` or trunk-`0` form.
pub fn is_valid_nigerian_mobile(phone: &str) -> bool {
    let compact: String = phone.chars().filter(|c| !is_form_whitespace(*c)).collect();
    NIGERIAN_MOBILE.is_match(&compact)
}

/// Regroup a Nigerian number as `+234 XXX XXX XXXX` or `0XXX XXX XXXX`.
///
/// Runs on every keystroke, so partial input is grouped without padding and
/// anything whose digits start with neither `234` nor `0` comes back as typed.
pub fn normalize(phone: &str) -> String {
    let digits: String = phone.chars().filter(char::is_ascii_digit).collect();

    if let Some(subscriber) = digits.strip_prefix(COUNTRY_CODE) {
        return format!("+{COUNTRY_CODE} {}", group(subscriber));
    }

    if let Some(subscriber) = digits.strip_prefix('0') {
        return format!("0{}", group(subscriber));
    }

    phone.to_string()
}

fn group(subscriber: &str) -> String {
    let (head, tail) = split_at_most(subscriber, 3);
    let (middle, rest) = split_at_most(tail, 3);
    format!("{head} {middle} {rest}")
}

// Input is ASCII digits only, so byte offsets are char boundaries.
fn split_at_most(value: &str, at: usize) -> (&str, &str) {
    value.split_at(at.min(value.len()))
}
