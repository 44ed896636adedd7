//! Timestamp grammar checks
//!
//! Tokens are never converted to numbers here; they go to the transcoder
//! verbatim. These checks only decide whether a token looks like one of the
//! two transcoder duration syntaxes:
//!
//! - `[-][HH:]MM:SS[.m...]`
//! - `[+|-]S+[.m...][s|ms|us]`

/// Check a token against both accepted timestamp syntaxes
pub fn is_valid_timestamp(token: &str) -> bool {
    is_clock_timestamp(token) || is_numeric_timestamp(token)
}

/// `[-][H+:]MM:SS[.fraction]` with exactly two digits for minutes and seconds
fn is_clock_timestamp(token: &str) -> bool {
    let body = token.strip_prefix('-').unwrap_or(token);
    let (clock, fraction) = split_fraction(body);
    if !fraction.map_or(true, is_digits) {
        return false;
    }

    let parts: Vec<&str> = clock.split(':').collect();
    match parts.as_slice() {
        [minutes, seconds] => is_two_digits(minutes) && is_two_digits(seconds),
        [hours, minutes, seconds] => {
            is_digits(hours) && is_two_digits(minutes) && is_two_digits(seconds)
        }
        _ => false,
    }
}

/// `[+|-]digits[.fraction][s|ms|us]`
fn is_numeric_timestamp(token: &str) -> bool {
    let body = token
        .strip_prefix('-')
        .or_else(|| token.strip_prefix('+'))
        .unwrap_or(token);
    let body = strip_unit(body);

    let (whole, fraction) = split_fraction(body);
    is_digits(whole) && fraction.map_or(true, is_digits)
}

fn strip_unit(body: &str) -> &str {
    for unit in ["ms", "us", "s"] {
        if let Some(stripped) = body.strip_suffix(unit) {
            return stripped;
        }
    }
    body
}

fn split_fraction(body: &str) -> (&str, Option<&str>) {
    match body.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (body, None),
    }
}

fn is_digits(text: &str) -> bool {
    !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit())
}

fn is_two_digits(text: &str) -> bool {
    text.len() == 2 && is_digits(text)
}
