//! Conversion from raw upstream records to normalized arrivals.
//!
//! The upstream message fields are noisy. Status and location are picked from
//! whichever field looks plausible, with the countdown and arrival code as
//! fallbacks, so that every display field ends up non-empty and free of
//! garbage tokens.

use crate::domain::{
    ARRIVED, ENTERING, NormalizedArrival, UNKNOWN, contains_garbage, countdown_text,
    is_plausible_text, parenthesized_name, resolve_line_name,
};

use super::types::{RawArrival, field_text};

/// Arrival code for a train entering the station.
const CODE_ENTERING: &str = "1";

/// Normalize one raw arrival record.
pub fn normalize(raw: &RawArrival) -> NormalizedArrival {
    let seconds = raw.seconds();
    let countdown = countdown_text(seconds);
    let fallback = if seconds > 0 {
        countdown.clone()
    } else {
        ARRIVED.to_string()
    };

    let message = clean_message(&field_text(&raw.arvl_msg2));
    let secondary = clean_message(&field_text(&raw.arvl_msg3));
    let message_ok = is_plausible_text(&message);

    let (status, time_display) = if message_ok && has_any(&message, &["분", "초", "후"]) {
        (message.clone(), message.clone())
    } else if message_ok && has_any(&message, &["도착", "진입", "전역"]) {
        (message.clone(), fallback.clone())
    } else if seconds > 0 {
        (countdown.clone(), countdown)
    } else {
        // Code "0" (at the platform) and unknown codes both read as arrived
        let by_code = if field_text(&raw.arvl_cd) == CODE_ENTERING {
            ENTERING
        } else {
            ARRIVED
        };
        (by_code.to_string(), by_code.to_string())
    };

    let location = if is_plausible_text(&secondary) {
        secondary
    } else if message_ok && !has_any(&message, &["분", "초"]) {
        match parenthesized_name(&message) {
            Some(name) => name.to_string(),
            None if message.chars().count() <= 4 => message.clone(),
            None => String::new(),
        }
    } else {
        String::new()
    };

    // Single pass over everything derived from upstream text
    let status = scrub(status, &fallback);
    let time_display = scrub(time_display, &fallback);
    let location = scrub(location, "");

    let line_id = field_text(&raw.subway_id);
    let line_name = resolve_line_name(&line_id);

    NormalizedArrival {
        direction: or_unknown(field_text(&raw.bstatn_nm)),
        status,
        time_display,
        current_location: or_unknown(location),
        line_id,
        line_name,
        direction_raw: field_text(&raw.updn_line),
        is_last_train: raw.is_last_train(),
    }
}

/// Trim a message and drop it entirely if it carries garbage.
fn clean_message(text: &str) -> String {
    let text = text.trim();
    if contains_garbage(text) {
        String::new()
    } else {
        text.to_string()
    }
}

fn scrub(value: String, fallback: &str) -> String {
    if contains_garbage(&value) {
        fallback.to_string()
    } else {
        value
    }
}

fn has_any(text: &str, tokens: &[&str]) -> bool {
    tokens.iter().any(|token| text.contains(token))
}

fn or_unknown(value: String) -> String {
    if value.trim().is_empty() {
        UNKNOWN.to_string()
    } else {
        value
    }
}
