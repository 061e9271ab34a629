//! Seconds-until-arrival display text.

/// Shown when the train is at the platform.
pub const ARRIVED: &str = "도착";

/// Shown when the train is entering the station.
pub const ENTERING: &str = "진입중";

/// Shown for a positive countdown with no whole minutes or seconds.
pub const ARRIVING_NOW: &str = "곧 도착";

/// Format a countdown in seconds as rider-facing text.
///
/// Non-positive values mean the train has arrived.
///
/// # Examples
///
/// ```
/// use arrival_board::domain::countdown_text;
///
/// assert_eq!(countdown_text(125), "2분 5초 후");
/// assert_eq!(countdown_text(120), "2분 후");
/// assert_eq!(countdown_text(45), "45초 후");
/// assert_eq!(countdown_text(0), "도착");
/// ```
pub fn countdown_text(seconds: i64) -> String {
    if seconds <= 0 {
        return ARRIVED.to_string();
    }

    let minutes = seconds / 60;
    let rest = seconds % 60;

    match (minutes, rest) {
        (0, 0) => ARRIVING_NOW.to_string(),
        (m, 0) => format!("{m}분 후"),
        (0, s) => format!("{s}초 후"),
        (m, s) => format!("{m}분 {s}초 후"),
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Whole minutes have no seconds clause
        #[test]
        fn whole_minutes_have_no_seconds(m in 1i64..1000) {
            prop_assert_eq!(countdown_text(m * 60), format!("{m}분 후"));
        }

        /// Under a minute is shown in seconds
        #[test]
        fn under_a_minute(s in 1i64..60) {
            prop_assert_eq!(countdown_text(s), format!("{s}초 후"));
        }

        /// Mixed values mention both units
        #[test]
        fn mixed(m in 1i64..1000, s in 1i64..60) {
            prop_assert_eq!(countdown_text(m * 60 + s), format!("{m}분 {s}초 후"));
        }

        /// Positive countdowns are never "arrived"
        #[test]
        fn positive_is_pending(s in 1i64..100_000) {
            let text = countdown_text(s);
            prop_assert!(text.ends_with('후'));
        }
    }
}
