//! Human readable rendering of wait times.

use chrono::TimeDelta;

const SECONDS_PER_DAY: i64 = 86_400;

/// Formats a duration as e.g. `"1 day, 2 hours and 5 seconds"`.
///
/// Zero components are dropped. Units are pluralized only when the value is
/// greater than one. A zero (or negative) duration reads `"0 seconds"`.
pub fn human_readable(duration: TimeDelta) -> String {
    let total = duration.num_seconds().max(0);

    let days = total / SECONDS_PER_DAY;
    let leftover = total % SECONDS_PER_DAY;
    let hours = leftover / 3600;
    let remainder = leftover % 3600;
    let minutes = remainder / 60;
    let seconds = remainder % 60;

    let parts: Vec<String> = [
        ("day", days),
        ("hour", hours),
        ("minute", minutes),
        ("second", seconds),
    ]
    .into_iter()
    .filter(|(_, value)| *value != 0)
    .map(|(unit, value)| format!("{} {}{}", value, unit, if value > 1 { "s" } else { "" }))
    .collect();

    match parts.split_last() {
        None => "0 seconds".to_string(),
        Some((last, [])) => last.clone(),
        Some((last, rest)) => format!("{} and {}", rest.join(", "), last),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn delta(days: i64, hours: i64, minutes: i64, seconds: i64) -> TimeDelta {
        TimeDelta::seconds(days * SECONDS_PER_DAY + hours * 3600 + minutes * 60 + seconds)
    }

    #[test]
    fn test_zero() {
        assert_eq!(human_readable(TimeDelta::zero()), "0 seconds");
        assert_eq!(human_readable(TimeDelta::milliseconds(999)), "0 seconds");
    }

    #[test]
    fn test_negative_is_zero() {
        assert_eq!(human_readable(TimeDelta::seconds(-30)), "0 seconds");
    }

    #[test]
    fn test_singular_units() {
        assert_eq!(human_readable(delta(1, 0, 0, 0)), "1 day");
        assert_eq!(human_readable(delta(0, 1, 0, 0)), "1 hour");
        assert_eq!(human_readable(delta(0, 0, 1, 0)), "1 minute");
        assert_eq!(human_readable(delta(0, 0, 0, 1)), "1 second");
    }

    #[test]
    fn test_joining() {
        assert_eq!(human_readable(delta(0, 2, 0, 5)), "2 hours and 5 seconds");
        assert_eq!(
            human_readable(delta(1, 2, 3, 4)),
            "1 day, 2 hours, 3 minutes and 4 seconds"
        );
        assert_eq!(human_readable(delta(3, 0, 1, 0)), "3 days and 1 minute");
    }

    #[test]
    fn test_sub_second_is_truncated() {
        let wait = delta(0, 23, 59, 59) + TimeDelta::milliseconds(750);
        assert_eq!(human_readable(wait), "23 hours, 59 minutes and 59 seconds");
    }

    proptest! {
        #[test]
        fn prop_components_round_trip(
            days in 0i64..400,
            hours in 0i64..24,
            minutes in 0i64..60,
            seconds in 0i64..60,
        ) {
            let text = human_readable(delta(days, hours, minutes, seconds));
            let values = [days, hours, minutes, seconds];
            let units = ["day", "hour", "minute", "second"];

            let expected: Vec<String> = values
                .iter()
                .zip(units)
                .filter(|(v, _)| **v != 0)
                .map(|(v, u)| if *v > 1 { format!("{} {}s", v, u) } else { format!("{} {}", v, u) })
                .collect();

            if expected.is_empty() {
                prop_assert_eq!(text, "0 seconds");
            } else {
                prop_assert!(!text.contains(" 0 "));
                prop_assert!(!text.starts_with("0 "));
                let (last, rest) = expected.split_last().unwrap();
                if rest.is_empty() {
                    prop_assert_eq!(&text, last);
                } else {
                    prop_assert_eq!(text, format!("{} and {}", rest.join(", "), last));
                }
            }
        }

        #[test]
        fn prop_single_one_is_singular(unit in 0usize..4) {
            let mut values = [0i64; 4];
            values[unit] = 1;
            let units = ["day", "hour", "minute", "second"];
            let text = human_readable(delta(values[0], values[1], values[2], values[3]));
            prop_assert_eq!(text, format!("1 {}", units[unit]));
        }
    }
}
