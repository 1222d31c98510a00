/// Placeholder shown for durations that did not start or are unknown.
pub const NO_DURATION: &str = "—";

/// `HH:MM:SS` with unbounded hours, or `—` for missing or non-positive input.
pub fn fmt_duration(seconds: Option<i64>) -> String {
    let Some(seconds) = seconds.filter(|s| *s > 0) else {
        return NO_DURATION.to_string();
    };

    let hours = seconds / 3600;
    let minutes = (seconds / 60) % 60;
    let secs = seconds % 60;
    format!("{:02}:{:02}:{:02}", hours, minutes, secs)
}

/// Coarsest useful rendering: `H:MM`, `M:SS` or bare seconds.
pub fn fmt_short_duration(seconds: i64, with_unit: bool) -> String {
    if seconds <= 0 {
        return NO_DURATION.to_string();
    }

    let hours = seconds / 3600;
    let minutes = (seconds / 60) % 60;
    let secs = seconds % 60;

    let mut result = if hours >= 1 {
        format!("{}:{:02}", hours, minutes)
    } else if minutes >= 1 {
        format!("{}:{:02}", minutes, secs)
    } else {
        secs.to_string()
    };

    if with_unit {
        result.push_str(fmt_short_duration_unit(seconds));
    }
    result
}

/// `h`, `m` or `s` for the coarsest unit present, empty for non-positive input.
pub fn fmt_short_duration_unit(seconds: i64) -> &'static str {
    if seconds <= 0 {
        ""
    } else if seconds >= 3600 {
        "h"
    } else if seconds >= 60 {
        "m"
    } else {
        "s"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duration_sentinel_for_empty_input() {
        assert_eq!(fmt_duration(Some(0)), "—");
        assert_eq!(fmt_duration(Some(-5)), "—");
        assert_eq!(fmt_duration(None), "—");
    }

    #[test]
    fn duration_is_zero_padded() {
        assert_eq!(fmt_duration(Some(1)), "00:00:01");
        assert_eq!(fmt_duration(Some(3661)), "01:01:01");
        assert_eq!(fmt_duration(Some(59 * 60 + 59)), "00:59:59");
    }

    #[test]
    fn duration_hours_do_not_wrap() {
        assert_eq!(fmt_duration(Some(25 * 3600)), "25:00:00");
        assert_eq!(fmt_duration(Some(100 * 3600 + 5)), "100:00:05");
    }

    #[test]
    fn short_duration_picks_coarsest_unit() {
        assert_eq!(fmt_short_duration(45, false), "45");
        assert_eq!(fmt_short_duration(45, true), "45s");
        assert_eq!(fmt_short_duration(125, false), "2:05");
        assert_eq!(fmt_short_duration(125, true), "2:05m");
        assert_eq!(fmt_short_duration(3725, false), "1:02");
        assert_eq!(fmt_short_duration(3725, true), "1:02h");
    }

    #[test]
    fn short_duration_boundaries() {
        assert_eq!(fmt_short_duration(60, true), "1:00m");
        assert_eq!(fmt_short_duration(3600, true), "1:00h");
        assert_eq!(fmt_short_duration(30 * 3600, false), "30:00");
        assert_eq!(fmt_short_duration(0, true), "—");
        assert_eq!(fmt_short_duration(-1, false), "—");
    }

    #[test]
    fn short_duration_unit_alone() {
        assert_eq!(fmt_short_duration_unit(0), "");
        assert_eq!(fmt_short_duration_unit(-10), "");
        assert_eq!(fmt_short_duration_unit(59), "s");
        assert_eq!(fmt_short_duration_unit(60), "m");
        assert_eq!(fmt_short_duration_unit(3599), "m");
        assert_eq!(fmt_short_duration_unit(7200), "h");
    }
}
