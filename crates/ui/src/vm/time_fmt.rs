use chrono::{DateTime, Utc};

pub const SCOREBOARD_DATE_FORMAT: &str = "%Y-%m-%d %H:%M";

#[must_use]
pub fn format_datetime(value: DateTime<Utc>) -> String {
    value.format(SCOREBOARD_DATE_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use learn_core::time::fixed_now;

    #[test]
    fn minutes_precision() {
        assert_eq!(format_datetime(fixed_now()), "2023-11-14 22:13");
    }
}
