//! Human-friendly elapsed-time labels.

use chrono::{DateTime, Utc};

/// Relative label for a past instant: "just now", "5m ago", "3h ago",
/// "2d ago", or the calendar date once it is a week old.
pub fn relative_time(date: DateTime<Utc>) -> String {
    relative_time_at(date, Utc::now())
}

/// As [`relative_time`], from a Unix-millisecond timestamp.
pub fn relative_time_from_millis(timestamp_ms: i64) -> String {
    let date = DateTime::from_timestamp_millis(timestamp_ms).unwrap_or_else(Utc::now);
    relative_time(date)
}

fn relative_time_at(date: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed_secs = (now - date).num_seconds();
    let minutes = elapsed_secs / 60;
    let hours = minutes / 60;
    let days = hours / 24;

    if elapsed_secs < 60 {
        "just now".to_string()
    } else if minutes < 60 {
        format!("{}m ago", minutes)
    } else if hours < 24 {
        format!("{}h ago", hours)
    } else if days < 7 {
        format!("{}d ago", days)
    } else {
        date.format("%Y-%m-%d").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(secs_ago: i64) -> (DateTime<Utc>, DateTime<Utc>) {
        let now = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        (now - chrono::Duration::seconds(secs_ago), now)
    }

    #[test]
    fn test_just_now() {
        let (date, now) = at(30);
        assert_eq!(relative_time_at(date, now), "just now");
    }

    #[test]
    fn test_minutes_ago() {
        let (date, now) = at(5 * 60 + 30);
        assert_eq!(relative_time_at(date, now), "5m ago");
        let (date, now) = at(59 * 60 + 59);
        assert_eq!(relative_time_at(date, now), "59m ago");
    }

    #[test]
    fn test_hours_ago() {
        let (date, now) = at(3 * 3600 + 15 * 60);
        assert_eq!(relative_time_at(date, now), "3h ago");
        let (date, now) = at(23 * 3600 + 59 * 60);
        assert_eq!(relative_time_at(date, now), "23h ago");
    }

    #[test]
    fn test_days_ago() {
        let (date, now) = at(2 * 86_400 + 3600);
        assert_eq!(relative_time_at(date, now), "2d ago");
        let (date, now) = at(6 * 86_400 + 23 * 3600);
        assert_eq!(relative_time_at(date, now), "6d ago");
    }

    #[test]
    fn test_old_dates_render_as_calendar_dates() {
        let (date, now) = at(10 * 86_400);
        assert_eq!(relative_time_at(date, now), "2024-04-21");
    }

    #[test]
    fn test_future_dates_read_as_just_now() {
        let (date, now) = at(-120);
        assert_eq!(relative_time_at(date, now), "just now");
    }
}
