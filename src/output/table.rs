use chrono::{DateTime, Utc};
use comfy_table::{ContentArrangement, Table, presets::UTF8_FULL};

use crate::core::Session;

pub(crate) fn format_moment(t: DateTime<Utc>) -> String {
    t.format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Render a session's length as `2h 05m`, `12m 30s` or `45s`.
///
/// Running sessions are measured against `now`.
pub(crate) fn format_duration(session: &Session, now: DateTime<Utc>) -> String {
    let end = session.end_time.unwrap_or(now);
    let secs = (end - session.start_time).num_seconds().max(0);
    let (hours, minutes, seconds) = (secs / 3600, (secs % 3600) / 60, secs % 60);
    if hours > 0 {
        format!("{hours}h {minutes:02}m")
    } else if minutes > 0 {
        format!("{minutes}m {seconds:02}s")
    } else {
        format!("{seconds}s")
    }
}

pub(crate) fn print_session_table(sessions: &[Session], now: DateTime<Utc>) {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Id", "Project", "Start", "End", "Duration", "Tags"]);

    for session in sessions {
        let end = match session.end_time {
            Some(t) => format_moment(t),
            None => "running".to_string(),
        };
        table.add_row(vec![
            session.id.clone(),
            session.project.clone(),
            format_moment(session.start_time),
            end,
            format_duration(session, now),
            session.tags.join(", "),
        ]);
    }

    println!("{table}");
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn session(start_secs: i64, end_secs: Option<i64>) -> Session {
        Session {
            id: "abc".to_string(),
            start_time: DateTime::from_timestamp(start_secs, 0).unwrap(),
            end_time: end_secs.map(|s| DateTime::from_timestamp(s, 0).unwrap()),
            project: "Flow".to_string(),
            tags: Vec::new(),
        }
    }

    #[test]
    fn formats_hours_and_minutes() {
        let s = session(0, Some(2 * 3600 + 5 * 60));
        assert_eq!(format_duration(&s, Utc::now()), "2h 05m");
    }

    #[test]
    fn formats_minutes_and_seconds() {
        let s = session(0, Some(12 * 60 + 30));
        assert_eq!(format_duration(&s, Utc::now()), "12m 30s");
    }

    #[test]
    fn formats_bare_seconds() {
        let s = session(0, Some(45));
        assert_eq!(format_duration(&s, Utc::now()), "45s");
    }

    #[test]
    fn running_session_measures_against_now() {
        let s = session(100, None);
        let now = DateTime::from_timestamp(100 + 90, 0).unwrap();
        assert_eq!(format_duration(&s, now), "1m 30s");
    }

    #[test]
    fn moment_renders_utc_wall_time() {
        let t = Utc.with_ymd_and_hms(2024, 4, 13, 17, 20, 0).unwrap();
        assert_eq!(format_moment(t), "2024-04-13 17:20:00");
    }
}
