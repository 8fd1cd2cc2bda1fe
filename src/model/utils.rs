use chrono::Duration as ChronoDuration;

/// "Running for" display on the scoreboard footer.
#[must_use]
pub fn format_elapsed(td: ChronoDuration) -> String {
    let secs = td.num_seconds().max(0);

    const MINUTE: i64 = 60;
    const HOUR: i64 = 60 * MINUTE;

    if secs >= HOUR {
        let hours = secs / HOUR;
        let minutes = (secs % HOUR) / MINUTE;
        format!("{hours}h, {minutes}m")
    } else if secs >= MINUTE {
        let minutes = secs / MINUTE;
        let seconds = secs % MINUTE;
        format!("{minutes}m, {seconds}s")
    } else {
        format!("{secs}s")
    }
}

/// Elapsed time since an RFC 3339 timestamp, or `None` if it doesn't parse.
#[must_use]
pub fn elapsed_since(started_at: &str) -> Option<String> {
    let started = chrono::DateTime::parse_from_rfc3339(started_at).ok()?;
    let elapsed = chrono::Utc::now() - started.with_timezone(&chrono::Utc);
    Some(format_elapsed(elapsed))
}

/// Spoken-name gate for voice-submitted scores: case-insensitive, trimmed.
#[must_use]
pub fn names_match(spoken: &str, active: &str) -> bool {
    !active.trim().is_empty() && spoken.trim().to_lowercase() == active.trim().to_lowercase()
}
