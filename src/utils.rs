use chrono::{Local, TimeZone};

pub fn shorten_id(id: &str) -> String {
    let len = id.chars().count();
    if len > 16 {
        // 0x04514c3d1a7074E6972190A5632875F4d14785F8 -> 0x04514c...d14785F8
        let head: String = id.chars().take(8).collect();
        let tail: String = id.chars().skip(len - 8).collect();
        format!("{head}...{tail}")
    } else {
        id.to_string()
    }
}

/// Journal stamp, e.g. `Mar 04, 2025, 09:15 PM`, in local time.
pub fn format_date_stamp(ts_millis: i64) -> String {
    match Local.timestamp_millis_opt(ts_millis).single() {
        Some(dt) => dt.format("%b %d, %Y, %I:%M %p").to_string(),
        None => String::from("—"),
    }
}

/// First `max` chars of `text`, with an ellipsis when cut.
pub fn preview(text: &str, max: usize) -> String {
    if text.chars().count() > max {
        let mut cut: String = text.chars().take(max).collect();
        cut.push('…');
        cut
    } else {
        text.to_string()
    }
}
