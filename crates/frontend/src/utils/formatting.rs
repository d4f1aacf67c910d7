use chrono::{DateTime, Local, Utc};

/// Timestamps are stored in UTC and shown in the reader's local time.
pub fn comment_time(time: DateTime<Utc>) -> String {
    time.with_timezone(&Local)
        .format("%Y年%-m月%-d日 %H:%M")
        .to_string()
}

pub fn admin_time(time: DateTime<Utc>) -> String {
    time.with_timezone(&Local)
        .format("%Y/%-m/%-d %H:%M:%S")
        .to_string()
}
