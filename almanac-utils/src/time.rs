use std::time::{SystemTime, UNIX_EPOCH};

use chrono::{Local, TimeZone};

/// Return the current unix timestamp in milliseconds.
pub fn now_unix_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |duration| u64::try_from(duration.as_millis()).unwrap_or(u64::MAX))
}

/// Render an epoch-millis timestamp in local time (`2024-05-01 13:45:10`).
pub fn format_local_timestamp(unix_millis: u64) -> String {
    let Ok(millis) = i64::try_from(unix_millis) else {
        return unix_millis.to_string();
    };

    match Local.timestamp_millis_opt(millis).single() {
        Some(datetime) => datetime.format("%Y-%m-%d %H:%M:%S").to_string(),
        None => unix_millis.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::{format_local_timestamp, now_unix_millis};

    #[test]
    fn now_is_after_2020() {
        assert!(now_unix_millis() > 1_577_836_800_000);
    }

    #[test]
    fn local_timestamp_has_fixed_shape() {
        let formatted = format_local_timestamp(1_700_000_000_000);
        assert_eq!(formatted.len(), "2023-11-14 22:13:20".len());
        assert_eq!(&formatted[4..5], "-");
        assert_eq!(&formatted[10..11], " ");
    }
}
