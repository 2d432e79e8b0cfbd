use chrono::{DateTime, Local};
use std::time::SystemTime;

/// 以本地时间格式化时间戳（`YYYY-MM-DD HH:MM:SS`）
pub fn format_timestamp(time: SystemTime) -> String {
    let local: DateTime<Local> = time.into();
    local.format("%Y-%m-%d %H:%M:%S").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_format_timestamp_shape() {
        let text = format_timestamp(
            SystemTime::UNIX_EPOCH + Duration::from_secs(86_400 * 365),
        );
        assert_eq!(text.len(), 19);
        assert!(text.starts_with("1971-") || text.starts_with("1970-"));
    }
}
