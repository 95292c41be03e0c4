//! 日期显示模块
//!
//! 服务端以 ISO 8601 / RFC 3339 字符串返回时间（如证据的上传时间），
//! 界面只显示日历日期。

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use std::fmt;

const DISPLAY_FORMAT: &str = "%d/%m/%Y";

/// 日历日期
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Date(NaiveDate);

impl Date {
    /// 从 ISO 8601 / RFC 3339 字符串解析
    ///
    /// 带时区偏移的时间取其自身偏移下的日期。返回 None 如果解析失败
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            return Some(Self(dt.date_naive()));
        }
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f") {
            return Some(Self(dt.date()));
        }
        NaiveDate::parse_from_str(s, "%Y-%m-%d").ok().map(Self)
    }

    #[inline]
    pub fn naive(&self) -> NaiveDate {
        self.0
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DISPLAY_FORMAT))
    }
}

/// 将服务端时间字符串格式化为日期；无法解析时原样返回
pub fn display_date(raw: &str) -> String {
    Date::parse(raw)
        .map(|d| d.to_string())
        .unwrap_or_else(|| raw.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rfc3339_with_offset_keeps_its_own_day() {
        assert_eq!(display_date("2025-03-09T23:30:00-05:00"), "09/03/2025");
        assert_eq!(display_date("2025-03-10T04:30:00Z"), "10/03/2025");
    }

    #[test]
    fn test_naive_forms() {
        assert_eq!(display_date("2025-01-02T08:00:00.123456"), "02/01/2025");
        assert_eq!(display_date("2025-01-02"), "02/01/2025");
    }

    #[test]
    fn test_unparsable_text_is_returned_verbatim() {
        assert_eq!(display_date("ayer"), "ayer");
        assert!(Date::parse("").is_none());
    }
}
