pub mod countdown;
pub mod formatter;

pub use self::countdown::{format_countdown, minutes_from_millis};
pub use self::formatter::{EnglishStyle, TimeFormatter};

use crate::Result;

// 下面是基于默认格式器（本地时区 + 系统时钟）的便捷函数，
// 供不需要注入时钟/时区的调用方直接使用

/// 以默认模板渲染当前时间
pub fn format_now() -> String {
    TimeFormatter::new().format_now()
}

/// 以指定模板渲染当前时间，模板非法时记录日志并返回空串
pub fn format_now_with(pattern: &str) -> String {
    TimeFormatter::new().format_now_with(pattern)
}

/// 以默认模板渲染给定时间戳
pub fn format_epoch(epoch_ms: i64) -> Result<String> {
    TimeFormatter::new().format_epoch(epoch_ms)
}

/// 以指定模板渲染给定时间戳，模板非法时返回错误
pub fn format_epoch_with(epoch_ms: i64, pattern: &str) -> Result<String> {
    TimeFormatter::new().format_epoch_with(epoch_ms, pattern)
}

/// 按模板解析时间文本为毫秒时间戳，失败返回 0
pub fn parse_epoch(pattern: &str, text: &str) -> i64 {
    TimeFormatter::new().parse_epoch(pattern, text)
}

/// 按默认模板解析时间文本为毫秒时间戳，失败返回 0
pub fn parse_epoch_default(text: &str) -> i64 {
    TimeFormatter::new().parse_epoch_default(text)
}

/// "yyyy-MM-dd HH:mm:ss" 文本转 "yyyy/MM/dd"
pub fn reformat_datetime(text: &str) -> String {
    TimeFormatter::new().reformat_datetime(text)
}

/// "yyyy-MM-dd" 文本转 "yyyy/MM/dd"
pub fn reformat_date(text: &str) -> String {
    TimeFormatter::new().reformat_date(text)
}

/// "HH:mm:ss" 文本转 "yyyy/MM/dd"（日期部分落在纪元日）
pub fn reformat_time(text: &str) -> String {
    TimeFormatter::new().reformat_time(text)
}

/// 以英文 12 小时制渲染给定时间戳
pub fn format_english(epoch_ms: i64, style: EnglishStyle) -> String {
    TimeFormatter::new().format_english(epoch_ms, style)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_formatter_renders_now() {
        // 本地时区 + 系统时钟，只能验证形状
        let s = format_now();
        assert_eq!(s.len(), "2024-06-04 15:30:00".len());
    }

    #[test]
    fn test_default_parse_failure_sentinel() {
        assert_eq!(parse_epoch_default("not a valid date"), 0);
        assert_eq!(parse_epoch("%Y-%m-%d", "not a valid date"), 0);
    }
}
