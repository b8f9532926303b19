use std::fmt::Write;

use chrono::{DateTime, Local, Locale, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};

use crate::core::clock::{Clock, SystemClock};
use crate::core::error::TimeFmtError;
use crate::{Result, DATETIME_PATTERN, DATE_PATTERN, SLASH_DATE_PATTERN, TIME_PATTERN};

/// 英文时间文案的三种样式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnglishStyle {
    /// "03:15 PM on June 4, 2024"
    Plain,
    /// "On June 4, 2024 at 03:15 PM"
    OnPrefixed,
    /// "at 03:15 PM on June 4, 2024"
    AtPrefixed,
}

impl EnglishStyle {
    fn pattern(self) -> &'static str {
        match self {
            Self::Plain => "%I:%M %p on %B %-d, %Y",
            Self::OnPrefixed => "On %B %-d, %Y at %I:%M %p",
            Self::AtPrefixed => "at %I:%M %p on %B %-d, %Y",
        }
    }
}

/// 时间戳格式化器。时区与时钟由调用方注入，
/// 每次调用独立构造格式化状态，无共享可变状态，可跨线程并发使用
#[derive(Debug, Clone)]
pub struct TimeFormatter<Tz = Local, C = SystemClock>
where
    Tz: TimeZone,
    C: Clock,
{
    tz: Tz,
    clock: C,
    locale: Locale,
}

impl TimeFormatter {
    /// 本地时区 + 系统时钟的生产配置
    pub fn new() -> Self {
        Self::with_parts(Local, SystemClock)
    }
}

impl Default for TimeFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl<Tz, C> TimeFormatter<Tz, C>
where
    Tz: TimeZone,
    C: Clock,
    Tz::Offset: std::fmt::Display,
{
    pub fn with_parts(tz: Tz, clock: C) -> Self {
        Self {
            tz,
            clock,
            locale: Locale::zh_CN,
        }
    }

    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    /// 以默认模板渲染当前时间
    pub fn format_now(&self) -> String {
        self.format_now_with(DATETIME_PATTERN)
    }

    /// 以指定模板渲染当前时间；模板非法时记录日志并返回空串
    pub fn format_now_with(&self, pattern: &str) -> String {
        let now_ms = self.clock.now_millis();
        match self.format_epoch_with(now_ms, pattern) {
            Ok(time) => time,
            Err(e) => {
                tracing::error!("Failed to format current time: {}", e);
                String::new()
            }
        }
    }

    /// 以默认模板渲染给定时间戳
    pub fn format_epoch(&self, epoch_ms: i64) -> Result<String> {
        self.format_epoch_with(epoch_ms, DATETIME_PATTERN)
    }

    /// 以指定模板渲染给定时间戳；模板非法或时间戳越界时返回错误
    pub fn format_epoch_with(&self, epoch_ms: i64, pattern: &str) -> Result<String> {
        let dt = self.datetime_from_epoch(epoch_ms)?;
        self.render(&dt, pattern, self.locale)
    }

    /// 按模板严格解析时间文本为毫秒时间戳，任何失败都返回 0。
    /// 注意 0 与真正解析出的纪元零点无法区分，需要区分时用
    /// [`try_parse_epoch`](Self::try_parse_epoch)
    pub fn parse_epoch(&self, pattern: &str, text: &str) -> i64 {
        self.try_parse_epoch(pattern, text).unwrap_or(0)
    }

    /// 按默认模板解析时间文本为毫秒时间戳，失败返回 0
    pub fn parse_epoch_default(&self, text: &str) -> i64 {
        self.parse_epoch(DATETIME_PATTERN, text)
    }

    /// 带错误通道的解析。缺失的日期字段按 1970-01-01 补齐，
    /// 缺失的时间字段按 00:00:00 补齐
    pub fn try_parse_epoch(&self, pattern: &str, text: &str) -> Result<i64> {
        let naive = parse_naive(pattern, text)?;
        let dt = self
            .tz
            .from_local_datetime(&naive)
            .earliest()
            .ok_or_else(|| TimeFmtError::unrepresentable(text))?;
        Ok(dt.timestamp_millis())
    }

    /// "yyyy-MM-dd HH:mm:ss" 文本转 "yyyy/MM/dd"。
    /// 解析失败沿用 0 哨兵，静默渲染出纪元日的日期
    pub fn reformat_datetime(&self, text: &str) -> String {
        self.reformat_with(DATETIME_PATTERN, text)
    }

    /// "yyyy-MM-dd" 文本转 "yyyy/MM/dd"
    pub fn reformat_date(&self, text: &str) -> String {
        self.reformat_with(DATE_PATTERN, text)
    }

    /// "HH:mm:ss" 文本转 "yyyy/MM/dd"，日期部分落在纪元日
    pub fn reformat_time(&self, text: &str) -> String {
        self.reformat_with(TIME_PATTERN, text)
    }

    fn reformat_with(&self, source_pattern: &str, text: &str) -> String {
        let epoch_ms = self.parse_epoch(source_pattern, text);
        match self.format_epoch_with(epoch_ms, SLASH_DATE_PATTERN) {
            Ok(time) => time,
            Err(e) => {
                tracing::error!("Failed to reformat '{}': {}", text, e);
                String::new()
            }
        }
    }

    /// 以英文 12 小时制渲染给定时间戳；失败时记录日志并返回空串
    pub fn format_english(&self, epoch_ms: i64, style: EnglishStyle) -> String {
        let rendered = self
            .datetime_from_epoch(epoch_ms)
            .and_then(|dt| self.render(&dt, style.pattern(), Locale::en_US));
        match rendered {
            Ok(time) => time,
            Err(e) => {
                tracing::error!("Failed to format english time text: {}", e);
                String::new()
            }
        }
    }

    fn datetime_from_epoch(&self, epoch_ms: i64) -> Result<DateTime<Tz>> {
        self.tz
            .timestamp_millis_opt(epoch_ms)
            .single()
            .ok_or(TimeFmtError::TimestampOutOfRange { epoch_ms })
    }

    fn render(&self, dt: &DateTime<Tz>, pattern: &str, locale: Locale) -> Result<String> {
        // DelayedFormat 遇到非法模板在 Display 阶段才报错，
        // 通过 write! 接住，避免 to_string 直接 panic
        let mut out = String::new();
        match write!(out, "{}", dt.format_localized(pattern, locale)) {
            Ok(()) => Ok(out),
            Err(_) => Err(TimeFmtError::invalid_pattern(pattern)),
        }
    }
}

/// 解析为 NaiveDateTime，按完整日期时间、仅日期、仅时间的顺序尝试
fn parse_naive(pattern: &str, text: &str) -> Result<NaiveDateTime> {
    let primary_err = match NaiveDateTime::parse_from_str(text, pattern) {
        Ok(dt) => return Ok(dt),
        Err(e) => e,
    };

    if let Ok(date) = NaiveDate::parse_from_str(text, pattern) {
        if let Some(dt) = date.and_hms_opt(0, 0, 0) {
            return Ok(dt);
        }
    }

    if let Ok(time) = NaiveTime::parse_from_str(text, pattern) {
        if let Some(epoch_day) = NaiveDate::from_ymd_opt(1970, 1, 1) {
            return Ok(epoch_day.and_time(time));
        }
    }

    Err(primary_err.into())
}
