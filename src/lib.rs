pub mod core;
pub mod fmt;

// 重新导出主要类型
pub use crate::core::clock::{Clock, FixedClock, SystemClock};
pub use crate::core::error::TimeFmtError;
pub use crate::fmt::countdown::{format_countdown, minutes_from_millis};
pub use crate::fmt::formatter::{EnglishStyle, TimeFormatter};

// 常量定义（毫秒）
pub const ONE_SEC: i64 = 1000;
pub const ONE_MIN: i64 = 60 * 1000;
pub const ONE_HOUR: i64 = 60 * 60 * 1000;
pub const ONE_DAY: i64 = 24 * 60 * 60 * 1000;

// 固定格式模板
pub const DATETIME_PATTERN: &str = "%Y-%m-%d %H:%M:%S";
pub const DATE_PATTERN: &str = "%Y-%m-%d";
pub const TIME_PATTERN: &str = "%H:%M:%S";
pub const SLASH_DATE_PATTERN: &str = "%Y/%m/%d";

// 结果类型别名
pub type Result<T> = std::result::Result<T, TimeFmtError>;
