use chrono::Utc;

/// 时钟抽象：格式化"当前时间"的操作不直接读系统时钟，
/// 由调用方注入，测试时可替换为固定时钟
pub trait Clock: Send + Sync {
    /// 当前时刻的 Unix 毫秒时间戳
    fn now_millis(&self) -> i64;
}

/// 系统墙钟
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        Utc::now().timestamp_millis()
    }
}

/// 固定时钟，始终返回构造时给定的时刻
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    epoch_ms: i64,
}

impl FixedClock {
    pub fn new(epoch_ms: i64) -> Self {
        Self { epoch_ms }
    }
}

impl Clock for FixedClock {
    fn now_millis(&self) -> i64 {
        self.epoch_ms
    }
}
