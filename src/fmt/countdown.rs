use crate::{ONE_HOUR, ONE_MIN, ONE_SEC};

/// 毫秒间隔换算为分钟数，向上取整。
/// 不足一分钟（含 0 与负数）按 1 分钟计，结果恒 >= 1
pub fn minutes_from_millis(interval_ms: i64) -> i64 {
    if interval_ms <= ONE_MIN {
        1
    } else if interval_ms % ONE_MIN == 0 {
        interval_ms / ONE_MIN
    } else {
        interval_ms / ONE_MIN + 1
    }
}

/// 倒计时文案。负数按 0 处理；严格超过一小时渲染为 "HH时MM分"，
/// 否则渲染为 "MM分SS秒"。各分量补零到两位，超过两位按自然宽度输出
pub fn format_countdown(interval_ms: i64) -> String {
    let interval = interval_ms.max(0);

    if interval > ONE_HOUR {
        let hour = interval / ONE_HOUR;
        let min = interval % ONE_HOUR / ONE_MIN;
        format!("{:02}时{:02}分", hour, min)
    } else {
        let min = interval / ONE_MIN;
        let sec = interval % ONE_MIN / ONE_SEC;
        format!("{:02}分{:02}秒", min, sec)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minutes_from_millis_floor_to_one() {
        assert_eq!(minutes_from_millis(-1000), 1);
        assert_eq!(minutes_from_millis(0), 1);
        assert_eq!(minutes_from_millis(1), 1);
        assert_eq!(minutes_from_millis(ONE_MIN), 1);
    }

    #[test]
    fn test_minutes_from_millis_ceiling() {
        assert_eq!(minutes_from_millis(ONE_MIN + 1), 2);
        assert_eq!(minutes_from_millis(2 * ONE_MIN), 2);
        assert_eq!(minutes_from_millis(2 * ONE_MIN + 1), 3);
        assert_eq!(minutes_from_millis(ONE_HOUR), 60);
    }

    #[test]
    fn test_countdown_clamps_negative() {
        assert_eq!(format_countdown(-5), "00分00秒");
        assert_eq!(format_countdown(0), "00分00秒");
    }

    #[test]
    fn test_countdown_under_hour() {
        assert_eq!(format_countdown(59 * ONE_SEC), "00分59秒");
        assert_eq!(format_countdown(9 * ONE_MIN + 5 * ONE_SEC), "09分05秒");
        assert_eq!(format_countdown(59 * ONE_MIN + 59 * ONE_SEC), "59分59秒");
    }

    #[test]
    fn test_countdown_hour_boundary_is_strict_greater() {
        // 恰好一小时仍走分秒分支
        assert_eq!(format_countdown(ONE_HOUR), "60分00秒");
        assert_eq!(format_countdown(ONE_HOUR + 1), "01时00分");
    }

    #[test]
    fn test_countdown_over_hour() {
        assert_eq!(format_countdown(ONE_HOUR + 90 * ONE_SEC), "01时01分");
        assert_eq!(format_countdown(25 * ONE_HOUR + 7 * ONE_MIN), "25时07分");
    }

    #[test]
    fn test_countdown_three_digit_hours_natural_width() {
        assert_eq!(format_countdown(100 * ONE_HOUR + ONE_MIN), "100时01分");
    }

    #[test]
    fn test_countdown_drops_sub_unit_remainder() {
        // 秒以下与分以下的余数直接截断
        assert_eq!(format_countdown(ONE_SEC + 999), "00分01秒");
        assert_eq!(format_countdown(2 * ONE_HOUR + 59 * ONE_SEC), "02时00分");
    }
}
