// ==========================================
// 酒店客房管理系统 - 班次判定引擎
// ==========================================
// 契约: [7,15) 早班 / [15,23) 晚班 / 其余 夜班
// 红线: 不读系统时钟，时间一律由调用方注入
// ==========================================

use crate::domain::types::ShiftLabel;
use chrono::{DateTime, Local, Timelike};

// ==========================================
// ShiftResolver - 班次判定
// ==========================================
pub struct ShiftResolver {
    // 无状态引擎,不需要注入依赖
}

impl ShiftResolver {
    /// 构造函数
    pub fn new() -> Self {
        Self {}
    }

    /// 按小时判定班次
    ///
    /// 对 [0,24) 内所有小时均有定义，三个班次无缝覆盖全天
    ///
    /// # 参数
    /// - `hour`: 小时（0-23）
    pub fn shift_of_hour(&self, hour: u32) -> ShiftLabel {
        if (7..15).contains(&hour) {
            ShiftLabel::Morning
        } else if (15..23).contains(&hour) {
            ShiftLabel::Evening
        } else {
            ShiftLabel::Night
        }
    }

    /// 按时间点判定当前班次
    ///
    /// # 参数
    /// - `now`: 当前本地时间（由调用方注入）
    pub fn shift_of(&self, now: &DateTime<Local>) -> ShiftLabel {
        self.shift_of_hour(now.hour())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shift_boundaries() {
        let resolver = ShiftResolver::new();
        assert_eq!(resolver.shift_of_hour(6), ShiftLabel::Night);
        assert_eq!(resolver.shift_of_hour(7), ShiftLabel::Morning);
        assert_eq!(resolver.shift_of_hour(14), ShiftLabel::Morning);
        assert_eq!(resolver.shift_of_hour(15), ShiftLabel::Evening);
        assert_eq!(resolver.shift_of_hour(22), ShiftLabel::Evening);
        assert_eq!(resolver.shift_of_hour(23), ShiftLabel::Night);
        assert_eq!(resolver.shift_of_hour(0), ShiftLabel::Night);
    }

    #[test]
    fn test_shift_partitions_full_day() {
        // 三个班次覆盖全天 24 小时，无缝隙无重叠
        let resolver = ShiftResolver::new();
        let mut morning = 0;
        let mut evening = 0;
        let mut night = 0;
        for hour in 0..24u32 {
            match resolver.shift_of_hour(hour) {
                ShiftLabel::Morning => morning += 1,
                ShiftLabel::Evening => evening += 1,
                ShiftLabel::Night => night += 1,
            }
        }
        assert_eq!(morning, 8); // [7,15)
        assert_eq!(evening, 8); // [15,23)
        assert_eq!(night, 8);   // [23,24) ∪ [0,7)
    }
}
