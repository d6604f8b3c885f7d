// ==========================================
// 酒店客房管理系统 - 派工评分
// ==========================================
// 评分 = 绩效 * 0.4 + (1 - 今日已清扫/10) * 0.6
// 红线: 工作量项不做下限截断，今日清扫超过 10 间时该项为负
// ==========================================

/// 绩效权重
pub const PERFORMANCE_WEIGHT: f64 = 0.4;

/// 工作量权重
pub const WORKLOAD_WEIGHT: f64 = 0.6;

/// 当日清扫基准房间数（工作量归一化分母）
pub const DAILY_ROOM_TARGET: f64 = 10.0;

/// 计算员工派工评分
///
/// 绩效越高、今日工作量越小，评分越高
///
/// # 参数
/// - `performance_rating`: 绩效评分（0-5）
/// - `rooms_cleaned_today`: 今日已清扫房间数
pub fn compute_staff_score(performance_rating: f64, rooms_cleaned_today: i32) -> f64 {
    let workload_term = 1.0 - (rooms_cleaned_today as f64) / DAILY_ROOM_TARGET;
    performance_rating * PERFORMANCE_WEIGHT + workload_term * WORKLOAD_WEIGHT
}
