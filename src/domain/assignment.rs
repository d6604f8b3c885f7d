// ==========================================
// 酒店客房管理系统 - 清扫任务领域模型
// ==========================================
// 红线: 任务一经创建，调度引擎不再修改；完成/质检由 API 层操作
// 对齐: db.rs assignments 表
// ==========================================

use crate::domain::types::{AssignmentStatus, Priority};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

// ==========================================
// Assignment - 清扫任务
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Assignment {
    // ===== 主键 =====
    pub id: i64, // 任务ID（自增）

    // ===== 关联 =====
    pub room_number: String, // 客房（FK rooms）
    pub staff_id: i64,       // 员工（FK staff）

    // ===== 时间信息 =====
    pub assignment_date: NaiveDate,        // 派工日期
    pub start_time: DateTime<Utc>,         // 派工时间
    pub end_time: Option<DateTime<Utc>>,   // 完成时间（完成前为 None）

    // ===== 状态与优先级 =====
    pub status: AssignmentStatus, // 任务状态
    pub priority: Priority,       // 优先级（引擎产出 HIGH/MEDIUM）

    // ===== 完成信息 =====
    pub cleaning_duration_min: i32, // 清扫耗时（分钟，完成时写入）
    pub quality_check_passed: bool, // 质检是否通过
}
