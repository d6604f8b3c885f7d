// ==========================================
// 酒店客房管理系统 - 客人请求领域模型
// ==========================================
// 用途: 前台录入，客房部跟进；优先级可人工设为 LOW
// 对齐: db.rs guest_requests 表
// ==========================================

use crate::domain::types::{Priority, RequestStatus};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ==========================================
// GuestRequest - 客人请求
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GuestRequest {
    // ===== 主键 =====
    pub id: i64, // 请求ID（自增）

    // ===== 关联 =====
    pub room_number: String,           // 客房（FK rooms）
    pub assigned_staff_id: Option<i64>, // 跟进员工（FK staff，可空）

    // ===== 请求内容 =====
    pub request_type: String,  // 请求类型（Towels/Maintenance/...）
    pub notes: Option<String>, // 备注

    // ===== 状态与优先级 =====
    pub status: RequestStatus, // 请求状态
    pub priority: Priority,    // 优先级（外部设置，允许 LOW）

    // ===== 时间信息 =====
    pub request_time: DateTime<Utc>,            // 请求时间
    pub completion_time: Option<DateTime<Utc>>, // 完成时间
}
