// ==========================================
// 酒店客房管理系统 - 客房领域模型
// ==========================================
// 用途: 前台/客房部写入状态，调度引擎只读
// 对齐: db.rs rooms 表
// ==========================================

use crate::domain::types::RoomStatus;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ==========================================
// Room - 客房
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Room {
    // ===== 主键 =====
    pub room_number: String, // 房号（业务主键，如 "101"）

    // ===== 基础信息 =====
    pub room_type: String,      // 房型（Single/Double/Suite）
    pub status: RoomStatus,     // 客房状态
    pub floor: i32,             // 楼层
    pub max_occupancy: i32,     // 最大入住人数
    pub rate: f64,              // 门市价（每晚）

    // ===== 清扫信息 =====
    pub last_cleaned: Option<DateTime<Utc>>, // 最近清扫完成时间（仅清扫完成状态刷新）

    // ===== 备注与维护 =====
    pub notes: Option<String>,       // 备注
    pub maintenance_status: String,  // 维护状态（GOOD/...，默认 GOOD）
}

impl Room {
    /// 以默认初始状态构造一间新客房
    ///
    /// 默认: 状态 VACANT_CLEAN，维护状态 GOOD，last_cleaned 取当前时间
    pub fn new(
        room_number: impl Into<String>,
        room_type: impl Into<String>,
        floor: i32,
        max_occupancy: i32,
        rate: f64,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            room_number: room_number.into(),
            room_type: room_type.into(),
            status: RoomStatus::VacantClean,
            floor,
            max_occupancy,
            rate,
            last_cleaned: Some(now),
            notes: None,
            maintenance_status: "GOOD".to_string(),
        }
    }
}
