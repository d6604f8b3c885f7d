// ==========================================
// 酒店客房管理系统 - 领域类型定义
// ==========================================
// 红线: 状态/优先级一律封闭枚举，不在业务层传裸字符串
// 序列化格式: SCREAMING_SNAKE_CASE (与数据库一致)
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 客房状态 (Room Status)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RoomStatus {
    VacantClean,   // 空房已清扫
    VacantDirty,   // 空房待清扫
    OccupiedClean, // 住客房已清扫
    OccupiedDirty, // 住客房待清扫
    OutOfOrder,    // 维修停用
    DueOut,        // 预定退房
}

impl RoomStatus {
    /// 待清扫状态集合（清扫调度的候选口径）
    pub const DIRTY: [RoomStatus; 3] = [
        RoomStatus::VacantDirty,
        RoomStatus::OccupiedDirty,
        RoomStatus::DueOut,
    ];

    /// 数据库存储值
    pub fn to_db_str(&self) -> &'static str {
        match self {
            RoomStatus::VacantClean => "VACANT_CLEAN",
            RoomStatus::VacantDirty => "VACANT_DIRTY",
            RoomStatus::OccupiedClean => "OCCUPIED_CLEAN",
            RoomStatus::OccupiedDirty => "OCCUPIED_DIRTY",
            RoomStatus::OutOfOrder => "OUT_OF_ORDER",
            RoomStatus::DueOut => "DUE_OUT",
        }
    }

    /// 从数据库存储值解析（未知值返回 None，由仓储层报错）
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "VACANT_CLEAN" => Some(RoomStatus::VacantClean),
            "VACANT_DIRTY" => Some(RoomStatus::VacantDirty),
            "OCCUPIED_CLEAN" => Some(RoomStatus::OccupiedClean),
            "OCCUPIED_DIRTY" => Some(RoomStatus::OccupiedDirty),
            "OUT_OF_ORDER" => Some(RoomStatus::OutOfOrder),
            "DUE_OUT" => Some(RoomStatus::DueOut),
            _ => None,
        }
    }

    /// 是否待清扫（VACANT_DIRTY / OCCUPIED_DIRTY / DUE_OUT）
    pub fn is_dirty(&self) -> bool {
        matches!(
            self,
            RoomStatus::VacantDirty | RoomStatus::OccupiedDirty | RoomStatus::DueOut
        )
    }

    /// 是否已清扫（VACANT_CLEAN / OCCUPIED_CLEAN，触发 last_cleaned 刷新）
    pub fn is_clean(&self) -> bool {
        matches!(self, RoomStatus::VacantClean | RoomStatus::OccupiedClean)
    }
}

impl fmt::Display for RoomStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_db_str())
    }
}

// ==========================================
// 任务优先级 (Priority)
// ==========================================
// 红线: 调度引擎只产出 HIGH/MEDIUM；LOW 仅供外部（客人请求等）设置
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Priority {
    Low,    // 低
    Medium, // 中
    High,   // 高
}

impl Priority {
    pub fn to_db_str(&self) -> &'static str {
        match self {
            Priority::Low => "LOW",
            Priority::Medium => "MEDIUM",
            Priority::High => "HIGH",
        }
    }

    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "LOW" => Some(Priority::Low),
            "MEDIUM" => Some(Priority::Medium),
            "HIGH" => Some(Priority::High),
            _ => None,
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_db_str())
    }
}

// ==========================================
// 班次 (Shift Label)
// ==========================================
// 一天划分为三个班次: 早班 [7,15) / 晚班 [15,23) / 夜班 其余时段
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ShiftLabel {
    Morning, // 早班
    Evening, // 晚班
    Night,   // 夜班
}

impl ShiftLabel {
    pub fn to_db_str(&self) -> &'static str {
        match self {
            ShiftLabel::Morning => "MORNING",
            ShiftLabel::Evening => "EVENING",
            ShiftLabel::Night => "NIGHT",
        }
    }

    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "MORNING" => Some(ShiftLabel::Morning),
            "EVENING" => Some(ShiftLabel::Evening),
            "NIGHT" => Some(ShiftLabel::Night),
            _ => None,
        }
    }
}

impl fmt::Display for ShiftLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_db_str())
    }
}

// ==========================================
// 清扫任务状态 (Assignment Status)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AssignmentStatus {
    Pending,    // 待处理
    InProgress, // 清扫中
    Completed,  // 已完成
    Cancelled,  // 已取消
}

impl AssignmentStatus {
    pub fn to_db_str(&self) -> &'static str {
        match self {
            AssignmentStatus::Pending => "PENDING",
            AssignmentStatus::InProgress => "IN_PROGRESS",
            AssignmentStatus::Completed => "COMPLETED",
            AssignmentStatus::Cancelled => "CANCELLED",
        }
    }

    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "PENDING" => Some(AssignmentStatus::Pending),
            "IN_PROGRESS" => Some(AssignmentStatus::InProgress),
            "COMPLETED" => Some(AssignmentStatus::Completed),
            "CANCELLED" => Some(AssignmentStatus::Cancelled),
            _ => None,
        }
    }
}

impl fmt::Display for AssignmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_db_str())
    }
}

// ==========================================
// 客人请求状态 (Request Status)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RequestStatus {
    Pending,    // 待处理
    InProgress, // 处理中
    Completed,  // 已完成
    Cancelled,  // 已取消
}

impl RequestStatus {
    pub fn to_db_str(&self) -> &'static str {
        match self {
            RequestStatus::Pending => "PENDING",
            RequestStatus::InProgress => "IN_PROGRESS",
            RequestStatus::Completed => "COMPLETED",
            RequestStatus::Cancelled => "CANCELLED",
        }
    }

    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "PENDING" => Some(RequestStatus::Pending),
            "IN_PROGRESS" => Some(RequestStatus::InProgress),
            "COMPLETED" => Some(RequestStatus::Completed),
            "CANCELLED" => Some(RequestStatus::Cancelled),
            _ => None,
        }
    }
}

impl fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_db_str())
    }
}

// ==========================================
// 库存水位 (Stock Status)
// ==========================================
// 报表派生值: 不入库，由库存报表按补货线计算
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StockStatus {
    ReorderRequired, // 需要补货（quantity <= reorder_level）
    LowStock,        // 低库存（quantity <= reorder_level * 低水位系数）
    Adequate,        // 库存充足
}

impl StockStatus {
    pub fn to_db_str(&self) -> &'static str {
        match self {
            StockStatus::ReorderRequired => "REORDER_REQUIRED",
            StockStatus::LowStock => "LOW_STOCK",
            StockStatus::Adequate => "ADEQUATE",
        }
    }

    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "REORDER_REQUIRED" => Some(StockStatus::ReorderRequired),
            "LOW_STOCK" => Some(StockStatus::LowStock),
            "ADEQUATE" => Some(StockStatus::Adequate),
            _ => None,
        }
    }
}

impl fmt::Display for StockStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_db_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_room_status_db_round_trip() {
        let all = [
            RoomStatus::VacantClean,
            RoomStatus::VacantDirty,
            RoomStatus::OccupiedClean,
            RoomStatus::OccupiedDirty,
            RoomStatus::OutOfOrder,
            RoomStatus::DueOut,
        ];
        for status in all {
            assert_eq!(RoomStatus::from_db_str(status.to_db_str()), Some(status));
        }
        assert_eq!(RoomStatus::from_db_str("DIRTY"), None);
    }

    #[test]
    fn test_dirty_clean_partition() {
        // 待清扫与已清扫口径互斥
        assert!(RoomStatus::VacantDirty.is_dirty());
        assert!(RoomStatus::OccupiedDirty.is_dirty());
        assert!(RoomStatus::DueOut.is_dirty());
        assert!(RoomStatus::VacantClean.is_clean());
        assert!(RoomStatus::OccupiedClean.is_clean());
        assert!(!RoomStatus::OutOfOrder.is_dirty());
        assert!(!RoomStatus::OutOfOrder.is_clean());
        for status in RoomStatus::DIRTY {
            assert!(!status.is_clean());
        }
    }
}
