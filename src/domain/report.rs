// ==========================================
// 酒店客房管理系统 - 报表读模型
// ==========================================
// 用途: 报表查询的类型化行结构（只读，不入库）
// ==========================================

use crate::domain::types::{RoomStatus, StockStatus};
use serde::{Deserialize, Serialize};

// ==========================================
// RoomStatusSlice - 客房状态分布（单状态）
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomStatusSlice {
    pub status: RoomStatus, // 客房状态
    pub count: i64,         // 房间数
    pub percent: f64,       // 占比（0-100）
}

// ==========================================
// StaffPerformanceRow - 员工绩效报表行
// ==========================================
// 口径: staff LEFT JOIN assignments，含零任务员工
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StaffPerformanceRow {
    pub staff_id: i64,                      // 员工ID
    pub name: String,                       // 姓名
    pub position: String,                   // 岗位
    pub performance_rating: f64,            // 绩效评分
    pub rooms_cleaned_today: i32,           // 今日已清扫房间数
    pub total_assignments: i64,             // 累计任务数
    pub avg_cleaning_minutes: Option<f64>,  // 平均清扫耗时（分钟；无任务为 None）
}

// ==========================================
// InventoryReportRow - 库存报表行
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventoryReportRow {
    pub item_name: String,         // 物资名称
    pub quantity: i32,             // 当前库存量
    pub reorder_level: i32,        // 补货线
    pub unit_cost: f64,            // 单价
    pub supplier: Option<String>,  // 供应商
    pub category: Option<String>,  // 类别
    pub stock_status: StockStatus, // 库存水位（派生）
}
