// ==========================================
// 酒店客房管理系统 - 物资库存领域模型
// ==========================================
// 用途: 易耗品台账；补货判断见库存报表
// 对齐: db.rs inventory 表
// ==========================================

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ==========================================
// InventoryItem - 库存物资
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventoryItem {
    // ===== 主键 =====
    pub id: i64, // 物资ID（自增）

    // ===== 基础信息 =====
    pub item_name: String,        // 物资名称
    pub category: Option<String>, // 类别（Linens/Amenities/Cleaning）
    pub supplier: Option<String>, // 供应商

    // ===== 库存量与补货参数 =====
    pub quantity: i32,                    // 当前库存量
    pub reorder_level: i32,               // 补货线
    pub minimum_order_quantity: i32,      // 最小订货量
    pub last_restocked: Option<NaiveDate>, // 最近补货日期

    // ===== 成本 =====
    pub unit_cost: f64, // 单价
}
