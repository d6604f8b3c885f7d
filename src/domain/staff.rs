// ==========================================
// 酒店客房管理系统 - 员工领域模型
// ==========================================
// 用途: 排班/考核写入，调度引擎只读
// 对齐: db.rs staff 表
// ==========================================

use crate::domain::types::ShiftLabel;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ==========================================
// Staff - 客房部员工
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Staff {
    // ===== 主键 =====
    pub id: i64, // 员工ID（INTEGER PRIMARY KEY；插入时由数据库分配）

    // ===== 基础信息 =====
    pub name: String,                   // 姓名
    pub position: String,               // 岗位（Housekeeper/Supervisor）
    pub shift: ShiftLabel,              // 所属班次
    pub contact: Option<String>,        // 联系方式
    pub hiring_date: Option<NaiveDate>, // 入职日期

    // ===== 考核与当日工作量 =====
    pub performance_rating: f64,  // 绩效评分（0-5）
    pub rooms_cleaned_today: i32, // 今日已清扫房间数（record_performance 自增）

    // ===== 可用性 =====
    pub available: bool, // 是否可接受派工
}

impl Staff {
    /// 构造一名新员工（id 置 0，插入后以数据库分配值为准）
    pub fn new(
        name: impl Into<String>,
        position: impl Into<String>,
        shift: ShiftLabel,
        performance_rating: f64,
    ) -> Self {
        Self {
            id: 0,
            name: name.into(),
            position: position.into(),
            shift,
            contact: None,
            hiring_date: None,
            performance_rating,
            rooms_cleaned_today: 0,
            available: true,
        }
    }
}
