// ==========================================
// 酒店客房管理系统 - 操作日志领域模型
// ==========================================
// 红线: 所有写入必须记录
// 用途: 审计追踪
// 对齐: db.rs action_log 表
// ==========================================

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

// ==========================================
// ActionLog - 操作日志
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionLog {
    // ===== 主键 =====
    pub action_id: String, // 日志ID（uuid v4）

    // ===== 操作信息 =====
    pub action_type: ActionType,   // 操作类型
    pub action_ts: DateTime<Utc>,  // 操作时间戳
    pub actor: String,             // 操作人/系统标识

    // ===== 操作负载 =====
    pub detail: Option<String>,          // 详细描述
    pub payload_json: Option<JsonValue>, // 操作参数 (JSON)
}

impl ActionLog {
    /// 构造一条新日志（action_id 自动生成）
    pub fn new(
        action_type: ActionType,
        actor: impl Into<String>,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            action_id: uuid::Uuid::new_v4().to_string(),
            action_type,
            action_ts: now,
            actor: actor.into(),
            detail: None,
            payload_json: None,
        }
    }

    /// 附加详细描述
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    /// 附加 JSON 负载
    pub fn with_payload(mut self, payload: JsonValue) -> Self {
        self.payload_json = Some(payload);
        self
    }
}

// ==========================================
// ActionType - 操作类型
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActionType {
    RoomCreate,         // 新增客房
    RoomStatusUpdate,   // 客房状态变更
    AssignmentCreate,   // 调度派工
    AssignmentComplete, // 任务完成
    PerformanceRecord,  // 绩效记录
    RequestCreate,      // 客人请求录入
    RequestComplete,    // 客人请求完成
    InventoryRestock,   // 物资补货
    Import,             // 名册导入
    Seed,               // 演示数据初始化
}

impl ActionType {
    pub fn to_db_str(&self) -> &'static str {
        match self {
            ActionType::RoomCreate => "ROOM_CREATE",
            ActionType::RoomStatusUpdate => "ROOM_STATUS_UPDATE",
            ActionType::AssignmentCreate => "ASSIGNMENT_CREATE",
            ActionType::AssignmentComplete => "ASSIGNMENT_COMPLETE",
            ActionType::PerformanceRecord => "PERFORMANCE_RECORD",
            ActionType::RequestCreate => "REQUEST_CREATE",
            ActionType::RequestComplete => "REQUEST_COMPLETE",
            ActionType::InventoryRestock => "INVENTORY_RESTOCK",
            ActionType::Import => "IMPORT",
            ActionType::Seed => "SEED",
        }
    }

    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "ROOM_CREATE" => Some(ActionType::RoomCreate),
            "ROOM_STATUS_UPDATE" => Some(ActionType::RoomStatusUpdate),
            "ASSIGNMENT_CREATE" => Some(ActionType::AssignmentCreate),
            "ASSIGNMENT_COMPLETE" => Some(ActionType::AssignmentComplete),
            "PERFORMANCE_RECORD" => Some(ActionType::PerformanceRecord),
            "REQUEST_CREATE" => Some(ActionType::RequestCreate),
            "REQUEST_COMPLETE" => Some(ActionType::RequestComplete),
            "INVENTORY_RESTOCK" => Some(ActionType::InventoryRestock),
            "IMPORT" => Some(ActionType::Import),
            "SEED" => Some(ActionType::Seed),
            _ => None,
        }
    }
}

impl std::fmt::Display for ActionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_db_str())
    }
}
