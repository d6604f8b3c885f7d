// ==========================================
// 酒店客房管理系统 - 领域模型层
// ==========================================
// 职责: 定义领域实体、类型
// 红线: 不含数据访问逻辑,不含引擎逻辑
// ==========================================

pub mod action_log;
pub mod assignment;
pub mod guest_request;
pub mod inventory;
pub mod report;
pub mod room;
pub mod staff;
pub mod types;

// 重导出核心类型
pub use action_log::{ActionLog, ActionType};
pub use assignment::Assignment;
pub use guest_request::GuestRequest;
pub use inventory::InventoryItem;
pub use report::{InventoryReportRow, RoomStatusSlice, StaffPerformanceRow};
pub use room::Room;
pub use staff::Staff;
pub use types::{
    AssignmentStatus, Priority, RequestStatus, RoomStatus, ShiftLabel, StockStatus,
};
