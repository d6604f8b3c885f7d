// ==========================================
// 酒店客房管理系统 - API 层
// ==========================================
// 职责: 业务接口封装（参数验证、编排、审计）
// 架构: API 层 → Repository / Engine 层
// ==========================================

pub mod assignment_api;
pub mod dashboard_api;
pub mod error;
pub mod inventory_api;
pub mod request_api;
pub mod room_api;
pub mod staff_api;

// 重导出
pub use assignment_api::AssignmentApi;
pub use dashboard_api::DashboardApi;
pub use error::{ApiError, ApiResult};
pub use inventory_api::{AddInventoryItemRequest, InventoryApi};
pub use request_api::RequestApi;
pub use room_api::{AddRoomRequest, RoomApi};
pub use staff_api::{AddStaffRequest, StaffApi};
