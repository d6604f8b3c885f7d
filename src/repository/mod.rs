// ==========================================
// 酒店客房管理系统 - 数据仓储层
// ==========================================
// 红线: Repository 不含业务逻辑
// ==========================================
// 职责: 提供数据访问接口,屏蔽数据库细节
// 约束: 所有查询使用参数化,防止 SQL 注入
// ==========================================

pub mod action_log_repo;
pub mod assignment_repo;
pub mod error;
pub mod guest_request_repo;
pub mod inventory_repo;
pub mod report_repo;
pub mod room_repo;
pub mod staff_repo;

// 重导出核心仓储
pub use action_log_repo::ActionLogRepository;
pub use assignment_repo::AssignmentRepository;
pub use error::{RepositoryError, RepositoryResult};
pub use guest_request_repo::GuestRequestRepository;
pub use inventory_repo::InventoryRepository;
pub use report_repo::ReportRepository;
pub use room_repo::RoomRepository;
pub use staff_repo::StaffRepository;
