// ==========================================
// 酒店客房管理系统 - 引擎层
// ==========================================
// 职责: 实现业务规则引擎,不拼 SQL
// 红线: Engine 不拼 SQL；引擎只读快照，落库经 Recorder 接口
// ==========================================

pub mod assignment;
pub mod scoring;
pub mod shift;

// 重导出核心引擎
pub use assignment::{
    AssignmentDecision, AssignmentEngine, AssignmentRecorder, RoomCandidate, StaffCandidate,
};
pub use scoring::compute_staff_score;
pub use shift::ShiftResolver;
