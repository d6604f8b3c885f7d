// ==========================================
// 酒店客房管理系统 - 应用层
// ==========================================
// 职责: 组合根（装配仓储/引擎/API）与演示数据
// ==========================================

pub mod demo;
pub mod state;

// 重导出
pub use demo::seed_demo_data;
pub use state::{get_default_db_path, AppState, SYSTEM_ACTOR};
