// ==========================================
// 酒店客房管理系统 - 应用状态
// ==========================================
// 职责: 管理应用级别的共享状态和API实例
// ==========================================

use std::sync::{Arc, Mutex};

use crate::api::{
    AssignmentApi, DashboardApi, InventoryApi, RequestApi, RoomApi, StaffApi,
};
use crate::config::config_manager::ConfigManager;
use crate::importer::RosterImporter;
use crate::repository::{
    action_log_repo::ActionLogRepository, assignment_repo::AssignmentRepository,
    guest_request_repo::GuestRequestRepository, inventory_repo::InventoryRepository,
    report_repo::ReportRepository, room_repo::RoomRepository, staff_repo::StaffRepository,
};

/// 系统操作默认标识（审计日志 actor）
pub const SYSTEM_ACTOR: &str = "system";

/// 应用状态
///
/// 包含所有API实例和共享资源
pub struct AppState {
    /// 数据库路径
    pub db_path: String,

    /// 客房API
    pub room_api: Arc<RoomApi>,

    /// 员工API
    pub staff_api: Arc<StaffApi>,

    /// 派工API
    pub assignment_api: Arc<AssignmentApi>,

    /// 客人请求API
    pub request_api: Arc<RequestApi>,

    /// 物资库存API
    pub inventory_api: Arc<InventoryApi>,

    /// 报表API
    pub dashboard_api: Arc<DashboardApi>,

    /// 名册导入器
    pub roster_importer: Arc<RosterImporter>,

    /// 配置管理器
    pub config_manager: Arc<ConfigManager>,

    /// 操作日志仓储（用于审计追踪）
    pub action_log_repo: Arc<ActionLogRepository>,
}

impl AppState {
    /// 创建新的AppState实例
    ///
    /// # 参数
    /// - db_path: 数据库文件路径（":memory:" 为内存库）
    ///
    /// # 返回
    /// - Ok(AppState): 应用状态实例
    /// - Err(String): 初始化错误
    ///
    /// # 说明
    /// 该方法会：
    /// 1. 打开共享数据库连接并初始化 schema
    /// 2. 初始化所有Repository
    /// 3. 创建所有API实例
    pub fn new(db_path: String) -> Result<Self, String> {
        tracing::info!("初始化AppState，数据库路径: {}", db_path);

        // 创建数据库连接（共享连接）
        let conn = crate::db::open_sqlite_connection(&db_path)
            .map_err(|e| format!("无法打开数据库: {}", e))?;
        crate::db::create_tables(&conn).map_err(|e| format!("无法初始化schema: {}", e))?;

        // schema 版本提示（不做自动迁移）
        match crate::db::read_schema_version(&conn) {
            Ok(Some(version)) if version != crate::db::CURRENT_SCHEMA_VERSION => {
                tracing::warn!(
                    found = version,
                    expected = crate::db::CURRENT_SCHEMA_VERSION,
                    "schema_version 与当前代码不一致"
                );
            }
            Ok(_) => {}
            Err(e) => {
                tracing::warn!("schema_version 读取失败(将继续启动): {}", e);
            }
        }

        let conn = Arc::new(Mutex::new(conn));

        // ==========================================
        // 初始化Repository层
        // ==========================================

        let room_repo = Arc::new(RoomRepository::from_connection(conn.clone()));
        let staff_repo = Arc::new(StaffRepository::from_connection(conn.clone()));
        let assignment_repo = Arc::new(AssignmentRepository::from_connection(conn.clone()));
        let inventory_repo = Arc::new(InventoryRepository::from_connection(conn.clone()));
        let guest_request_repo = Arc::new(GuestRequestRepository::from_connection(conn.clone()));
        let action_log_repo = Arc::new(ActionLogRepository::from_connection(conn.clone()));
        let report_repo = Arc::new(ReportRepository::from_connection(conn.clone()));

        // ==========================================
        // 初始化配置层
        // ==========================================

        let config_manager = Arc::new(
            ConfigManager::from_connection(conn.clone())
                .map_err(|e| format!("无法创建ConfigManager: {}", e))?,
        );

        // ==========================================
        // 初始化API层
        // ==========================================

        let room_api = Arc::new(RoomApi::new(
            room_repo.clone(),
            action_log_repo.clone(),
            SYSTEM_ACTOR,
        ));
        let staff_api = Arc::new(StaffApi::new(
            staff_repo.clone(),
            action_log_repo.clone(),
            SYSTEM_ACTOR,
        ));
        let assignment_api = Arc::new(AssignmentApi::new(
            room_repo.clone(),
            staff_repo.clone(),
            assignment_repo.clone(),
            action_log_repo.clone(),
            SYSTEM_ACTOR,
        ));
        let request_api = Arc::new(RequestApi::new(
            guest_request_repo,
            room_repo.clone(),
            action_log_repo.clone(),
            SYSTEM_ACTOR,
        ));
        let inventory_api = Arc::new(InventoryApi::new(
            inventory_repo,
            action_log_repo.clone(),
            SYSTEM_ACTOR,
        ));
        let dashboard_api = Arc::new(DashboardApi::new(
            room_repo.clone(),
            report_repo,
            action_log_repo.clone(),
            config_manager.clone(),
        ));
        let roster_importer = Arc::new(RosterImporter::new(
            room_repo,
            staff_repo,
            action_log_repo.clone(),
            SYSTEM_ACTOR,
        ));

        tracing::info!("AppState初始化成功");

        Ok(Self {
            db_path,
            room_api,
            staff_api,
            assignment_api,
            request_api,
            inventory_api,
            dashboard_api,
            roster_importer,
            config_manager,
            action_log_repo,
        })
    }
}

/// 获取默认数据库路径（数据目录下，目录不存在则创建）
pub fn get_default_db_path() -> String {
    let base = dirs::data_dir().unwrap_or_else(|| std::path::PathBuf::from("."));
    let dir = base.join("hotel-housekeeping");
    if let Err(e) = std::fs::create_dir_all(&dir) {
        tracing::warn!("数据目录创建失败(回退当前目录): {}", e);
        return "housekeeping.db".to_string();
    }
    dir.join("housekeeping.db").display().to_string()
}
