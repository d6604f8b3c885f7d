// ==========================================
// 酒店客房管理系统 - 报表 API
// ==========================================
// 职责: 汇总报表（客房状态分布、员工绩效、库存水位）与审计查询
// 说明: 只产出类型化数据行，渲染由调用方（CLI 等）负责
// ==========================================

use std::sync::Arc;

use crate::api::error::{ApiError, ApiResult};
use crate::config::config_manager::ConfigManager;
use crate::domain::action_log::ActionLog;
use crate::domain::report::{InventoryReportRow, RoomStatusSlice, StaffPerformanceRow};
use crate::repository::action_log_repo::ActionLogRepository;
use crate::repository::report_repo::ReportRepository;
use crate::repository::room_repo::RoomRepository;

// ==========================================
// DashboardApi - 报表 API
// ==========================================

/// 报表API
///
/// 职责：
/// 1. 客房状态分布（原饼图数据源）
/// 2. 员工绩效报表
/// 3. 库存报表（含补货建议）
/// 4. 最近操作日志查询
pub struct DashboardApi {
    room_repo: Arc<RoomRepository>,
    report_repo: Arc<ReportRepository>,
    action_log_repo: Arc<ActionLogRepository>,
    config_manager: Arc<ConfigManager>,
}

impl DashboardApi {
    /// 创建新的DashboardApi实例
    pub fn new(
        room_repo: Arc<RoomRepository>,
        report_repo: Arc<ReportRepository>,
        action_log_repo: Arc<ActionLogRepository>,
        config_manager: Arc<ConfigManager>,
    ) -> Self {
        Self {
            room_repo,
            report_repo,
            action_log_repo,
            config_manager,
        }
    }

    /// 客房状态分布
    ///
    /// # 返回
    /// - Ok(Vec<RoomStatusSlice>): 各状态房间数与占比；无客房时为空
    pub fn room_status_distribution(&self) -> ApiResult<Vec<RoomStatusSlice>> {
        let counts = self.room_repo.status_counts()?;
        let total: i64 = counts.iter().map(|(_, count)| count).sum();
        if total == 0 {
            return Ok(Vec::new());
        }

        Ok(counts
            .into_iter()
            .map(|(status, count)| RoomStatusSlice {
                status,
                count,
                percent: (count as f64) * 100.0 / (total as f64),
            })
            .collect())
    }

    /// 员工绩效报表（含零任务员工）
    pub fn staff_performance_report(&self) -> ApiResult<Vec<StaffPerformanceRow>> {
        Ok(self.report_repo.staff_performance_rows()?)
    }

    /// 库存报表（水位从差到好排序；低水位系数读配置，默认 1.2）
    pub fn inventory_report(&self) -> ApiResult<Vec<InventoryReportRow>> {
        let factor = self
            .config_manager
            .low_stock_factor()
            .map_err(|e| ApiError::InternalError(format!("读取库存配置失败: {}", e)))?;
        Ok(self.report_repo.inventory_rows(factor)?)
    }

    /// 最近操作日志
    ///
    /// # 参数
    /// - `limit`: 条数上限；None 时读配置默认值
    pub fn recent_actions(&self, limit: Option<i64>) -> ApiResult<Vec<ActionLog>> {
        let limit = match limit {
            Some(v) if v > 0 => v,
            Some(v) => {
                return Err(ApiError::InvalidInput(format!("条数上限必须为正数: {}", v)));
            }
            None => self
                .config_manager
                .action_log_recent_limit()
                .map_err(|e| ApiError::InternalError(format!("读取日志配置失败: {}", e)))?,
        };
        Ok(self.action_log_repo.list_recent(limit)?)
    }
}
