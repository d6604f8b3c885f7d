// ==========================================
// 酒店客房管理系统 - 员工 API
// ==========================================
// 职责: 员工登记、可用性维护、绩效记录
// 红线: 绩效写入必须落 ActionLog
// ==========================================

use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use serde_json::json;
use tracing::info;

use crate::api::error::{ApiError, ApiResult};
use crate::domain::action_log::{ActionLog, ActionType};
use crate::domain::staff::Staff;
use crate::domain::types::ShiftLabel;
use crate::repository::action_log_repo::ActionLogRepository;
use crate::repository::staff_repo::StaffRepository;

/// 绩效评分允许范围上限
const MAX_PERFORMANCE_RATING: f64 = 5.0;

// ==========================================
// AddStaffRequest - 新增员工请求
// ==========================================
#[derive(Debug, Clone)]
pub struct AddStaffRequest {
    pub name: String,
    pub position: String,
    pub shift: ShiftLabel,
    pub contact: Option<String>,
    pub hiring_date: Option<NaiveDate>,
    pub performance_rating: f64,
}

// ==========================================
// StaffApi - 员工 API
// ==========================================

/// 员工API
///
/// 职责：
/// 1. 员工登记
/// 2. 可用性维护（请假/复岗）
/// 3. 绩效记录（评分覆盖 + 今日工作量自增）
/// 4. 每日工作量清零
pub struct StaffApi {
    staff_repo: Arc<StaffRepository>,
    action_log_repo: Arc<ActionLogRepository>,
    actor: String,
}

impl StaffApi {
    /// 创建新的StaffApi实例
    pub fn new(
        staff_repo: Arc<StaffRepository>,
        action_log_repo: Arc<ActionLogRepository>,
        actor: impl Into<String>,
    ) -> Self {
        Self {
            staff_repo,
            action_log_repo,
            actor: actor.into(),
        }
    }

    // ==========================================
    // 写入接口
    // ==========================================

    /// 登记新员工
    ///
    /// # 返回
    /// - Ok(i64): 数据库分配的员工ID
    pub fn add_staff(&self, request: AddStaffRequest) -> ApiResult<i64> {
        if request.name.trim().is_empty() {
            return Err(ApiError::InvalidInput("员工姓名不能为空".to_string()));
        }
        validate_rating(request.performance_rating)?;

        let mut staff = Staff::new(
            request.name.trim(),
            request.position,
            request.shift,
            request.performance_rating,
        );
        staff.contact = request.contact;
        staff.hiring_date = request.hiring_date;

        let staff_id = self.staff_repo.insert(&staff)?;
        info!(staff_id, name = %staff.name, shift = %staff.shift, "员工登记完成");
        Ok(staff_id)
    }

    /// 记录绩效评分（同时将今日已清扫房间数 +1）
    pub fn record_performance(&self, staff_id: i64, performance_rating: f64) -> ApiResult<()> {
        validate_rating(performance_rating)?;

        let now = Utc::now();
        self.staff_repo
            .record_performance(staff_id, performance_rating)?;

        self.action_log_repo.record(
            &ActionLog::new(ActionType::PerformanceRecord, &self.actor, now)
                .with_detail(format!("员工 {} 绩效记录 {:.1}", staff_id, performance_rating))
                .with_payload(json!({
                    "staff_id": staff_id,
                    "performance_rating": performance_rating,
                })),
        )?;
        Ok(())
    }

    /// 设置员工可用性
    pub fn set_available(&self, staff_id: i64, available: bool) -> ApiResult<()> {
        self.staff_repo.set_available(staff_id, available)?;
        info!(staff_id, available, "员工可用性已变更");
        Ok(())
    }

    /// 清零全员今日已清扫房间数（每日滚动，换日后调用一次）
    pub fn reset_daily_counters(&self) -> ApiResult<usize> {
        let affected = self.staff_repo.reset_daily_counters()?;
        info!(affected, "今日工作量已清零");
        Ok(affected)
    }

    // ==========================================
    // 查询接口
    // ==========================================

    /// 按ID查询（不存在返回 NotFound）
    pub fn get_staff(&self, staff_id: i64) -> ApiResult<Staff> {
        self.staff_repo
            .find_by_id(staff_id)?
            .ok_or_else(|| ApiError::NotFound(format!("员工 {} 不存在", staff_id)))
    }

    /// 查询全部员工
    pub fn list_staff(&self) -> ApiResult<Vec<Staff>> {
        Ok(self.staff_repo.list_all()?)
    }

    /// 查询指定班次的可用员工
    pub fn list_available(&self, shift: ShiftLabel) -> ApiResult<Vec<Staff>> {
        Ok(self.staff_repo.list_available(shift)?)
    }
}

/// 校验绩效评分范围 [0, 5]
fn validate_rating(rating: f64) -> ApiResult<()> {
    if !rating.is_finite() || !(0.0..=MAX_PERFORMANCE_RATING).contains(&rating) {
        return Err(ApiError::InvalidInput(format!(
            "绩效评分超出范围 [0, {}]: {}",
            MAX_PERFORMANCE_RATING, rating
        )));
    }
    Ok(())
}
