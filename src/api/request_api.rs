// ==========================================
// 酒店客房管理系统 - 客人请求 API
// ==========================================
// 职责: 客人请求录入、跟进、完成
// 说明: 请求优先级由前台设置，允许 LOW（派工引擎不产出 LOW）
// ==========================================

use std::sync::Arc;

use chrono::Utc;
use serde_json::json;
use tracing::info;

use crate::api::error::{ApiError, ApiResult};
use crate::domain::action_log::{ActionLog, ActionType};
use crate::domain::guest_request::GuestRequest;
use crate::domain::types::{Priority, RequestStatus};
use crate::repository::action_log_repo::ActionLogRepository;
use crate::repository::guest_request_repo::GuestRequestRepository;
use crate::repository::room_repo::RoomRepository;

// ==========================================
// RequestApi - 客人请求 API
// ==========================================

/// 客人请求API
pub struct RequestApi {
    guest_request_repo: Arc<GuestRequestRepository>,
    room_repo: Arc<RoomRepository>,
    action_log_repo: Arc<ActionLogRepository>,
    actor: String,
}

impl RequestApi {
    /// 创建新的RequestApi实例
    pub fn new(
        guest_request_repo: Arc<GuestRequestRepository>,
        room_repo: Arc<RoomRepository>,
        action_log_repo: Arc<ActionLogRepository>,
        actor: impl Into<String>,
    ) -> Self {
        Self {
            guest_request_repo,
            room_repo,
            action_log_repo,
            actor: actor.into(),
        }
    }

    /// 录入客人请求（初始状态 PENDING）
    ///
    /// # 参数
    /// - `room_number`: 房号（必须已登记）
    /// - `request_type`: 请求类型
    /// - `priority`: 优先级（前台设置）
    /// - `notes`: 备注（可空字符串）
    ///
    /// # 返回
    /// - Ok(i64): 请求ID
    pub fn add_guest_request(
        &self,
        room_number: &str,
        request_type: &str,
        priority: Priority,
        notes: &str,
    ) -> ApiResult<i64> {
        if room_number.trim().is_empty() {
            return Err(ApiError::InvalidInput("房号不能为空".to_string()));
        }
        if request_type.trim().is_empty() {
            return Err(ApiError::InvalidInput("请求类型不能为空".to_string()));
        }

        // 房号必须已登记
        if self.room_repo.find_by_number(room_number.trim())?.is_none() {
            return Err(ApiError::NotFound(format!("客房 {} 不存在", room_number)));
        }

        let now = Utc::now();
        let request = GuestRequest {
            id: 0,
            room_number: room_number.trim().to_string(),
            assigned_staff_id: None,
            request_type: request_type.trim().to_string(),
            notes: if notes.is_empty() {
                None
            } else {
                Some(notes.to_string())
            },
            status: RequestStatus::Pending,
            priority,
            request_time: now,
            completion_time: None,
        };
        let request_id = self.guest_request_repo.create(&request)?;

        self.action_log_repo.record(
            &ActionLog::new(ActionType::RequestCreate, &self.actor, now)
                .with_detail(format!("客房 {} 请求: {}", room_number, request_type))
                .with_payload(json!({
                    "request_id": request_id,
                    "room_number": room_number,
                    "request_type": request_type,
                    "priority": priority.to_db_str(),
                })),
        )?;

        info!(request_id, room_number = %room_number, "客人请求已录入");
        Ok(request_id)
    }

    /// 指派跟进员工（状态置 IN_PROGRESS）
    pub fn assign_staff(&self, request_id: i64, staff_id: i64) -> ApiResult<()> {
        self.guest_request_repo.assign_staff(request_id, staff_id)?;
        info!(request_id, staff_id, "客人请求已指派");
        Ok(())
    }

    /// 完成客人请求
    pub fn complete_request(&self, request_id: i64) -> ApiResult<()> {
        let now = Utc::now();
        self.guest_request_repo.complete(request_id, now)?;

        self.action_log_repo.record(
            &ActionLog::new(ActionType::RequestComplete, &self.actor, now)
                .with_detail(format!("请求 {} 完成", request_id))
                .with_payload(json!({ "request_id": request_id })),
        )?;
        Ok(())
    }

    /// 查询待处理请求
    pub fn list_pending_requests(&self) -> ApiResult<Vec<GuestRequest>> {
        Ok(self
            .guest_request_repo
            .list_by_status(RequestStatus::Pending)?)
    }
}
