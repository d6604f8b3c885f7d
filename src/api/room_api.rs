// ==========================================
// 酒店客房管理系统 - 客房 API
// ==========================================
// 职责: 客房登记、状态维护、查询
// 红线: 状态变更必须落 ActionLog
// ==========================================

use std::sync::Arc;

use chrono::Utc;
use serde_json::json;
use tracing::info;

use crate::api::error::{ApiError, ApiResult};
use crate::domain::action_log::{ActionLog, ActionType};
use crate::domain::room::Room;
use crate::domain::types::RoomStatus;
use crate::repository::action_log_repo::ActionLogRepository;
use crate::repository::room_repo::RoomRepository;

// ==========================================
// AddRoomRequest - 新增客房请求
// ==========================================
#[derive(Debug, Clone)]
pub struct AddRoomRequest {
    pub room_number: String,
    pub room_type: String,
    pub floor: i32,
    pub max_occupancy: i32,
    pub rate: f64,
}

// ==========================================
// RoomApi - 客房 API
// ==========================================

/// 客房API
///
/// 职责：
/// 1. 客房登记（默认 VACANT_CLEAN）
/// 2. 客房状态变更（已清扫状态联动刷新 last_cleaned）
/// 3. 客房查询（全量 / 按状态 / 待清扫）
/// 4. ActionLog记录
pub struct RoomApi {
    room_repo: Arc<RoomRepository>,
    action_log_repo: Arc<ActionLogRepository>,
    actor: String,
}

impl RoomApi {
    /// 创建新的RoomApi实例
    ///
    /// # 参数
    /// - room_repo: 客房仓储
    /// - action_log_repo: 操作日志仓储
    /// - actor: 操作人/系统标识（写入审计日志）
    pub fn new(
        room_repo: Arc<RoomRepository>,
        action_log_repo: Arc<ActionLogRepository>,
        actor: impl Into<String>,
    ) -> Self {
        Self {
            room_repo,
            action_log_repo,
            actor: actor.into(),
        }
    }

    // ==========================================
    // 写入接口
    // ==========================================

    /// 登记新客房
    ///
    /// 默认: 状态 VACANT_CLEAN，维护状态 GOOD，last_cleaned 取当前时间
    pub fn add_room(&self, request: AddRoomRequest) -> ApiResult<()> {
        // 参数验证
        if request.room_number.trim().is_empty() {
            return Err(ApiError::InvalidInput("房号不能为空".to_string()));
        }
        if request.max_occupancy <= 0 {
            return Err(ApiError::InvalidInput(format!(
                "最大入住人数必须为正数: {}",
                request.max_occupancy
            )));
        }
        if !request.rate.is_finite() || request.rate < 0.0 {
            return Err(ApiError::InvalidInput(format!(
                "门市价非法: {}",
                request.rate
            )));
        }

        let now = Utc::now();
        let room = Room::new(
            request.room_number.trim(),
            request.room_type,
            request.floor,
            request.max_occupancy,
            request.rate,
            now,
        );
        self.room_repo.insert(&room)?;

        self.action_log_repo.record(
            &ActionLog::new(ActionType::RoomCreate, &self.actor, now)
                .with_detail(format!("登记客房 {}", room.room_number))
                .with_payload(json!({
                    "room_number": room.room_number,
                    "room_type": room.room_type,
                    "floor": room.floor,
                })),
        )?;

        info!(room_number = %room.room_number, "客房登记完成");
        Ok(())
    }

    /// 变更客房状态
    ///
    /// 仅当目标状态为已清扫口径（VACANT_CLEAN / OCCUPIED_CLEAN）时刷新 last_cleaned
    pub fn update_room_status(&self, room_number: &str, status: RoomStatus) -> ApiResult<()> {
        if room_number.trim().is_empty() {
            return Err(ApiError::InvalidInput("房号不能为空".to_string()));
        }

        let now = Utc::now();
        self.room_repo
            .update_status(room_number.trim(), status, now)?;

        self.action_log_repo.record(
            &ActionLog::new(ActionType::RoomStatusUpdate, &self.actor, now)
                .with_detail(format!("客房 {} 状态变更为 {}", room_number, status))
                .with_payload(json!({
                    "room_number": room_number,
                    "new_status": status.to_db_str(),
                })),
        )?;

        info!(room_number = %room_number, status = %status, "客房状态已变更");
        Ok(())
    }

    // ==========================================
    // 查询接口
    // ==========================================

    /// 按房号查询（不存在返回 NotFound）
    pub fn get_room(&self, room_number: &str) -> ApiResult<Room> {
        if room_number.trim().is_empty() {
            return Err(ApiError::InvalidInput("房号不能为空".to_string()));
        }

        self.room_repo
            .find_by_number(room_number.trim())?
            .ok_or_else(|| ApiError::NotFound(format!("客房 {} 不存在", room_number)))
    }

    /// 查询全部客房
    pub fn list_rooms(&self) -> ApiResult<Vec<Room>> {
        Ok(self.room_repo.list_all()?)
    }

    /// 按状态集合查询
    pub fn list_rooms_by_status(&self, statuses: &[RoomStatus]) -> ApiResult<Vec<Room>> {
        Ok(self.room_repo.list_by_status(statuses)?)
    }

    /// 查询待清扫客房（VACANT_DIRTY / OCCUPIED_DIRTY / DUE_OUT）
    pub fn list_dirty_rooms(&self) -> ApiResult<Vec<Room>> {
        Ok(self.room_repo.list_dirty()?)
    }
}
