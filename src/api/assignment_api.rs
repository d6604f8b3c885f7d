// ==========================================
// 酒店客房管理系统 - 派工 API
// ==========================================
// 职责: 智能派工编排（班次判定 → 候选快照 → 贪心匹配 → 落库）
// 红线: 派工只创建任务，不回写客房/员工状态
// ==========================================

use std::sync::Arc;

use chrono::{DateTime, Local, Utc};
use serde_json::json;
use tracing::info;

use crate::api::error::{ApiError, ApiResult};
use crate::domain::action_log::{ActionLog, ActionType};
use crate::domain::assignment::Assignment;
use crate::engine::assignment::{
    AssignmentDecision, AssignmentEngine, RoomCandidate, StaffCandidate,
};
use crate::engine::shift::ShiftResolver;
use crate::repository::action_log_repo::ActionLogRepository;
use crate::repository::assignment_repo::AssignmentRepository;
use crate::repository::room_repo::RoomRepository;
use crate::repository::staff_repo::StaffRepository;

// ==========================================
// AssignmentApi - 派工 API
// ==========================================

/// 派工API
///
/// 职责：
/// 1. 智能派工编排（一次调用 = 一轮完整派工）
/// 2. 任务完成登记（耗时、质检）
/// 3. 任务查询
/// 4. ActionLog记录
pub struct AssignmentApi {
    room_repo: Arc<RoomRepository>,
    staff_repo: Arc<StaffRepository>,
    assignment_repo: Arc<AssignmentRepository>,
    action_log_repo: Arc<ActionLogRepository>,
    shift_resolver: ShiftResolver,
    engine: AssignmentEngine,
    actor: String,
}

impl AssignmentApi {
    /// 创建新的AssignmentApi实例
    ///
    /// # 参数
    /// - room_repo: 客房仓储（候选客房快照来源）
    /// - staff_repo: 员工仓储（候选员工快照来源）
    /// - assignment_repo: 清扫任务仓储（派工落库出口）
    /// - action_log_repo: 操作日志仓储
    /// - actor: 操作人/系统标识
    pub fn new(
        room_repo: Arc<RoomRepository>,
        staff_repo: Arc<StaffRepository>,
        assignment_repo: Arc<AssignmentRepository>,
        action_log_repo: Arc<ActionLogRepository>,
        actor: impl Into<String>,
    ) -> Self {
        Self {
            room_repo,
            staff_repo,
            assignment_repo,
            action_log_repo,
            shift_resolver: ShiftResolver::new(),
            engine: AssignmentEngine::new(),
            actor: actor.into(),
        }
    }

    // ==========================================
    // 派工编排
    // ==========================================

    /// 执行一轮智能派工
    ///
    /// 流程:
    /// 1) 按注入时间判定当前班次
    /// 2) 取待清扫客房快照（房号升序）与当班可用员工快照（工号升序）
    /// 3) 引擎贪心匹配并逐条落库（任一落库失败整轮报错）
    /// 4) 记录一条派工审计日志
    ///
    /// # 参数
    /// - `now`: 当前本地时间（由调用方注入，保证可测性）
    ///
    /// # 返回
    /// - Ok(Vec<AssignmentDecision>): 派工决策序列；候选集为空时为空
    pub fn run_smart_assignment(
        &self,
        now: DateTime<Local>,
    ) -> ApiResult<Vec<AssignmentDecision>> {
        let shift = self.shift_resolver.shift_of(&now);
        let now_utc = now.with_timezone(&Utc);

        // 候选快照（调用时一次性取得，匹配过程中不再查库）
        let staff_snapshot = self.staff_repo.list_available(shift)?;
        let room_snapshot = self.room_repo.list_dirty()?;

        let staff_candidates: Vec<StaffCandidate> = staff_snapshot
            .iter()
            .map(|s| StaffCandidate {
                staff_id: s.id,
                performance_rating: s.performance_rating,
                rooms_cleaned_today: s.rooms_cleaned_today,
            })
            .collect();
        let room_candidates: Vec<RoomCandidate> = room_snapshot
            .iter()
            .map(|r| RoomCandidate {
                room_number: r.room_number.clone(),
                status: r.status,
                floor: r.floor,
            })
            .collect();

        let decisions = self.engine.assign(
            &room_candidates,
            &staff_candidates,
            self.assignment_repo.as_ref(),
            now_utc,
        )?;

        info!(
            shift = %shift,
            dirty_rooms = room_candidates.len(),
            available_staff = staff_candidates.len(),
            assigned = decisions.len(),
            "智能派工完成"
        );

        self.action_log_repo.record(
            &ActionLog::new(ActionType::AssignmentCreate, &self.actor, now_utc)
                .with_detail(format!("智能派工: {} 间客房", decisions.len()))
                .with_payload(json!({
                    "shift": shift.to_db_str(),
                    "dirty_rooms": room_candidates.len(),
                    "available_staff": staff_candidates.len(),
                    "assigned": decisions
                        .iter()
                        .map(|d| json!({
                            "room_number": d.room_number,
                            "staff_id": d.staff_id,
                            "priority": d.priority.to_db_str(),
                        }))
                        .collect::<Vec<_>>(),
                })),
        )?;

        Ok(decisions)
    }

    // ==========================================
    // 任务维护
    // ==========================================

    /// 完成清扫任务（写入耗时与质检结果）
    pub fn complete_assignment(
        &self,
        assignment_id: i64,
        cleaning_duration_min: i32,
        quality_check_passed: bool,
    ) -> ApiResult<()> {
        if cleaning_duration_min < 0 {
            return Err(ApiError::InvalidInput(format!(
                "清扫耗时不能为负数: {}",
                cleaning_duration_min
            )));
        }

        let now = Utc::now();
        self.assignment_repo.complete(
            assignment_id,
            now,
            cleaning_duration_min,
            quality_check_passed,
        )?;

        self.action_log_repo.record(
            &ActionLog::new(ActionType::AssignmentComplete, &self.actor, now)
                .with_detail(format!("任务 {} 完成", assignment_id))
                .with_payload(json!({
                    "assignment_id": assignment_id,
                    "cleaning_duration_min": cleaning_duration_min,
                    "quality_check_passed": quality_check_passed,
                })),
        )?;
        Ok(())
    }

    // ==========================================
    // 查询接口
    // ==========================================

    /// 按ID查询任务（不存在返回 NotFound）
    pub fn get_assignment(&self, assignment_id: i64) -> ApiResult<Assignment> {
        self.assignment_repo
            .find_by_id(assignment_id)?
            .ok_or_else(|| ApiError::NotFound(format!("任务 {} 不存在", assignment_id)))
    }

    /// 查询员工的全部任务
    pub fn list_assignments_by_staff(&self, staff_id: i64) -> ApiResult<Vec<Assignment>> {
        Ok(self.assignment_repo.list_by_staff(staff_id)?)
    }
}
