// ==========================================
// 酒店客房管理系统 - 智能派工引擎
// ==========================================
// 职责: 对待清扫客房与当班可用员工做贪心匹配
// 红线: 引擎只读快照，不回写客房/员工状态；落库走 AssignmentRecorder
// 复杂度: O(客房数 × 员工数)，单次调用内每名员工至多派一间
// ==========================================

use crate::domain::types::{Priority, RoomStatus};
use crate::engine::scoring::compute_staff_score;
use crate::repository::error::RepositoryResult;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ==========================================
// 候选快照
// ==========================================

/// 客房候选（调用时的状态快照）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomCandidate {
    pub room_number: String, // 房号
    pub status: RoomStatus,  // 快照状态（待清扫口径之一）
    pub floor: i32,          // 楼层
}

/// 员工候选（调用时的考核快照）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StaffCandidate {
    pub staff_id: i64,            // 员工ID
    pub performance_rating: f64,  // 绩效评分
    pub rooms_cleaned_today: i32, // 今日已清扫房间数
}

// ==========================================
// AssignmentDecision - 派工决策
// ==========================================
/// 单条派工决策（按客房处理顺序排列）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssignmentDecision {
    pub room_number: String, // 房号
    pub staff_id: i64,       // 员工ID
    pub priority: Priority,  // 优先级（DUE_OUT → HIGH，其余 → MEDIUM）
}

// ==========================================
// AssignmentRecorder - 派工落库接口
// ==========================================
/// 派工落库出口
///
/// 写入失败会使整轮派工以错误终止（引擎不重试、不补偿，
/// 事务性由存储侧自行保证）
pub trait AssignmentRecorder {
    fn record_assignment(
        &self,
        room_number: &str,
        staff_id: i64,
        priority: Priority,
        created_at: DateTime<Utc>,
    ) -> RepositoryResult<()>;
}

// ==========================================
// AssignmentEngine - 智能派工引擎
// ==========================================
pub struct AssignmentEngine {
    // 无状态引擎,不需要注入依赖
}

impl AssignmentEngine {
    /// 构造函数
    pub fn new() -> Self {
        Self {}
    }

    /// 对客房候选序列执行贪心派工
    ///
    /// 流程（逐间客房）:
    /// 1) 剩余员工为空则停止，余下客房静默跳过（不视为错误）
    /// 2) 对每名剩余员工计算评分
    /// 3) 取首个达到最大评分的员工（同分按名册原始顺序取先者）
    /// 4) 优先级: 客房为 DUE_OUT → HIGH，否则 MEDIUM
    /// 5) 经 recorder 落库，失败立即向上传播
    /// 6) 被选员工移出剩余池（单轮内不复用）
    ///
    /// # 参数
    /// - `dirty_rooms`: 待清扫客房快照（顺序即处理顺序）
    /// - `available_staff`: 当班可用员工快照（顺序即同分裁决顺序）
    /// - `recorder`: 派工落库出口
    /// - `now`: 派工时间
    ///
    /// # 返回
    /// - Ok(Vec<AssignmentDecision>): 实际派工序列；任一候选集为空时为空且无落库
    pub fn assign(
        &self,
        dirty_rooms: &[RoomCandidate],
        available_staff: &[StaffCandidate],
        recorder: &dyn AssignmentRecorder,
        now: DateTime<Utc>,
    ) -> RepositoryResult<Vec<AssignmentDecision>> {
        if dirty_rooms.is_empty() || available_staff.is_empty() {
            return Ok(Vec::new());
        }

        let mut remaining: Vec<&StaffCandidate> = available_staff.iter().collect();
        let mut decisions = Vec::new();

        for room in dirty_rooms {
            if remaining.is_empty() {
                break;
            }

            // 取首个最大评分（严格大于才替换，同分保持名册顺序）
            let mut best_idx = 0usize;
            let mut best_score = compute_staff_score(
                remaining[0].performance_rating,
                remaining[0].rooms_cleaned_today,
            );
            for (idx, staff) in remaining.iter().enumerate().skip(1) {
                let score =
                    compute_staff_score(staff.performance_rating, staff.rooms_cleaned_today);
                if score > best_score {
                    best_score = score;
                    best_idx = idx;
                }
            }

            let chosen = remaining[best_idx];
            let priority = if room.status == RoomStatus::DueOut {
                Priority::High
            } else {
                Priority::Medium
            };

            recorder.record_assignment(&room.room_number, chosen.staff_id, priority, now)?;
            remaining.remove(best_idx);

            tracing::debug!(
                room_number = %room.room_number,
                staff_id = chosen.staff_id,
                score = best_score,
                priority = %priority,
                "派工决策"
            );

            decisions.push(AssignmentDecision {
                room_number: room.room_number.clone(),
                staff_id: chosen.staff_id,
                priority,
            });
        }

        Ok(decisions)
    }
}
