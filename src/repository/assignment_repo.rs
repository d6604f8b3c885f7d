// ==========================================
// 酒店客房管理系统 - 清扫任务数据仓储
// ==========================================
// 红线: Repository 不含业务逻辑，只负责数据访问
// 说明: 同时实现引擎侧 AssignmentRecorder 接口（调度落库）
// ==========================================

use crate::domain::assignment::Assignment;
use crate::domain::types::{AssignmentStatus, Priority};
use crate::engine::assignment::AssignmentRecorder;
use crate::repository::error::{RepositoryError, RepositoryResult};
use chrono::{DateTime, NaiveDate, Utc};
use rusqlite::{params, Connection, Row};
use std::sync::{Arc, Mutex};

// ==========================================
// AssignmentRepository - 清扫任务仓储
// ==========================================
/// 清扫任务仓储
/// 职责: 管理 assignments 表的创建、完成与查询
pub struct AssignmentRepository {
    conn: Arc<Mutex<Connection>>,
}

impl AssignmentRepository {
    /// 创建新的 AssignmentRepository 实例
    pub fn new(db_path: &str) -> RepositoryResult<Self> {
        let conn = crate::db::open_sqlite_connection(db_path)
            .map_err(|e| RepositoryError::DatabaseConnectionError(e.to_string()))?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// 从已有连接创建仓储实例
    pub fn from_connection(conn: Arc<Mutex<Connection>>) -> Self {
        Self { conn }
    }

    /// 获取数据库连接
    fn get_conn(&self) -> RepositoryResult<std::sync::MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|e| RepositoryError::LockError(e.to_string()))
    }

    /// 创建清扫任务
    ///
    /// 初始状态 PENDING，清扫耗时 0，质检未通过
    ///
    /// # 参数
    /// - `room_number`: 房号
    /// - `staff_id`: 员工ID
    /// - `priority`: 优先级
    /// - `created_at`: 派工时间（assignment_date 取其日期部分）
    ///
    /// # 返回
    /// - Ok(i64): 任务ID
    pub fn create(
        &self,
        room_number: &str,
        staff_id: i64,
        priority: Priority,
        created_at: DateTime<Utc>,
    ) -> RepositoryResult<i64> {
        let conn = self.get_conn()?;
        conn.execute(
            r#"
            INSERT INTO assignments (
                room_number, staff_id, assignment_date, start_time,
                status, priority, cleaning_duration_min, quality_check_passed
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, 0, 0)
            "#,
            params![
                room_number,
                staff_id,
                created_at.date_naive(),
                created_at,
                AssignmentStatus::Pending.to_db_str(),
                priority.to_db_str(),
            ],
        )?;
        Ok(conn.last_insert_rowid())
    }

    /// 按ID查询
    pub fn find_by_id(&self, assignment_id: i64) -> RepositoryResult<Option<Assignment>> {
        let conn = self.get_conn()?;
        let mut stmt = conn.prepare(
            r#"
            SELECT id, room_number, staff_id, assignment_date, start_time, end_time,
                   status, priority, cleaning_duration_min, quality_check_passed
            FROM assignments
            WHERE id = ?1
            "#,
        )?;

        let result = stmt.query_row(params![assignment_id], map_assignment);
        match result {
            Ok(assignment) => Ok(Some(assignment)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// 查询员工的全部任务（按派工时间升序）
    pub fn list_by_staff(&self, staff_id: i64) -> RepositoryResult<Vec<Assignment>> {
        let conn = self.get_conn()?;
        let mut stmt = conn.prepare(
            r#"
            SELECT id, room_number, staff_id, assignment_date, start_time, end_time,
                   status, priority, cleaning_duration_min, quality_check_passed
            FROM assignments
            WHERE staff_id = ?1
            ORDER BY start_time, id
            "#,
        )?;

        let rows = stmt.query_map(params![staff_id], map_assignment)?;
        let mut assignments = Vec::new();
        for row in rows {
            assignments.push(row?);
        }
        Ok(assignments)
    }

    /// 查询某日的全部任务（按任务ID升序）
    pub fn list_by_date(&self, date: NaiveDate) -> RepositoryResult<Vec<Assignment>> {
        let conn = self.get_conn()?;
        let mut stmt = conn.prepare(
            r#"
            SELECT id, room_number, staff_id, assignment_date, start_time, end_time,
                   status, priority, cleaning_duration_min, quality_check_passed
            FROM assignments
            WHERE assignment_date = ?1
            ORDER BY id
            "#,
        )?;

        let rows = stmt.query_map(params![date], map_assignment)?;
        let mut assignments = Vec::new();
        for row in rows {
            assignments.push(row?);
        }
        Ok(assignments)
    }

    /// 完成任务: 写入完成时间、耗时、质检结果，状态置 COMPLETED
    ///
    /// # 参数
    /// - `assignment_id`: 任务ID
    /// - `completed_at`: 完成时间
    /// - `cleaning_duration_min`: 清扫耗时（分钟）
    /// - `quality_check_passed`: 质检是否通过
    pub fn complete(
        &self,
        assignment_id: i64,
        completed_at: DateTime<Utc>,
        cleaning_duration_min: i32,
        quality_check_passed: bool,
    ) -> RepositoryResult<()> {
        let conn = self.get_conn()?;
        let changed = conn.execute(
            r#"
            UPDATE assignments
            SET end_time = ?1,
                cleaning_duration_min = ?2,
                quality_check_passed = ?3,
                status = ?4
            WHERE id = ?5
            "#,
            params![
                completed_at,
                cleaning_duration_min,
                quality_check_passed,
                AssignmentStatus::Completed.to_db_str(),
                assignment_id,
            ],
        )?;

        if changed == 0 {
            return Err(RepositoryError::NotFound {
                entity: "Assignment".to_string(),
                id: assignment_id.to_string(),
            });
        }
        Ok(())
    }
}

// ==========================================
// AssignmentRecorder 实现（调度引擎落库出口）
// ==========================================
impl AssignmentRecorder for AssignmentRepository {
    fn record_assignment(
        &self,
        room_number: &str,
        staff_id: i64,
        priority: Priority,
        created_at: DateTime<Utc>,
    ) -> RepositoryResult<()> {
        self.create(room_number, staff_id, priority, created_at)
            .map(|_id| ())
    }
}

/// assignments 行映射
fn map_assignment(row: &Row<'_>) -> rusqlite::Result<Assignment> {
    let status_str: String = row.get(6)?;
    let status = AssignmentStatus::from_db_str(&status_str).ok_or_else(|| {
        rusqlite::Error::InvalidColumnType(6, "status".to_string(), rusqlite::types::Type::Text)
    })?;
    let priority_str: String = row.get(7)?;
    let priority = Priority::from_db_str(&priority_str).ok_or_else(|| {
        rusqlite::Error::InvalidColumnType(7, "priority".to_string(), rusqlite::types::Type::Text)
    })?;

    Ok(Assignment {
        id: row.get(0)?,
        room_number: row.get(1)?,
        staff_id: row.get(2)?,
        assignment_date: row.get(3)?,
        start_time: row.get(4)?,
        end_time: row.get(5)?,
        status,
        priority,
        cleaning_duration_min: row.get(8)?,
        quality_check_passed: row.get(9)?,
    })
}
