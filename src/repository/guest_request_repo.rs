// ==========================================
// 酒店客房管理系统 - 客人请求数据仓储
// ==========================================
// 红线: Repository 不含业务逻辑，只负责数据访问
// ==========================================

use crate::domain::guest_request::GuestRequest;
use crate::domain::types::{Priority, RequestStatus};
use crate::repository::error::{RepositoryError, RepositoryResult};
use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, Row};
use std::sync::{Arc, Mutex};

// ==========================================
// GuestRequestRepository - 客人请求仓储
// ==========================================
/// 客人请求仓储
/// 职责: 管理 guest_requests 表的创建、跟进与查询
pub struct GuestRequestRepository {
    conn: Arc<Mutex<Connection>>,
}

impl GuestRequestRepository {
    /// 创建新的 GuestRequestRepository 实例
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

    /// 创建客人请求（初始状态 PENDING）
    ///
    /// # 返回
    /// - Ok(i64): 请求ID
    pub fn create(&self, request: &GuestRequest) -> RepositoryResult<i64> {
        let conn = self.get_conn()?;
        conn.execute(
            r#"
            INSERT INTO guest_requests (
                room_number, request_type, request_time, status,
                priority, notes, assigned_staff_id, completion_time
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
            "#,
            params![
                request.room_number,
                request.request_type,
                request.request_time,
                request.status.to_db_str(),
                request.priority.to_db_str(),
                request.notes,
                request.assigned_staff_id,
                request.completion_time,
            ],
        )?;
        Ok(conn.last_insert_rowid())
    }

    /// 按ID查询
    pub fn find_by_id(&self, request_id: i64) -> RepositoryResult<Option<GuestRequest>> {
        let conn = self.get_conn()?;
        let mut stmt = conn.prepare(
            r#"
            SELECT id, room_number, request_type, request_time, status,
                   priority, notes, assigned_staff_id, completion_time
            FROM guest_requests
            WHERE id = ?1
            "#,
        )?;

        let result = stmt.query_row(params![request_id], map_request);
        match result {
            Ok(request) => Ok(Some(request)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// 按状态查询（按请求时间升序）
    pub fn list_by_status(&self, status: RequestStatus) -> RepositoryResult<Vec<GuestRequest>> {
        let conn = self.get_conn()?;
        let mut stmt = conn.prepare(
            r#"
            SELECT id, room_number, request_type, request_time, status,
                   priority, notes, assigned_staff_id, completion_time
            FROM guest_requests
            WHERE status = ?1
            ORDER BY request_time, id
            "#,
        )?;

        let rows = stmt.query_map(params![status.to_db_str()], map_request)?;
        let mut requests = Vec::new();
        for row in rows {
            requests.push(row?);
        }
        Ok(requests)
    }

    /// 指派跟进员工，状态置 IN_PROGRESS
    pub fn assign_staff(&self, request_id: i64, staff_id: i64) -> RepositoryResult<()> {
        let conn = self.get_conn()?;
        let changed = conn.execute(
            r#"
            UPDATE guest_requests
            SET assigned_staff_id = ?1, status = ?2
            WHERE id = ?3
            "#,
            params![staff_id, RequestStatus::InProgress.to_db_str(), request_id],
        )?;

        if changed == 0 {
            return Err(RepositoryError::NotFound {
                entity: "GuestRequest".to_string(),
                id: request_id.to_string(),
            });
        }
        Ok(())
    }

    /// 完成请求: 写入完成时间，状态置 COMPLETED
    pub fn complete(
        &self,
        request_id: i64,
        completed_at: DateTime<Utc>,
    ) -> RepositoryResult<()> {
        let conn = self.get_conn()?;
        let changed = conn.execute(
            r#"
            UPDATE guest_requests
            SET completion_time = ?1, status = ?2
            WHERE id = ?3
            "#,
            params![completed_at, RequestStatus::Completed.to_db_str(), request_id],
        )?;

        if changed == 0 {
            return Err(RepositoryError::NotFound {
                entity: "GuestRequest".to_string(),
                id: request_id.to_string(),
            });
        }
        Ok(())
    }
}

/// guest_requests 行映射
fn map_request(row: &Row<'_>) -> rusqlite::Result<GuestRequest> {
    let status_str: String = row.get(4)?;
    let status = RequestStatus::from_db_str(&status_str).ok_or_else(|| {
        rusqlite::Error::InvalidColumnType(4, "status".to_string(), rusqlite::types::Type::Text)
    })?;
    let priority_str: String = row.get(5)?;
    let priority = Priority::from_db_str(&priority_str).ok_or_else(|| {
        rusqlite::Error::InvalidColumnType(5, "priority".to_string(), rusqlite::types::Type::Text)
    })?;

    Ok(GuestRequest {
        id: row.get(0)?,
        room_number: row.get(1)?,
        request_type: row.get(2)?,
        request_time: row.get(3)?,
        status,
        priority,
        notes: row.get(6)?,
        assigned_staff_id: row.get(7)?,
        completion_time: row.get(8)?,
    })
}
