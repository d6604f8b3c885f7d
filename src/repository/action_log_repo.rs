// ==========================================
// 酒店客房管理系统 - 操作日志数据仓储
// ==========================================
// 红线: Repository 不含业务逻辑，只负责数据访问
// 用途: 审计追踪（所有写入操作落一条日志）
// ==========================================

use crate::domain::action_log::{ActionLog, ActionType};
use crate::repository::error::{RepositoryError, RepositoryResult};
use rusqlite::{params, Connection, Row};
use std::sync::{Arc, Mutex};

// ==========================================
// ActionLogRepository - 操作日志仓储
// ==========================================
/// 操作日志仓储
/// 职责: action_log 表的写入与查询
pub struct ActionLogRepository {
    conn: Arc<Mutex<Connection>>,
}

impl ActionLogRepository {
    /// 创建新的 ActionLogRepository 实例
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

    /// 写入一条操作日志
    pub fn record(&self, log: &ActionLog) -> RepositoryResult<()> {
        let conn = self.get_conn()?;
        conn.execute(
            r#"
            INSERT INTO action_log (
                action_id, action_type, action_ts, actor, detail, payload_json
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            "#,
            params![
                log.action_id,
                log.action_type.to_db_str(),
                log.action_ts,
                log.actor,
                log.detail,
                log.payload_json.as_ref().map(|p| p.to_string()),
            ],
        )?;
        Ok(())
    }

    /// 查询最近的操作日志（按时间倒序）
    ///
    /// # 参数
    /// - `limit`: 返回条数上限
    pub fn list_recent(&self, limit: i64) -> RepositoryResult<Vec<ActionLog>> {
        let conn = self.get_conn()?;
        let mut stmt = conn.prepare(
            r#"
            SELECT action_id, action_type, action_ts, actor, detail, payload_json
            FROM action_log
            ORDER BY action_ts DESC, action_id
            LIMIT ?1
            "#,
        )?;

        let rows = stmt.query_map(params![limit], map_action_log)?;
        let mut logs = Vec::new();
        for row in rows {
            logs.push(row?);
        }
        Ok(logs)
    }
}

/// action_log 行映射
fn map_action_log(row: &Row<'_>) -> rusqlite::Result<ActionLog> {
    let action_type_str: String = row.get(1)?;
    let action_type = ActionType::from_db_str(&action_type_str).ok_or_else(|| {
        rusqlite::Error::InvalidColumnType(
            1,
            "action_type".to_string(),
            rusqlite::types::Type::Text,
        )
    })?;
    let payload_str: Option<String> = row.get(5)?;
    let payload_json = match payload_str {
        Some(raw) => Some(serde_json::from_str(&raw).map_err(|_| {
            rusqlite::Error::InvalidColumnType(
                5,
                "payload_json".to_string(),
                rusqlite::types::Type::Text,
            )
        })?),
        None => None,
    };

    Ok(ActionLog {
        action_id: row.get(0)?,
        action_type,
        action_ts: row.get(2)?,
        actor: row.get(3)?,
        detail: row.get(4)?,
        payload_json,
    })
}
