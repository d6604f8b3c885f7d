// ==========================================
// 酒店客房管理系统 - 客房数据仓储
// ==========================================
// 红线: Repository 不含业务逻辑，只负责数据访问
// 约束: 所有查询使用参数化，防止 SQL 注入
// ==========================================

use crate::domain::room::Room;
use crate::domain::types::RoomStatus;
use crate::repository::error::{RepositoryError, RepositoryResult};
use chrono::{DateTime, Utc};
use rusqlite::{params, params_from_iter, Connection, Row};
use std::sync::{Arc, Mutex};

// ==========================================
// RoomRepository - 客房仓储
// ==========================================
/// 客房仓储
/// 职责: 管理 rooms 表的 CRUD 操作
pub struct RoomRepository {
    conn: Arc<Mutex<Connection>>,
}

impl RoomRepository {
    /// 创建新的 RoomRepository 实例
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

    /// 新增客房
    pub fn insert(&self, room: &Room) -> RepositoryResult<()> {
        let conn = self.get_conn()?;
        conn.execute(
            r#"
            INSERT INTO rooms (
                room_number, room_type, status, last_cleaned,
                floor, max_occupancy, rate, notes, maintenance_status
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)
            "#,
            params![
                room.room_number,
                room.room_type,
                room.status.to_db_str(),
                room.last_cleaned,
                room.floor,
                room.max_occupancy,
                room.rate,
                room.notes,
                room.maintenance_status,
            ],
        )?;
        Ok(())
    }

    /// 按房号查询
    ///
    /// # 返回
    /// - Ok(Some(Room)): 找到客房
    /// - Ok(None): 未找到
    pub fn find_by_number(&self, room_number: &str) -> RepositoryResult<Option<Room>> {
        let conn = self.get_conn()?;
        let mut stmt = conn.prepare(
            r#"
            SELECT room_number, room_type, status, last_cleaned,
                   floor, max_occupancy, rate, notes, maintenance_status
            FROM rooms
            WHERE room_number = ?1
            "#,
        )?;

        let result = stmt.query_row(params![room_number], map_room);
        match result {
            Ok(room) => Ok(Some(room)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// 查询全部客房（按房号升序）
    pub fn list_all(&self) -> RepositoryResult<Vec<Room>> {
        let conn = self.get_conn()?;
        let mut stmt = conn.prepare(
            r#"
            SELECT room_number, room_type, status, last_cleaned,
                   floor, max_occupancy, rate, notes, maintenance_status
            FROM rooms
            ORDER BY room_number
            "#,
        )?;

        let rows = stmt.query_map([], map_room)?;
        let mut rooms = Vec::new();
        for row in rows {
            rooms.push(row?);
        }
        Ok(rooms)
    }

    /// 按状态集合查询（按房号升序，保证调度遍历顺序确定）
    ///
    /// # 参数
    /// - `statuses`: 状态集合（空集合返回空列表）
    pub fn list_by_status(&self, statuses: &[RoomStatus]) -> RepositoryResult<Vec<Room>> {
        if statuses.is_empty() {
            return Ok(Vec::new());
        }

        let conn = self.get_conn()?;

        // 动态拼接 IN 占位符（值仍然参数化）
        let placeholders = (1..=statuses.len())
            .map(|i| format!("?{}", i))
            .collect::<Vec<_>>()
            .join(", ");
        let sql = format!(
            r#"
            SELECT room_number, room_type, status, last_cleaned,
                   floor, max_occupancy, rate, notes, maintenance_status
            FROM rooms
            WHERE status IN ({})
            ORDER BY room_number
            "#,
            placeholders
        );

        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt.query_map(
            params_from_iter(statuses.iter().map(|s| s.to_db_str())),
            map_room,
        )?;

        let mut rooms = Vec::new();
        for row in rows {
            rooms.push(row?);
        }
        Ok(rooms)
    }

    /// 查询待清扫客房（VACANT_DIRTY / OCCUPIED_DIRTY / DUE_OUT）
    pub fn list_dirty(&self) -> RepositoryResult<Vec<Room>> {
        self.list_by_status(&RoomStatus::DIRTY)
    }

    /// 更新客房状态
    ///
    /// 仅当新状态为已清扫口径（VACANT_CLEAN / OCCUPIED_CLEAN）时刷新 last_cleaned
    ///
    /// # 参数
    /// - `room_number`: 房号
    /// - `status`: 目标状态
    /// - `now`: 当前时间（用于 last_cleaned 刷新）
    pub fn update_status(
        &self,
        room_number: &str,
        status: RoomStatus,
        now: DateTime<Utc>,
    ) -> RepositoryResult<()> {
        let conn = self.get_conn()?;

        let changed = if status.is_clean() {
            conn.execute(
                "UPDATE rooms SET status = ?1, last_cleaned = ?2 WHERE room_number = ?3",
                params![status.to_db_str(), now, room_number],
            )?
        } else {
            conn.execute(
                "UPDATE rooms SET status = ?1 WHERE room_number = ?2",
                params![status.to_db_str(), room_number],
            )?
        };

        if changed == 0 {
            return Err(RepositoryError::NotFound {
                entity: "Room".to_string(),
                id: room_number.to_string(),
            });
        }
        Ok(())
    }

    /// 统计各状态房间数（GROUP BY status）
    pub fn status_counts(&self) -> RepositoryResult<Vec<(RoomStatus, i64)>> {
        let conn = self.get_conn()?;
        let mut stmt = conn.prepare(
            "SELECT status, COUNT(*) FROM rooms GROUP BY status ORDER BY status",
        )?;

        let rows = stmt.query_map([], |row| {
            let status: String = row.get(0)?;
            let count: i64 = row.get(1)?;
            Ok((status, count))
        })?;

        let mut counts = Vec::new();
        for row in rows {
            let (status_str, count) = row?;
            let status = RoomStatus::from_db_str(&status_str).ok_or_else(|| {
                RepositoryError::FieldValueError {
                    field: "status".to_string(),
                    message: format!("未知客房状态: {}", status_str),
                }
            })?;
            counts.push((status, count));
        }
        Ok(counts)
    }
}

/// rooms 行映射
fn map_room(row: &Row<'_>) -> rusqlite::Result<Room> {
    let status_str: String = row.get(2)?;
    let status = RoomStatus::from_db_str(&status_str).ok_or_else(|| {
        rusqlite::Error::InvalidColumnType(2, "status".to_string(), rusqlite::types::Type::Text)
    })?;

    Ok(Room {
        room_number: row.get(0)?,
        room_type: row.get(1)?,
        status,
        last_cleaned: row.get(3)?,
        floor: row.get(4)?,
        max_occupancy: row.get(5)?,
        rate: row.get(6)?,
        notes: row.get(7)?,
        maintenance_status: row.get(8)?,
    })
}
