// ==========================================
// 酒店客房管理系统 - 员工数据仓储
// ==========================================
// 红线: Repository 不含业务逻辑，只负责数据访问
// ==========================================

use crate::domain::staff::Staff;
use crate::domain::types::ShiftLabel;
use crate::repository::error::{RepositoryError, RepositoryResult};
use rusqlite::{params, Connection, Row};
use std::sync::{Arc, Mutex};

// ==========================================
// StaffRepository - 员工仓储
// ==========================================
/// 员工仓储
/// 职责: 管理 staff 表的 CRUD 操作与当日工作量计数
pub struct StaffRepository {
    conn: Arc<Mutex<Connection>>,
}

impl StaffRepository {
    /// 创建新的 StaffRepository 实例
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

    /// 新增员工
    ///
    /// # 返回
    /// - Ok(i64): 数据库分配的员工ID（staff.id 字段入参忽略）
    pub fn insert(&self, staff: &Staff) -> RepositoryResult<i64> {
        let conn = self.get_conn()?;
        conn.execute(
            r#"
            INSERT INTO staff (
                name, position, shift, contact, hiring_date,
                performance_rating, rooms_cleaned_today, available
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
            "#,
            params![
                staff.name,
                staff.position,
                staff.shift.to_db_str(),
                staff.contact,
                staff.hiring_date,
                staff.performance_rating,
                staff.rooms_cleaned_today,
                staff.available,
            ],
        )?;
        Ok(conn.last_insert_rowid())
    }

    /// 按ID查询
    pub fn find_by_id(&self, staff_id: i64) -> RepositoryResult<Option<Staff>> {
        let conn = self.get_conn()?;
        let mut stmt = conn.prepare(
            r#"
            SELECT id, name, position, shift, contact, hiring_date,
                   performance_rating, rooms_cleaned_today, available
            FROM staff
            WHERE id = ?1
            "#,
        )?;

        let result = stmt.query_row(params![staff_id], map_staff);
        match result {
            Ok(staff) => Ok(Some(staff)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// 查询全部员工（按ID升序）
    pub fn list_all(&self) -> RepositoryResult<Vec<Staff>> {
        let conn = self.get_conn()?;
        let mut stmt = conn.prepare(
            r#"
            SELECT id, name, position, shift, contact, hiring_date,
                   performance_rating, rooms_cleaned_today, available
            FROM staff
            ORDER BY id
            "#,
        )?;

        let rows = stmt.query_map([], map_staff)?;
        let mut staff_list = Vec::new();
        for row in rows {
            staff_list.push(row?);
        }
        Ok(staff_list)
    }

    /// 查询指定班次的可用员工（按ID升序，保证调度候选顺序确定）
    ///
    /// # 参数
    /// - `shift`: 当前班次
    pub fn list_available(&self, shift: ShiftLabel) -> RepositoryResult<Vec<Staff>> {
        let conn = self.get_conn()?;
        let mut stmt = conn.prepare(
            r#"
            SELECT id, name, position, shift, contact, hiring_date,
                   performance_rating, rooms_cleaned_today, available
            FROM staff
            WHERE available = 1 AND shift = ?1
            ORDER BY id
            "#,
        )?;

        let rows = stmt.query_map(params![shift.to_db_str()], map_staff)?;
        let mut staff_list = Vec::new();
        for row in rows {
            staff_list.push(row?);
        }
        Ok(staff_list)
    }

    /// 记录绩效评分，并将今日已清扫房间数 +1
    ///
    /// # 参数
    /// - `staff_id`: 员工ID
    /// - `performance_rating`: 本次评分（覆盖写入）
    pub fn record_performance(
        &self,
        staff_id: i64,
        performance_rating: f64,
    ) -> RepositoryResult<()> {
        let conn = self.get_conn()?;
        let changed = conn.execute(
            r#"
            UPDATE staff
            SET performance_rating = ?1,
                rooms_cleaned_today = rooms_cleaned_today + 1
            WHERE id = ?2
            "#,
            params![performance_rating, staff_id],
        )?;

        if changed == 0 {
            return Err(RepositoryError::NotFound {
                entity: "Staff".to_string(),
                id: staff_id.to_string(),
            });
        }
        Ok(())
    }

    /// 设置员工可用性
    pub fn set_available(&self, staff_id: i64, available: bool) -> RepositoryResult<()> {
        let conn = self.get_conn()?;
        let changed = conn.execute(
            "UPDATE staff SET available = ?1 WHERE id = ?2",
            params![available, staff_id],
        )?;

        if changed == 0 {
            return Err(RepositoryError::NotFound {
                entity: "Staff".to_string(),
                id: staff_id.to_string(),
            });
        }
        Ok(())
    }

    /// 清零全员今日已清扫房间数（每日滚动）
    ///
    /// # 返回
    /// - Ok(usize): 受影响的员工数
    pub fn reset_daily_counters(&self) -> RepositoryResult<usize> {
        let conn = self.get_conn()?;
        let changed = conn.execute("UPDATE staff SET rooms_cleaned_today = 0", [])?;
        Ok(changed)
    }
}

/// staff 行映射
fn map_staff(row: &Row<'_>) -> rusqlite::Result<Staff> {
    let shift_str: String = row.get(3)?;
    let shift = ShiftLabel::from_db_str(&shift_str).ok_or_else(|| {
        rusqlite::Error::InvalidColumnType(3, "shift".to_string(), rusqlite::types::Type::Text)
    })?;

    Ok(Staff {
        id: row.get(0)?,
        name: row.get(1)?,
        position: row.get(2)?,
        shift,
        contact: row.get(4)?,
        hiring_date: row.get(5)?,
        performance_rating: row.get(6)?,
        rooms_cleaned_today: row.get(7)?,
        available: row.get(8)?,
    })
}
