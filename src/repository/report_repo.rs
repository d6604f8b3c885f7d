// ==========================================
// 酒店客房管理系统 - 报表读模型仓储
// ==========================================
// 职责: 报表聚合查询（staff×assignments、inventory 水位）
// 红线: 只读，不做任何写入
// ==========================================

use crate::domain::report::{InventoryReportRow, StaffPerformanceRow};
use crate::domain::types::StockStatus;
use crate::repository::error::{RepositoryError, RepositoryResult};
use rusqlite::{params, Connection};
use std::sync::{Arc, Mutex};

// ==========================================
// ReportRepository - 报表仓储
// ==========================================
pub struct ReportRepository {
    conn: Arc<Mutex<Connection>>,
}

impl ReportRepository {
    /// 创建新的 ReportRepository 实例
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

    /// 员工绩效报表
    ///
    /// 口径: staff LEFT JOIN assignments（无任务员工也出现在报表中，
    /// total_assignments=0，avg_cleaning_minutes=None）
    pub fn staff_performance_rows(&self) -> RepositoryResult<Vec<StaffPerformanceRow>> {
        let conn = self.get_conn()?;
        let mut stmt = conn.prepare(
            r#"
            SELECT
                s.id,
                s.name,
                s.position,
                s.performance_rating,
                s.rooms_cleaned_today,
                COUNT(a.id) AS total_assignments,
                AVG(a.cleaning_duration_min) AS avg_cleaning_minutes
            FROM staff s
            LEFT JOIN assignments a ON s.id = a.staff_id
            GROUP BY s.id
            ORDER BY s.id
            "#,
        )?;

        let rows = stmt.query_map([], |row| {
            Ok(StaffPerformanceRow {
                staff_id: row.get(0)?,
                name: row.get(1)?,
                position: row.get(2)?,
                performance_rating: row.get(3)?,
                rooms_cleaned_today: row.get(4)?,
                total_assignments: row.get(5)?,
                avg_cleaning_minutes: row.get(6)?,
            })
        })?;

        let mut report = Vec::new();
        for row in rows {
            report.push(row?);
        }
        Ok(report)
    }

    /// 库存报表（含补货建议）
    ///
    /// 水位口径:
    /// - REORDER_REQUIRED: quantity <= reorder_level
    /// - LOW_STOCK:        quantity <= reorder_level * low_stock_factor
    /// - ADEQUATE:         其余
    ///
    /// 排序: 水位从差到好（REORDER_REQUIRED > LOW_STOCK > ADEQUATE），同水位按名称
    ///
    /// # 参数
    /// - `low_stock_factor`: 低水位系数（默认配置 1.2）
    pub fn inventory_rows(&self, low_stock_factor: f64) -> RepositoryResult<Vec<InventoryReportRow>> {
        let conn = self.get_conn()?;
        let mut stmt = conn.prepare(
            r#"
            SELECT
                item_name,
                quantity,
                reorder_level,
                unit_cost,
                supplier,
                category,
                CASE
                    WHEN quantity <= reorder_level THEN 'REORDER_REQUIRED'
                    WHEN quantity <= CAST(reorder_level AS REAL) * ?1 THEN 'LOW_STOCK'
                    ELSE 'ADEQUATE'
                END AS stock_status
            FROM inventory
            ORDER BY stock_status DESC, item_name
            "#,
        )?;

        let rows = stmt.query_map(params![low_stock_factor], |row| {
            let status_str: String = row.get(6)?;
            let stock_status = StockStatus::from_db_str(&status_str).ok_or_else(|| {
                rusqlite::Error::InvalidColumnType(
                    6,
                    "stock_status".to_string(),
                    rusqlite::types::Type::Text,
                )
            })?;
            Ok(InventoryReportRow {
                item_name: row.get(0)?,
                quantity: row.get(1)?,
                reorder_level: row.get(2)?,
                unit_cost: row.get(3)?,
                supplier: row.get(4)?,
                category: row.get(5)?,
                stock_status,
            })
        })?;

        let mut report = Vec::new();
        for row in rows {
            report.push(row?);
        }
        Ok(report)
    }
}
