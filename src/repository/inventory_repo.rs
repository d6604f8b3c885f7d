// ==========================================
// 酒店客房管理系统 - 物资库存数据仓储
// ==========================================
// 红线: Repository 不含业务逻辑，只负责数据访问
// 说明: 库存水位判断在报表查询中派生（report_repo）
// ==========================================

use crate::domain::inventory::InventoryItem;
use crate::repository::error::{RepositoryError, RepositoryResult};
use chrono::NaiveDate;
use rusqlite::{params, Connection, Row};
use std::sync::{Arc, Mutex};

// ==========================================
// InventoryRepository - 物资库存仓储
// ==========================================
/// 物资库存仓储
/// 职责: 管理 inventory 表的 CRUD 操作与补货
pub struct InventoryRepository {
    conn: Arc<Mutex<Connection>>,
}

impl InventoryRepository {
    /// 创建新的 InventoryRepository 实例
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

    /// 新增物资
    ///
    /// # 返回
    /// - Ok(i64): 数据库分配的物资ID
    pub fn insert(&self, item: &InventoryItem) -> RepositoryResult<i64> {
        let conn = self.get_conn()?;
        conn.execute(
            r#"
            INSERT INTO inventory (
                item_name, quantity, reorder_level, last_restocked,
                unit_cost, supplier, category, minimum_order_quantity
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
            "#,
            params![
                item.item_name,
                item.quantity,
                item.reorder_level,
                item.last_restocked,
                item.unit_cost,
                item.supplier,
                item.category,
                item.minimum_order_quantity,
            ],
        )?;
        Ok(conn.last_insert_rowid())
    }

    /// 按ID查询
    pub fn find_by_id(&self, item_id: i64) -> RepositoryResult<Option<InventoryItem>> {
        let conn = self.get_conn()?;
        let mut stmt = conn.prepare(
            r#"
            SELECT id, item_name, quantity, reorder_level, last_restocked,
                   unit_cost, supplier, category, minimum_order_quantity
            FROM inventory
            WHERE id = ?1
            "#,
        )?;

        let result = stmt.query_row(params![item_id], map_item);
        match result {
            Ok(item) => Ok(Some(item)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// 查询全部物资（按名称升序）
    pub fn list_all(&self) -> RepositoryResult<Vec<InventoryItem>> {
        let conn = self.get_conn()?;
        let mut stmt = conn.prepare(
            r#"
            SELECT id, item_name, quantity, reorder_level, last_restocked,
                   unit_cost, supplier, category, minimum_order_quantity
            FROM inventory
            ORDER BY item_name
            "#,
        )?;

        let rows = stmt.query_map([], map_item)?;
        let mut items = Vec::new();
        for row in rows {
            items.push(row?);
        }
        Ok(items)
    }

    /// 补货: 增加库存量并刷新最近补货日期
    ///
    /// # 参数
    /// - `item_id`: 物资ID
    /// - `added_quantity`: 补货数量（正数）
    /// - `restocked_on`: 补货日期
    pub fn restock(
        &self,
        item_id: i64,
        added_quantity: i32,
        restocked_on: NaiveDate,
    ) -> RepositoryResult<()> {
        if added_quantity <= 0 {
            return Err(RepositoryError::ValidationError(format!(
                "补货数量必须为正数: {}",
                added_quantity
            )));
        }

        let conn = self.get_conn()?;
        let changed = conn.execute(
            r#"
            UPDATE inventory
            SET quantity = quantity + ?1,
                last_restocked = ?2
            WHERE id = ?3
            "#,
            params![added_quantity, restocked_on, item_id],
        )?;

        if changed == 0 {
            return Err(RepositoryError::NotFound {
                entity: "InventoryItem".to_string(),
                id: item_id.to_string(),
            });
        }
        Ok(())
    }
}

/// inventory 行映射
fn map_item(row: &Row<'_>) -> rusqlite::Result<InventoryItem> {
    Ok(InventoryItem {
        id: row.get(0)?,
        item_name: row.get(1)?,
        quantity: row.get(2)?,
        reorder_level: row.get(3)?,
        last_restocked: row.get(4)?,
        unit_cost: row.get(5)?,
        supplier: row.get(6)?,
        category: row.get(7)?,
        minimum_order_quantity: row.get(8)?,
    })
}
