// ==========================================
// 酒店客房管理系统 - 配置管理器
// ==========================================
// 职责: 配置加载、查询、覆写管理
// 存储: config_kv 表 (key-value + scope)
// ==========================================

use rusqlite::{params, Connection};
use std::collections::HashMap;
use std::error::Error;
use std::sync::{Arc, Mutex};

// ==========================================
// 配置键全集
// ==========================================
pub mod config_keys {
    /// 库存报表低水位系数（quantity <= reorder_level * 系数 → LOW_STOCK）
    pub const INVENTORY_LOW_STOCK_FACTOR: &str = "inventory.low_stock_factor";

    /// 最近操作日志默认返回条数
    pub const ACTION_LOG_RECENT_LIMIT: &str = "action_log.recent_limit";
}

/// 低水位系数默认值
pub const DEFAULT_LOW_STOCK_FACTOR: f64 = 1.2;

/// 最近操作日志默认条数
pub const DEFAULT_ACTION_LOG_RECENT_LIMIT: i64 = 20;

// ==========================================
// ConfigManager - 配置管理器
// ==========================================
pub struct ConfigManager {
    conn: Arc<Mutex<Connection>>,
}

impl ConfigManager {
    /// 创建新的 ConfigManager 实例
    ///
    /// # 参数
    /// - db_path: 数据库文件路径
    pub fn new(db_path: &str) -> Result<Self, Box<dyn Error>> {
        let conn = crate::db::open_sqlite_connection(db_path)?;

        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// 从已有连接创建 ConfigManager
    ///
    /// 说明：为保证连接行为一致，会对传入连接再次应用统一 PRAGMA（幂等）。
    pub fn from_connection(conn: Arc<Mutex<Connection>>) -> Result<Self, Box<dyn Error>> {
        {
            let conn_guard = conn.lock().map_err(|e| format!("锁获取失败: {}", e))?;
            crate::db::configure_sqlite_connection(&conn_guard)?;
        }

        Ok(Self { conn })
    }

    /// 从 config_kv 表读取配置值（scope_id='global'）
    ///
    /// # 返回
    /// - Some(String): 配置值
    /// - None: 配置不存在
    fn get_config_value(&self, key: &str) -> Result<Option<String>, Box<dyn Error>> {
        let conn = self.conn.lock().map_err(|e| format!("锁获取失败: {}", e))?;

        let result = conn.query_row(
            "SELECT value FROM config_kv WHERE scope_id = 'global' AND key = ?1",
            params![key],
            |row| row.get::<_, String>(0),
        );

        match result {
            Ok(value) => Ok(Some(value)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(Box::new(e)),
        }
    }

    /// 读取 global scope 的配置值（公开方法，供其他模块复用）
    pub fn get_global_config_value(&self, key: &str) -> Result<Option<String>, Box<dyn Error>> {
        self.get_config_value(key)
    }

    /// 从 config_kv 表读取配置值，带默认值
    pub fn get_config_or_default(&self, key: &str, default: &str) -> Result<String, Box<dyn Error>> {
        Ok(self.get_config_value(key)?.unwrap_or_else(|| default.to_string()))
    }

    /// 写入 global scope 配置值（存在则覆盖）
    pub fn set_config_value(&self, key: &str, value: &str) -> Result<(), Box<dyn Error>> {
        let conn = self.conn.lock().map_err(|e| format!("锁获取失败: {}", e))?;

        conn.execute(
            r#"
            INSERT INTO config_kv (scope_id, key, value, updated_at)
            VALUES ('global', ?1, ?2, datetime('now'))
            ON CONFLICT(scope_id, key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at
            "#,
            params![key, value],
        )?;
        Ok(())
    }

    /// 读取库存低水位系数（缺省 1.2；非法值回退默认并告警）
    pub fn low_stock_factor(&self) -> Result<f64, Box<dyn Error>> {
        let raw = self.get_config_or_default(
            config_keys::INVENTORY_LOW_STOCK_FACTOR,
            &DEFAULT_LOW_STOCK_FACTOR.to_string(),
        )?;

        match raw.parse::<f64>() {
            Ok(v) if v.is_finite() && v >= 1.0 => Ok(v),
            _ => {
                tracing::warn!(
                    key = config_keys::INVENTORY_LOW_STOCK_FACTOR,
                    value = %raw,
                    "配置值非法，回退默认值"
                );
                Ok(DEFAULT_LOW_STOCK_FACTOR)
            }
        }
    }

    /// 读取最近操作日志条数（缺省 20）
    pub fn action_log_recent_limit(&self) -> Result<i64, Box<dyn Error>> {
        let raw = self.get_config_or_default(
            config_keys::ACTION_LOG_RECENT_LIMIT,
            &DEFAULT_ACTION_LOG_RECENT_LIMIT.to_string(),
        )?;

        match raw.parse::<i64>() {
            Ok(v) if v > 0 => Ok(v),
            _ => {
                tracing::warn!(
                    key = config_keys::ACTION_LOG_RECENT_LIMIT,
                    value = %raw,
                    "配置值非法，回退默认值"
                );
                Ok(DEFAULT_ACTION_LOG_RECENT_LIMIT)
            }
        }
    }

    /// 获取所有配置的快照（JSON格式）
    ///
    /// # 用途
    /// - 审计/问题排查时记录当前配置全集
    pub fn get_config_snapshot(&self) -> Result<String, Box<dyn Error>> {
        let conn = self.conn.lock().map_err(|e| format!("锁获取失败: {}", e))?;

        let mut stmt = conn.prepare(
            "SELECT key, value FROM config_kv WHERE scope_id = 'global' ORDER BY key",
        )?;

        let mut config_map: HashMap<String, String> = HashMap::new();
        let rows = stmt.query_map([], |row| {
            Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?))
        })?;
        for row in rows {
            let (key, value) = row?;
            config_map.insert(key, value);
        }

        Ok(serde_json::to_string(&config_map)?)
    }
}
