// ==========================================
// 酒店客房管理系统 - SQLite 连接初始化
// ==========================================
// 目标:
// - 统一所有 Connection::open 的 PRAGMA 行为，避免"部分模块外键开启/部分不开启"
// - 统一 busy_timeout，减少偶发 busy 错误
// - 集中建表语句（create_tables），保证各入口 schema 一致
// ==========================================

use rusqlite::Connection;
use rusqlite::OptionalExtension;
use std::time::Duration;

/// 默认 busy_timeout（毫秒）
pub const DEFAULT_BUSY_TIMEOUT_MS: u64 = 5_000;

/// 当前代码所期望的 schema_version
///
/// 说明：
/// - 版本号用于提示/告警（不做自动迁移），避免静默在旧库上运行导致隐性错误
pub const CURRENT_SCHEMA_VERSION: i64 = 1;

/// 配置 SQLite 连接的统一 PRAGMA
///
/// 说明：
/// - foreign_keys 需要"每个连接"单独开启
/// - busy_timeout 需要"每个连接"单独配置
pub fn configure_sqlite_connection(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch("PRAGMA foreign_keys = ON;")?;
    conn.busy_timeout(Duration::from_millis(DEFAULT_BUSY_TIMEOUT_MS))?;
    Ok(())
}

/// 打开 SQLite 连接并应用统一配置
pub fn open_sqlite_connection(db_path: &str) -> rusqlite::Result<Connection> {
    let conn = Connection::open(db_path)?;
    configure_sqlite_connection(&conn)?;
    Ok(conn)
}

/// 读取 schema_version（若表不存在则返回 None）
pub fn read_schema_version(conn: &Connection) -> rusqlite::Result<Option<i64>> {
    let has_table: bool = conn
        .query_row(
            "SELECT 1 FROM sqlite_master WHERE type='table' AND name='schema_version' LIMIT 1",
            [],
            |_row| Ok(true),
        )
        .optional()?
        .unwrap_or(false);

    if !has_table {
        return Ok(None);
    }

    let v: Option<i64> = conn.query_row("SELECT MAX(version) FROM schema_version", [], |row| row.get(0))?;
    Ok(v)
}

/// 初始化数据库 schema（幂等）
///
/// 包含表:
/// - rooms / staff / assignments / inventory / guest_requests（业务表）
/// - action_log（审计表）
/// - config_scope / config_kv（配置表）
/// - schema_version（版本标记）
pub fn create_tables(conn: &Connection) -> rusqlite::Result<()> {
    // schema_version 表
    conn.execute(
        r#"
        CREATE TABLE IF NOT EXISTS schema_version (
            version INTEGER PRIMARY KEY,
            applied_at TEXT NOT NULL DEFAULT (datetime('now'))
        )
        "#,
        [],
    )?;

    // 客房表
    conn.execute(
        r#"
        CREATE TABLE IF NOT EXISTS rooms (
            room_number TEXT PRIMARY KEY,
            room_type TEXT NOT NULL,
            status TEXT NOT NULL,
            last_cleaned TEXT,
            floor INTEGER NOT NULL,
            max_occupancy INTEGER NOT NULL,
            rate REAL NOT NULL,
            notes TEXT,
            maintenance_status TEXT NOT NULL DEFAULT 'GOOD'
        )
        "#,
        [],
    )?;

    // 员工表
    conn.execute(
        r#"
        CREATE TABLE IF NOT EXISTS staff (
            id INTEGER PRIMARY KEY,
            name TEXT NOT NULL,
            position TEXT NOT NULL,
            shift TEXT NOT NULL,
            contact TEXT,
            hiring_date TEXT,
            performance_rating REAL NOT NULL DEFAULT 0,
            rooms_cleaned_today INTEGER NOT NULL DEFAULT 0,
            available INTEGER NOT NULL DEFAULT 1
        )
        "#,
        [],
    )?;

    // 清扫任务表
    conn.execute(
        r#"
        CREATE TABLE IF NOT EXISTS assignments (
            id INTEGER PRIMARY KEY,
            room_number TEXT NOT NULL,
            staff_id INTEGER NOT NULL,
            assignment_date TEXT NOT NULL,
            start_time TEXT NOT NULL,
            end_time TEXT,
            status TEXT NOT NULL,
            priority TEXT NOT NULL,
            cleaning_duration_min INTEGER NOT NULL DEFAULT 0,
            quality_check_passed INTEGER NOT NULL DEFAULT 0,
            FOREIGN KEY (room_number) REFERENCES rooms (room_number),
            FOREIGN KEY (staff_id) REFERENCES staff (id)
        )
        "#,
        [],
    )?;

    // 物资库存表
    conn.execute(
        r#"
        CREATE TABLE IF NOT EXISTS inventory (
            id INTEGER PRIMARY KEY,
            item_name TEXT NOT NULL,
            quantity INTEGER NOT NULL,
            reorder_level INTEGER NOT NULL,
            last_restocked TEXT,
            unit_cost REAL NOT NULL,
            supplier TEXT,
            category TEXT,
            minimum_order_quantity INTEGER NOT NULL DEFAULT 0
        )
        "#,
        [],
    )?;

    // 客人请求表
    conn.execute(
        r#"
        CREATE TABLE IF NOT EXISTS guest_requests (
            id INTEGER PRIMARY KEY,
            room_number TEXT NOT NULL,
            request_type TEXT NOT NULL,
            request_time TEXT NOT NULL,
            status TEXT NOT NULL,
            priority TEXT NOT NULL,
            notes TEXT,
            assigned_staff_id INTEGER,
            completion_time TEXT,
            FOREIGN KEY (room_number) REFERENCES rooms (room_number),
            FOREIGN KEY (assigned_staff_id) REFERENCES staff (id)
        )
        "#,
        [],
    )?;

    // 操作日志表
    conn.execute(
        r#"
        CREATE TABLE IF NOT EXISTS action_log (
            action_id TEXT PRIMARY KEY,
            action_type TEXT NOT NULL,
            action_ts TEXT NOT NULL,
            actor TEXT NOT NULL,
            detail TEXT,
            payload_json TEXT
        )
        "#,
        [],
    )?;

    // config_scope 表
    conn.execute(
        r#"
        CREATE TABLE IF NOT EXISTS config_scope (
            scope_id TEXT PRIMARY KEY,
            scope_type TEXT NOT NULL,
            scope_key TEXT NOT NULL,
            created_at TEXT NOT NULL DEFAULT (datetime('now')),
            UNIQUE(scope_type, scope_key)
        )
        "#,
        [],
    )?;

    // 插入 global scope
    conn.execute(
        r#"
        INSERT OR IGNORE INTO config_scope (scope_id, scope_type, scope_key)
        VALUES ('global', 'GLOBAL', 'global')
        "#,
        [],
    )?;

    // config_kv 表
    conn.execute(
        r#"
        CREATE TABLE IF NOT EXISTS config_kv (
            scope_id TEXT NOT NULL REFERENCES config_scope(scope_id) ON DELETE CASCADE,
            key TEXT NOT NULL,
            value TEXT NOT NULL,
            updated_at TEXT NOT NULL DEFAULT (datetime('now')),
            PRIMARY KEY (scope_id, key)
        )
        "#,
        [],
    )?;

    // 标记 schema 版本
    conn.execute(
        "INSERT OR IGNORE INTO schema_version (version) VALUES (?1)",
        [CURRENT_SCHEMA_VERSION],
    )?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_tables_idempotent() {
        let conn = Connection::open_in_memory().unwrap();
        configure_sqlite_connection(&conn).unwrap();
        create_tables(&conn).unwrap();
        // 重复执行不报错
        create_tables(&conn).unwrap();

        let version = read_schema_version(&conn).unwrap();
        assert_eq!(version, Some(CURRENT_SCHEMA_VERSION));
    }
}
