// ==========================================
// 酒店客房管理系统 - 种子库生成工具
// ==========================================
// 用途: 重置默认路径数据库并写入演示数据
// 使用: cargo run --bin seed_demo_db
// ==========================================

use hotel_housekeeping::app::{get_default_db_path, seed_demo_data, AppState};
use hotel_housekeeping::logging;

fn main() {
    logging::init();

    let db_path = get_default_db_path();
    tracing::info!("种子库路径: {}", db_path);

    // 重置旧库（不存在则忽略）
    match std::fs::remove_file(&db_path) {
        Ok(()) => tracing::info!("已删除旧数据库"),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
        Err(e) => {
            tracing::error!("旧数据库删除失败: {}", e);
            std::process::exit(1);
        }
    }

    let state = AppState::new(db_path.clone()).expect("无法初始化AppState");
    seed_demo_data(&state).expect("演示数据初始化失败");

    let rooms = state.room_api.list_rooms().expect("客房查询失败");
    let staff = state.staff_api.list_staff().expect("员工查询失败");
    println!("种子库生成完成: {}", db_path);
    println!("  客房 {} 间 / 员工 {} 名", rooms.len(), staff.len());
}
