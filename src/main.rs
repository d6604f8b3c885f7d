// ==========================================
// 酒店客房管理系统 - 终端演示入口
// ==========================================
// 技术栈: Rust + SQLite
// 流程: 内存库 → 演示数据 → 三张报表 → 智能派工
// ==========================================

use chrono::Local;
use hotel_housekeeping::app::{seed_demo_data, AppState};
use hotel_housekeeping::logging;

fn main() {
    // 初始化日志系统
    logging::init();

    tracing::info!("==================================================");
    tracing::info!("{} - 清扫调度与决策支持", hotel_housekeeping::APP_NAME);
    tracing::info!("系统版本: {}", hotel_housekeeping::VERSION);
    tracing::info!("==================================================");

    // 内存库演示（schema 与生产路径一致）
    let state = AppState::new(":memory:".to_string()).expect("无法初始化AppState");

    tracing::info!("正在写入演示数据...");
    seed_demo_data(&state).expect("演示数据初始化失败");

    // ==========================================
    // 报表
    // ==========================================

    println!();
    println!("客房状态分布:");
    let distribution = state
        .dashboard_api
        .room_status_distribution()
        .expect("客房状态分布查询失败");
    if distribution.is_empty() {
        println!("  (无客房数据)");
    }
    for slice in &distribution {
        println!(
            "  {:<16} {:>4} 间  {:>5.1}%",
            slice.status.to_db_str(),
            slice.count,
            slice.percent
        );
    }

    println!();
    println!("员工绩效报表:");
    let performance = state
        .dashboard_api
        .staff_performance_report()
        .expect("员工绩效报表查询失败");
    println!(
        "  {:<16} {:<14} {:>6} {:>10} {:>10} {:>12}",
        "姓名", "岗位", "绩效", "今日清扫", "累计任务", "平均耗时(分)"
    );
    for row in &performance {
        println!(
            "  {:<16} {:<14} {:>6.1} {:>10} {:>10} {:>12}",
            row.name,
            row.position,
            row.performance_rating,
            row.rooms_cleaned_today,
            row.total_assignments,
            row.avg_cleaning_minutes
                .map(|v| format!("{:.1}", v))
                .unwrap_or_else(|| "-".to_string()),
        );
    }

    println!();
    println!("库存报表:");
    let inventory = state
        .dashboard_api
        .inventory_report()
        .expect("库存报表查询失败");
    println!(
        "  {:<20} {:>6} {:>8} {:>8}  {:<16}",
        "物资", "库存", "补货线", "单价", "水位"
    );
    for row in &inventory {
        println!(
            "  {:<20} {:>6} {:>8} {:>8.2}  {:<16}",
            row.item_name,
            row.quantity,
            row.reorder_level,
            row.unit_cost,
            row.stock_status.to_db_str(),
        );
    }

    // ==========================================
    // 智能派工
    // ==========================================

    println!();
    println!("智能派工:");
    let decisions = state
        .assignment_api
        .run_smart_assignment(Local::now())
        .expect("智能派工失败");

    if decisions.is_empty() {
        println!("  本轮无派工（无待清扫客房或当班无可用员工）");
    }
    for decision in &decisions {
        println!(
            "  客房 {} -> 员工 {}（优先级 {}）",
            decision.room_number,
            decision.staff_id,
            decision.priority.to_db_str(),
        );
    }

    tracing::info!("演示流程结束");
}
