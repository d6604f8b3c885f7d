// ==========================================
// 酒店客房管理系统 - 演示数据初始化
// ==========================================
// 用途: 终端演示与种子库生成（seed_demo_db）共用
// ==========================================

use chrono::{NaiveDate, Utc};
use serde_json::json;

use crate::api::error::ApiResult;
use crate::api::{AddInventoryItemRequest, AddRoomRequest, AddStaffRequest};
use crate::app::state::AppState;
use crate::domain::action_log::{ActionLog, ActionType};
use crate::domain::types::{RoomStatus, ShiftLabel};

/// 写入一套演示数据
///
/// 内容:
/// - 客房 101/102/201（登记后将 101 置为住客待清扫、102 置为预定退房）
/// - 早班员工 2 名、晚班员工 1 名
/// - 物资 3 项（毛巾/洗漱用品/清洁剂）
pub fn seed_demo_data(state: &AppState) -> ApiResult<()> {
    // ===== 客房 =====
    state.room_api.add_room(AddRoomRequest {
        room_number: "101".to_string(),
        room_type: "Single".to_string(),
        floor: 1,
        max_occupancy: 2,
        rate: 100.0,
    })?;
    state.room_api.add_room(AddRoomRequest {
        room_number: "102".to_string(),
        room_type: "Double".to_string(),
        floor: 1,
        max_occupancy: 4,
        rate: 150.0,
    })?;
    state.room_api.add_room(AddRoomRequest {
        room_number: "201".to_string(),
        room_type: "Suite".to_string(),
        floor: 2,
        max_occupancy: 4,
        rate: 250.0,
    })?;

    // ===== 员工 =====
    state.staff_api.add_staff(AddStaffRequest {
        name: "John Doe".to_string(),
        position: "Housekeeper".to_string(),
        shift: ShiftLabel::Morning,
        contact: Some("555-0101".to_string()),
        hiring_date: NaiveDate::from_ymd_opt(2023, 1, 1),
        performance_rating: 4.5,
    })?;
    state.staff_api.add_staff(AddStaffRequest {
        name: "Jane Smith".to_string(),
        position: "Supervisor".to_string(),
        shift: ShiftLabel::Morning,
        contact: Some("555-0102".to_string()),
        hiring_date: NaiveDate::from_ymd_opt(2023, 2, 1),
        performance_rating: 4.8,
    })?;
    state.staff_api.add_staff(AddStaffRequest {
        name: "Mike Johnson".to_string(),
        position: "Housekeeper".to_string(),
        shift: ShiftLabel::Evening,
        contact: Some("555-0103".to_string()),
        hiring_date: NaiveDate::from_ymd_opt(2023, 3, 1),
        performance_rating: 4.2,
    })?;

    // ===== 物资 =====
    state.inventory_api.add_item(AddInventoryItemRequest {
        item_name: "Towels".to_string(),
        quantity: 100,
        reorder_level: 50,
        unit_cost: 5.99,
        supplier: Some("LinenCo".to_string()),
        category: Some("Linens".to_string()),
        minimum_order_quantity: 50,
    })?;
    state.inventory_api.add_item(AddInventoryItemRequest {
        item_name: "Toiletries".to_string(),
        quantity: 200,
        reorder_level: 100,
        unit_cost: 2.99,
        supplier: Some("SupplyCo".to_string()),
        category: Some("Amenities".to_string()),
        minimum_order_quantity: 100,
    })?;
    state.inventory_api.add_item(AddInventoryItemRequest {
        item_name: "Cleaning Solution".to_string(),
        quantity: 50,
        reorder_level: 30,
        unit_cost: 8.99,
        supplier: Some("CleanCo".to_string()),
        category: Some("Cleaning".to_string()),
        minimum_order_quantity: 20,
    })?;

    // ===== 状态演变 =====
    state
        .room_api
        .update_room_status("101", RoomStatus::OccupiedDirty)?;
    state.room_api.update_room_status("102", RoomStatus::DueOut)?;

    // 审计标记: 本库为演示数据
    state.action_log_repo.record(
        &ActionLog::new(ActionType::Seed, "system", Utc::now())
            .with_detail("演示数据初始化完成".to_string())
            .with_payload(json!({ "rooms": 3, "staff": 3, "inventory": 3 })),
    )?;

    Ok(())
}
