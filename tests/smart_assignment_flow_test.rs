// ==========================================
// 智能派工端到端测试
// ==========================================
// 职责: 经 AppState 完整走一轮派工（班次判定 → 候选快照 → 匹配 → 落库）
// ==========================================

use chrono::{Local, TimeZone};
use tempfile::NamedTempFile;

use hotel_housekeeping::api::{AddRoomRequest, AddStaffRequest};
use hotel_housekeeping::app::AppState;
use hotel_housekeeping::domain::types::{Priority, RoomStatus, ShiftLabel};

// ==========================================
// 测试辅助
// ==========================================

/// 创建临时库上的 AppState
fn create_test_state() -> (NamedTempFile, AppState) {
    let temp_file = NamedTempFile::new().unwrap();
    let db_path = temp_file.path().to_str().unwrap().to_string();
    let state = AppState::new(db_path).unwrap();
    (temp_file, state)
}

fn add_room(state: &AppState, number: &str, status: RoomStatus) {
    state
        .room_api
        .add_room(AddRoomRequest {
            room_number: number.to_string(),
            room_type: "Single".to_string(),
            floor: 1,
            max_occupancy: 2,
            rate: 100.0,
        })
        .unwrap();
    if status != RoomStatus::VacantClean {
        state.room_api.update_room_status(number, status).unwrap();
    }
}

fn add_staff(state: &AppState, name: &str, shift: ShiftLabel, rating: f64) -> i64 {
    state
        .staff_api
        .add_staff(AddStaffRequest {
            name: name.to_string(),
            position: "Housekeeper".to_string(),
            shift,
            contact: None,
            hiring_date: None,
            performance_rating: rating,
        })
        .unwrap()
}

/// 早班时间点（10 点）
fn morning() -> chrono::DateTime<Local> {
    Local.with_ymd_and_hms(2025, 6, 1, 10, 0, 0).unwrap()
}

/// 夜班时间点（凌晨 3 点）
fn night() -> chrono::DateTime<Local> {
    Local.with_ymd_and_hms(2025, 6, 1, 3, 0, 0).unwrap()
}

// ==========================================
// 同分场景端到端
// ==========================================

#[test]
fn test_smart_assignment_tie_break_scenario() {
    let (_guard, state) = create_test_state();

    add_room(&state, "101", RoomStatus::OccupiedDirty);
    add_room(&state, "102", RoomStatus::DueOut);
    add_room(&state, "201", RoomStatus::VacantClean); // 干净房不参与派工

    let staff1 = add_staff(&state, "John Doe", ShiftLabel::Morning, 4.5);
    let staff2 = add_staff(&state, "Jane Smith", ShiftLabel::Morning, 4.8);
    // 员工2 今日已清扫 2 间（两次绩效记录各 +1）→ 两人评分同为 2.4
    state.staff_api.record_performance(staff2, 4.8).unwrap();
    state.staff_api.record_performance(staff2, 4.8).unwrap();

    let decisions = state.assignment_api.run_smart_assignment(morning()).unwrap();

    assert_eq!(decisions.len(), 2);
    assert_eq!(decisions[0].room_number, "101");
    assert_eq!(decisions[0].staff_id, staff1);
    assert_eq!(decisions[0].priority, Priority::Medium);
    assert_eq!(decisions[1].room_number, "102");
    assert_eq!(decisions[1].staff_id, staff2);
    assert_eq!(decisions[1].priority, Priority::High);

    // 任务已落库
    let tasks1 = state
        .assignment_api
        .list_assignments_by_staff(staff1)
        .unwrap();
    assert_eq!(tasks1.len(), 1);
    assert_eq!(tasks1[0].room_number, "101");

    // 派工不回写客房状态: 两间仍在待清扫列表
    let dirty = state.room_api.list_dirty_rooms().unwrap();
    let numbers: Vec<&str> = dirty.iter().map(|r| r.room_number.as_str()).collect();
    assert_eq!(numbers, vec!["101", "102"]);

    // 派工不触碰今日工作量计数（只有绩效记录会 +1）
    let s1 = state.staff_api.get_staff(staff1).unwrap();
    assert_eq!(s1.rooms_cleaned_today, 0);
}

// ==========================================
// 候选集为空
// ==========================================

#[test]
fn test_no_staff_on_shift_yields_empty_run() {
    let (_guard, state) = create_test_state();

    add_room(&state, "101", RoomStatus::VacantDirty);
    // 只有早班员工，却在夜班时点派工
    let staff1 = add_staff(&state, "John Doe", ShiftLabel::Morning, 4.5);

    let decisions = state.assignment_api.run_smart_assignment(night()).unwrap();
    assert!(decisions.is_empty());

    // 无任何任务落库
    let tasks = state
        .assignment_api
        .list_assignments_by_staff(staff1)
        .unwrap();
    assert!(tasks.is_empty());
}

#[test]
fn test_no_dirty_rooms_yields_empty_run() {
    let (_guard, state) = create_test_state();

    add_room(&state, "101", RoomStatus::VacantClean);
    let staff1 = add_staff(&state, "John Doe", ShiftLabel::Morning, 4.5);

    let decisions = state.assignment_api.run_smart_assignment(morning()).unwrap();
    assert!(decisions.is_empty());

    let tasks = state
        .assignment_api
        .list_assignments_by_staff(staff1)
        .unwrap();
    assert!(tasks.is_empty());
}

// ==========================================
// 员工不足
// ==========================================

#[test]
fn test_three_rooms_one_staff_assigns_exactly_one() {
    let (_guard, state) = create_test_state();

    add_room(&state, "101", RoomStatus::VacantDirty);
    add_room(&state, "102", RoomStatus::OccupiedDirty);
    add_room(&state, "103", RoomStatus::DueOut);
    let staff1 = add_staff(&state, "John Doe", ShiftLabel::Morning, 4.5);

    let decisions = state.assignment_api.run_smart_assignment(morning()).unwrap();

    // 仅派出一间，其余静默跳过
    assert_eq!(decisions.len(), 1);
    assert_eq!(decisions[0].room_number, "101");
    assert_eq!(decisions[0].staff_id, staff1);

    let tasks = state
        .assignment_api
        .list_assignments_by_staff(staff1)
        .unwrap();
    assert_eq!(tasks.len(), 1);
}

// ==========================================
// 派工后任务完成闭环
// ==========================================

#[test]
fn test_assignment_completion_after_run() {
    let (_guard, state) = create_test_state();

    add_room(&state, "101", RoomStatus::DueOut);
    let staff1 = add_staff(&state, "John Doe", ShiftLabel::Morning, 4.5);

    let decisions = state.assignment_api.run_smart_assignment(morning()).unwrap();
    assert_eq!(decisions.len(), 1);

    let tasks = state
        .assignment_api
        .list_assignments_by_staff(staff1)
        .unwrap();
    state
        .assignment_api
        .complete_assignment(tasks[0].id, 40, true)
        .unwrap();

    let done = state.assignment_api.get_assignment(tasks[0].id).unwrap();
    assert_eq!(done.cleaning_duration_min, 40);
    assert!(done.quality_check_passed);

    // 清扫完成后由客房部回写状态（引擎不代劳），last_cleaned 随之刷新
    state
        .room_api
        .update_room_status("101", RoomStatus::VacantClean)
        .unwrap();
    assert!(state.room_api.list_dirty_rooms().unwrap().is_empty());
}
