// ==========================================
// 仓储层集成测试
// ==========================================
// 职责: 验证各仓储的 CRUD 语义与状态联动（真实 SQLite 文件库）
// ==========================================

use chrono::{TimeZone, Utc};
use tempfile::NamedTempFile;

use hotel_housekeeping::db;
use hotel_housekeeping::domain::action_log::{ActionLog, ActionType};
use hotel_housekeeping::domain::guest_request::GuestRequest;
use hotel_housekeeping::domain::inventory::InventoryItem;
use hotel_housekeeping::domain::room::Room;
use hotel_housekeeping::domain::staff::Staff;
use hotel_housekeeping::domain::types::{
    AssignmentStatus, Priority, RequestStatus, RoomStatus, ShiftLabel,
};
use hotel_housekeeping::repository::error::RepositoryError;
use hotel_housekeeping::repository::{
    ActionLogRepository, AssignmentRepository, GuestRequestRepository, InventoryRepository,
    RoomRepository, StaffRepository,
};

// ==========================================
// 测试辅助
// ==========================================

/// 创建临时测试数据库并初始化 schema
///
/// # 返回
/// - NamedTempFile: 临时数据库文件（需要保持存活）
/// - String: 数据库文件路径
fn create_test_db() -> (NamedTempFile, String) {
    let temp_file = NamedTempFile::new().unwrap();
    let db_path = temp_file.path().to_str().unwrap().to_string();

    let conn = db::open_sqlite_connection(&db_path).unwrap();
    db::create_tables(&conn).unwrap();

    (temp_file, db_path)
}

fn sample_room(number: &str, status: RoomStatus) -> Room {
    let mut room = Room::new(number, "Single", 1, 2, 100.0, Utc::now());
    room.status = status;
    room
}

fn insert_staff(repo: &StaffRepository, name: &str, shift: ShiftLabel, rating: f64) -> i64 {
    repo.insert(&Staff::new(name, "Housekeeper", shift, rating))
        .unwrap()
}

// ==========================================
// 客房仓储
// ==========================================

#[test]
fn test_room_insert_and_find() {
    let (_guard, db_path) = create_test_db();
    let repo = RoomRepository::new(&db_path).unwrap();

    repo.insert(&sample_room("101", RoomStatus::VacantClean))
        .unwrap();

    let found = repo.find_by_number("101").unwrap().unwrap();
    assert_eq!(found.room_number, "101");
    assert_eq!(found.status, RoomStatus::VacantClean);
    assert_eq!(found.maintenance_status, "GOOD");
    assert!(found.last_cleaned.is_some());

    assert!(repo.find_by_number("999").unwrap().is_none());
}

#[test]
fn test_room_duplicate_number_rejected() {
    let (_guard, db_path) = create_test_db();
    let repo = RoomRepository::new(&db_path).unwrap();

    repo.insert(&sample_room("101", RoomStatus::VacantClean))
        .unwrap();
    let err = repo
        .insert(&sample_room("101", RoomStatus::VacantDirty))
        .unwrap_err();
    assert!(matches!(
        err,
        RepositoryError::UniqueConstraintViolation(_) | RepositoryError::DatabaseQueryError(_)
    ));
}

#[test]
fn test_update_status_to_dirty_keeps_last_cleaned() {
    let (_guard, db_path) = create_test_db();
    let repo = RoomRepository::new(&db_path).unwrap();

    repo.insert(&sample_room("101", RoomStatus::VacantClean))
        .unwrap();
    let before = repo.find_by_number("101").unwrap().unwrap();

    let later = Utc.with_ymd_and_hms(2030, 1, 1, 12, 0, 0).unwrap();
    repo.update_status("101", RoomStatus::OccupiedDirty, later)
        .unwrap();

    let after = repo.find_by_number("101").unwrap().unwrap();
    assert_eq!(after.status, RoomStatus::OccupiedDirty);
    // 非清扫完成状态不刷新 last_cleaned
    assert_eq!(after.last_cleaned, before.last_cleaned);
}

#[test]
fn test_update_status_to_clean_refreshes_last_cleaned() {
    let (_guard, db_path) = create_test_db();
    let repo = RoomRepository::new(&db_path).unwrap();

    repo.insert(&sample_room("101", RoomStatus::OccupiedDirty))
        .unwrap();

    let cleaned_at = Utc.with_ymd_and_hms(2030, 1, 1, 12, 0, 0).unwrap();
    repo.update_status("101", RoomStatus::OccupiedClean, cleaned_at)
        .unwrap();

    let after = repo.find_by_number("101").unwrap().unwrap();
    assert_eq!(after.status, RoomStatus::OccupiedClean);
    assert_eq!(after.last_cleaned, Some(cleaned_at));
}

#[test]
fn test_update_status_missing_room_is_not_found() {
    let (_guard, db_path) = create_test_db();
    let repo = RoomRepository::new(&db_path).unwrap();

    let err = repo
        .update_status("404", RoomStatus::VacantClean, Utc::now())
        .unwrap_err();
    assert!(matches!(err, RepositoryError::NotFound { .. }));
}

#[test]
fn test_list_by_status_filters_and_orders_by_room_number() {
    let (_guard, db_path) = create_test_db();
    let repo = RoomRepository::new(&db_path).unwrap();

    repo.insert(&sample_room("103", RoomStatus::DueOut)).unwrap();
    repo.insert(&sample_room("101", RoomStatus::VacantDirty))
        .unwrap();
    repo.insert(&sample_room("102", RoomStatus::VacantClean))
        .unwrap();
    repo.insert(&sample_room("104", RoomStatus::OccupiedDirty))
        .unwrap();

    let dirty = repo.list_dirty().unwrap();
    let numbers: Vec<&str> = dirty.iter().map(|r| r.room_number.as_str()).collect();
    assert_eq!(numbers, vec!["101", "103", "104"]);
    assert!(dirty.iter().all(|r| r.status.is_dirty()));

    // 空状态集合返回空列表
    assert!(repo.list_by_status(&[]).unwrap().is_empty());
}

#[test]
fn test_status_counts() {
    let (_guard, db_path) = create_test_db();
    let repo = RoomRepository::new(&db_path).unwrap();

    repo.insert(&sample_room("101", RoomStatus::VacantClean))
        .unwrap();
    repo.insert(&sample_room("102", RoomStatus::VacantClean))
        .unwrap();
    repo.insert(&sample_room("103", RoomStatus::DueOut)).unwrap();

    let counts = repo.status_counts().unwrap();
    let total: i64 = counts.iter().map(|(_, c)| c).sum();
    assert_eq!(total, 3);
    assert!(counts.contains(&(RoomStatus::VacantClean, 2)));
    assert!(counts.contains(&(RoomStatus::DueOut, 1)));
}

// ==========================================
// 员工仓储
// ==========================================

#[test]
fn test_staff_insert_assigns_id() {
    let (_guard, db_path) = create_test_db();
    let repo = StaffRepository::new(&db_path).unwrap();

    let id1 = insert_staff(&repo, "John Doe", ShiftLabel::Morning, 4.5);
    let id2 = insert_staff(&repo, "Jane Smith", ShiftLabel::Morning, 4.8);
    assert!(id2 > id1);

    let found = repo.find_by_id(id1).unwrap().unwrap();
    assert_eq!(found.name, "John Doe");
    assert_eq!(found.shift, ShiftLabel::Morning);
    assert_eq!(found.rooms_cleaned_today, 0);
    assert!(found.available);
}

#[test]
fn test_record_performance_increments_daily_counter() {
    let (_guard, db_path) = create_test_db();
    let repo = StaffRepository::new(&db_path).unwrap();

    let id = insert_staff(&repo, "John Doe", ShiftLabel::Morning, 4.5);

    repo.record_performance(id, 4.0).unwrap();
    repo.record_performance(id, 4.6).unwrap();

    let found = repo.find_by_id(id).unwrap().unwrap();
    // 评分为覆盖写入，今日清扫数逐次 +1
    assert!((found.performance_rating - 4.6).abs() < 1e-9);
    assert_eq!(found.rooms_cleaned_today, 2);

    // 不存在的员工报 NotFound
    let err = repo.record_performance(9999, 4.0).unwrap_err();
    assert!(matches!(err, RepositoryError::NotFound { .. }));
}

#[test]
fn test_list_available_filters_shift_and_availability() {
    let (_guard, db_path) = create_test_db();
    let repo = StaffRepository::new(&db_path).unwrap();

    let id1 = insert_staff(&repo, "John Doe", ShiftLabel::Morning, 4.5);
    let id2 = insert_staff(&repo, "Jane Smith", ShiftLabel::Morning, 4.8);
    let _id3 = insert_staff(&repo, "Mike Johnson", ShiftLabel::Evening, 4.2);

    // 请假员工不参与派工
    repo.set_available(id2, false).unwrap();

    let available = repo.list_available(ShiftLabel::Morning).unwrap();
    let ids: Vec<i64> = available.iter().map(|s| s.id).collect();
    assert_eq!(ids, vec![id1]);

    let evening = repo.list_available(ShiftLabel::Evening).unwrap();
    assert_eq!(evening.len(), 1);
    assert_eq!(evening[0].name, "Mike Johnson");
}

#[test]
fn test_reset_daily_counters() {
    let (_guard, db_path) = create_test_db();
    let repo = StaffRepository::new(&db_path).unwrap();

    let id1 = insert_staff(&repo, "John Doe", ShiftLabel::Morning, 4.5);
    let id2 = insert_staff(&repo, "Jane Smith", ShiftLabel::Evening, 4.8);
    repo.record_performance(id1, 4.5).unwrap();
    repo.record_performance(id2, 4.8).unwrap();

    let affected = repo.reset_daily_counters().unwrap();
    assert_eq!(affected, 2);
    assert_eq!(repo.find_by_id(id1).unwrap().unwrap().rooms_cleaned_today, 0);
    assert_eq!(repo.find_by_id(id2).unwrap().unwrap().rooms_cleaned_today, 0);
}

// ==========================================
// 清扫任务仓储
// ==========================================

#[test]
fn test_assignment_create_and_complete() {
    let (_guard, db_path) = create_test_db();
    let room_repo = RoomRepository::new(&db_path).unwrap();
    let staff_repo = StaffRepository::new(&db_path).unwrap();
    let assignment_repo = AssignmentRepository::new(&db_path).unwrap();

    room_repo
        .insert(&sample_room("101", RoomStatus::VacantDirty))
        .unwrap();
    let staff_id = insert_staff(&staff_repo, "John Doe", ShiftLabel::Morning, 4.5);

    let created_at = Utc.with_ymd_and_hms(2025, 6, 1, 9, 30, 0).unwrap();
    let id = assignment_repo
        .create("101", staff_id, Priority::High, created_at)
        .unwrap();

    let found = assignment_repo.find_by_id(id).unwrap().unwrap();
    assert_eq!(found.room_number, "101");
    assert_eq!(found.staff_id, staff_id);
    assert_eq!(found.priority, Priority::High);
    assert_eq!(found.status, AssignmentStatus::Pending);
    assert_eq!(found.assignment_date, created_at.date_naive());
    assert_eq!(found.cleaning_duration_min, 0);
    assert!(!found.quality_check_passed);
    assert!(found.end_time.is_none());

    let completed_at = Utc.with_ymd_and_hms(2025, 6, 1, 10, 5, 0).unwrap();
    assignment_repo
        .complete(id, completed_at, 35, true)
        .unwrap();

    let done = assignment_repo.find_by_id(id).unwrap().unwrap();
    assert_eq!(done.status, AssignmentStatus::Completed);
    assert_eq!(done.end_time, Some(completed_at));
    assert_eq!(done.cleaning_duration_min, 35);
    assert!(done.quality_check_passed);
}

#[test]
fn test_assignment_list_by_staff_and_date() {
    let (_guard, db_path) = create_test_db();
    let room_repo = RoomRepository::new(&db_path).unwrap();
    let staff_repo = StaffRepository::new(&db_path).unwrap();
    let assignment_repo = AssignmentRepository::new(&db_path).unwrap();

    room_repo
        .insert(&sample_room("101", RoomStatus::VacantDirty))
        .unwrap();
    room_repo
        .insert(&sample_room("102", RoomStatus::DueOut))
        .unwrap();
    let staff_id = insert_staff(&staff_repo, "John Doe", ShiftLabel::Morning, 4.5);

    let t1 = Utc.with_ymd_and_hms(2025, 6, 1, 9, 0, 0).unwrap();
    let t2 = Utc.with_ymd_and_hms(2025, 6, 2, 9, 0, 0).unwrap();
    assignment_repo
        .create("101", staff_id, Priority::Medium, t1)
        .unwrap();
    assignment_repo
        .create("102", staff_id, Priority::High, t2)
        .unwrap();

    let by_staff = assignment_repo.list_by_staff(staff_id).unwrap();
    assert_eq!(by_staff.len(), 2);
    assert_eq!(by_staff[0].room_number, "101"); // 时间升序

    let by_date = assignment_repo.list_by_date(t2.date_naive()).unwrap();
    assert_eq!(by_date.len(), 1);
    assert_eq!(by_date[0].room_number, "102");
}

// ==========================================
// 客人请求仓储
// ==========================================

#[test]
fn test_guest_request_lifecycle() {
    let (_guard, db_path) = create_test_db();
    let room_repo = RoomRepository::new(&db_path).unwrap();
    let staff_repo = StaffRepository::new(&db_path).unwrap();
    let request_repo = GuestRequestRepository::new(&db_path).unwrap();

    room_repo
        .insert(&sample_room("101", RoomStatus::OccupiedClean))
        .unwrap();
    let staff_id = insert_staff(&staff_repo, "John Doe", ShiftLabel::Morning, 4.5);

    let request = GuestRequest {
        id: 0,
        room_number: "101".to_string(),
        assigned_staff_id: None,
        request_type: "Towels".to_string(),
        notes: Some("额外两条".to_string()),
        status: RequestStatus::Pending,
        priority: Priority::Low,
        request_time: Utc::now(),
        completion_time: None,
    };
    let id = request_repo.create(&request).unwrap();

    let pending = request_repo.list_by_status(RequestStatus::Pending).unwrap();
    assert_eq!(pending.len(), 1);
    assert_eq!(pending[0].priority, Priority::Low);

    request_repo.assign_staff(id, staff_id).unwrap();
    let in_progress = request_repo.find_by_id(id).unwrap().unwrap();
    assert_eq!(in_progress.status, RequestStatus::InProgress);
    assert_eq!(in_progress.assigned_staff_id, Some(staff_id));

    let completed_at = Utc.with_ymd_and_hms(2025, 6, 1, 11, 0, 0).unwrap();
    request_repo.complete(id, completed_at).unwrap();
    let done = request_repo.find_by_id(id).unwrap().unwrap();
    assert_eq!(done.status, RequestStatus::Completed);
    assert_eq!(done.completion_time, Some(completed_at));

    // 已完成后不再出现在待处理列表
    assert!(request_repo
        .list_by_status(RequestStatus::Pending)
        .unwrap()
        .is_empty());
}

// ==========================================
// 物资库存仓储
// ==========================================

#[test]
fn test_inventory_insert_and_restock() {
    let (_guard, db_path) = create_test_db();
    let repo = InventoryRepository::new(&db_path).unwrap();

    let item = InventoryItem {
        id: 0,
        item_name: "Towels".to_string(),
        category: Some("Linens".to_string()),
        supplier: Some("LinenCo".to_string()),
        quantity: 100,
        reorder_level: 50,
        minimum_order_quantity: 50,
        last_restocked: None,
        unit_cost: 5.99,
    };
    let id = repo.insert(&item).unwrap();

    let restocked_on = chrono::NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
    repo.restock(id, 40, restocked_on).unwrap();

    let found = repo.find_by_id(id).unwrap().unwrap();
    assert_eq!(found.quantity, 140);
    assert_eq!(found.last_restocked, Some(restocked_on));

    // 非正数补货量被拒绝
    let err = repo.restock(id, 0, restocked_on).unwrap_err();
    assert!(matches!(err, RepositoryError::ValidationError(_)));

    // 不存在的物资报 NotFound
    let err = repo.restock(9999, 10, restocked_on).unwrap_err();
    assert!(matches!(err, RepositoryError::NotFound { .. }));
}

// ==========================================
// 操作日志仓储
// ==========================================

#[test]
fn test_action_log_record_and_list_recent() {
    let (_guard, db_path) = create_test_db();
    let repo = ActionLogRepository::new(&db_path).unwrap();

    let t1 = Utc.with_ymd_and_hms(2025, 6, 1, 8, 0, 0).unwrap();
    let t2 = Utc.with_ymd_and_hms(2025, 6, 1, 9, 0, 0).unwrap();

    repo.record(
        &ActionLog::new(ActionType::RoomStatusUpdate, "system", t1)
            .with_detail("客房 101 状态变更")
            .with_payload(serde_json::json!({ "room_number": "101" })),
    )
    .unwrap();
    repo.record(&ActionLog::new(ActionType::AssignmentCreate, "system", t2))
        .unwrap();

    let recent = repo.list_recent(10).unwrap();
    assert_eq!(recent.len(), 2);
    // 时间倒序
    assert_eq!(recent[0].action_type, ActionType::AssignmentCreate);
    assert_eq!(recent[1].action_type, ActionType::RoomStatusUpdate);
    // payload round-trip
    assert_eq!(
        recent[1].payload_json.as_ref().unwrap()["room_number"],
        "101"
    );

    let limited = repo.list_recent(1).unwrap();
    assert_eq!(limited.len(), 1);
}
