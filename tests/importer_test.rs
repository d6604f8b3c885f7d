// ==========================================
// 名册导入集成测试
// ==========================================
// 职责: 验证 CSV 解析、行级错误收集与落库结果
// ==========================================

use std::path::PathBuf;

use tempfile::{tempdir, NamedTempFile, TempDir};

use hotel_housekeeping::app::AppState;
use hotel_housekeeping::domain::types::{RoomStatus, ShiftLabel};
use hotel_housekeeping::importer::ImportError;

// ==========================================
// 测试辅助
// ==========================================

fn create_test_state() -> (NamedTempFile, AppState) {
    let temp_file = NamedTempFile::new().unwrap();
    let db_path = temp_file.path().to_str().unwrap().to_string();
    let state = AppState::new(db_path).unwrap();
    (temp_file, state)
}

/// 在临时目录写入一个 CSV 文件
fn write_csv(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, content).unwrap();
    path
}

// ==========================================
// 客房清单导入
// ==========================================

#[test]
fn test_import_rooms_with_bad_rows_collected() {
    let (_guard, state) = create_test_state();
    let dir = tempdir().unwrap();

    // 第 4 行缺 rate，第 5 行状态非法 → 均跳过并收集错误
    let path = write_csv(
        &dir,
        "rooms.csv",
        "room_number,room_type,floor,max_occupancy,rate,status\n\
         101,Single,1,2,100.0,\n\
         102,Double,1,4,150.0,DUE_OUT\n\
         103,Suite,2,4,\n\
         104,Single,1,2,90.0,SPARKLING\n",
    );

    let summary = state.roster_importer.import_rooms(&path).unwrap();
    assert_eq!(summary.total_rows, 4);
    assert_eq!(summary.imported, 2);
    assert_eq!(summary.skipped, 2);
    assert_eq!(summary.errors.len(), 2);

    let rooms = state.room_api.list_rooms().unwrap();
    assert_eq!(rooms.len(), 2);
    // 缺省状态为 VACANT_CLEAN，显式列生效
    assert_eq!(rooms[0].room_number, "101");
    assert_eq!(rooms[0].status, RoomStatus::VacantClean);
    assert_eq!(rooms[1].room_number, "102");
    assert_eq!(rooms[1].status, RoomStatus::DueOut);
}

#[test]
fn test_import_rooms_duplicate_room_number_is_row_error() {
    let (_guard, state) = create_test_state();
    let dir = tempdir().unwrap();

    let path = write_csv(
        &dir,
        "rooms.csv",
        "room_number,room_type,floor,max_occupancy,rate\n\
         101,Single,1,2,100.0\n\
         101,Single,1,2,100.0\n",
    );

    let summary = state.roster_importer.import_rooms(&path).unwrap();
    assert_eq!(summary.imported, 1);
    assert_eq!(summary.skipped, 1);
    assert_eq!(state.room_api.list_rooms().unwrap().len(), 1);
}

// ==========================================
// 员工名册导入
// ==========================================

#[test]
fn test_import_staff_roster() {
    let (_guard, state) = create_test_state();
    let dir = tempdir().unwrap();

    let path = write_csv(
        &dir,
        "staff.csv",
        "name,position,shift,performance_rating,contact,hiring_date\n\
         John Doe,Housekeeper,MORNING,4.5,555-0101,2023-01-01\n\
         Jane Smith,Supervisor,MORNING,4.8,,\n\
         Mike Johnson,Housekeeper,GRAVEYARD,4.2,,\n",
    );

    let summary = state.roster_importer.import_staff(&path).unwrap();
    assert_eq!(summary.imported, 2);
    assert_eq!(summary.skipped, 1);
    assert!(summary.errors[0].contains("shift"));

    let staff = state.staff_api.list_staff().unwrap();
    assert_eq!(staff.len(), 2);
    assert_eq!(staff[0].name, "John Doe");
    assert_eq!(staff[0].shift, ShiftLabel::Morning);
    assert_eq!(
        staff[0].hiring_date,
        chrono::NaiveDate::from_ymd_opt(2023, 1, 1)
    );
    // 空白可选列为 None
    assert!(staff[1].contact.is_none());
    assert!(staff[1].hiring_date.is_none());
}

// ==========================================
// 文件级错误
// ==========================================

#[test]
fn test_import_missing_file_fails() {
    let (_guard, state) = create_test_state();
    let dir = tempdir().unwrap();

    let path = dir.path().join("nope.csv");
    let err = state.roster_importer.import_rooms(&path).unwrap_err();
    assert!(matches!(err, ImportError::FileNotFound(_)));
}

#[test]
fn test_import_unsupported_extension_fails() {
    let (_guard, state) = create_test_state();
    let dir = tempdir().unwrap();

    let path = write_csv(&dir, "rooms.xlsx", "room_number\n101\n");
    let err = state.roster_importer.import_rooms(&path).unwrap_err();
    assert!(matches!(err, ImportError::UnsupportedFormat(_)));
}
