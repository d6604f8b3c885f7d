// ==========================================
// 酒店客房管理系统 - 名册导入器
// ==========================================
// 职责: 从 CSV 批量导入客房清单与员工名册
// 策略: 行级错误收集（坏行跳过不中断），文件级错误整体失败
// ==========================================

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use serde_json::json;
use tracing::{info, warn};

use crate::domain::action_log::{ActionLog, ActionType};
use crate::domain::room::Room;
use crate::domain::staff::Staff;
use crate::domain::types::{RoomStatus, ShiftLabel};
use crate::importer::csv_parser::CsvParser;
use crate::importer::error::ImportError;
use crate::repository::action_log_repo::ActionLogRepository;
use crate::repository::room_repo::RoomRepository;
use crate::repository::staff_repo::StaffRepository;

// ==========================================
// ImportSummary - 导入结果摘要
// ==========================================
#[derive(Debug, Clone, Default)]
pub struct ImportSummary {
    pub total_rows: usize,      // 文件内数据行数
    pub imported: usize,        // 成功导入行数
    pub skipped: usize,         // 跳过行数（含坏行）
    pub errors: Vec<String>,    // 行级错误描述
}

// ==========================================
// RosterImporter - 名册导入器
// ==========================================
pub struct RosterImporter {
    room_repo: Arc<RoomRepository>,
    staff_repo: Arc<StaffRepository>,
    action_log_repo: Arc<ActionLogRepository>,
    actor: String,
}

impl RosterImporter {
    /// 创建新的 RosterImporter 实例
    pub fn new(
        room_repo: Arc<RoomRepository>,
        staff_repo: Arc<StaffRepository>,
        action_log_repo: Arc<ActionLogRepository>,
        actor: impl Into<String>,
    ) -> Self {
        Self {
            room_repo,
            staff_repo,
            action_log_repo,
            actor: actor.into(),
        }
    }

    /// 导入客房清单
    ///
    /// 表头: room_number, room_type, floor, max_occupancy, rate [, status]
    /// status 缺省为 VACANT_CLEAN
    pub fn import_rooms(&self, file_path: &Path) -> Result<ImportSummary, ImportError> {
        let records = CsvParser::parse_to_raw_records(file_path)?;
        let mut summary = ImportSummary {
            total_rows: records.len(),
            ..Default::default()
        };

        for (idx, record) in records.iter().enumerate() {
            let row = idx + 2; // 首行为表头，数据行从第 2 行起
            match self.parse_room_row(row, record) {
                Ok(room) => match self.room_repo.insert(&room) {
                    Ok(()) => summary.imported += 1,
                    Err(e) => {
                        summary.skipped += 1;
                        summary.errors.push(format!("行 {}: {}", row, e));
                    }
                },
                Err(e) => {
                    summary.skipped += 1;
                    summary.errors.push(e.to_string());
                }
            }
        }

        for error in &summary.errors {
            warn!(file = %file_path.display(), "客房导入坏行: {}", error);
        }
        info!(
            file = %file_path.display(),
            imported = summary.imported,
            skipped = summary.skipped,
            "客房清单导入完成"
        );

        self.record_import_log("rooms", file_path, &summary)?;
        Ok(summary)
    }

    /// 导入员工名册
    ///
    /// 表头: name, position, shift, performance_rating [, contact, hiring_date]
    /// hiring_date 格式 YYYY-MM-DD
    pub fn import_staff(&self, file_path: &Path) -> Result<ImportSummary, ImportError> {
        let records = CsvParser::parse_to_raw_records(file_path)?;
        let mut summary = ImportSummary {
            total_rows: records.len(),
            ..Default::default()
        };

        for (idx, record) in records.iter().enumerate() {
            let row = idx + 2;
            match self.parse_staff_row(row, record) {
                Ok(staff) => match self.staff_repo.insert(&staff) {
                    Ok(_id) => summary.imported += 1,
                    Err(e) => {
                        summary.skipped += 1;
                        summary.errors.push(format!("行 {}: {}", row, e));
                    }
                },
                Err(e) => {
                    summary.skipped += 1;
                    summary.errors.push(e.to_string());
                }
            }
        }

        for error in &summary.errors {
            warn!(file = %file_path.display(), "员工导入坏行: {}", error);
        }
        info!(
            file = %file_path.display(),
            imported = summary.imported,
            skipped = summary.skipped,
            "员工名册导入完成"
        );

        self.record_import_log("staff", file_path, &summary)?;
        Ok(summary)
    }

    // ==========================================
    // 行解析
    // ==========================================

    fn parse_room_row(
        &self,
        row: usize,
        record: &HashMap<String, String>,
    ) -> Result<Room, ImportError> {
        let room_number = required_field(row, record, "room_number")?;
        let room_type = required_field(row, record, "room_type")?;
        let floor: i32 = parse_field(row, record, "floor")?;
        let max_occupancy: i32 = parse_field(row, record, "max_occupancy")?;
        let rate: f64 = parse_field(row, record, "rate")?;

        let mut room = Room::new(room_number, room_type, floor, max_occupancy, rate, Utc::now());

        // 可选状态列
        if let Some(raw) = optional_field(record, "status") {
            let status = RoomStatus::from_db_str(&raw).ok_or_else(|| {
                ImportError::TypeConversionError {
                    row,
                    field: "status".to_string(),
                    message: format!("未知客房状态: {}", raw),
                }
            })?;
            room.status = status;
        }

        Ok(room)
    }

    fn parse_staff_row(
        &self,
        row: usize,
        record: &HashMap<String, String>,
    ) -> Result<Staff, ImportError> {
        let name = required_field(row, record, "name")?;
        let position = required_field(row, record, "position")?;
        let shift_raw = required_field(row, record, "shift")?;
        let shift = ShiftLabel::from_db_str(&shift_raw).ok_or_else(|| {
            ImportError::TypeConversionError {
                row,
                field: "shift".to_string(),
                message: format!("未知班次: {}", shift_raw),
            }
        })?;
        let performance_rating: f64 = parse_field(row, record, "performance_rating")?;

        let mut staff = Staff::new(name, position, shift, performance_rating);
        staff.contact = optional_field(record, "contact");

        if let Some(raw) = optional_field(record, "hiring_date") {
            let date = NaiveDate::parse_from_str(&raw, "%Y-%m-%d").map_err(|e| {
                ImportError::TypeConversionError {
                    row,
                    field: "hiring_date".to_string(),
                    message: e.to_string(),
                }
            })?;
            staff.hiring_date = Some(date);
        }

        Ok(staff)
    }

    /// 落一条导入审计日志
    fn record_import_log(
        &self,
        kind: &str,
        file_path: &Path,
        summary: &ImportSummary,
    ) -> Result<(), ImportError> {
        self.action_log_repo.record(
            &ActionLog::new(ActionType::Import, &self.actor, Utc::now())
                .with_detail(format!(
                    "导入 {}: 成功 {} 行，跳过 {} 行",
                    kind, summary.imported, summary.skipped
                ))
                .with_payload(json!({
                    "kind": kind,
                    "file": file_path.display().to_string(),
                    "total_rows": summary.total_rows,
                    "imported": summary.imported,
                    "skipped": summary.skipped,
                })),
        )?;
        Ok(())
    }
}

// ==========================================
// 字段取值辅助
// ==========================================

fn optional_field(record: &HashMap<String, String>, field: &str) -> Option<String> {
    record
        .get(field)
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn required_field(
    row: usize,
    record: &HashMap<String, String>,
    field: &str,
) -> Result<String, ImportError> {
    optional_field(record, field).ok_or_else(|| ImportError::MissingField {
        row,
        field: field.to_string(),
    })
}

fn parse_field<T: std::str::FromStr>(
    row: usize,
    record: &HashMap<String, String>,
    field: &str,
) -> Result<T, ImportError>
where
    T::Err: std::fmt::Display,
{
    let raw = required_field(row, record, field)?;
    raw.parse::<T>().map_err(|e| ImportError::TypeConversionError {
        row,
        field: field.to_string(),
        message: format!("{}: {}", raw, e),
    })
}
