// ==========================================
// 酒店客房管理系统 - CSV 解析器
// ==========================================
// 职责: 文件读取与按表头映射的逐行解析
// 支持: CSV (.csv)
// ==========================================

use crate::importer::error::ImportError;
use csv::ReaderBuilder;
use std::collections::HashMap;
use std::fs::File;
use std::path::Path;

// ==========================================
// CsvParser - CSV 解析器
// ==========================================
pub struct CsvParser;

impl CsvParser {
    /// 解析 CSV 文件为按表头映射的记录列表
    ///
    /// 说明:
    /// - 首行为表头，值按表头名映射
    /// - 全空白行跳过
    /// - 行长度允许不一致（缺失列视为字段缺失）
    pub fn parse_to_raw_records(
        file_path: &Path,
    ) -> Result<Vec<HashMap<String, String>>, ImportError> {
        // 检查文件存在
        if !file_path.exists() {
            return Err(ImportError::FileNotFound(file_path.display().to_string()));
        }

        // 检查扩展名
        if let Some(ext) = file_path.extension() {
            if ext != "csv" {
                return Err(ImportError::UnsupportedFormat(
                    ext.to_string_lossy().to_string(),
                ));
            }
        }

        // 打开 CSV 文件
        let file = File::open(file_path)?;
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true) // 允许行长度不一致
            .from_reader(file);

        // 读取表头
        let headers: Vec<String> = reader
            .headers()?
            .iter()
            .map(|h| h.trim().to_string())
            .collect();

        // 读取所有行
        let mut records = Vec::new();
        for result in reader.records() {
            let record = result?;
            let mut row_map = HashMap::new();

            for (col_idx, value) in record.iter().enumerate() {
                if let Some(header) = headers.get(col_idx) {
                    row_map.insert(header.clone(), value.trim().to_string());
                }
            }

            // 跳过完全空白的行
            if row_map.values().all(|v| v.is_empty()) {
                continue;
            }

            records.push(row_map);
        }

        Ok(records)
    }
}
