// ==========================================
// 酒店客房管理系统 - 物资库存 API
// ==========================================
// 职责: 物资登记、补货
// 说明: 库存水位报表见 DashboardApi
// ==========================================

use std::sync::Arc;

use chrono::Utc;
use serde_json::json;
use tracing::info;

use crate::api::error::{ApiError, ApiResult};
use crate::domain::action_log::{ActionLog, ActionType};
use crate::domain::inventory::InventoryItem;
use crate::repository::action_log_repo::ActionLogRepository;
use crate::repository::inventory_repo::InventoryRepository;

// ==========================================
// AddInventoryItemRequest - 新增物资请求
// ==========================================
#[derive(Debug, Clone)]
pub struct AddInventoryItemRequest {
    pub item_name: String,
    pub quantity: i32,
    pub reorder_level: i32,
    pub unit_cost: f64,
    pub supplier: Option<String>,
    pub category: Option<String>,
    pub minimum_order_quantity: i32,
}

// ==========================================
// InventoryApi - 物资库存 API
// ==========================================

/// 物资库存API
pub struct InventoryApi {
    inventory_repo: Arc<InventoryRepository>,
    action_log_repo: Arc<ActionLogRepository>,
    actor: String,
}

impl InventoryApi {
    /// 创建新的InventoryApi实例
    pub fn new(
        inventory_repo: Arc<InventoryRepository>,
        action_log_repo: Arc<ActionLogRepository>,
        actor: impl Into<String>,
    ) -> Self {
        Self {
            inventory_repo,
            action_log_repo,
            actor: actor.into(),
        }
    }

    /// 登记新物资
    ///
    /// # 返回
    /// - Ok(i64): 数据库分配的物资ID
    pub fn add_item(&self, request: AddInventoryItemRequest) -> ApiResult<i64> {
        if request.item_name.trim().is_empty() {
            return Err(ApiError::InvalidInput("物资名称不能为空".to_string()));
        }
        if request.quantity < 0 || request.reorder_level < 0 {
            return Err(ApiError::InvalidInput(
                "库存量与补货线不能为负数".to_string(),
            ));
        }
        if !request.unit_cost.is_finite() || request.unit_cost < 0.0 {
            return Err(ApiError::InvalidInput(format!(
                "单价非法: {}",
                request.unit_cost
            )));
        }

        let item = InventoryItem {
            id: 0,
            item_name: request.item_name.trim().to_string(),
            category: request.category,
            supplier: request.supplier,
            quantity: request.quantity,
            reorder_level: request.reorder_level,
            minimum_order_quantity: request.minimum_order_quantity,
            last_restocked: None,
            unit_cost: request.unit_cost,
        };
        let item_id = self.inventory_repo.insert(&item)?;
        info!(item_id, item_name = %item.item_name, "物资登记完成");
        Ok(item_id)
    }

    /// 补货
    pub fn restock(&self, item_id: i64, added_quantity: i32) -> ApiResult<()> {
        let now = Utc::now();
        self.inventory_repo
            .restock(item_id, added_quantity, now.date_naive())?;

        self.action_log_repo.record(
            &ActionLog::new(ActionType::InventoryRestock, &self.actor, now)
                .with_detail(format!("物资 {} 补货 {}", item_id, added_quantity))
                .with_payload(json!({
                    "item_id": item_id,
                    "added_quantity": added_quantity,
                })),
        )?;
        Ok(())
    }

    /// 查询全部物资
    pub fn list_items(&self) -> ApiResult<Vec<InventoryItem>> {
        Ok(self.inventory_repo.list_all()?)
    }
}
