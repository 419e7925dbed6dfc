//! 供應模型：採購在途與計劃訂單

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 採購在途到貨
///
/// 模擬開始時已知的未到貨採購量，屬於不可變輸入。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenArrival {
    /// 零件圖號
    pub part_no: String,

    /// 預計到貨日
    pub eta_date: NaiveDate,

    /// 到貨數量
    pub quantity: Decimal,
}

impl OpenArrival {
    /// 創建新的在途到貨記錄
    pub fn new(part_no: impl Into<String>, eta_date: NaiveDate, quantity: Decimal) -> Self {
        Self {
            part_no: part_no.into(),
            eta_date,
            quantity,
        }
    }
}

/// 計劃訂單（滾動模擬產生的建議採購單）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlannedOrder {
    /// 計劃訂單ID
    pub id: Uuid,

    /// 零件圖號
    pub part_no: String,

    /// 下單日期
    pub order_date: NaiveDate,

    /// 建議採購量
    pub quantity: Decimal,

    /// 預計到貨日（下單日 + 提前期）
    pub eta_date: NaiveDate,
}

impl PlannedOrder {
    /// 創建新的計劃訂單
    pub fn new(
        part_no: impl Into<String>,
        order_date: NaiveDate,
        quantity: Decimal,
        eta_date: NaiveDate,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            part_no: part_no.into(),
            order_date,
            quantity,
            eta_date,
        }
    }

    /// 提前期（天數）
    pub fn lead_time_days(&self) -> i64 {
        (self.eta_date - self.order_date).num_days()
    }
}
