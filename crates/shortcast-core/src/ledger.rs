//! 滾動模擬日記錄

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 單一零件單日的模擬結果
///
/// 每個 (零件, 日期) 一筆，由模擬器一次性產生後即為唯讀；
/// 當日的 `end_available` 會成為次日的起算基礎（狀態顯式傳遞）。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationDay {
    /// 零件圖號
    pub part_no: String,

    /// 日期
    pub date: NaiveDate,

    /// 當日起始可用量（含當日所有到貨）
    pub start_available: Decimal,

    /// 當日採購在途到貨量
    pub incoming_qty: Decimal,

    /// 當日計劃訂單回灌到貨量
    pub planned_arrival_qty: Decimal,

    /// 當日毛需求
    pub gross_requirement: Decimal,

    /// 當日結束可用量
    pub end_available: Decimal,

    /// 是否低於安全庫存
    pub shortage: bool,

    /// 當日建議採購量（補回安全庫存所需）
    pub recommended_qty: Decimal,

    /// 當日下單的預計到貨日
    pub order_eta: Option<NaiveDate>,
}

impl SimulationDay {
    /// 採購後可供量（期末 + 當日建議下單量；實際效果要到 eta 當天才生效）
    pub fn post_order_available(&self) -> Decimal {
        self.end_available + self.recommended_qty
    }

    /// 是否為值得關注的記錄（有需求、有到貨、有下單或有缺料）
    pub fn is_noteworthy(&self) -> bool {
        self.gross_requirement > Decimal::ZERO
            || self.incoming_qty > Decimal::ZERO
            || self.planned_arrival_qty > Decimal::ZERO
            || self.recommended_qty > Decimal::ZERO
            || self.shortage
    }
}
