//! 需求模型：歷史需求、產品預測與零件毛需求

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 歷史日需求點
///
/// 由訂單明細彙總而來（排除已取消訂單），每個 (產品, 日期) 一筆；
/// 沒有訂單的日期不會出現，而不是補 0。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DemandHistory {
    /// 產品ID
    pub product_id: u32,

    /// 訂單日期
    pub order_date: NaiveDate,

    /// 當日銷售數量
    pub quantity: Decimal,
}

impl DemandHistory {
    /// 創建新的歷史需求點
    pub fn new(product_id: u32, order_date: NaiveDate, quantity: Decimal) -> Self {
        Self {
            product_id,
            order_date,
            quantity,
        }
    }

    /// 星期索引（週一=0 .. 週日=6）
    pub fn weekday_index(&self) -> u32 {
        self.order_date.weekday().num_days_from_monday()
    }
}

/// 產品日預測點
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastPoint {
    /// 產品ID
    pub product_id: u32,

    /// 預測日期
    pub forecast_date: NaiveDate,

    /// 產能修正前的預測量（已四捨五入）
    pub baseline_qty: Decimal,

    /// 產能修正後的預測量（已四捨五入，非負整數）
    pub quantity: Decimal,
}

impl ForecastPoint {
    /// 星期索引（週一=0 .. 週日=6）
    pub fn weekday_index(&self) -> u32 {
        self.forecast_date.weekday().num_days_from_monday()
    }
}

/// 零件日毛需求（BOM 展開結果）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PartDemand {
    /// 零件圖號
    pub part_no: String,

    /// 需求日期
    pub date: NaiveDate,

    /// 毛需求量
    pub quantity: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weekday_index() {
        // 2026-08-24 是星期一
        let point = DemandHistory::new(
            1001,
            NaiveDate::from_ymd_opt(2026, 8, 24).unwrap(),
            Decimal::from(5),
        );
        assert_eq!(point.weekday_index(), 0);

        // 2026-08-30 是星期日
        let point = DemandHistory::new(
            1001,
            NaiveDate::from_ymd_opt(2026, 8, 30).unwrap(),
            Decimal::from(5),
        );
        assert_eq!(point.weekday_index(), 6);
    }
}
