//! 需求預測
//!
//! 以「產品 × 星期幾」的歷史平均為主要模型，無對應星期資料時退回產品整體平均，
//! 再無資料則為 0；最後乘上產能修正係數並取整。

use chrono::{Datelike, NaiveDate};
use rust_decimal::{Decimal, RoundingStrategy};
use shortcast_core::{DemandHistory, ForecastPoint, PlanError};
use std::collections::{BTreeMap, BTreeSet};

/// 需求預測器
pub struct DemandForecaster;

impl DemandForecaster {
    /// 建立完整的 產品 × 預測日 格網
    ///
    /// 回溯期內完全沒有歷史需求時視為上游資料中斷，直接回報錯誤，
    /// 而不是輸出全零的預測序列。
    pub fn forecast(
        history: &[DemandHistory],
        horizon: &[NaiveDate],
        capacity_factor: Decimal,
        lookback_days: u32,
    ) -> shortcast_core::Result<Vec<ForecastPoint>> {
        if history.is_empty() {
            return Err(PlanError::NoDemandHistory(lookback_days));
        }

        // 同一 (產品, 日期) 的重複點先合併，確保平均值以「日」為單位
        let merged = Self::merge_by_day(history);

        let weekday_profile = Self::weekday_profile(&merged);
        let fallback_profile = Self::fallback_profile(&merged);

        let products: BTreeSet<u32> = merged.keys().map(|(product_id, _)| *product_id).collect();

        let mut points = Vec::with_capacity(products.len() * horizon.len());
        for &date in horizon {
            let dow = date.weekday().num_days_from_monday();
            for &product_id in &products {
                // 星期幾平均 → 產品整體平均 → 0
                let raw = weekday_profile
                    .get(&(product_id, dow))
                    .or_else(|| fallback_profile.get(&product_id))
                    .copied()
                    .unwrap_or(Decimal::ZERO);

                let baseline_qty = Self::round_qty(raw);
                let quantity = Self::round_qty(baseline_qty * capacity_factor);

                points.push(ForecastPoint {
                    product_id,
                    forecast_date: date,
                    baseline_qty,
                    quantity,
                });
            }
        }

        points.sort_by(|a, b| {
            (a.product_id, a.forecast_date).cmp(&(b.product_id, b.forecast_date))
        });

        Ok(points)
    }

    /// 合併同 (產品, 日期) 的需求點
    fn merge_by_day(history: &[DemandHistory]) -> BTreeMap<(u32, NaiveDate), Decimal> {
        let mut merged = BTreeMap::new();
        for point in history {
            *merged
                .entry((point.product_id, point.order_date))
                .or_insert(Decimal::ZERO) += point.quantity;
        }
        merged
    }

    /// 產品 × 星期幾 的平均日需求
    fn weekday_profile(
        merged: &BTreeMap<(u32, NaiveDate), Decimal>,
    ) -> BTreeMap<(u32, u32), Decimal> {
        let mut sums: BTreeMap<(u32, u32), (Decimal, u32)> = BTreeMap::new();
        for (&(product_id, date), &qty) in merged {
            let dow = date.weekday().num_days_from_monday();
            let entry = sums.entry((product_id, dow)).or_insert((Decimal::ZERO, 0));
            entry.0 += qty;
            entry.1 += 1;
        }

        sums.into_iter()
            .map(|(key, (total, count))| (key, total / Decimal::from(count)))
            .collect()
    }

    /// 產品整體平均日需求（fallback）
    fn fallback_profile(merged: &BTreeMap<(u32, NaiveDate), Decimal>) -> BTreeMap<u32, Decimal> {
        let mut sums: BTreeMap<u32, (Decimal, u32)> = BTreeMap::new();
        for (&(product_id, _), &qty) in merged {
            let entry = sums.entry(product_id).or_insert((Decimal::ZERO, 0));
            entry.0 += qty;
            entry.1 += 1;
        }

        sums.into_iter()
            .map(|(key, (total, count))| (key, total / Decimal::from(count)))
            .collect()
    }

    /// 四捨五入為非負整數量
    fn round_qty(value: Decimal) -> Decimal {
        value
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
            .max(Decimal::ZERO)
    }
}
