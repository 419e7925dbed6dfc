//! 彙總報告
//!
//! 對已完成的模擬帳做唯讀推導：風險零件清單、採購建議彙總、最缺零件排行。

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use shortcast_core::SimulationDay;
use std::collections::BTreeMap;

/// 採購建議彙總列
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcurementLine {
    /// 零件圖號
    pub part_no: String,

    /// 預測期內建議採購總量
    pub total_recommended_qty: Decimal,

    /// 最早下單日
    pub first_order_date: NaiveDate,

    /// 最早預計到貨日
    pub first_eta: NaiveDate,
}

/// 報告產生器
pub struct ShortageReporter;

impl ShortageReporter {
    /// 預測期內出現過缺料的零件（排序後）
    pub fn risk_parts(ledger: &[SimulationDay]) -> Vec<String> {
        let mut parts: Vec<String> = ledger
            .iter()
            .filter(|day| day.shortage)
            .map(|day| day.part_no.clone())
            .collect();
        parts.sort();
        parts.dedup();
        parts
    }

    /// 採購建議彙總：各零件的建議總量、最早下單日與最早到貨日，
    /// 依建議總量由大到小排序（同量以圖號排序）
    pub fn procurement_summary(ledger: &[SimulationDay]) -> Vec<ProcurementLine> {
        let mut grouped: BTreeMap<&str, ProcurementLine> = BTreeMap::new();

        for day in ledger {
            if day.recommended_qty <= Decimal::ZERO {
                continue;
            }
            // recommended_qty > 0 的記錄必帶 eta
            let Some(eta) = day.order_eta else { continue };

            grouped
                .entry(day.part_no.as_str())
                .and_modify(|line| {
                    line.total_recommended_qty += day.recommended_qty;
                    line.first_order_date = line.first_order_date.min(day.date);
                    line.first_eta = line.first_eta.min(eta);
                })
                .or_insert_with(|| ProcurementLine {
                    part_no: day.part_no.clone(),
                    total_recommended_qty: day.recommended_qty,
                    first_order_date: day.date,
                    first_eta: eta,
                });
        }

        let mut summary: Vec<ProcurementLine> = grouped.into_values().collect();
        summary.sort_by(|a, b| {
            b.total_recommended_qty
                .cmp(&a.total_recommended_qty)
                .then_with(|| a.part_no.cmp(&b.part_no))
        });
        summary
    }

    /// 最缺的前 N 個零件：以預測期內最低期末可用量由小到大排序
    pub fn top_risk_parts(ledger: &[SimulationDay], n: usize) -> Vec<String> {
        let mut min_end: BTreeMap<&str, Decimal> = BTreeMap::new();
        for day in ledger {
            min_end
                .entry(day.part_no.as_str())
                .and_modify(|lowest| *lowest = (*lowest).min(day.end_available))
                .or_insert(day.end_available);
        }

        let mut ranked: Vec<(&str, Decimal)> = min_end.into_iter().collect();
        ranked.sort_by(|a, b| a.1.cmp(&b.1).then_with(|| a.0.cmp(b.0)));
        ranked
            .into_iter()
            .take(n)
            .map(|(part_no, _)| part_no.to_string())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 9, day).unwrap()
    }

    fn day(
        part_no: &str,
        date: NaiveDate,
        end: i64,
        shortage: bool,
        recommended: i64,
        eta: Option<NaiveDate>,
    ) -> SimulationDay {
        SimulationDay {
            part_no: part_no.to_string(),
            date,
            start_available: Decimal::from(end + recommended),
            incoming_qty: Decimal::ZERO,
            planned_arrival_qty: Decimal::ZERO,
            gross_requirement: Decimal::from(recommended),
            end_available: Decimal::from(end),
            shortage,
            recommended_qty: Decimal::from(recommended),
            order_eta: eta,
        }
    }

    #[test]
    fn test_risk_parts_deduplicated_and_sorted() {
        let ledger = vec![
            day("Z9", d(1), -1, true, 3, Some(d(4))),
            day("A1", d(1), -2, true, 4, Some(d(4))),
            day("Z9", d(2), -1, true, 3, Some(d(5))),
            day("M5", d(1), 9, false, 0, None),
        ];

        assert_eq!(
            ShortageReporter::risk_parts(&ledger),
            vec!["A1".to_string(), "Z9".to_string()]
        );
    }

    #[test]
    fn test_procurement_summary_ordering() {
        let ledger = vec![
            day("A1", d(2), -2, true, 4, Some(d(5))),
            day("A1", d(3), -3, true, 5, Some(d(6))),
            day("Z9", d(1), -1, true, 20, Some(d(4))),
        ];

        let summary = ShortageReporter::procurement_summary(&ledger);

        assert_eq!(summary.len(), 2);
        // Z9 總量 20 > A1 總量 9
        assert_eq!(summary[0].part_no, "Z9");
        assert_eq!(summary[1].part_no, "A1");
        assert_eq!(summary[1].total_recommended_qty, Decimal::from(9));
        assert_eq!(summary[1].first_order_date, d(2));
        assert_eq!(summary[1].first_eta, d(5));
    }

    #[test]
    fn test_top_risk_parts() {
        let ledger = vec![
            day("A1", d(1), 5, false, 0, None),
            day("A1", d(2), -8, true, 8, Some(d(5))),
            day("B2", d(1), -2, true, 2, Some(d(4))),
            day("C3", d(1), 30, false, 0, None),
        ];

        assert_eq!(
            ShortageReporter::top_risk_parts(&ledger, 2),
            vec!["A1".to_string(), "B2".to_string()]
        );
    }
}
