//! BOM 展開
//!
//! 將產品日預測轉換為零件日毛需求（單階展開）。

use chrono::NaiveDate;
use rust_decimal::Decimal;
use shortcast_core::{BomLine, ForecastPoint, PartDemand};
use std::collections::{BTreeMap, HashMap};

/// BOM 展開器
pub struct BomExploder;

impl BomExploder {
    /// 展開：預測量 × 單位用量，依 (零件, 日期) 加總
    ///
    /// 以產品ID 做 inner join：沒有 BOM 的產品不產生任何零件需求，
    /// 毛需求為 0 的 (零件, 日期) 不會出現在輸出中。
    pub fn explode(forecast: &[ForecastPoint], bom_lines: &[BomLine]) -> Vec<PartDemand> {
        let mut lines_by_product: HashMap<u32, Vec<&BomLine>> = HashMap::new();
        for line in bom_lines {
            lines_by_product.entry(line.product_id).or_default().push(line);
        }

        let mut totals: BTreeMap<(String, NaiveDate), Decimal> = BTreeMap::new();
        for point in forecast {
            let Some(lines) = lines_by_product.get(&point.product_id) else {
                continue;
            };

            for line in lines {
                let contribution = point.quantity * line.qty_per_unit;
                if contribution > Decimal::ZERO {
                    *totals
                        .entry((line.part_no.clone(), point.forecast_date))
                        .or_insert(Decimal::ZERO) += contribution;
                }
            }
        }

        totals
            .into_iter()
            .map(|((part_no, date), quantity)| PartDemand {
                part_no,
                date,
                quantity,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, day).unwrap()
    }

    fn point(product_id: u32, day: u32, qty: i64) -> ForecastPoint {
        ForecastPoint {
            product_id,
            forecast_date: d(day),
            baseline_qty: Decimal::from(qty),
            quantity: Decimal::from(qty),
        }
    }

    #[test]
    fn test_explode_single_product() {
        let forecast = vec![point(1001, 24, 10)];
        let bom = vec![
            BomLine::new(1001, "FAB003", Decimal::from(2)),
            BomLine::new(1001, "ACC002", Decimal::ONE),
        ];

        let demand = BomExploder::explode(&forecast, &bom);

        assert_eq!(demand.len(), 2);
        let fab = demand.iter().find(|p| p.part_no == "FAB003").unwrap();
        assert_eq!(fab.quantity, Decimal::from(20));
        let acc = demand.iter().find(|p| p.part_no == "ACC002").unwrap();
        assert_eq!(acc.quantity, Decimal::from(10));
    }

    #[test]
    fn test_shared_part_accumulates_across_products() {
        // 兩個產品同日共用 FAB003：10×2 + 4×3 = 32
        let forecast = vec![point(1001, 24, 10), point(2002, 24, 4)];
        let bom = vec![
            BomLine::new(1001, "FAB003", Decimal::from(2)),
            BomLine::new(2002, "FAB003", Decimal::from(3)),
        ];

        let demand = BomExploder::explode(&forecast, &bom);

        assert_eq!(demand.len(), 1);
        assert_eq!(demand[0].quantity, Decimal::from(32));
    }

    #[test]
    fn test_product_without_bom_is_silent() {
        let forecast = vec![point(9999, 24, 10)];
        let bom = vec![BomLine::new(1001, "FAB003", Decimal::from(2))];

        let demand = BomExploder::explode(&forecast, &bom);

        assert!(demand.is_empty());
    }

    #[test]
    fn test_zero_forecast_yields_no_rows() {
        let forecast = vec![point(1001, 24, 0)];
        let bom = vec![BomLine::new(1001, "FAB003", Decimal::from(2))];

        let demand = BomExploder::explode(&forecast, &bom);

        assert!(demand.is_empty());
    }
}
