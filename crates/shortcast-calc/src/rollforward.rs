//! 庫存滾動模擬
//!
//! 逐零件、逐日推演可用庫存：先加當日到貨（採購在途 + 先前計劃訂單的回灌），
//! 再扣當日毛需求，期末低於安全庫存即當日下單、提前期後到貨。
//! 狀態完全以零件為界（各零件有自己的計劃到貨表），零件之間可安全平行計算。

use chrono::{Duration, NaiveDate};
use rayon::prelude::*;
use rust_decimal::Decimal;
use shortcast_core::{OpenArrival, Part, PartDemand, PlannedOrder, PlannerConfig, SimulationDay};
use std::collections::HashMap;

/// 模擬輸出：逐日帳 + 計劃訂單
#[derive(Debug, Clone, Default)]
pub struct SimulationOutput {
    pub ledger: Vec<SimulationDay>,
    pub planned_orders: Vec<PlannedOrder>,
}

/// 滾動模擬器
pub struct RollforwardSimulator;

impl RollforwardSimulator {
    /// 對所有零件執行滾動模擬
    ///
    /// `parts` 即模擬範圍（呼叫端已將缺主檔的零件以零值補齊）；
    /// 輸出依 (零件, 日期) 排序。
    pub fn simulate(
        parts: &[Part],
        part_demand: &[PartDemand],
        open_arrivals: &[OpenArrival],
        horizon: &[NaiveDate],
        config: &PlannerConfig,
    ) -> SimulationOutput {
        let demand_by_part = Self::group_demand(part_demand);
        let incoming_by_part = Self::group_arrivals(open_arrivals);

        let mut sorted_parts: Vec<&Part> = parts.iter().collect();
        sorted_parts.sort_by(|a, b| a.part_no.cmp(&b.part_no));

        // 各零件的狀態彼此獨立，可平行推演
        let per_part: Vec<(Vec<SimulationDay>, Vec<PlannedOrder>)> = sorted_parts
            .par_iter()
            .map(|part| {
                Self::simulate_part(
                    part,
                    horizon,
                    demand_by_part.get(part.part_no.as_str()),
                    incoming_by_part.get(part.part_no.as_str()),
                    config.lead_time_for(&part.part_no),
                )
            })
            .collect();

        let mut output = SimulationOutput::default();
        for (ledger, orders) in per_part {
            output.ledger.extend(ledger);
            output.planned_orders.extend(orders);
        }
        output
    }

    /// 單一零件的逐日推演
    fn simulate_part(
        part: &Part,
        horizon: &[NaiveDate],
        demand: Option<&HashMap<NaiveDate, Decimal>>,
        incoming: Option<&HashMap<NaiveDate, Decimal>>,
        lead_time_days: u32,
    ) -> (Vec<SimulationDay>, Vec<PlannedOrder>) {
        let mut ledger = Vec::with_capacity(horizon.len());
        let mut orders = Vec::new();

        // 本零件專屬的計劃到貨表：eta → 數量（同日多單累加）
        let mut pending_arrivals: HashMap<NaiveDate, Decimal> = HashMap::new();
        let mut prev_end: Option<Decimal> = None;

        for &date in horizon {
            // 第一天以現有庫存起算，之後以前一日期末接續
            let carry = prev_end.unwrap_or(part.stock_qty);

            let incoming_qty = Self::lookup(incoming, date);
            let planned_arrival_qty = pending_arrivals
                .get(&date)
                .copied()
                .unwrap_or(Decimal::ZERO);

            // 先加到貨，再扣需求
            let start_available = carry + incoming_qty + planned_arrival_qty;
            let gross_requirement = Self::lookup(demand, date);
            let end_available = start_available - gross_requirement;

            let shortage = end_available < part.safety_qty;
            let recommended_qty = (part.safety_qty - end_available).max(Decimal::ZERO);

            let mut order_eta = None;
            if recommended_qty > Decimal::ZERO {
                // 今天下單不會今天到：到貨排在提前期之後，
                // 超出預測期的 eta 仍會記錄，只是模擬內看不到效果
                let eta = date + Duration::days(i64::from(lead_time_days));
                *pending_arrivals.entry(eta).or_insert(Decimal::ZERO) += recommended_qty;
                orders.push(PlannedOrder::new(
                    part.part_no.clone(),
                    date,
                    recommended_qty,
                    eta,
                ));
                order_eta = Some(eta);
            }

            ledger.push(SimulationDay {
                part_no: part.part_no.clone(),
                date,
                start_available,
                incoming_qty,
                planned_arrival_qty,
                gross_requirement,
                end_available,
                shortage,
                recommended_qty,
                order_eta,
            });

            prev_end = Some(end_available);
        }

        (ledger, orders)
    }

    fn lookup(map: Option<&HashMap<NaiveDate, Decimal>>, date: NaiveDate) -> Decimal {
        map.and_then(|m| m.get(&date)).copied().unwrap_or(Decimal::ZERO)
    }

    fn group_demand(part_demand: &[PartDemand]) -> HashMap<&str, HashMap<NaiveDate, Decimal>> {
        let mut grouped: HashMap<&str, HashMap<NaiveDate, Decimal>> = HashMap::new();
        for demand in part_demand {
            *grouped
                .entry(demand.part_no.as_str())
                .or_default()
                .entry(demand.date)
                .or_insert(Decimal::ZERO) += demand.quantity;
        }
        grouped
    }

    fn group_arrivals(arrivals: &[OpenArrival]) -> HashMap<&str, HashMap<NaiveDate, Decimal>> {
        let mut grouped: HashMap<&str, HashMap<NaiveDate, Decimal>> = HashMap::new();
        for arrival in arrivals {
            *grouped
                .entry(arrival.part_no.as_str())
                .or_default()
                .entry(arrival.eta_date)
                .or_insert(Decimal::ZERO) += arrival.quantity;
        }
        grouped
    }
}
