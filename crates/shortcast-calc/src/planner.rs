//! 缺料計算主流程

use rust_decimal::Decimal;
use shortcast_core::{Part, PlanInputs, PlannerConfig};
use std::collections::BTreeSet;

use crate::{
    BomExploder, BomResolver, DemandForecaster, HealthScorer, PlanWarning, Reconciliation,
    RollforwardSimulator, ShortagePlan, ShortageReporter,
};

/// 健康度低於此值時發出設備異常警告
const DEGRADED_CAPACITY_THRESHOLD: Decimal = Decimal::from_parts(8, 0, 0, false, 1); // 0.8

/// 缺料計算器
pub struct ShortagePlanner {
    config: PlannerConfig,
}

impl ShortagePlanner {
    /// 創建新的缺料計算器
    pub fn new(config: PlannerConfig) -> Self {
        Self { config }
    }

    /// 主計算入口
    ///
    /// 所有輸入必須事先備妥（`PlanInputs::gather`），計算過程不做任何 I/O。
    pub fn plan(&self, inputs: &PlanInputs) -> shortcast_core::Result<ShortagePlan> {
        tracing::info!(
            "開始缺料計算：歷史需求 {} 筆，BOM {} 列，零件主檔 {} 筆，在途 {} 筆，感測事件 {} 筆",
            inputs.history.len(),
            inputs.bom_rows.len(),
            inputs.parts.len(),
            inputs.open_arrivals.len(),
            inputs.sensor_events.len()
        );

        let start_time = std::time::Instant::now();
        let mut warnings = Vec::new();

        // Step 1: 設備健康評分 → 產能修正係數
        tracing::debug!("Step 1: 設備健康評分");
        let capacity_factor =
            HealthScorer::capacity_factor(&inputs.sensor_events, &self.config.health);
        tracing::debug!("產能修正係數: {}", capacity_factor);

        if capacity_factor < DEGRADED_CAPACITY_THRESHOLD {
            warnings.push(PlanWarning::warning(
                "equipment".to_string(),
                format!(
                    "平均設備健康度 {} 低於 0.8，建議提高安全庫存或安排維修",
                    capacity_factor
                ),
            ));
        }

        // Step 2: 需求預測（歷史為空時直接中止）
        tracing::debug!("Step 2: 需求預測");
        let horizon = self.config.horizon_dates();
        let forecast = DemandForecaster::forecast(
            &inputs.history,
            &horizon,
            capacity_factor,
            self.config.lookback_days,
        )?;
        tracing::debug!("預測點數量: {}", forecast.len());

        // Step 3: BOM 解析與對帳
        tracing::debug!("Step 3: BOM 解析");
        let (bom_lines, dropped_bom_rows) = BomResolver::resolve(&inputs.bom_rows);
        if !dropped_bom_rows.is_empty() {
            warnings.push(PlanWarning::warning(
                "bom".to_string(),
                format!(
                    "{} 列 BOM 的產品編碼無法解析，已剔除（詳見對帳報告）",
                    dropped_bom_rows.len()
                ),
            ));
        }

        let products_without_bom = BomResolver::products_without_bom(
            forecast.iter().map(|point| point.product_id),
            &bom_lines,
        );

        // Step 4: BOM 展開 → 零件日毛需求
        tracing::debug!("Step 4: BOM 展開");
        let part_demand = BomExploder::explode(&forecast, &bom_lines);
        tracing::debug!("零件毛需求列數: {}", part_demand.len());

        // Step 5: 組出模擬零件範圍（主檔 ∪ 需求/在途引用的零件，缺主檔者補零）
        let (parts, defaulted_parts) = self.build_part_universe(inputs, &part_demand);
        for part_no in &defaulted_parts {
            warnings.push(PlanWarning::info(
                part_no.clone(),
                "零件缺少主檔資料，以 0 庫存 / 0 安全量納入模擬".to_string(),
            ));
        }

        // Step 6: 逐零件滾動模擬
        tracing::debug!("Step 6: 逐零件滾動模擬（{} 個零件）", parts.len());
        let simulation = RollforwardSimulator::simulate(
            &parts,
            &part_demand,
            &inputs.open_arrivals,
            &horizon,
            &self.config,
        );

        // Step 7: 彙總報告
        tracing::debug!("Step 7: 彙總報告");
        let risk_parts = ShortageReporter::risk_parts(&simulation.ledger);
        let procurement_summary = ShortageReporter::procurement_summary(&simulation.ledger);

        let reconciliation = Reconciliation {
            dropped_bom_rows,
            defaulted_parts,
            products_without_bom,
        };

        let plan = ShortagePlan {
            capacity_factor,
            forecast,
            part_demand,
            ledger: simulation.ledger,
            planned_orders: simulation.planned_orders,
            risk_parts,
            procurement_summary,
            reconciliation,
            warnings,
            calculation_time_ms: Some(start_time.elapsed().as_millis()),
        };

        tracing::info!(
            "缺料計算完成，耗時 {:?}；風險零件 {} 個，計劃訂單 {} 筆",
            start_time.elapsed(),
            plan.risk_parts.len(),
            plan.planned_orders.len()
        );

        Ok(plan)
    }

    /// 模擬零件範圍：零件主檔 ∪ 毛需求/在途到貨引用到的零件
    ///
    /// 回傳 (零件清單, 被補零的零件圖號)。
    fn build_part_universe(
        &self,
        inputs: &PlanInputs,
        part_demand: &[shortcast_core::PartDemand],
    ) -> (Vec<Part>, Vec<String>) {
        let mut parts: Vec<Part> = inputs.parts.clone();
        let known: BTreeSet<&str> = inputs
            .parts
            .iter()
            .map(|part| part.part_no.as_str())
            .collect();

        let mut referenced: BTreeSet<&str> = part_demand
            .iter()
            .map(|demand| demand.part_no.as_str())
            .collect();
        referenced.extend(
            inputs
                .open_arrivals
                .iter()
                .map(|arrival| arrival.part_no.as_str()),
        );

        let mut defaulted = Vec::new();
        for part_no in referenced {
            if !known.contains(part_no) {
                parts.push(Part::zero_defaulted(part_no));
                defaulted.push(part_no.to_string());
            }
        }

        (parts, defaulted)
    }

    /// 配置引用
    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }
}
