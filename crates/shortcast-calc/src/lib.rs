//! # Shortcast Calculation Engine
//!
//! 短期缺料預測引擎：設備健康評分 → 需求預測 → BOM 展開 → 逐日滾動模擬 → 彙總報告

pub mod explosion;
pub mod forecast;
pub mod health;
pub mod planner;
pub mod reconcile;
pub mod report;
pub mod rollforward;

// Re-export 主要類型
pub use explosion::BomExploder;
pub use forecast::DemandForecaster;
pub use health::HealthScorer;
pub use planner::ShortagePlanner;
pub use reconcile::{BomResolver, Reconciliation};
pub use report::{ProcurementLine, ShortageReporter};
pub use rollforward::RollforwardSimulator;

use rust_decimal::Decimal;
use shortcast_core::{ForecastPoint, PartDemand, PlannedOrder, SimulationDay};

/// 缺料計算結果
#[derive(Debug, Clone)]
pub struct ShortagePlan {
    /// 產能修正係數（由設備健康度推得）
    pub capacity_factor: Decimal,

    /// 產品日預測（完整 產品 × 日期 格網）
    pub forecast: Vec<ForecastPoint>,

    /// 零件日毛需求（BOM 展開結果）
    pub part_demand: Vec<PartDemand>,

    /// 逐零件逐日模擬帳
    pub ledger: Vec<SimulationDay>,

    /// 計劃訂單
    pub planned_orders: Vec<PlannedOrder>,

    /// 預測期內有缺料風險的零件
    pub risk_parts: Vec<String>,

    /// 採購建議彙總
    pub procurement_summary: Vec<ProcurementLine>,

    /// 資料對帳報告（被剔除/補零的列）
    pub reconciliation: Reconciliation,

    /// 警告信息
    pub warnings: Vec<PlanWarning>,

    /// 計算耗時（毫秒）
    pub calculation_time_ms: Option<u128>,
}

/// 計算過程警告
#[derive(Debug, Clone)]
pub struct PlanWarning {
    pub subject: String,
    pub message: String,
    pub severity: WarningSeverity,
}

impl PlanWarning {
    pub fn new(subject: String, message: String, severity: WarningSeverity) -> Self {
        Self {
            subject,
            message,
            severity,
        }
    }

    pub fn info(subject: String, message: String) -> Self {
        Self::new(subject, message, WarningSeverity::Info)
    }

    pub fn warning(subject: String, message: String) -> Self {
        Self::new(subject, message, WarningSeverity::Warning)
    }

    pub fn error(subject: String, message: String) -> Self {
        Self::new(subject, message, WarningSeverity::Error)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarningSeverity {
    Info,
    Warning,
    Error,
}
