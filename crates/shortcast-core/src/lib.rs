//! # Shortcast Core
//!
//! 短期缺料預測的核心資料模型與類型定義

pub mod bom;
pub mod config;
pub mod demand;
pub mod ledger;
pub mod part;
pub mod sensor;
pub mod source;
pub mod supply;

// Re-export 主要類型
pub use bom::{BomLine, RawBomRow};
pub use config::{HealthConfig, PlannerConfig};
pub use demand::{DemandHistory, ForecastPoint, PartDemand};
pub use ledger::SimulationDay;
pub use part::Part;
pub use sensor::SensorEvent;
pub use source::{
    BomSource, OpenOrderSource, OrderHistorySource, PartMasterSource, PlanInputs, SensorSource,
};
pub use supply::{OpenArrival, PlannedOrder};

/// 缺料計算錯誤類型
#[derive(Debug, thiserror::Error)]
pub enum PlanError {
    #[error("回溯期 {0} 天內沒有任何訂單需求資料，無法建立需求預測")]
    NoDemandHistory(u32),

    #[error(transparent)]
    Source(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, PlanError>;
