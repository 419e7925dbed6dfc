//! 缺料計算參數配置

use chrono::{Duration, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// 設備健康評分參數
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthConfig {
    /// 溫度上限，超過即扣分
    pub temperature_limit: Decimal,

    /// 震動上限，超過即扣分
    pub vibration_limit: Decimal,

    /// 溫度超標扣分
    pub temperature_penalty: Decimal,

    /// 震動超標扣分
    pub vibration_penalty: Decimal,

    /// 單事件分數下限（扣分不會低於此值）
    pub score_floor: Decimal,
}

impl Default for HealthConfig {
    fn default() -> Self {
        Self {
            temperature_limit: Decimal::from(85),
            vibration_limit: Decimal::new(8, 2),     // 0.08
            temperature_penalty: Decimal::new(2, 1), // 0.2
            vibration_penalty: Decimal::new(3, 1),   // 0.3
            score_floor: Decimal::new(5, 1),         // 0.5
        }
    }
}

/// 缺料計算配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlannerConfig {
    /// 歷史需求回溯期（天）
    pub lookback_days: u32,

    /// 預測期（天）
    pub horizon_days: u32,

    /// 預設採購提前期（天）
    pub default_lead_time_days: u32,

    /// 各零件提前期覆寫（零件圖號 → 天數）
    pub lead_time_overrides: HashMap<String, u32>,

    /// 設備健康評分參數
    pub health: HealthConfig,

    /// 計算基準日（預測期為基準日的次日起算）
    pub plan_date: NaiveDate,
}

impl PlannerConfig {
    /// 創建新的配置（其餘參數採預設值：回溯 30 天、預測 7 天、提前期 3 天）
    pub fn new(plan_date: NaiveDate) -> Self {
        Self {
            lookback_days: 30,
            horizon_days: 7,
            default_lead_time_days: 3,
            lead_time_overrides: HashMap::new(),
            health: HealthConfig::default(),
            plan_date,
        }
    }

    /// 建構器模式：設置回溯期
    pub fn with_lookback_days(mut self, days: u32) -> Self {
        self.lookback_days = days;
        self
    }

    /// 建構器模式：設置預測期
    pub fn with_horizon_days(mut self, days: u32) -> Self {
        self.horizon_days = days;
        self
    }

    /// 建構器模式：設置預設提前期
    pub fn with_default_lead_time(mut self, days: u32) -> Self {
        self.default_lead_time_days = days;
        self
    }

    /// 建構器模式：覆寫單一零件的提前期
    pub fn with_lead_time_override(mut self, part_no: impl Into<String>, days: u32) -> Self {
        self.lead_time_overrides.insert(part_no.into(), days);
        self
    }

    /// 建構器模式：設置健康評分參數
    pub fn with_health_config(mut self, health: HealthConfig) -> Self {
        self.health = health;
        self
    }

    /// 查詢零件提前期（優先採用覆寫，否則用預設）
    pub fn lead_time_for(&self, part_no: &str) -> u32 {
        self.lead_time_overrides
            .get(part_no)
            .copied()
            .unwrap_or(self.default_lead_time_days)
    }

    /// 產生預測期日期序列（基準日次日起，共 horizon_days 天）
    pub fn horizon_dates(&self) -> Vec<NaiveDate> {
        (1..=i64::from(self.horizon_days))
            .map(|offset| self.plan_date + Duration::days(offset))
            .collect()
    }
}
