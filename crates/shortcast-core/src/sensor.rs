//! 設備感測事件模型

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 機台感測事件
///
/// 由感測來源提供，已限定在近 24 小時視窗內。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SensorEvent {
    /// 機台ID
    pub machine_id: String,

    /// 溫度
    pub temperature: Decimal,

    /// 震動值
    pub vibration: Decimal,

    /// 轉速
    pub rpm: i32,

    /// 記錄時間
    pub recorded_at: NaiveDateTime,
}

impl SensorEvent {
    /// 創建新的感測事件
    pub fn new(
        machine_id: impl Into<String>,
        temperature: Decimal,
        vibration: Decimal,
        rpm: i32,
        recorded_at: NaiveDateTime,
    ) -> Self {
        Self {
            machine_id: machine_id.into(),
            temperature,
            vibration,
            rpm,
            recorded_at,
        }
    }
}
