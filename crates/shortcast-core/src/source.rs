//! 外部資料來源介面
//!
//! 資料擷取（關聯式資料庫、感測資料流）不屬於計算核心；
//! 核心只依賴這組抽象介面，並要求所有輸入在模擬開始前全部就緒，
//! 模擬過程中不會再有任何 I/O。

use crate::{DemandHistory, OpenArrival, Part, RawBomRow, SensorEvent};

/// 訂單歷史來源（排除已取消訂單）
pub trait OrderHistorySource {
    /// 取得近 `lookback_days` 天的每日產品需求
    fn fetch_demand(&self, lookback_days: u32) -> anyhow::Result<Vec<DemandHistory>>;
}

/// BOM 來源
pub trait BomSource {
    /// 取得全部 BOM 列（產品編碼為未解析的原始文字）
    fn fetch_bom(&self) -> anyhow::Result<Vec<RawBomRow>>;
}

/// 零件主檔來源（庫存量與安全量）
pub trait PartMasterSource {
    fn fetch_parts(&self) -> anyhow::Result<Vec<Part>>;
}

/// 採購在途來源（僅未到貨且交期已知的訂單）
pub trait OpenOrderSource {
    fn fetch_open_arrivals(&self) -> anyhow::Result<Vec<OpenArrival>>;
}

/// 機台感測來源
pub trait SensorSource {
    /// 取得近 `window_hours` 小時的感測事件
    fn fetch_recent_events(&self, window_hours: u32) -> anyhow::Result<Vec<SensorEvent>>;
}

/// 計算核心的全部輸入
///
/// 先於模擬一次性蒐集完畢，核心本身是純記憶體內運算。
#[derive(Debug, Clone, Default)]
pub struct PlanInputs {
    /// 歷史日需求
    pub history: Vec<DemandHistory>,

    /// 原始 BOM 列
    pub bom_rows: Vec<RawBomRow>,

    /// 零件主檔
    pub parts: Vec<Part>,

    /// 採購在途到貨
    pub open_arrivals: Vec<OpenArrival>,

    /// 感測事件（近 24 小時）
    pub sensor_events: Vec<SensorEvent>,
}

impl PlanInputs {
    /// 感測視窗（小時）
    pub const SENSOR_WINDOW_HOURS: u32 = 24;

    /// 自五個資料來源一次性蒐集全部輸入
    pub fn gather(
        orders: &dyn OrderHistorySource,
        bom: &dyn BomSource,
        parts: &dyn PartMasterSource,
        open_orders: &dyn OpenOrderSource,
        sensors: &dyn SensorSource,
        lookback_days: u32,
    ) -> crate::Result<Self> {
        Ok(Self {
            history: orders.fetch_demand(lookback_days)?,
            bom_rows: bom.fetch_bom()?,
            parts: parts.fetch_parts()?,
            open_arrivals: open_orders.fetch_open_arrivals()?,
            sensor_events: sensors.fetch_recent_events(Self::SENSOR_WINDOW_HOURS)?,
        })
    }
}
