//! 零件主檔模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 零件主檔記錄
///
/// 缺料分析以零件圖號為唯一識別；庫存量與安全量皆為非負數。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Part {
    /// 零件圖號
    pub part_no: String,

    /// 現有庫存量
    pub stock_qty: Decimal,

    /// 安全庫存量
    pub safety_qty: Decimal,
}

impl Part {
    /// 創建新的零件記錄
    pub fn new(part_no: impl Into<String>, stock_qty: Decimal, safety_qty: Decimal) -> Self {
        Self {
            part_no: part_no.into(),
            stock_qty,
            safety_qty,
        }
    }

    /// 缺少主檔資料的零件：庫存與安全量以 0 補齊
    ///
    /// 安全量 0 會讓該零件幾乎不觸發缺料，需搭配對帳報告提示資料缺口。
    pub fn zero_defaulted(part_no: impl Into<String>) -> Self {
        Self::new(part_no, Decimal::ZERO, Decimal::ZERO)
    }

    /// 檢查現有庫存是否已低於安全庫存
    pub fn is_below_safety_stock(&self) -> bool {
        self.stock_qty < self.safety_qty
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_part() {
        let part = Part::new("A1", Decimal::from(10), Decimal::from(5));

        assert_eq!(part.part_no, "A1");
        assert_eq!(part.stock_qty, Decimal::from(10));
        assert_eq!(part.safety_qty, Decimal::from(5));
        assert!(!part.is_below_safety_stock());
    }

    #[test]
    fn test_zero_defaulted_part() {
        let part = Part::zero_defaulted("GHOST-01");

        assert_eq!(part.stock_qty, Decimal::ZERO);
        assert_eq!(part.safety_qty, Decimal::ZERO);
        // 安全量為 0 時不會被判定為低於安全庫存
        assert!(!part.is_below_safety_stock());
    }
}
