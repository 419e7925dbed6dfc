//! BOM（用料清單）模型
//!
//! 系統僅支援單階 BOM：產品 → 零件。

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 來源系統的原始 BOM 列
///
/// 產品編碼在來源端是文字欄位，須經解析才能成為有效的產品ID；
/// 解析失敗的列會被剔除並列入對帳報告。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawBomRow {
    /// 產品編碼（未解析的原始文字）
    pub product_code: String,

    /// 零件圖號
    pub part_no: String,

    /// 單位用量
    pub qty_per_unit: Decimal,
}

impl RawBomRow {
    /// 創建新的原始 BOM 列
    pub fn new(
        product_code: impl Into<String>,
        part_no: impl Into<String>,
        qty_per_unit: Decimal,
    ) -> Self {
        Self {
            product_code: product_code.into(),
            part_no: part_no.into(),
            qty_per_unit,
        }
    }

    /// 解析產品編碼為產品ID（去除前後空白後轉整數）
    pub fn resolve(&self) -> Option<BomLine> {
        let product_id: u32 = self.product_code.trim().parse().ok()?;
        Some(BomLine {
            product_id,
            part_no: self.part_no.clone(),
            qty_per_unit: self.qty_per_unit,
        })
    }
}

/// 已解析的 BOM 明細
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BomLine {
    /// 產品ID
    pub product_id: u32,

    /// 零件圖號
    pub part_no: String,

    /// 單位用量（非負）
    pub qty_per_unit: Decimal,
}

impl BomLine {
    /// 創建新的 BOM 明細
    pub fn new(product_id: u32, part_no: impl Into<String>, qty_per_unit: Decimal) -> Self {
        Self {
            product_id,
            part_no: part_no.into(),
            qty_per_unit,
        }
    }
}
