//! BOM 解析與資料對帳
//!
//! 來源資料的缺漏不會中斷計算，但必須被列舉出來：
//! 被剔除的 BOM 列、以零補齊主檔的零件、沒有 BOM 的產品，
//! 全部收進對帳報告供資料負責人追查。

use serde::{Deserialize, Serialize};
use shortcast_core::{BomLine, RawBomRow};
use std::collections::BTreeSet;

/// 資料對帳報告
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Reconciliation {
    /// 產品編碼無法解析而被剔除的 BOM 列
    pub dropped_bom_rows: Vec<RawBomRow>,

    /// 缺少主檔而以 0 庫存 / 0 安全量補齊的零件
    pub defaulted_parts: Vec<String>,

    /// 有歷史需求但查無 BOM 的產品
    pub products_without_bom: Vec<u32>,
}

impl Reconciliation {
    /// 是否完全沒有資料缺口
    pub fn is_clean(&self) -> bool {
        self.dropped_bom_rows.is_empty()
            && self.defaulted_parts.is_empty()
            && self.products_without_bom.is_empty()
    }
}

/// BOM 解析器
pub struct BomResolver;

impl BomResolver {
    /// 解析原始 BOM 列，回傳 (有效明細, 被剔除的列)
    pub fn resolve(rows: &[RawBomRow]) -> (Vec<BomLine>, Vec<RawBomRow>) {
        let mut lines = Vec::with_capacity(rows.len());
        let mut dropped = Vec::new();

        for row in rows {
            match row.resolve() {
                Some(line) => lines.push(line),
                None => dropped.push(row.clone()),
            }
        }

        (lines, dropped)
    }

    /// 找出有需求卻沒有任何 BOM 明細的產品
    pub fn products_without_bom<I>(products: I, lines: &[BomLine]) -> Vec<u32>
    where
        I: IntoIterator<Item = u32>,
    {
        let covered: BTreeSet<u32> = lines.iter().map(|line| line.product_id).collect();

        let unique: BTreeSet<u32> = products.into_iter().collect();
        unique
            .into_iter()
            .filter(|product_id| !covered.contains(product_id))
            .collect()
    }
}
