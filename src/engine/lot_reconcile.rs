// ==========================================
// 车间生产追踪系统 - 批次对账引擎
// ==========================================
// 职责: 批次记录校验、推导量计算、班次汇总
// 红线: 校验失败快速返回首个违规原因，绝不静默纠正或默认填充
// 红线: 净产量不做下限截断，负值是损耗超报的检测信号
// ==========================================

use crate::domain::lot::{LotDerived, LotEntry, LotTotals};
use crate::engine::time_arith::{normalize_time_of_day, parse_hhmm};
use chrono::NaiveDate;
use thiserror::Error;
use tracing::instrument;

// ==========================================
// 批次校验错误
// ==========================================
// Display 即呈现给操作工的结构化原因（阻断保存）
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LotValidationError {
    #[error("批号不能为空")]
    EmptyLotNumber,

    #[error("生产日期缺失或无效")]
    InvalidProductionDate,

    #[error("制造日期缺失或无效")]
    InvalidManufactureDate,

    #[error("有效期缺失或无效")]
    InvalidExpiryDate,

    #[error("有效期不能早于制造日期: 制造={manufacture}, 有效期={expiry}")]
    ExpiryBeforeManufacture {
        manufacture: NaiveDate,
        expiry: NaiveDate,
    },

    #[error("开始时间无效: {0}")]
    InvalidStartTime(String),

    #[error("结束时间无效: {0}")]
    InvalidEndTime(String),

    #[error("计数器读数不能为负: {field}={value}")]
    NegativeCounter { field: &'static str, value: f64 },

    #[error("损耗数量不能为负: {0}")]
    NegativeLoss(f64),
}

// ==========================================
// LotReconcileEngine - 批次对账引擎
// ==========================================
pub struct LotReconcileEngine;

impl Default for LotReconcileEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl LotReconcileEngine {
    /// 创建批次对账引擎
    pub fn new() -> Self {
        Self
    }

    // ==========================================
    // 校验（快速失败，返回首个违规）
    // ==========================================

    /// 校验单条批次记录
    ///
    /// 规则顺序（命中即返回，匹配操作工逐字段纠错流程）:
    /// 1) 批号非空
    /// 2) 三个日期有效，且有效期 >= 制造日期
    /// 3) 起止时间均可归一化为完整 HH:MM（不允许仅录小时）
    /// 4) 计数器读数与损耗均非负
    pub fn validate_lot(&self, entry: &LotEntry) -> Result<(), LotValidationError> {
        if entry.lot_number.trim().is_empty() {
            return Err(LotValidationError::EmptyLotNumber);
        }

        if entry.production_date.is_none() {
            return Err(LotValidationError::InvalidProductionDate);
        }
        let manufacture = entry
            .manufacture_date
            .ok_or(LotValidationError::InvalidManufactureDate)?;
        let expiry = entry
            .expiry_date
            .ok_or(LotValidationError::InvalidExpiryDate)?;
        if expiry < manufacture {
            return Err(LotValidationError::ExpiryBeforeManufacture {
                manufacture,
                expiry,
            });
        }

        if normalize_time_of_day(&entry.start_time, false).is_none() {
            return Err(LotValidationError::InvalidStartTime(
                entry.start_time.clone(),
            ));
        }
        if normalize_time_of_day(&entry.end_time, false).is_none() {
            return Err(LotValidationError::InvalidEndTime(entry.end_time.clone()));
        }

        if entry.counter_start < 0.0 || !entry.counter_start.is_finite() {
            return Err(LotValidationError::NegativeCounter {
                field: "counter_start",
                value: entry.counter_start,
            });
        }
        if entry.counter_end < 0.0 || !entry.counter_end.is_finite() {
            return Err(LotValidationError::NegativeCounter {
                field: "counter_end",
                value: entry.counter_end,
            });
        }
        if entry.loss_qty < 0.0 || !entry.loss_qty.is_finite() {
            return Err(LotValidationError::NegativeLoss(entry.loss_qty));
        }

        Ok(())
    }

    // ==========================================
    // 推导量
    // ==========================================

    /// 计算单批次推导量
    ///
    /// produced = |counter_end - counter_start|
    /// （取绝对值: 计数器可能回绕，或因机台习惯按相反顺序抄表）
    /// net = produced - loss，不截断到 0。
    pub fn derive_lot_totals(&self, entry: &LotEntry) -> LotDerived {
        let produced = (entry.counter_end - entry.counter_start).abs();
        LotDerived {
            produced,
            net: produced - entry.loss_qty,
        }
    }

    // ==========================================
    // 班次汇总
    // ==========================================

    /// 对一个班次内的全部批次独立求和
    ///
    /// 求和可交换，与录入顺序无关；展示排序另见 sort_for_display。
    #[instrument(skip(self, entries), fields(count = entries.len()))]
    pub fn aggregate_lots(&self, entries: &[LotEntry]) -> LotTotals {
        let mut totals = LotTotals::default();
        for entry in entries {
            let derived = self.derive_lot_totals(entry);
            totals.counter_start += entry.counter_start;
            totals.counter_end += entry.counter_end;
            totals.produced += derived.produced;
            totals.loss += entry.loss_qty;
            totals.net += derived.net;
        }
        totals
    }

    /// 按时窗开始时间升序排列（展示用）
    ///
    /// 开始时间不可解析的记录排在最后，彼此保持原有顺序。
    pub fn sort_for_display(&self, entries: &mut [LotEntry]) {
        entries.sort_by_key(|e| parse_hhmm(&e.start_time).unwrap_or(u32::MAX));
    }
}
