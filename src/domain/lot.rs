// ==========================================
// 车间生产追踪系统 - 批次领域实体
// ==========================================
// 职责: 生产批次记录与批次汇总值对象
// 说明: 产量由循环计数器差值推导，净产量不做下限截断
// ==========================================

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ==========================================
// LotEntry - 生产批次记录
// ==========================================
// 操作工通过界面录入；本核心负责校验/推导/汇总，不负责持久化。
// 日期字段由上游映射为 NaiveDate，缺失即 None（校验时拦截）。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LotEntry {
    /// 持久化句柄，提交时由API层分配
    pub lot_id: Option<String>,
    /// 批号（非空）
    pub lot_number: String,
    /// 生产日期
    pub production_date: Option<NaiveDate>,
    /// 制造日期
    pub manufacture_date: Option<NaiveDate>,
    /// 有效期（不得早于制造日期）
    pub expiry_date: Option<NaiveDate>,
    /// 批次开始时间（原始文本，须可归一化为 HH:MM）
    pub start_time: String,
    /// 批次结束时间（原始文本，须可归一化为 HH:MM）
    pub end_time: String,
    /// 时窗开始时的循环计数器读数
    pub counter_start: f64,
    /// 时窗结束时的循环计数器读数
    pub counter_end: f64,
    /// 上报损耗数量
    pub loss_qty: f64,
}

// ==========================================
// LotDerived - 单批次推导量
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LotDerived {
    /// 产出数量 = |counter_end - counter_start|
    pub produced: f64,
    /// 净产量 = produced - loss（允许为负，负值是损耗超报的信号）
    pub net: f64,
}

// ==========================================
// LotTotals - 班次批次汇总
// ==========================================
// 各字段独立求和（可交换，与录入顺序无关）。
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LotTotals {
    /// 起始计数器读数合计
    pub counter_start: f64,
    /// 结束计数器读数合计
    pub counter_end: f64,
    /// 产出数量合计
    pub produced: f64,
    /// 损耗数量合计
    pub loss: f64,
    /// 净产量合计
    pub net: f64,
}
