// ==========================================
// 车间生产追踪系统 - OEE 领域值对象
// ==========================================
// 职责: OEE 计算的输入聚合与结果快照
// ==========================================

use serde::{Deserialize, Serialize};

// ==========================================
// OeeInputs - 指标计算输入聚合
// ==========================================
// 由时窗/批次/停机三路汇总拼装；计算器只消费此聚合，
// 不依赖各模块内部结构。
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OeeInputs {
    /// 名义产速（件/小时）
    pub nominal_speed_uph: f64,
    /// 班次总时长（分钟）
    pub total_shift_minutes: f64,
    /// 停机总时长（分钟）
    pub stoppage_minutes: f64,
    /// 产出总量
    pub produced_qty: f64,
    /// 质量损耗总量
    pub loss_qty: f64,
}

// ==========================================
// OeeResult - 指标计算结果
// ==========================================
// 三个百分比均截断到 [0,100]；OEE 恒等于 A×P×Q/10000。
// 两个推导时长用于追溯展示。
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OeeResult {
    /// 时间开动率（%）
    pub availability: f64,
    /// 性能开动率（%）
    pub performance: f64,
    /// 合格品率（%）
    pub quality: f64,
    /// OEE = availability × performance × quality / 10000
    pub oee: f64,
    /// 净开动时间（分钟）= 班次总时长 - 停机时长，下限 0
    pub net_operating_minutes: f64,
    /// 增值时间（分钟）= 净开动时间 × P/100 × Q/100
    pub value_adding_minutes: f64,
}
