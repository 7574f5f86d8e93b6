// ==========================================
// 车间生产追踪系统 - 班次领域实体
// ==========================================
// 职责: 班次上下文、小时时窗、产量记录、停机记录
// 说明: 本层全部为值对象，由调用方持有；核心不跨调用保留状态
// ==========================================

use crate::domain::types::ShiftStatus;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ==========================================
// ShiftContext - 班次上下文
// ==========================================
// 由外部协作方在开班时装载；对本核心只读。
// status 决定是否接受新录入（见 ShiftStatus::accepts_entries）。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShiftContext {
    /// 班次实例ID
    pub shift_id: String,
    /// 班次日期
    pub shift_date: NaiveDate,
    /// 班次定义ID（早班/中班/夜班等）
    pub definition_id: String,
    /// 班次定义名称
    pub definition_label: String,
    /// 名义开始时间 "HH:MM"
    pub start_time: String,
    /// 名义结束时间 "HH:MM"（可跨午夜）
    pub end_time: String,
    /// 产线ID
    pub line_id: String,
    /// 产线名称
    pub line_name: String,
    /// 产品ID
    pub product_id: String,
    /// 产品名称
    pub product_name: String,
    /// 名义产速（件/小时），缺失时性能率按零保护处理
    pub nominal_speed_uph: Option<f64>,
    /// 生命周期状态
    pub status: ShiftStatus,
}

// ==========================================
// HourWindow - 小时报工时窗
// ==========================================
// 由班次起止时间确定性推导，每次重算，永不持久化。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourWindow {
    /// 复合键 "{start}-{end}"
    pub key: String,
    /// 时窗开始 "HH:MM"
    pub start: String,
    /// 时窗结束 "HH:MM"
    pub end: String,
}

impl HourWindow {
    /// 由起止时间构造时窗（键为 "{start}-{end}"）
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        let start = start.into();
        let end = end.into();
        Self {
            key: format!("{}-{}", start, end),
            start,
            end,
        }
    }
}

// ==========================================
// ProductionRecord - 已报工时窗产量
// ==========================================
// 外部供给；起止时间可能缺失或畸形，缺口检测必须容忍。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductionRecord {
    /// 报工时窗开始（原始文本，可能缺失/畸形）
    pub start_time: Option<String>,
    /// 报工时窗结束（原始文本，可能缺失/畸形）
    pub end_time: Option<String>,
    /// 该时窗产出数量
    pub produced_qty: f64,
}

// ==========================================
// StoppageEntry - 停机记录
// ==========================================
// 时长只做推导展示，操作工不直接录入。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoppageEntry {
    /// 停机类型代码（已匹配的原因分类）
    pub stoppage_code: String,
    /// 停机开始 "HH:MM"
    pub start_time: String,
    /// 停机结束 "HH:MM"
    pub end_time: String,
    /// 备注
    pub note: Option<String>,
}
