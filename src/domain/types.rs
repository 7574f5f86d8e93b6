// ==========================================
// 车间生产追踪系统 - 领域类型定义
// ==========================================
// 职责: 班次生命周期状态与时窗覆盖类型
// 序列化格式: SCREAMING_SNAKE_CASE (与数据库一致)
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 班次状态 (Shift Status)
// ==========================================
// 状态决定是否允许继续录入批次/停机记录
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ShiftStatus {
    Open,      // 开班中
    Closed,    // 已收班
    Cancelled, // 已作废
}

impl fmt::Display for ShiftStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShiftStatus::Open => write!(f, "OPEN"),
            ShiftStatus::Closed => write!(f, "CLOSED"),
            ShiftStatus::Cancelled => write!(f, "CANCELLED"),
        }
    }
}

impl ShiftStatus {
    /// 从字符串解析状态
    pub fn from_str(s: &str) -> Self {
        match s.to_uppercase().as_str() {
            "OPEN" => ShiftStatus::Open,
            "CLOSED" => ShiftStatus::Closed,
            "CANCELLED" => ShiftStatus::Cancelled,
            _ => ShiftStatus::Cancelled, // 未知状态一律视为不可录入
        }
    }

    /// 转换为数据库存储的字符串
    pub fn to_db_str(&self) -> &'static str {
        match self {
            ShiftStatus::Open => "OPEN",
            ShiftStatus::Closed => "CLOSED",
            ShiftStatus::Cancelled => "CANCELLED",
        }
    }

    /// 该状态是否允许继续录入新记录
    pub fn accepts_entries(&self) -> bool {
        matches!(self, ShiftStatus::Open)
    }
}

// ==========================================
// 时窗覆盖类型 (Window Coverage)
// ==========================================
// 缺口检测的匹配结论:
// - Exact: 记录的起止时间对与时窗键完全一致
// - StartOnly: 仅起始时间匹配（容忍残缺记录的弱匹配）
// - Uncovered: 无任何记录覆盖该时窗
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WindowCoverage {
    Exact,
    StartOnly,
    Uncovered,
}

impl fmt::Display for WindowCoverage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WindowCoverage::Exact => write!(f, "EXACT"),
            WindowCoverage::StartOnly => write!(f, "START_ONLY"),
            WindowCoverage::Uncovered => write!(f, "UNCOVERED"),
        }
    }
}

impl WindowCoverage {
    /// 是否视为已覆盖（弱匹配也计入覆盖）
    pub fn is_covered(&self) -> bool {
        !matches!(self, WindowCoverage::Uncovered)
    }
}
