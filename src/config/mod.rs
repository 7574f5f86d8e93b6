// ==========================================
// 车间生产追踪系统 - 配置层
// ==========================================
// 职责: 容忍解析策略与数据质量信号的开关配置
// 存储: 由外围应用以 JSON 形式下发；本层只做解析与快照
// ==========================================

use serde::{Deserialize, Serialize};

// ==========================================
// EngineConfig - 引擎配置
// ==========================================
// 不同字段族对"仅录小时"的容忍度不同:
// 班次定义时刻可以粗录，停机/批次时刻要求完整精度。
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// 班次定义时刻是否允许仅录小时（如 "6" → "06:00"）
    pub allow_hour_only_shift_times: bool,
    /// 停机时刻是否允许仅录小时
    pub allow_hour_only_stoppage_times: bool,
    /// 时窗仅弱匹配命中时是否发出数据质量日志
    pub log_weak_window_match: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            allow_hour_only_shift_times: true,
            allow_hour_only_stoppage_times: false,
            log_weak_window_match: true,
        }
    }
}

impl EngineConfig {
    /// 从 JSON 文本解析配置（缺失字段取默认值）
    pub fn from_json_str(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// 导出配置快照（JSON），供版本记录/审计
    pub fn snapshot_json(&self) -> serde_json::Value {
        serde_json::json!({
            "allow_hour_only_shift_times": self.allow_hour_only_shift_times,
            "allow_hour_only_stoppage_times": self.allow_hour_only_stoppage_times,
            "log_weak_window_match": self.log_weak_window_match,
        })
    }
}
