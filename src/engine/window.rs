// ==========================================
// 车间生产追踪系统 - 时窗生成与缺口检测引擎
// ==========================================
// 职责: 把班次区间切分为标准小时时窗 + 判定哪些时窗尚未报工
// 红线: 时窗每次重算，不持久化；班次定义变更即时生效，无需迁移
// ==========================================

use crate::config::EngineConfig;
use crate::domain::shift::{HourWindow, ProductionRecord};
use crate::domain::types::WindowCoverage;
use crate::engine::time_arith::{format_hhmm, normalize_time_of_day, parse_hhmm};
use tracing::{debug, instrument};

// ==========================================
// WindowEngine - 时窗引擎
// ==========================================
pub struct WindowEngine {
    /// 仅弱匹配命中时是否记录数据质量信号
    log_weak_match: bool,
    /// 班次定义时刻是否允许仅录小时
    allow_hour_only_shift_times: bool,
}

impl Default for WindowEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl WindowEngine {
    /// 创建默认策略的时窗引擎
    pub fn new() -> Self {
        Self::with_config(&EngineConfig::default())
    }

    /// 按配置创建时窗引擎
    pub fn with_config(config: &EngineConfig) -> Self {
        Self {
            log_weak_match: config.log_weak_window_match,
            allow_hour_only_shift_times: config.allow_hour_only_shift_times,
        }
    }

    // ==========================================
    // 时窗生成
    // ==========================================

    /// 把班次起止时间切分为标准 1 小时报工时窗
    ///
    /// 算法:
    /// 1) 起止均归一化并转当日分钟数；任一端非法 → 空序列
    /// 2) end <= start → end += 1440（跨午夜班次）
    /// 3) 自 start 起按 60 分钟步进，末窗不足 60 分钟按余量截短
    ///
    /// 起止归一化后相同 → 空序列（退化班次，由调用方标记）。
    #[instrument(skip(self))]
    pub fn generate_hour_windows(&self, shift_start: &str, shift_end: &str) -> Vec<HourWindow> {
        let start_norm =
            match normalize_time_of_day(shift_start, self.allow_hour_only_shift_times) {
                Some(s) => s,
                None => return Vec::new(),
            };
        let end_norm = match normalize_time_of_day(shift_end, self.allow_hour_only_shift_times) {
            Some(s) => s,
            None => return Vec::new(),
        };

        // 归一化后必然可解析
        let start = match parse_hhmm(&start_norm) {
            Some(v) => v as i64,
            None => return Vec::new(),
        };
        let mut end = match parse_hhmm(&end_norm) {
            Some(v) => v as i64,
            None => return Vec::new(),
        };

        if start == end {
            // 退化班次: 起止同一时刻
            return Vec::new();
        }
        if end < start {
            end += 1440; // 跨午夜
        }

        let mut windows = Vec::with_capacity(((end - start) / 60 + 1) as usize);
        let mut cursor = start;
        while cursor < end {
            let next = (cursor + 60).min(end);
            windows.push(HourWindow::new(
                format_hhmm(cursor as u32),
                format_hhmm(next as u32),
            ));
            cursor = next;
        }
        windows
    }

    // ==========================================
    // 缺口检测
    // ==========================================

    /// 判定单个时窗的覆盖情况
    ///
    /// 双重匹配策略:
    /// - 精确: 记录归一化后的起止对 == 时窗键
    /// - 弱匹配: 仅归一化起始时间 == 时窗起始（容忍残缺记录）
    /// 起始时间不可解析的记录不匹配任何时窗（保守: 宁可重新标缺，
    /// 不可静默吞掉缺口）。
    pub fn coverage_of(&self, window: &HourWindow, records: &[ProductionRecord]) -> WindowCoverage {
        let mut weak_hit = false;

        for record in records {
            let rec_start = record
                .start_time
                .as_deref()
                .and_then(|s| normalize_time_of_day(s, false));
            let rec_start = match rec_start {
                Some(s) => s,
                None => continue, // 不可解析 → 不匹配任何时窗
            };

            if rec_start != window.start {
                continue;
            }

            let rec_end = record
                .end_time
                .as_deref()
                .and_then(|s| normalize_time_of_day(s, false));
            match rec_end {
                Some(e) if e == window.end => return WindowCoverage::Exact,
                _ => weak_hit = true,
            }
        }

        if weak_hit {
            WindowCoverage::StartOnly
        } else {
            WindowCoverage::Uncovered
        }
    }

    /// 返回尚未报工的时窗子序列
    ///
    /// 弱匹配也计入覆盖，但会发出数据质量信号（debug 日志），
    /// 供审计侧观察上游录入不一致。
    #[instrument(skip(self, windows, records), fields(windows = windows.len(), records = records.len()))]
    pub fn find_missing_windows(
        &self,
        windows: &[HourWindow],
        records: &[ProductionRecord],
    ) -> Vec<HourWindow> {
        windows
            .iter()
            .filter(|w| {
                let coverage = self.coverage_of(w, records);
                if coverage == WindowCoverage::StartOnly && self.log_weak_match {
                    debug!(
                        window_key = %w.key,
                        "时窗仅弱匹配命中（起始时间匹配、结束时间缺失或不一致）"
                    );
                }
                !coverage.is_covered()
            })
            .cloned()
            .collect()
    }
}
