// ==========================================
// 车间生产追踪系统 - 班次报工 API
// ==========================================
// 职责: 面向界面事件处理器的编排层
// 流程: 从协作方装载一致快照 → 调用纯引擎 → 把计算结果/校验
//       原因返回给界面；通过校验的新记录经仓储契约写回
// ==========================================

use crate::api::error::{ApiError, ApiResult};
use crate::config::EngineConfig;
use crate::domain::lot::{LotEntry, LotTotals};
use crate::domain::oee::{OeeInputs, OeeResult};
use crate::domain::shift::{HourWindow, ShiftContext, StoppageEntry};
use crate::engine::lot_reconcile::LotReconcileEngine;
use crate::engine::oee::OeeEngine;
use crate::engine::time_arith::{duration_minutes, normalize_time_of_day};
use crate::engine::window::WindowEngine;
use crate::repository::ShiftRepositories;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{info, instrument, warn};
use uuid::Uuid;

// ==========================================
// ShiftOeeReport - 班次OEE报告
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShiftOeeReport {
    /// 班次ID
    pub shift_id: String,
    /// OEE 计算结果
    pub result: OeeResult,
    /// 批次汇总
    pub totals: LotTotals,
    /// 尚未报工的时窗键
    pub missing_window_keys: Vec<String>,
    /// 对账摘要（追溯用）
    pub summary: serde_json::Value,
}

// ==========================================
// ShiftReportApi - 班次报工接口
// ==========================================
pub struct ShiftReportApi {
    repos: ShiftRepositories,
    config: EngineConfig,
    window_engine: WindowEngine,
    lot_engine: LotReconcileEngine,
    oee_engine: OeeEngine,
}

impl ShiftReportApi {
    /// 创建班次报工接口
    pub fn new(repos: ShiftRepositories, config: EngineConfig) -> Self {
        let window_engine = WindowEngine::with_config(&config);
        Self {
            repos,
            config,
            window_engine,
            lot_engine: LotReconcileEngine::new(),
            oee_engine: OeeEngine::new(),
        }
    }

    // ==========================================
    // 内部辅助
    // ==========================================

    /// 装载班次上下文；不存在 → NotFound
    async fn load_shift(&self, shift_id: &str) -> ApiResult<ShiftContext> {
        self.repos
            .shift_repo
            .find_shift(shift_id)
            .await?
            .ok_or_else(|| ApiError::NotFound(format!("班次(id={})不存在", shift_id)))
    }

    /// 录入门禁: 仅 OPEN 状态接受新记录
    fn ensure_accepts(&self, shift: &ShiftContext) -> ApiResult<()> {
        if shift.status.accepts_entries() {
            Ok(())
        } else {
            Err(ApiError::ShiftNotAccepting {
                shift_id: shift.shift_id.clone(),
                status: shift.status.to_db_str().to_string(),
            })
        }
    }

    /// 汇总班次停机总时长（分钟）
    ///
    /// 起止不可解析的停机记录按 0 计入并告警，不阻断报告生成。
    fn sum_stoppage_minutes(&self, shift_id: &str, stoppages: &[StoppageEntry]) -> f64 {
        let mut total = 0.0;
        for stoppage in stoppages {
            match duration_minutes(&stoppage.start_time, &stoppage.end_time) {
                Some(m) => total += m as f64,
                None => warn!(
                    shift_id,
                    stoppage_code = %stoppage.stoppage_code,
                    start = %stoppage.start_time,
                    end = %stoppage.end_time,
                    "停机记录起止时间不可解析，按0分钟计入"
                ),
            }
        }
        total
    }

    // ==========================================
    // 缺口报告
    // ==========================================

    /// 返回班次中尚未报工的小时时窗
    #[instrument(skip(self))]
    pub async fn missing_windows(&self, shift_id: &str) -> ApiResult<Vec<HourWindow>> {
        let shift = self.load_shift(shift_id).await?;

        let windows = self
            .window_engine
            .generate_hour_windows(&shift.start_time, &shift.end_time);
        if windows.is_empty() {
            return Err(ApiError::BusinessRuleViolation(format!(
                "班次起止时间退化或无效: start={}, end={}",
                shift.start_time, shift.end_time
            )));
        }

        let records = self.repos.record_repo.list_by_shift(shift_id).await?;
        Ok(self.window_engine.find_missing_windows(&windows, &records))
    }

    // ==========================================
    // 批次提交
    // ==========================================

    /// 提交一条批次记录
    ///
    /// 门禁 → 快速失败校验 → 分配持久化句柄 → 写回。
    /// 校验失败以结构化原因返回并阻断保存，绝不默认纠正。
    #[instrument(skip(self, entry), fields(lot_number = %entry.lot_number))]
    pub async fn submit_lot(&self, shift_id: &str, mut entry: LotEntry) -> ApiResult<LotEntry> {
        let shift = self.load_shift(shift_id).await?;
        self.ensure_accepts(&shift)?;

        self.lot_engine
            .validate_lot(&entry)
            .map_err(|e| ApiError::ValidationError(e.to_string()))?;

        if entry.lot_id.is_none() {
            entry.lot_id = Some(Uuid::new_v4().to_string());
        }

        self.repos.lot_repo.save(shift_id, &entry).await?;
        info!(shift_id, lot_id = ?entry.lot_id, "批次提交成功");
        Ok(entry)
    }

    // ==========================================
    // 停机提交
    // ==========================================

    /// 提交一条停机记录，返回推导时长（分钟）
    ///
    /// 起止时间按配置的容忍度归一化后写回；时长只推导不录入。
    #[instrument(skip(self, entry), fields(stoppage_code = %entry.stoppage_code))]
    pub async fn submit_stoppage(
        &self,
        shift_id: &str,
        mut entry: StoppageEntry,
    ) -> ApiResult<i64> {
        let shift = self.load_shift(shift_id).await?;
        self.ensure_accepts(&shift)?;

        let allow_hour_only = self.config.allow_hour_only_stoppage_times;
        let start = normalize_time_of_day(&entry.start_time, allow_hour_only)
            .ok_or_else(|| ApiError::InvalidInput(format!("停机开始时间无效: {}", entry.start_time)))?;
        let end = normalize_time_of_day(&entry.end_time, allow_hour_only)
            .ok_or_else(|| ApiError::InvalidInput(format!("停机结束时间无效: {}", entry.end_time)))?;

        // 归一化后必然可解析
        let minutes = duration_minutes(&start, &end).ok_or_else(|| {
            ApiError::InternalError(format!("停机时长计算失败: {}-{}", start, end))
        })?;

        entry.start_time = start;
        entry.end_time = end;
        self.repos.stoppage_repo.save(shift_id, &entry).await?;
        info!(shift_id, minutes, "停机记录提交成功");
        Ok(minutes)
    }

    // ==========================================
    // OEE 报告
    // ==========================================

    /// 生成班次 OEE 报告
    ///
    /// 装载班次/批次/停机/时窗记录的一致快照，拼装 OeeInputs，
    /// 返回指标结果与对账摘要。名义产速缺失流入性能率零保护。
    #[instrument(skip(self))]
    pub async fn shift_oee(&self, shift_id: &str) -> ApiResult<ShiftOeeReport> {
        let shift = self.load_shift(shift_id).await?;

        let lots = self.repos.lot_repo.list_by_shift(shift_id).await?;
        let stoppages = self.repos.stoppage_repo.list_by_shift(shift_id).await?;
        let records = self.repos.record_repo.list_by_shift(shift_id).await?;

        let totals = self.lot_engine.aggregate_lots(&lots);
        let stoppage_minutes = self.sum_stoppage_minutes(shift_id, &stoppages);
        let total_shift_minutes = duration_minutes(&shift.start_time, &shift.end_time)
            .map(|m| m as f64)
            .unwrap_or(0.0); // 不可解析 → 流入时间开动率零保护

        let inputs = OeeInputs {
            nominal_speed_uph: shift.nominal_speed_uph.unwrap_or(0.0),
            total_shift_minutes,
            stoppage_minutes,
            produced_qty: totals.produced,
            loss_qty: totals.loss,
        };
        let result = self.oee_engine.compute(&inputs);

        let windows = self
            .window_engine
            .generate_hour_windows(&shift.start_time, &shift.end_time);
        let missing_window_keys: Vec<String> = self
            .window_engine
            .find_missing_windows(&windows, &records)
            .into_iter()
            .map(|w| w.key)
            .collect();

        let summary = json!({
            "shift_id": shift.shift_id,
            "line_id": shift.line_id,
            "product_id": shift.product_id,
            "total_shift_minutes": total_shift_minutes,
            "stoppage_minutes": stoppage_minutes,
            "lot_count": lots.len(),
            "totals": totals,
            "missing_windows": missing_window_keys,
            "config": self.config.snapshot_json(),
        });

        Ok(ShiftOeeReport {
            shift_id: shift.shift_id,
            result,
            totals,
            missing_window_keys,
            summary,
        })
    }
}
