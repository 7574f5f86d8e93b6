// ==========================================
// 车间生产追踪系统 - OEE 指标计算引擎
// ==========================================
// 职责: 由班次总时长/停机/产量/损耗/名义产速计算 A、P、Q 与 OEE
// 红线: 永不 panic、永不返回 NaN/Infinity——结果直接进入渲染路径
// 红线: OEE 恒等于三个已截断百分比的乘积 / 10000，不从原始量独立计算
// ==========================================

use crate::domain::oee::{OeeInputs, OeeResult};
use tracing::instrument;

// ==========================================
// OeeEngine - OEE 指标计算器
// ==========================================
pub struct OeeEngine;

impl Default for OeeEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl OeeEngine {
    /// 创建 OEE 计算器
    pub fn new() -> Self {
        Self
    }

    /// 计算班次 OEE 指标
    ///
    /// - Availability = (总时长 - 停机) / 总时长 × 100；总时长非正或
    ///   非有限 → 0（零保护，不是除法错误）
    /// - Performance = 实际产速 / 名义产速 × 100，实际产速 =
    ///   产量 / 净开动时间 × 60；净开动时间 ≤ 0 或名义产速 ≤ 0 → 0
    /// - Quality = (产量 - 损耗) / 产量 × 100，产量 > 0 才有定义，
    ///   否则按策略取 0（零产量班次不参与合格率评价，是显式决策）
    /// - OEE = A × P × Q / 10000
    ///
    /// 三个百分比均截断到 [0,100]；任何畸形数值输入一律坍缩到零保护。
    #[instrument(skip(self))]
    pub fn compute(&self, inputs: &OeeInputs) -> OeeResult {
        let total = inputs.total_shift_minutes;
        let stoppage = inputs.stoppage_minutes;
        let produced = inputs.produced_qty;
        let loss = inputs.loss_qty;
        let nominal = inputs.nominal_speed_uph;

        // 净开动时间（分钟），下限 0
        let net_operating = if total.is_finite() && stoppage.is_finite() {
            (total - stoppage).max(0.0)
        } else {
            0.0
        };

        // 时间开动率
        let availability = if total.is_finite() && total > 0.0 {
            clamp_pct((total - stoppage) / total * 100.0)
        } else {
            0.0
        };

        // 性能开动率
        let performance = if net_operating > 0.0 && nominal.is_finite() && nominal > 0.0 {
            let actual_rate_uph = produced / net_operating * 60.0;
            clamp_pct(actual_rate_uph / nominal * 100.0)
        } else {
            0.0
        };

        // 合格品率
        let quality = if produced.is_finite() && produced > 0.0 {
            clamp_pct((produced - loss) / produced * 100.0)
        } else {
            0.0
        };

        // OEE 只能由三个已截断百分比相乘得到（可测恒等式）
        let oee = availability * performance * quality / 10000.0;

        OeeResult {
            availability,
            performance,
            quality,
            oee,
            net_operating_minutes: net_operating,
            value_adding_minutes: net_operating * (performance / 100.0) * (quality / 100.0),
        }
    }
}

/// 百分比截断到 [0,100]；NaN/Infinity 一律归 0
fn clamp_pct(v: f64) -> f64 {
    if v.is_finite() {
        v.clamp(0.0, 100.0)
    } else {
        0.0
    }
}

// ==========================================
// 单元测试
// ==========================================
#[cfg(test)]
mod tests {
    use super::*;

    fn inputs(
        nominal: f64,
        total: f64,
        stoppage: f64,
        produced: f64,
        loss: f64,
    ) -> OeeInputs {
        OeeInputs {
            nominal_speed_uph: nominal,
            total_shift_minutes: total,
            stoppage_minutes: stoppage,
            produced_qty: produced,
            loss_qty: loss,
        }
    }

    /// 浮点近似比较
    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_reference_scenario() {
        // 班次 06:00-14:00 (480min)，停机60，名义产速100件/h，产量600，损耗30
        let engine = OeeEngine::new();
        let result = engine.compute(&inputs(100.0, 480.0, 60.0, 600.0, 30.0));

        assert!(approx(result.availability, 87.5), "A={}", result.availability);
        assert!(approx(result.net_operating_minutes, 420.0));
        // 实际产速 600/420×60 ≈ 85.714 → P ≈ 85.714
        assert!(
            (result.performance - 85.714285714).abs() < 1e-6,
            "P={}",
            result.performance
        );
        assert!(approx(result.quality, 95.0), "Q={}", result.quality);
        assert!((result.oee - 71.25).abs() < 0.05, "OEE={}", result.oee);
    }

    #[test]
    fn test_zero_total_shift_guard() {
        // 边界: 总时长为 0 → A=0，不抛错不产生 NaN
        let engine = OeeEngine::new();
        let result = engine.compute(&inputs(100.0, 0.0, 0.0, 100.0, 0.0));

        assert_eq!(result.availability, 0.0);
        assert!(result.oee.is_finite());
        assert_eq!(result.oee, 0.0);
    }

    #[test]
    fn test_oee_identity() {
        // 恒等式: OEE == A×P×Q/10000，对任意合法输入精确成立
        let engine = OeeEngine::new();
        let cases = [
            inputs(100.0, 480.0, 60.0, 600.0, 30.0),
            inputs(50.0, 720.0, 0.0, 500.0, 100.0),
            inputs(200.0, 480.0, 480.0, 0.0, 0.0),
            inputs(10.0, 60.0, 10.0, 5.0, 6.0),
        ];
        for c in &cases {
            let r = engine.compute(c);
            assert_eq!(
                r.oee,
                r.availability * r.performance * r.quality / 10000.0,
                "恒等式必须逐位成立"
            );
        }
    }

    #[test]
    fn test_idempotent_bit_identical() {
        let engine = OeeEngine::new();
        let i = inputs(100.0, 480.0, 60.0, 600.0, 30.0);
        assert_eq!(engine.compute(&i), engine.compute(&i), "同输入同输出");
    }

    #[test]
    fn test_stoppage_exceeds_total() {
        // 停机超过总时长 → A 截断到 0，净开动时间 0，P=0
        let engine = OeeEngine::new();
        let result = engine.compute(&inputs(100.0, 480.0, 600.0, 100.0, 0.0));

        assert_eq!(result.availability, 0.0);
        assert_eq!(result.net_operating_minutes, 0.0);
        assert_eq!(result.performance, 0.0);
        assert_eq!(result.oee, 0.0);
    }

    #[test]
    fn test_zero_production_quality_policy() {
        // 零产量班次不参与合格率评价 → Q=0（策略值）
        let engine = OeeEngine::new();
        let result = engine.compute(&inputs(100.0, 480.0, 0.0, 0.0, 0.0));

        assert_eq!(result.quality, 0.0);
        assert_eq!(result.performance, 0.0);
        assert_eq!(result.availability, 100.0);
        assert_eq!(result.oee, 0.0);
    }

    #[test]
    fn test_loss_exceeds_produced_clamps_quality() {
        // 损耗超过产量 → 原始比率为负 → Q 截断到 0
        let engine = OeeEngine::new();
        let result = engine.compute(&inputs(100.0, 480.0, 0.0, 100.0, 150.0));

        assert_eq!(result.quality, 0.0);
    }

    #[test]
    fn test_malformed_inputs_collapse_to_zero() {
        let engine = OeeEngine::new();
        for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY, -10.0] {
            let result = engine.compute(&inputs(100.0, bad, 0.0, 100.0, 0.0));
            assert_eq!(result.availability, 0.0, "total={}", bad);
            assert!(result.oee.is_finite());
        }
        // 名义产速畸形 → P=0
        let result = engine.compute(&inputs(f64::NAN, 480.0, 0.0, 100.0, 0.0));
        assert_eq!(result.performance, 0.0);
    }

    #[test]
    fn test_over_speed_clamps_performance() {
        // 实际产速超名义 → P 截断到 100
        let engine = OeeEngine::new();
        let result = engine.compute(&inputs(100.0, 60.0, 0.0, 200.0, 0.0));

        assert_eq!(result.performance, 100.0);
    }

    #[test]
    fn test_value_adding_minutes() {
        let engine = OeeEngine::new();
        let result = engine.compute(&inputs(100.0, 480.0, 60.0, 600.0, 30.0));

        // 增值时间 = 净开动 × P/100 × Q/100
        let expected =
            result.net_operating_minutes * result.performance / 100.0 * result.quality / 100.0;
        assert!(approx(result.value_adding_minutes, expected));
    }
}
