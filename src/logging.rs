// ==========================================
// 车间生产追踪系统 - 日志系统
// ==========================================
// 使用 tracing 和 tracing-subscriber
// 数据质量信号（时窗弱匹配、停机时间不可解析）走 debug/warn 级别，
// 默认过滤器对本 crate 单独给定级别
// ==========================================

use tracing_subscriber::{fmt, EnvFilter};

/// 默认过滤指令: 外部依赖 info，本 crate info
const DEFAULT_DIRECTIVES: &str = "info,plant_tracking_oee=info";

/// 测试环境过滤指令: 对本 crate 放开 debug，暴露数据质量信号
const TEST_DIRECTIVES: &str = "plant_tracking_oee=debug";

/// 初始化日志系统
///
/// # 环境变量
/// - RUST_LOG: 日志级别过滤器（默认: info,plant_tracking_oee=info）
///   例如: RUST_LOG=plant_tracking_oee=debug 可观察时窗弱匹配信号
///
/// # 示例
/// ```no_run
/// use plant_tracking_oee::logging;
/// logging::init();
/// ```
pub fn init() {
    // 从环境变量读取日志级别，缺省回退到本 crate 的默认指令
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVES));

    // 配置日志格式
    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_line_number(true)
        .init();
}

/// 初始化测试环境的日志系统
///
/// 对本 crate 放开 debug 级别，便于在测试输出里观察
/// 时窗弱匹配等数据质量信号；可重复调用，只有首次生效
pub fn init_test() {
    let _ = fmt()
        .with_env_filter(EnvFilter::new(TEST_DIRECTIVES))
        .with_test_writer()
        .try_init();
}
