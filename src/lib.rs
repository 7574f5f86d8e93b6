// ==========================================
// 车间生产追踪系统 - 核心库
// ==========================================
// 系统定位: 班次对账与 OEE 指标引擎（纯计算层）
// 边界: 不持久化、不渲染界面、不做鉴权与导航；
//       外部协作方装载数据、消费计算结果
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 值对象与类型
pub mod domain;

// 引擎层 - 纯计算业务规则
pub mod engine;

// 仓储层 - 外部协作方契约（仅接口）
pub mod repository;

// 配置层 - 容忍解析策略
pub mod config;

// 日志系统
pub mod logging;

// API 层 - 面向界面的业务接口
pub mod api;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::types::{ShiftStatus, WindowCoverage};

// 领域实体
pub use domain::{
    HourWindow, LotDerived, LotEntry, LotTotals, OeeInputs, OeeResult, ProductionRecord,
    ShiftContext, StoppageEntry,
};

// 引擎
pub use engine::{LotReconcileEngine, LotValidationError, OeeEngine, WindowEngine};

// 仓储契约
pub use repository::{
    LotRepository, ProductionRecordRepository, RepositoryError, ShiftRepositories,
    ShiftRepository, StoppageRepository,
};

// API
pub use api::{ApiError, ShiftOeeReport, ShiftReportApi};

// 配置
pub use config::EngineConfig;

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "车间生产追踪系统";

// 标准报工时窗长度（分钟）
pub const HOUR_WINDOW_MINUTES: u32 = 60;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
