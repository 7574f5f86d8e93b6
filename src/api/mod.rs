// ==========================================
// 车间生产追踪系统 - API 层
// ==========================================
// 职责: 面向界面的业务接口；编排引擎与仓储契约
// ==========================================

pub mod error;
pub mod shift_api;

pub use error::{ApiError, ApiResult};
pub use shift_api::{ShiftOeeReport, ShiftReportApi};
