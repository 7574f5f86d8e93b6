// ==========================================
// 车间生产追踪系统 - 引擎层
// ==========================================
// 职责: 纯计算业务规则；无 I/O、无共享可变状态、无挂起点
// 红线: 同输入必同输出（引用透明），界面可随键击任意重算
// ==========================================

pub mod lot_reconcile;
pub mod oee;
pub mod time_arith;
pub mod window;

// 重导出核心引擎
pub use lot_reconcile::{LotReconcileEngine, LotValidationError};
pub use oee::OeeEngine;
pub use time_arith::{
    duration_minutes, format_duration, format_hhmm, normalize_time_of_day, parse_hhmm,
};
pub use window::WindowEngine;
