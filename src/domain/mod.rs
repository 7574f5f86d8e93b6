// ==========================================
// 车间生产追踪系统 - 领域层
// ==========================================
// 职责: 定义全部值对象；核心引擎只在这些类型上做纯计算
// ==========================================

pub mod lot;
pub mod oee;
pub mod shift;
pub mod types;

// 重导出领域实体
pub use lot::{LotDerived, LotEntry, LotTotals};
pub use oee::{OeeInputs, OeeResult};
pub use shift::{HourWindow, ProductionRecord, ShiftContext, StoppageEntry};
pub use types::{ShiftStatus, WindowCoverage};
