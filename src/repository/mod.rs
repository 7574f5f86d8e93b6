// ==========================================
// 车间生产追踪系统 - 仓储层（仅接口）
// ==========================================
// 职责: 声明外部协作方的数据访问契约
// 红线: 本核心不实现持久化；实现方（关系库/REST）由外围应用注入
// ==========================================

pub mod error;

pub use error::{RepositoryError, RepositoryResult};

use crate::domain::lot::LotEntry;
use crate::domain::shift::{ProductionRecord, ShiftContext, StoppageEntry};
use async_trait::async_trait;
use std::sync::Arc;

// ==========================================
// 协作方契约
// ==========================================

/// 班次仓储契约
#[async_trait]
pub trait ShiftRepository: Send + Sync {
    /// 按ID查找班次上下文；不存在返回 Ok(None)
    async fn find_shift(&self, shift_id: &str) -> RepositoryResult<Option<ShiftContext>>;
}

/// 时窗产量记录仓储契约
#[async_trait]
pub trait ProductionRecordRepository: Send + Sync {
    /// 列出班次下全部已报工时窗记录
    async fn list_by_shift(&self, shift_id: &str) -> RepositoryResult<Vec<ProductionRecord>>;
}

/// 批次仓储契约
#[async_trait]
pub trait LotRepository: Send + Sync {
    /// 列出班次下全部批次
    async fn list_by_shift(&self, shift_id: &str) -> RepositoryResult<Vec<LotEntry>>;

    /// 持久化一条已通过校验的批次
    async fn save(&self, shift_id: &str, entry: &LotEntry) -> RepositoryResult<()>;
}

/// 停机仓储契约
#[async_trait]
pub trait StoppageRepository: Send + Sync {
    /// 列出班次下全部停机记录
    async fn list_by_shift(&self, shift_id: &str) -> RepositoryResult<Vec<StoppageEntry>>;

    /// 持久化一条已通过校验的停机记录
    async fn save(&self, shift_id: &str, entry: &StoppageEntry) -> RepositoryResult<()>;
}

// ==========================================
// ShiftRepositories - 仓储聚合
// ==========================================
// 把 API 层需要的 4 个仓储合并为 1 个结构体参数，
// 便于依赖注入与测试时整体 mock。
#[derive(Clone)]
pub struct ShiftRepositories {
    /// 班次仓储
    pub shift_repo: Arc<dyn ShiftRepository>,
    /// 时窗产量记录仓储
    pub record_repo: Arc<dyn ProductionRecordRepository>,
    /// 批次仓储
    pub lot_repo: Arc<dyn LotRepository>,
    /// 停机仓储
    pub stoppage_repo: Arc<dyn StoppageRepository>,
}

impl ShiftRepositories {
    /// 创建新的仓储聚合
    pub fn new(
        shift_repo: Arc<dyn ShiftRepository>,
        record_repo: Arc<dyn ProductionRecordRepository>,
        lot_repo: Arc<dyn LotRepository>,
        stoppage_repo: Arc<dyn StoppageRepository>,
    ) -> Self {
        Self {
            shift_repo,
            record_repo,
            lot_repo,
            stoppage_repo,
        }
    }
}
