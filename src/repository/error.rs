// ==========================================
// 车间生产追踪系统 - 仓储层错误类型
// ==========================================
// 职责: 外部数据协作方（关系库/REST）的错误分类
// 说明: 本核心不做持久化，仓储实现由外围应用提供
// ==========================================

use thiserror::Error;

/// 仓储层错误类型
#[derive(Error, Debug)]
pub enum RepositoryError {
    #[error("资源未找到: {entity}(id={id})")]
    NotFound { entity: String, id: String },

    #[error("数据库查询错误: {0}")]
    DatabaseQueryError(String),

    #[error("数据库连接失败: {0}")]
    DatabaseConnectionError(String),

    #[error("数据验证失败: {0}")]
    ValidationError(String),

    #[error("内部错误: {0}")]
    InternalError(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result 类型别名
pub type RepositoryResult<T> = Result<T, RepositoryError>;
