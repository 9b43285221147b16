//! 错误类型定义

use crate::graph::VertexId;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("未设置源点或汇点")]
    NoSourceOrSink,

    #[error("无效配置: {0}")]
    InvalidConfiguration(String),

    #[error("顶点不存在: {0}")]
    VertexNotFound(VertexId),

    #[error("内部一致性错误: {0}")]
    InternalConsistency(String),
}

impl Error {
    /// 调用方输入错误（可修正后重试）
    pub fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            Error::NoSourceOrSink | Error::InvalidConfiguration(_) | Error::VertexNotFound(_)
        )
    }

    /// 簿记缺陷（程序错误，不应重试）
    pub fn is_defect(&self) -> bool {
        matches!(self, Error::InternalConsistency(_))
    }

    pub(crate) fn internal(msg: impl Into<String>) -> Self {
        Error::InternalConsistency(msg.into())
    }
}
