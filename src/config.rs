//! 求解配置

use serde::{Deserialize, Serialize};

/// 最大流求解配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    /// 单次求解允许的最大增广次数，超出视为内部缺陷（None 表示不限制）
    pub max_augmentations: Option<u64>,
    /// 求解结束后校验容量约束与流量守恒
    pub verify_on_completion: bool,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            max_augmentations: None,
            verify_on_completion: cfg!(debug_assertions),
        }
    }
}

impl SolverConfig {
    pub fn with_max_augmentations(mut self, limit: u64) -> Self {
        self.max_augmentations = Some(limit);
        self
    }

    pub fn with_verification(mut self, enabled: bool) -> Self {
        self.verify_on_completion = enabled;
        self
    }
}
