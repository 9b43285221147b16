//! 求解指标收集
//!
//! 记录单次最大流求解的增广次数、推送流量与耗时

use crate::types::Capacity;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

/// 单次求解的指标收集器
#[derive(Debug)]
pub struct SolveMetrics {
    /// 增广次数
    augmentations: u64,
    /// 累计推送流量
    total_pushed: Capacity,
    /// 残量图重建次数
    residual_rebuilds: u64,
    /// 最近一次重建后的残量边数
    residual_edges: usize,
    /// 开始时间
    start_time: Instant,
}

/// 求解报告（指标快照）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolveReport {
    /// 求解后从源点流出的总流量
    pub value: Capacity,
    /// 本次求解增加的流量
    pub total_pushed: Capacity,
    pub augmentations: u64,
    pub residual_rebuilds: u64,
    pub residual_edges: usize,
    /// 耗时（微秒）
    pub elapsed_us: u64,
}

impl SolveMetrics {
    /// 开始计时
    pub fn start() -> Self {
        Self {
            augmentations: 0,
            total_pushed: 0,
            residual_rebuilds: 0,
            residual_edges: 0,
            start_time: Instant::now(),
        }
    }

    /// 记录一次残量图重建
    pub fn record_rebuild(&mut self, residual_edges: usize) {
        self.residual_rebuilds += 1;
        self.residual_edges = residual_edges;
    }

    /// 记录一次增广
    pub fn record_augmentation(&mut self, amount: Capacity) {
        self.augmentations += 1;
        self.total_pushed = self.total_pushed.saturating_add(amount);
    }

    pub fn augmentations(&self) -> u64 {
        self.augmentations
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }

    /// 生成报告
    pub fn finish(&self, value: Capacity) -> SolveReport {
        SolveReport {
            value,
            total_pushed: self.total_pushed,
            augmentations: self.augmentations,
            residual_rebuilds: self.residual_rebuilds,
            residual_edges: self.residual_edges,
            elapsed_us: saturating_micros(self.elapsed()),
        }
    }
}

/// 微秒数，超出 u64 时取上限
fn saturating_micros(duration: Duration) -> u64 {
    u64::try_from(duration.as_micros()).unwrap_or(u64::MAX)
}
