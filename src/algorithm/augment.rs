//! 瓶颈计算与流量更新

use super::path_finder::AugmentingPath;
use crate::error::{Error, Result};
use crate::graph::{FlowNetwork, VertexId};
use crate::types::{Capacity, Direction};
use tracing::trace;

/// 路径上残量容量的最小值
pub fn bottleneck(network: &FlowNetwork, path: &AugmentingPath) -> Result<Capacity> {
    let mut min: Option<Capacity> = None;

    for (u, v) in path.segments() {
        let capacity = network
            .residual_edge(u, v)
            .ok_or_else(|| Error::internal(format!("残量图中缺少边 {} -> {}", u, v)))?
            .capacity();
        min = Some(min.map_or(capacity, |m| m.min(capacity)));
    }

    match min {
        None => Err(Error::internal("增广路径没有边")),
        Some(0) => Err(Error::internal("增广路径上存在残量为 0 的边")),
        Some(m) => Ok(m),
    }
}

/// 沿增广路径更新原始边流量与残量容量
pub struct FlowUpdater<'a> {
    network: &'a mut FlowNetwork,
}

impl<'a> FlowUpdater<'a> {
    pub fn new(network: &'a mut FlowNetwork) -> Self {
        Self { network }
    }

    /// 沿 `path` 推送 `amount` 单位流量
    ///
    /// 先校验所有路径段，全部可行后才写入；失败时网络保持不变
    pub fn apply(&mut self, path: &AugmentingPath, amount: Capacity) -> Result<()> {
        if amount == 0 {
            return Err(Error::internal("增广流量必须为正"));
        }
        let plans = path
            .segments()
            .map(|(u, v)| self.plan_segment(u, v, amount))
            .collect::<Result<Vec<_>>>()?;

        for plan in &plans {
            self.commit_segment(plan, amount)?;
            trace!(u = %plan.u, v = %plan.v, amount, direction = %plan.direction(), "更新路径段");
        }
        Ok(())
    }

    /// 校验一段 u -> v，不修改网络
    ///
    /// 先抵消原始边 v -> u 上的流量，剩余部分推送到原始边 u -> v
    fn plan_segment(&self, u: VertexId, v: VertexId, amount: Capacity) -> Result<SegmentPlan> {
        for id in [u, v] {
            if !self.network.contains(id) {
                return Err(Error::VertexNotFound(id));
            }
        }

        let back_flow = self.network.edge(v, u).map_or(0, |e| e.flow());
        let cancel = amount.min(back_flow);
        let push = amount - cancel;

        if push > 0 {
            let edge = self.network.edge(u, v).ok_or_else(|| {
                Error::internal(format!("{} 与 {} 之间没有可承载流量的原始边", u, v))
            })?;
            if edge.remaining() < push {
                return Err(Error::internal(format!(
                    "流量超过容量: {} + {} > {}",
                    edge.flow(),
                    push,
                    edge.capacity()
                )));
            }
        }

        let forward = self
            .network
            .residual_edge(u, v)
            .ok_or_else(|| Error::internal(format!("残量图中缺少边 {} -> {}", u, v)))?;
        if forward.capacity() < amount {
            return Err(Error::internal(format!(
                "残量容量变为负数: {} - {}",
                forward.capacity(),
                amount
            )));
        }
        let backward = self.network.residual_edge(v, u).map_or(0, |e| e.capacity());
        if backward.checked_add(amount).is_none() {
            return Err(Error::internal("残量容量溢出"));
        }

        Ok(SegmentPlan { u, v, cancel, push })
    }

    /// 写入已校验的路径段
    fn commit_segment(&mut self, plan: &SegmentPlan, amount: Capacity) -> Result<()> {
        let SegmentPlan { u, v, cancel, push } = *plan;

        if cancel > 0 {
            self.network
                .vertex_mut(v)?
                .edge_mut(u)
                .ok_or_else(|| Error::internal(format!("缺少原始边 {} -> {}", v, u)))?
                .cancel_flow(cancel)?;
        }
        if push > 0 {
            self.network
                .vertex_mut(u)?
                .edge_mut(v)
                .ok_or_else(|| {
                    Error::internal(format!("{} 与 {} 之间没有可承载流量的原始边", u, v))
                })?
                .push_flow(push)?;
        }

        self.network
            .vertex_mut(u)?
            .residual_edge_mut(v)
            .ok_or_else(|| Error::internal(format!("残量图中缺少边 {} -> {}", u, v)))?
            .shrink(amount)?;
        self.network.vertex_mut(v)?.residual_entry(u).grow(amount)
    }
}

/// 单个路径段的更新计划
#[derive(Debug, Clone, Copy)]
struct SegmentPlan {
    u: VertexId,
    v: VertexId,
    /// 在原始边 v -> u 上抵消的流量
    cancel: Capacity,
    /// 推送到原始边 u -> v 的流量
    push: Capacity,
}

impl SegmentPlan {
    fn direction(&self) -> Direction {
        if self.cancel > 0 {
            Direction::Backward
        } else {
            Direction::Forward
        }
    }
}
