//! 二分匹配模型
//!
//! 把工作狂与拖延者的配对问题构造成流网络：
//! 源点 -> 每个工作狂（容量 1），工作狂 -> 其朋友拖延者（容量 1），
//! 每个拖延者 -> 汇点（容量 1）。最大流值即最大匹配数。

use crate::error::{Error, Result};
use crate::graph::{FlowNetwork, VertexId};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

/// 一对匹配：(工作狂 ID, 拖延者 ID)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pair {
    pub workaholic: u64,
    pub procrastinator: u64,
}

/// 匹配结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Matching {
    /// 匹配数（等于最大流值）
    pub size: u64,
    /// 匹配对，按工作狂输入顺序排列
    pub pairs: Vec<Pair>,
}

/// 匹配模型
#[derive(Debug, Clone)]
pub struct MatchingModel {
    network: FlowNetwork,
    source: VertexId,
    sink: VertexId,
    /// (工作狂 ID, 顶点)
    workaholics: Vec<(u64, VertexId)>,
    /// (拖延者 ID, 顶点)
    procrastinators: Vec<(u64, VertexId)>,
}

impl MatchingModel {
    /// 构造匹配模型
    ///
    /// `friendships` 中每项为 (工作狂下标, 拖延者下标)，下标越界返回 `InvalidConfiguration`
    pub fn generate(
        workaholics: &[u64],
        procrastinators: &[u64],
        friendships: &[(usize, usize)],
    ) -> Result<Self> {
        let mut network = FlowNetwork::new();
        let source = network.add_named_vertex("source");
        let sink = network.add_named_vertex("sink");

        let workaholics: Vec<(u64, VertexId)> = workaholics
            .iter()
            .map(|&id| (id, network.add_named_vertex(format!("w{}", id))))
            .collect();
        let procrastinators: Vec<(u64, VertexId)> = procrastinators
            .iter()
            .map(|&id| (id, network.add_named_vertex(format!("p{}", id))))
            .collect();

        for &(_, w) in &workaholics {
            network.add_unit_edge(source, w)?;
        }
        for &(wi, pi) in friendships {
            let (_, w) = workaholics.get(wi).ok_or_else(|| {
                Error::InvalidConfiguration(format!("工作狂下标越界: {}", wi))
            })?;
            let (_, p) = procrastinators.get(pi).ok_or_else(|| {
                Error::InvalidConfiguration(format!("拖延者下标越界: {}", pi))
            })?;
            network.add_unit_edge(*w, *p)?;
        }
        for &(_, p) in &procrastinators {
            network.add_unit_edge(p, sink)?;
        }

        network.set_source(source)?;
        network.set_sink(sink)?;

        debug!(
            workaholics = workaholics.len(),
            procrastinators = procrastinators.len(),
            friendships = friendships.len(),
            "匹配模型已构建"
        );

        Ok(Self {
            network,
            source,
            sink,
            workaholics,
            procrastinators,
        })
    }

    pub fn network(&self) -> &FlowNetwork {
        &self.network
    }

    pub fn network_mut(&mut self) -> &mut FlowNetwork {
        &mut self.network
    }

    pub fn into_network(self) -> FlowNetwork {
        self.network
    }

    pub fn source(&self) -> VertexId {
        self.source
    }

    pub fn sink(&self) -> VertexId {
        self.sink
    }

    /// 第 `index` 个工作狂对应的顶点
    pub fn workaholic_vertex(&self, index: usize) -> Option<VertexId> {
        self.workaholics.get(index).map(|&(_, v)| v)
    }

    /// 第 `index` 个拖延者对应的顶点
    pub fn procrastinator_vertex(&self, index: usize) -> Option<VertexId> {
        self.procrastinators.get(index).map(|&(_, v)| v)
    }

    /// 求解最大匹配
    pub fn solve(&mut self) -> Result<Matching> {
        let size = self.network.compute_max_flow_value()?;
        let matching = self.matching()?;
        if matching.pairs.len() as u64 != size {
            return Err(Error::internal(format!(
                "匹配对数 {} 与流值 {} 不一致",
                matching.pairs.len(),
                size
            )));
        }
        Ok(matching)
    }

    /// 从当前流中读出匹配对（不求解）
    pub fn matching(&self) -> Result<Matching> {
        let by_vertex: HashMap<VertexId, u64> =
            self.procrastinators.iter().map(|&(id, v)| (v, id)).collect();

        let mut pairs = Vec::new();
        for &(w_id, w) in &self.workaholics {
            let vertex = self
                .network
                .vertex(w)
                .ok_or(Error::VertexNotFound(w))?;
            for (p, edge) in vertex.edges() {
                if edge.flow() == 0 {
                    continue;
                }
                let p_id = by_vertex.get(&p).copied().ok_or_else(|| {
                    Error::internal(format!("工作狂 {} 的出边指向非拖延者顶点 {}", w_id, p))
                })?;
                pairs.push(Pair {
                    workaholic: w_id,
                    procrastinator: p_id,
                });
            }
        }

        Ok(Matching {
            size: pairs.len() as u64,
            pairs,
        })
    }
}
