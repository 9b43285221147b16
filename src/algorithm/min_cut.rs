//! 最小割
//!
//! 从源点出发沿正残量边 BFS，能到达的顶点属于源侧；
//! 源侧指向汇侧的原始边即割边

use crate::error::Result;
use crate::graph::{FlowNetwork, VertexId};
use crate::types::Capacity;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap, VecDeque};

/// 最小割结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MinCut {
    /// 源侧顶点集
    pub source_side: BTreeSet<VertexId>,
    /// 割边（源侧 -> 汇侧）
    pub cut_edges: Vec<(VertexId, VertexId)>,
    /// 割容量
    pub capacity: Capacity,
}

impl MinCut {
    /// 按网络当前的流计算割
    ///
    /// 只有在流为最大流时结果才是最小割
    pub fn compute(network: &FlowNetwork) -> Result<Self> {
        let (source, _) = network.endpoints()?;

        // 由原始边直接推出残量邻接表，不修改网络中的残量图
        let mut adj: HashMap<VertexId, Vec<VertexId>> = HashMap::new();
        for (from, to, edge) in network.flows() {
            if edge.remaining() > 0 {
                adj.entry(from).or_default().push(to);
            }
            if edge.flow() > 0 {
                adj.entry(to).or_default().push(from);
            }
        }

        let mut source_side = BTreeSet::new();
        let mut queue = VecDeque::new();
        source_side.insert(source);
        queue.push_back(source);

        while let Some(u) = queue.pop_front() {
            if let Some(neighbors) = adj.get(&u) {
                for &v in neighbors {
                    if source_side.insert(v) {
                        queue.push_back(v);
                    }
                }
            }
        }

        let mut cut_edges = Vec::new();
        let mut capacity: Capacity = 0;
        for (from, to, edge) in network.flows() {
            if source_side.contains(&from) && !source_side.contains(&to) {
                cut_edges.push((from, to));
                capacity = capacity.saturating_add(edge.capacity());
            }
        }

        Ok(Self {
            source_side,
            cut_edges,
            capacity,
        })
    }

    /// 顶点是否在源侧
    pub fn contains(&self, id: VertexId) -> bool {
        self.source_side.contains(&id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_min_cut_after_solve() {
        let mut net = FlowNetwork::new();
        let s = net.add_vertex();
        let a = net.add_vertex();
        let b = net.add_vertex();
        let t = net.add_vertex();
        net.add_edge(s, a, 10).unwrap();
        net.add_edge(a, b, 1).unwrap();
        net.add_edge(b, t, 10).unwrap();
        net.set_source(s).unwrap();
        net.set_sink(t).unwrap();

        assert_eq!(net.compute_max_flow_value().unwrap(), 1);
        let cut = net.min_cut().unwrap();
        assert_eq!(cut.capacity, 1);
        assert_eq!(cut.cut_edges, vec![(a, b)]);
        assert!(cut.contains(s) && cut.contains(a));
        assert!(!cut.contains(b) && !cut.contains(t));
    }

    #[test]
    fn test_min_cut_before_solve_is_not_minimal() {
        let mut net = FlowNetwork::new();
        let s = net.add_vertex();
        let t = net.add_vertex();
        net.add_edge(s, t, 4).unwrap();
        net.set_source(s).unwrap();
        net.set_sink(t).unwrap();

        // 零流时汇点可达，割为空
        let cut = net.min_cut().unwrap();
        assert!(cut.contains(t));
        assert_eq!(cut.capacity, 0);
    }
}
