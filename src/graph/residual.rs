//! 残量图构建
//!
//! 对每条原始边 (u -> v, 容量 c, 流量 f)：
//! 正向残量边 u -> v 容量为 c - f，反向残量边 v -> u 容量为 f。
//! 存在反平行边时，落在同一有序顶点对上的残量容量相加。

use super::network::FlowNetwork;
use super::vertex::VertexId;
use crate::error::{Error, Result};
use crate::types::Capacity;
use tracing::debug;

impl FlowNetwork {
    /// 清空所有顶点的残量边
    pub fn clear_residual_graph(&mut self) {
        for vertex in self.vertices_mut() {
            vertex.clear_residual();
        }
    }

    /// 由当前原始边重新生成残量图，返回残量边数量
    pub fn generate_residual_graph(&mut self) -> Result<usize> {
        self.clear_residual_graph();

        let originals: Vec<(VertexId, VertexId, Capacity, Capacity)> = self
            .flows()
            .map(|(from, to, e)| (from, to, e.capacity(), e.flow()))
            .collect();

        for (from, to, capacity, flow) in originals {
            let forward = capacity.checked_sub(flow).ok_or_else(|| {
                Error::internal(format!(
                    "边 {} -> {} 的流量 {} 超过容量 {}",
                    from, to, flow, capacity
                ))
            })?;
            self.vertex_mut(from)?.residual_entry(to).grow(forward)?;
            self.vertex_mut(to)?.residual_entry(from).grow(flow)?;
        }

        let count = self
            .vertices()
            .map(|v| v.residual_successors().count())
            .sum();
        debug!(residual_edges = count, "残量图已重建");
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn residual_capacity(net: &FlowNetwork, from: VertexId, to: VertexId) -> Option<Capacity> {
        net.residual_edge(from, to).map(|e| e.capacity())
    }

    #[test]
    fn test_residual_from_fresh_edges() {
        let mut net = FlowNetwork::new();
        let s = net.add_vertex();
        let t = net.add_vertex();
        net.add_edge(s, t, 5).unwrap();

        assert_eq!(net.generate_residual_graph().unwrap(), 2);
        assert_eq!(residual_capacity(&net, s, t), Some(5));
        // 即使没有原始边 t -> s，也会创建反向残量边
        assert_eq!(residual_capacity(&net, t, s), Some(0));
    }

    #[test]
    fn test_residual_reflects_existing_flow() {
        let mut net = FlowNetwork::new();
        let s = net.add_vertex();
        let t = net.add_vertex();
        net.add_edge(s, t, 5).unwrap();
        net.vertex_mut(s)
            .unwrap()
            .edge_mut(t)
            .unwrap()
            .push_flow(2)
            .unwrap();

        net.generate_residual_graph().unwrap();
        assert_eq!(residual_capacity(&net, s, t), Some(3));
        assert_eq!(residual_capacity(&net, t, s), Some(2));
    }

    #[test]
    fn test_antiparallel_edges_are_summed() {
        let mut net = FlowNetwork::new();
        let a = net.add_vertex();
        let b = net.add_vertex();
        net.add_edge(a, b, 4).unwrap();
        net.add_edge(b, a, 3).unwrap();
        net.vertex_mut(b)
            .unwrap()
            .edge_mut(a)
            .unwrap()
            .push_flow(1)
            .unwrap();

        net.generate_residual_graph().unwrap();
        // a -> b: (4 - 0) + 1
        assert_eq!(residual_capacity(&net, a, b), Some(5));
        // b -> a: (3 - 1) + 0
        assert_eq!(residual_capacity(&net, b, a), Some(2));
    }

    #[test]
    fn test_regeneration_discards_stale_state() {
        let mut net = FlowNetwork::new();
        let s = net.add_vertex();
        let t = net.add_vertex();
        net.add_edge(s, t, 5).unwrap();
        net.generate_residual_graph().unwrap();
        net.vertex_mut(s)
            .unwrap()
            .residual_edge_mut(t)
            .unwrap()
            .shrink(5)
            .unwrap();

        net.generate_residual_graph().unwrap();
        assert_eq!(residual_capacity(&net, s, t), Some(5));

        net.clear_residual_graph();
        assert!(net.residual_edge(s, t).is_none());
    }
}
