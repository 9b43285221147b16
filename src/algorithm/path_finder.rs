//! 增广路径查找
//!
//! 在残量图上做深度优先搜索，按邻接表插入顺序尝试残量出边

use crate::error::{Error, Result};
use crate::graph::{FlowNetwork, VertexId};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// 增广路径：源点到汇点的简单路径，至少包含两个顶点
///
/// 反序列化同样经过 [`AugmentingPath::from_vertices`] 校验
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawAugmentingPath")]
pub struct AugmentingPath {
    vertices: Vec<VertexId>,
}

/// 未经校验的路径数据
#[derive(Deserialize)]
struct RawAugmentingPath {
    vertices: Vec<VertexId>,
}

impl TryFrom<RawAugmentingPath> for AugmentingPath {
    type Error = Error;

    fn try_from(raw: RawAugmentingPath) -> Result<Self> {
        Self::from_vertices(raw.vertices)
    }
}

impl AugmentingPath {
    /// 由顶点序列构造路径
    ///
    /// 少于两个顶点或存在重复顶点时返回 `InvalidConfiguration`
    pub fn from_vertices(vertices: Vec<VertexId>) -> Result<Self> {
        if vertices.len() < 2 {
            return Err(Error::InvalidConfiguration(
                "增广路径至少需要两个顶点".to_string(),
            ));
        }
        let mut seen = HashSet::with_capacity(vertices.len());
        if let Some(dup) = vertices.iter().find(|v| !seen.insert(**v)) {
            return Err(Error::InvalidConfiguration(format!(
                "增广路径中顶点重复: {}",
                dup
            )));
        }
        Ok(Self { vertices })
    }

    /// 路径上的顶点（含源点与汇点）
    pub fn vertices(&self) -> &[VertexId] {
        &self.vertices
    }

    /// 路径上的边数
    pub fn edge_count(&self) -> usize {
        self.vertices.len() - 1
    }

    pub fn first(&self) -> VertexId {
        self.vertices[0]
    }

    pub fn last(&self) -> VertexId {
        self.vertices[self.vertices.len() - 1]
    }

    /// 相邻顶点对 (u, v)
    pub fn segments(&self) -> impl Iterator<Item = (VertexId, VertexId)> + '_ {
        self.vertices.windows(2).map(|w| (w[0], w[1]))
    }
}

/// 增广路径查找器
pub struct PathFinder<'a> {
    network: &'a FlowNetwork,
}

impl<'a> PathFinder<'a> {
    /// 创建路径查找器
    pub fn new(network: &'a FlowNetwork) -> Self {
        Self { network }
    }

    /// 查找一条每条边残量容量都为正的 source -> sink 简单路径
    ///
    /// 返回 `None` 表示不存在增广路径
    pub fn find(&self, source: VertexId, sink: VertexId) -> Result<Option<AugmentingPath>> {
        for id in [source, sink] {
            if !self.network.contains(id) {
                return Err(Error::internal(format!("路径端点不在网络中: {}", id)));
            }
        }
        if source == sink {
            return Err(Error::InvalidConfiguration(format!(
                "源点与汇点相同: {}",
                source
            )));
        }

        // visited 包含当前路径上的顶点和已穷尽的顶点
        let mut visited = vec![false; self.network.vertex_count()];
        let mut path = vec![source];
        let mut cursors = vec![0usize];
        visited[source.index()] = true;

        while let Some(&current) = path.last() {
            if current == sink {
                return AugmentingPath::from_vertices(path).map(Some);
            }

            let vertex = self.network.vertex_ref(current)?;
            let depth = path.len() - 1;
            let mut next = None;

            while let Some((to, edge)) = vertex.residual_edge_at(cursors[depth]) {
                cursors[depth] += 1;
                if edge.capacity() > 0 && !visited.get(to.index()).copied().unwrap_or(true) {
                    next = Some(to);
                    break;
                }
            }

            match next {
                Some(to) => {
                    visited[to.index()] = true;
                    path.push(to);
                    cursors.push(0);
                }
                None => {
                    // 回溯
                    path.pop();
                    cursors.pop();
                }
            }
        }

        Ok(None)
    }
}
