//! 顶点定义
//!
//! 每个顶点持有两张邻接表：原始网络的出边和当前求解的残量出边

use super::edge::Edge;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// 顶点 ID（网络内唯一，即顶点在网络中的下标）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct VertexId(pub u64);

impl VertexId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }

    pub(crate) fn index(&self) -> usize {
        self.0 as usize
    }
}

impl From<u64> for VertexId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// 顶点
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vertex {
    /// 顶点 ID
    id: VertexId,
    /// 标签（仅用于展示）
    label: String,
    /// 原始出边：邻居 -> 边
    neighbours: IndexMap<VertexId, Edge>,
    /// 残量出边：邻居 -> 残量边
    residual: IndexMap<VertexId, Edge>,
}

impl Vertex {
    /// 创建新顶点
    pub(crate) fn new(id: VertexId, label: impl Into<String>) -> Self {
        Self {
            id,
            label: label.into(),
            neighbours: IndexMap::new(),
            residual: IndexMap::new(),
        }
    }

    /// 获取顶点 ID
    pub fn id(&self) -> VertexId {
        self.id
    }

    /// 获取顶点标签
    pub fn label(&self) -> &str {
        &self.label
    }

    /// 是否存在到 `to` 的原始边
    pub fn has_successor(&self, to: VertexId) -> bool {
        self.neighbours.contains_key(&to)
    }

    /// 原始网络中的后继
    pub fn successors(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.neighbours.keys().copied()
    }

    /// 残量图中的后继
    pub fn residual_successors(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.residual.keys().copied()
    }

    /// 获取到 `to` 的原始边
    pub fn edge(&self, to: VertexId) -> Option<&Edge> {
        self.neighbours.get(&to)
    }

    /// 获取到 `to` 的残量边
    pub fn residual_edge(&self, to: VertexId) -> Option<&Edge> {
        self.residual.get(&to)
    }

    /// 所有原始出边
    pub fn edges(&self) -> impl Iterator<Item = (VertexId, &Edge)> + '_ {
        self.neighbours.iter().map(|(to, e)| (*to, e))
    }

    /// 所有残量出边
    pub fn residual_edges(&self) -> impl Iterator<Item = (VertexId, &Edge)> + '_ {
        self.residual.iter().map(|(to, e)| (*to, e))
    }

    /// 出度
    pub fn out_degree(&self) -> usize {
        self.neighbours.len()
    }

    /// 插入（或替换）原始边，返回被替换的旧边
    pub(crate) fn insert_edge(&mut self, to: VertexId, edge: Edge) -> Option<Edge> {
        self.neighbours.insert(to, edge)
    }

    pub(crate) fn edge_mut(&mut self, to: VertexId) -> Option<&mut Edge> {
        self.neighbours.get_mut(&to)
    }

    pub(crate) fn edges_mut(&mut self) -> impl Iterator<Item = &mut Edge> + '_ {
        self.neighbours.values_mut()
    }

    /// 残量边（不存在时以容量 0 创建）
    pub(crate) fn residual_entry(&mut self, to: VertexId) -> &mut Edge {
        self.residual.entry(to).or_insert_with(Edge::default)
    }

    /// 按插入顺序取第 `index` 条残量出边
    pub(crate) fn residual_edge_at(&self, index: usize) -> Option<(VertexId, &Edge)> {
        self.residual.get_index(index).map(|(to, e)| (*to, e))
    }

    pub(crate) fn residual_edge_mut(&mut self, to: VertexId) -> Option<&mut Edge> {
        self.residual.get_mut(&to)
    }

    pub(crate) fn clear_residual(&mut self) {
        self.residual.clear();
    }
}

impl fmt::Display for Vertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{ {} - {} : ", self.id.as_u64(), self.label)?;
        for (i, (to, edge)) in self.neighbours.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{} - {}", to.as_u64(), edge)?;
        }
        write!(f, " }}")
    }
}
