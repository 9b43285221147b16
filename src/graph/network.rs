//! 流网络
//!
//! 顶点存放在以 `VertexId` 为下标的数组中，边由尾顶点的邻接表持有

use super::edge::Edge;
use super::vertex::{Vertex, VertexId};
use crate::algorithm::{
    bottleneck, verify_flow, AugmentingPath, FlowUpdater, FordFulkerson, MinCut, PathFinder,
};
use crate::config::SolverConfig;
use crate::error::{Error, Result};
use crate::metrics::SolveReport;
use crate::types::Capacity;
use tracing::debug;

/// 流网络
#[derive(Debug, Clone, Default)]
pub struct FlowNetwork {
    /// 所有顶点（下标即顶点 ID）
    vertices: Vec<Vertex>,
    /// 源点
    source: Option<VertexId>,
    /// 汇点
    sink: Option<VertexId>,
    /// 下一个顶点 ID
    next_vertex_id: u64,
    /// 求解配置
    config: SolverConfig,
    /// 最近一次求解的报告
    last_report: Option<SolveReport>,
}

impl FlowNetwork {
    /// 创建空网络
    pub fn new() -> Self {
        Self::default()
    }

    /// 使用指定配置创建空网络
    pub fn with_config(config: SolverConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: SolverConfig) {
        self.config = config;
    }

    /// 最近一次成功求解的报告
    pub fn last_report(&self) -> Option<&SolveReport> {
        self.last_report.as_ref()
    }

    // ==================== 顶点操作 ====================

    /// 添加无标签顶点
    pub fn add_vertex(&mut self) -> VertexId {
        self.add_named_vertex("")
    }

    /// 添加带标签的顶点
    pub fn add_named_vertex(&mut self, label: impl Into<String>) -> VertexId {
        let id = VertexId::new(self.next_vertex_id);
        self.next_vertex_id += 1;
        self.vertices.push(Vertex::new(id, label));
        id
    }

    /// 顶点是否属于本网络
    pub fn contains(&self, id: VertexId) -> bool {
        id.index() < self.vertices.len()
    }

    /// 获取顶点
    pub fn vertex(&self, id: VertexId) -> Option<&Vertex> {
        self.vertices.get(id.index())
    }

    pub(crate) fn vertex_ref(&self, id: VertexId) -> Result<&Vertex> {
        self.vertex(id).ok_or(Error::VertexNotFound(id))
    }

    pub(crate) fn vertex_mut(&mut self, id: VertexId) -> Result<&mut Vertex> {
        self.vertices
            .get_mut(id.index())
            .ok_or(Error::VertexNotFound(id))
    }

    /// 所有顶点
    pub fn vertices(&self) -> impl Iterator<Item = &Vertex> + '_ {
        self.vertices.iter()
    }

    pub(crate) fn vertices_mut(&mut self) -> impl Iterator<Item = &mut Vertex> + '_ {
        self.vertices.iter_mut()
    }

    /// 顶点数量
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    // ==================== 边操作 ====================

    /// 添加（或替换）原始边 `from -> to`，流量置 0
    pub fn add_edge(&mut self, from: VertexId, to: VertexId, capacity: Capacity) -> Result<()> {
        if !self.contains(to) {
            return Err(Error::VertexNotFound(to));
        }
        if from == to {
            return Err(Error::InvalidConfiguration(format!(
                "不允许自环边: {} -> {}",
                from, to
            )));
        }

        let vertex = self.vertex_mut(from)?;
        if let Some(old) = vertex.insert_edge(to, Edge::new(capacity)) {
            debug!(%from, %to, old = %old, capacity, "替换已有边");
        }
        Ok(())
    }

    /// 添加容量为 1 的边
    pub fn add_unit_edge(&mut self, from: VertexId, to: VertexId) -> Result<()> {
        self.add_edge(from, to, 1)
    }

    /// 获取原始边
    pub fn edge(&self, from: VertexId, to: VertexId) -> Option<&Edge> {
        self.vertex(from).and_then(|v| v.edge(to))
    }

    /// 获取残量边
    pub fn residual_edge(&self, from: VertexId, to: VertexId) -> Option<&Edge> {
        self.vertex(from).and_then(|v| v.residual_edge(to))
    }

    /// 所有原始边及其当前流量
    pub fn flows(&self) -> impl Iterator<Item = (VertexId, VertexId, &Edge)> + '_ {
        self.vertices
            .iter()
            .flat_map(|v| v.edges().map(move |(to, e)| (v.id(), to, e)))
    }

    /// 原始边数量
    pub fn edge_count(&self) -> usize {
        self.vertices.iter().map(Vertex::out_degree).sum()
    }

    /// 将所有原始边的流量清零并清空残量图
    pub fn reset_flow(&mut self) {
        for vertex in self.vertices.iter_mut() {
            vertex.edges_mut().for_each(Edge::reset_flow);
            vertex.clear_residual();
        }
        self.last_report = None;
    }

    // ==================== 源点与汇点 ====================

    pub fn source(&self) -> Option<VertexId> {
        self.source
    }

    pub fn set_source(&mut self, source: VertexId) -> Result<()> {
        if !self.contains(source) {
            return Err(Error::VertexNotFound(source));
        }
        self.source = Some(source);
        Ok(())
    }

    pub fn sink(&self) -> Option<VertexId> {
        self.sink
    }

    pub fn set_sink(&mut self, sink: VertexId) -> Result<()> {
        if !self.contains(sink) {
            return Err(Error::VertexNotFound(sink));
        }
        self.sink = Some(sink);
        Ok(())
    }

    /// 校验并返回 (源点, 汇点)
    pub(crate) fn endpoints(&self) -> Result<(VertexId, VertexId)> {
        let (source, sink) = match (self.source, self.sink) {
            (Some(s), Some(t)) => (s, t),
            _ => return Err(Error::NoSourceOrSink),
        };
        for id in [source, sink] {
            if !self.contains(id) {
                return Err(Error::VertexNotFound(id));
            }
        }
        if source == sink {
            return Err(Error::InvalidConfiguration(format!(
                "源点与汇点相同: {}",
                source
            )));
        }
        Ok((source, sink))
    }

    // ==================== 最大流 ====================

    /// 计算最大流，结果写入每条原始边的流量
    pub fn compute_max_flow(&mut self) -> Result<SolveReport> {
        let report = FordFulkerson::new(self).run()?;
        self.last_report = Some(report.clone());
        Ok(report)
    }

    /// 计算最大流并返回流值
    ///
    /// 源点没有出边时流值为 0
    pub fn compute_max_flow_value(&mut self) -> Result<Capacity> {
        self.compute_max_flow().map(|report| report.value)
    }

    /// 当前从源点流出的总流量（不求解）
    pub fn flow_value(&self) -> Result<Capacity> {
        let source = self.source.ok_or(Error::NoSourceOrSink)?;
        let vertex = self.vertex_ref(source)?;
        if vertex.out_degree() == 0 {
            debug!(%source, "源点没有出边，流值为 0");
            return Ok(0);
        }
        vertex.edges().try_fold(0 as Capacity, |acc, (_, e)| {
            acc.checked_add(e.flow())
                .ok_or_else(|| Error::internal("流值溢出"))
        })
    }

    /// 在残量图中查找一条增广路径
    pub fn find_path_in_residual(&self) -> Result<Option<AugmentingPath>> {
        let (source, sink) = self.endpoints()?;
        PathFinder::new(self).find(source, sink)
    }

    /// 路径的瓶颈容量
    pub fn augmenting_flow(&self, path: &AugmentingPath) -> Result<Capacity> {
        bottleneck(self, path)
    }

    /// 沿路径推送 `amount` 单位的流量
    pub fn update_network(&mut self, path: &AugmentingPath, amount: Capacity) -> Result<()> {
        FlowUpdater::new(self).apply(path, amount)
    }

    /// 当前流对应的最小割
    pub fn min_cut(&self) -> Result<MinCut> {
        MinCut::compute(self)
    }

    /// 校验容量约束与流量守恒
    pub fn verify_flow(&self) -> Result<()> {
        verify_flow(self)
    }
}
