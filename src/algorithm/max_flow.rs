//! 最大流算法
//!
//! Ford-Fulkerson：在残量图上反复用 DFS 寻找增广路径，
//! 沿路径推送瓶颈流量，直到不存在增广路径

use super::augment::{bottleneck, FlowUpdater};
use super::path_finder::PathFinder;
use super::validation::verify_flow;
use crate::error::{Error, Result};
use crate::graph::FlowNetwork;
use crate::metrics::{SolveMetrics, SolveReport};
use tracing::{debug, trace};

/// Ford-Fulkerson 最大流算法
pub struct FordFulkerson<'a> {
    network: &'a mut FlowNetwork,
}

impl<'a> FordFulkerson<'a> {
    /// 创建算法实例
    pub fn new(network: &'a mut FlowNetwork) -> Self {
        Self { network }
    }

    /// 计算最大流，直接修改网络中原始边的流量
    pub fn run(self) -> Result<SolveReport> {
        let (source, sink) = self.network.endpoints()?;
        let config = self.network.config().clone();
        let mut metrics = SolveMetrics::start();

        debug!(
            vertices = self.network.vertex_count(),
            edges = self.network.edge_count(),
            %source,
            %sink,
            "开始计算最大流"
        );

        let residual_edges = self.network.generate_residual_graph()?;
        metrics.record_rebuild(residual_edges);

        loop {
            let path = match PathFinder::new(self.network).find(source, sink)? {
                Some(path) => path,
                None => break,
            };

            if let Some(limit) = config.max_augmentations {
                if metrics.augmentations() >= limit {
                    return Err(Error::internal(format!(
                        "增广次数超过上限 {}",
                        limit
                    )));
                }
            }

            let amount = bottleneck(self.network, &path)?;
            FlowUpdater::new(self.network).apply(&path, amount)?;
            metrics.record_augmentation(amount);

            trace!(
                augmentation = metrics.augmentations(),
                path_len = path.edge_count(),
                bottleneck = amount,
                "沿增广路径推送流量"
            );
        }

        let value = self.network.flow_value()?;
        if config.verify_on_completion {
            verify_flow(self.network)?;
        }

        let report = metrics.finish(value);
        debug!(
            value = report.value,
            augmentations = report.augmentations,
            elapsed_us = report.elapsed_us,
            "最大流计算完成"
        );
        Ok(report)
    }
}
