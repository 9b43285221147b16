//! FlowNet - Ford-Fulkerson 最大流引擎
//!
//! 单线程、纯内存的组合优化求解器，支持：
//! - 带容量的有向流网络与残量图
//! - 基于 DFS 增广路径的最大流计算
//! - 最小割与流合法性校验
//! - 二分匹配模型构建

pub mod algorithm;
pub mod config;
pub mod error;
pub mod graph;
pub mod matching;
pub mod metrics;
pub mod types;

// 重导出常用类型
pub use algorithm::{AugmentingPath, FordFulkerson, MinCut, PathFinder};
pub use config::SolverConfig;
pub use error::{Error, Result};
pub use graph::{Edge, FlowNetwork, Vertex, VertexId};
pub use matching::{Matching, MatchingModel, Pair};
pub use metrics::SolveReport;
pub use types::{Capacity, Direction};

/// 库版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
