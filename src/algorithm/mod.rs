//! 图算法模块
//!
//! 包含增广路径查找、流量更新和 Ford-Fulkerson 最大流

mod augment;
mod max_flow;
mod min_cut;
mod path_finder;
mod validation;

pub use augment::{bottleneck, FlowUpdater};
pub use max_flow::FordFulkerson;
pub use min_cut::MinCut;
pub use path_finder::{AugmentingPath, PathFinder};
pub use validation::{net_outflow, source_capacity, verify_flow};
