//! 图核心模块
//!
//! 定义顶点、边、流网络与残量图

mod edge;
mod network;
mod residual;
mod vertex;

pub use edge::Edge;
pub use network::FlowNetwork;
pub use vertex::{Vertex, VertexId};
