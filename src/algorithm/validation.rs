//! 流的合法性校验：容量约束与流量守恒

use crate::error::{Error, Result};
use crate::graph::{FlowNetwork, VertexId};
use crate::types::Capacity;

/// 校验每条原始边 0 <= flow <= capacity，且除源点和汇点外流入等于流出
pub fn verify_flow(network: &FlowNetwork) -> Result<()> {
    let n = network.vertex_count();
    let mut inflow: Vec<u128> = vec![0; n];
    let mut outflow: Vec<u128> = vec![0; n];

    for (from, to, edge) in network.flows() {
        if edge.flow() > edge.capacity() {
            return Err(Error::internal(format!(
                "边 {} -> {} 的流量 {} 超过容量 {}",
                from,
                to,
                edge.flow(),
                edge.capacity()
            )));
        }
        outflow[from.index()] += u128::from(edge.flow());
        inflow[to.index()] += u128::from(edge.flow());
    }

    for vertex in network.vertices() {
        let id = vertex.id();
        if Some(id) == network.source() || Some(id) == network.sink() {
            continue;
        }
        let (i, o) = (inflow[id.index()], outflow[id.index()]);
        if i != o {
            return Err(Error::internal(format!(
                "顶点 {} 流量不守恒: 流入 {}, 流出 {}",
                id, i, o
            )));
        }
    }

    Ok(())
}

/// 顶点的净流出量（流出 - 流入）
pub fn net_outflow(network: &FlowNetwork, id: VertexId) -> i128 {
    network
        .flows()
        .map(|(from, to, e)| {
            let f = i128::from(e.flow());
            match (from == id, to == id) {
                (true, false) => f,
                (false, true) => -f,
                _ => 0,
            }
        })
        .sum()
}

/// 最大可能流值的上界：源点出边容量之和
pub fn source_capacity(network: &FlowNetwork) -> Option<Capacity> {
    let source = network.source()?;
    network
        .vertex(source)?
        .edges()
        .try_fold(0 as Capacity, |acc, (_, e)| acc.checked_add(e.capacity()))
}
