//! 最大流性质测试

use flownet::algorithm::{net_outflow, source_capacity};
use flownet::{Capacity, FlowNetwork, MatchingModel, SolverConfig, VertexId};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashSet;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn network_with(n: usize, edges: &[(usize, usize, Capacity)]) -> (FlowNetwork, Vec<VertexId>) {
    let mut net = FlowNetwork::with_config(SolverConfig::default().with_verification(true));
    let ids: Vec<_> = (0..n).map(|i| net.add_named_vertex(format!("v{}", i))).collect();
    for &(u, v, c) in edges {
        net.add_edge(ids[u], ids[v], c).unwrap();
    }
    net.set_source(ids[0]).unwrap();
    net.set_sink(ids[n - 1]).unwrap();
    (net, ids)
}

fn random_network(rng: &mut StdRng) -> (FlowNetwork, Vec<VertexId>) {
    let n = rng.gen_range(2..=7);
    let mut edges = Vec::new();
    for u in 0..n {
        for v in 0..n {
            if u != v && rng.gen_bool(0.4) {
                edges.push((u, v, rng.gen_range(0..10)));
            }
        }
    }
    network_with(n, &edges)
}

/// 枚举所有 s-t 割，返回最小割容量
fn brute_force_min_cut(net: &FlowNetwork, ids: &[VertexId]) -> Capacity {
    let n = ids.len();
    let (s, t) = (0, n - 1);
    let mut best = Capacity::MAX;
    for mask in 0u32..(1 << n) {
        if mask & (1 << s) == 0 || mask & (1 << t) != 0 {
            continue;
        }
        let side: HashSet<VertexId> = (0..n)
            .filter(|i| mask & (1 << i) != 0)
            .map(|i| ids[i])
            .collect();
        let cut: Capacity = net
            .flows()
            .filter(|(u, v, _)| side.contains(u) && !side.contains(v))
            .map(|(_, _, e)| e.capacity())
            .sum();
        best = best.min(cut);
    }
    best
}

fn assert_feasible(net: &FlowNetwork) {
    for (u, v, e) in net.flows() {
        assert!(e.flow() <= e.capacity(), "{} -> {}: {}", u, v, e);
    }
    for vertex in net.vertices() {
        let id = vertex.id();
        if Some(id) != net.source() && Some(id) != net.sink() {
            assert_eq!(net_outflow(net, id), 0, "顶点 {} 不守恒", id);
        }
    }
}

#[test]
fn scenario_single_edge() {
    init_tracing();
    let (mut net, ids) = network_with(2, &[(0, 1, 5)]);

    assert_eq!(net.compute_max_flow_value().unwrap(), 5);
    assert_eq!(net.edge(ids[0], ids[1]).unwrap().flow(), 5);
}

#[test]
fn scenario_diamond() {
    init_tracing();
    // s -> a (3), s -> b (2), a -> t (2), b -> t (3)
    let (mut net, _) = network_with(4, &[(0, 1, 3), (0, 2, 2), (1, 3, 2), (2, 3, 3)]);

    assert_eq!(net.compute_max_flow_value().unwrap(), 4);
    assert_feasible(&net);
}

#[test]
fn scenario_disconnected_sink() {
    init_tracing();
    let (mut net, _) = network_with(4, &[(0, 1, 3), (1, 2, 2)]);

    let report = net.compute_max_flow().unwrap();
    assert_eq!(report.value, 0);
    assert_eq!(report.augmentations, 0);
    assert!(net.flows().all(|(_, _, e)| e.flow() == 0));
}

#[test]
fn scenario_perfect_matching() {
    init_tracing();
    let mut model = MatchingModel::generate(
        &[100, 101, 102],
        &[200, 201, 202],
        &[(0, 1), (1, 2), (2, 0)],
    )
    .unwrap();

    let matching = model.solve().unwrap();
    assert_eq!(matching.size, 3);
    let pairs: HashSet<_> = matching
        .pairs
        .iter()
        .map(|p| (p.workaholic, p.procrastinator))
        .collect();
    assert_eq!(pairs, HashSet::from([(100, 201), (101, 202), (102, 200)]));

    // 每条承载流量 1 的工作狂 -> 拖延者边就是一对匹配
    let net = model.network();
    let w1 = model.workaholic_vertex(1).unwrap();
    let p2 = model.procrastinator_vertex(2).unwrap();
    assert_eq!(net.edge(w1, p2).unwrap().flow(), 1);
}

#[test]
fn random_networks_match_min_cut() {
    init_tracing();
    let mut rng = StdRng::seed_from_u64(0x5eed);

    for _ in 0..200 {
        let (mut net, ids) = random_network(&mut rng);
        let value = net.compute_max_flow_value().unwrap();

        assert_feasible(&net);
        assert_eq!(value, brute_force_min_cut(&net, &ids));
        assert!(value <= source_capacity(&net).unwrap_or(0));

        let cut = net.min_cut().unwrap();
        assert_eq!(cut.capacity, value);
        assert!(!cut.contains(ids[ids.len() - 1]));
    }
}

#[test]
fn no_augmenting_path_after_solve() {
    init_tracing();
    let mut rng = StdRng::seed_from_u64(42);

    for _ in 0..100 {
        let (mut net, _) = random_network(&mut rng);
        net.compute_max_flow().unwrap();

        net.generate_residual_graph().unwrap();
        assert_eq!(net.find_path_in_residual().unwrap(), None);
    }
}

#[test]
fn resolve_is_idempotent() {
    init_tracing();
    let mut rng = StdRng::seed_from_u64(7);

    for _ in 0..100 {
        let (mut net, _) = random_network(&mut rng);
        let first = net.compute_max_flow_value().unwrap();
        let flows: Vec<_> = net.flows().map(|(u, v, e)| (u, v, e.flow())).collect();

        let second = net.compute_max_flow_value().unwrap();
        assert_eq!(first, second);
        let again: Vec<_> = net.flows().map(|(u, v, e)| (u, v, e.flow())).collect();
        assert_eq!(flows, again);
    }
}

#[test]
fn manual_augmentation_loop() {
    init_tracing();
    let (mut net, _) = network_with(4, &[(0, 1, 3), (0, 2, 2), (1, 3, 2), (2, 3, 3)]);

    net.generate_residual_graph().unwrap();
    let mut total = 0;
    while let Some(path) = net.find_path_in_residual().unwrap() {
        let amount = net.augmenting_flow(&path).unwrap();
        net.update_network(&path, amount).unwrap();
        total += amount;
    }

    assert_eq!(total, 4);
    assert_eq!(net.flow_value().unwrap(), 4);
    net.verify_flow().unwrap();
}
