#![allow(dead_code)]

use closeness::{graphgen::erdos_renyi::erdos_renyi, prelude::*};
use closeness_api::core::utils::logging::global_info_logger;
use criterion::{measurement::WallTime, Bencher, BenchmarkGroup, BenchmarkId};
use rand::{distributions::Uniform, rngs::StdRng, Rng, SeedableRng};
use tracing::info;

const SEED: u64 = 42;

/// A sparse random graph with an average degree of about `avg_degree`.
pub fn bootstrap_graph(num_nodes: usize, avg_degree: f64, directed: bool) -> Graph {
    global_info_logger();
    let p = if num_nodes > 1 {
        avg_degree / (num_nodes - 1) as f64
    } else {
        0.0
    };
    let graph = erdos_renyi(num_nodes, p, directed, Some(SEED));
    info!(
        "bootstrapped graph with {} nodes and {} edges",
        graph.num_nodes(),
        graph.num_edges()
    );
    graph
}

/// One weight per edge, drawn uniformly from `[1, max_weight)`.
pub fn random_weights(graph: &Graph, max_weight: f64) -> Vec<f64> {
    let rng = StdRng::seed_from_u64(SEED);
    rng.sample_iter(Uniform::new(1.0, max_weight))
        .take(graph.num_edges())
        .collect()
}

pub fn bench<F>(
    group: &mut BenchmarkGroup<WallTime>,
    name: &str,
    parameter: Option<usize>,
    mut task: F,
) where
    F: FnMut(&mut Bencher<'_, WallTime>),
{
    match parameter {
        Some(parameter) => group.bench_with_input(
            BenchmarkId::new(name, parameter),
            &parameter,
            |b: &mut Bencher, _| task(b),
        ),
        None => group.bench_function(name, task),
    };
}
