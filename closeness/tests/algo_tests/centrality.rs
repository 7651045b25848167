use crate::{all_scores, assert_scores_approx};
use closeness::{
    algorithms::centrality::closeness::SHORTEST_PATH_EPSILON,
    graphgen::{complete, path},
    prelude::*,
};
use closeness_api::core::utils::logging::global_debug_logger;
use pretty_assertions::assert_eq;
use std::{
    cell::Cell,
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
};

#[derive(Default)]
struct Recorder(Vec<f64>);

impl Progress for Recorder {
    fn update(&mut self, percent: f64) {
        self.0.push(percent);
    }
}

fn two_components() -> Graph {
    Graph::from_edges(4, false, [(0, 1), (2, 3)]).unwrap()
}

#[test]
fn test_complete_graph() {
    global_debug_logger();
    let graph = complete(5, false);
    let result = closeness(&graph, NodeSelection::All, Direction::BOTH, None, true).unwrap();
    assert_eq!(result.scores(), &[1.0; 5]);
    assert!(result.warnings().is_empty());

    let weights = vec![1.0; graph.num_edges()];
    assert_eq!(all_scores(&graph, Direction::BOTH, Some(&weights)), vec![1.0; 5]);
}

#[test]
fn test_path_graph() {
    let graph = path(4);
    let result = closeness(&graph, VID(1), Direction::BOTH, None, true).unwrap();
    assert_eq!(result.scores(), &[0.75]);
    assert_eq!(result.get(VID(1)), Some(&0.75));

    assert_scores_approx(
        &all_scores(&graph, Direction::BOTH, None),
        &[0.5, 0.75, 0.75, 0.5],
        1e-12,
    );
}

#[test]
fn test_path_graph_weighted() {
    let graph = path(4);
    let weights = [2.0, 2.0, 2.0];
    let result = closeness(&graph, VID(1), Direction::BOTH, Some(&weights), true).unwrap();
    assert_eq!(result.scores(), &[0.375]);
}

#[test]
fn test_not_normalized() {
    let graph = path(4);
    let result = closeness(&graph, VID(1), Direction::BOTH, None, false).unwrap();
    assert_eq!(result.scores(), &[0.25]);

    let weights = [2.0, 2.0, 2.0];
    let result = closeness(&graph, VID(1), Direction::BOTH, Some(&weights), false).unwrap();
    assert_eq!(result.scores(), &[0.125]);
}

#[test]
fn test_single_node() {
    let graph = Graph::undirected(1);
    let result = closeness(&graph, NodeSelection::All, Direction::BOTH, None, true).unwrap();
    assert_eq!(result.len(), 1);
    assert!(result.scores()[0].is_nan());
    assert!(result.warnings().is_empty());

    let result = closeness(&graph, VID(0), Direction::BOTH, Some(&[]), false).unwrap();
    assert!(result.scores()[0].is_nan());
}

#[test]
fn test_empty_selection() {
    let graph = path(3);
    let result = closeness(&graph, Vec::<VID>::new(), Direction::BOTH, None, true).unwrap();
    assert!(result.is_empty());
    assert!(result.warnings().is_empty());

    let graph = Graph::undirected(0);
    let result = closeness(&graph, NodeSelection::All, Direction::BOTH, None, true).unwrap();
    assert!(result.is_empty());
}

#[test]
fn test_cutoff_zero_counts_only_source() {
    let graph = path(5);
    let result =
        closeness_centrality(&graph, NodeSelection::All, Direction::BOTH, None, Some(0.0), true)
            .unwrap();
    assert_eq!(result.scores(), &[0.2; 5]);
    // the shortfall comes from the cutoff, not from disconnection
    assert!(!result.is_disconnected());

    let result =
        closeness_centrality(&graph, NodeSelection::All, Direction::BOTH, None, Some(0.0), false)
            .unwrap();
    assert_eq!(result.scores(), &[0.05; 5]);
}

#[test]
fn test_cutoff_estimates() {
    let graph = path(4);
    let weights = [1.0, 1.0, 1.0];
    // from node 0 only nodes 0 and 1 are within 1.5: sum = 1 + 4 * 2
    for w in [None, Some(&weights[..])] {
        let result =
            closeness_centrality(&graph, VID(0), Direction::BOTH, w, Some(1.5), true).unwrap();
        assert_scores_approx(result.scores(), &[3.0 / 9.0], 1e-12);
        assert!(!result.is_disconnected());
    }

    // negative cutoffs mean exact closeness
    let exact = closeness(&graph, NodeSelection::All, Direction::BOTH, None, true).unwrap();
    let negative =
        closeness_centrality(&graph, NodeSelection::All, Direction::BOTH, None, Some(-1.0), true)
            .unwrap();
    assert_eq!(exact, negative);

    // a cutoff at least as long as the diameter changes nothing
    let long =
        closeness_centrality(&graph, NodeSelection::All, Direction::BOTH, None, Some(3.0), true)
            .unwrap();
    assert_eq!(exact.scores(), long.scores());
}

#[test]
fn test_disconnected_graph_warns_once() {
    let graph = two_components();
    let result = closeness(&graph, NodeSelection::All, Direction::BOTH, None, true).unwrap();
    // 1 + 4 * 2 for every node
    assert_scores_approx(result.scores(), &[1.0 / 3.0; 4], 1e-12);
    assert_eq!(result.warnings(), &[ClosenessWarning::Disconnected]);
    assert!(result.is_disconnected());

    let weights = [0.5, 0.5];
    let result = closeness(&graph, NodeSelection::All, Direction::BOTH, Some(&weights), true)
        .unwrap();
    assert_scores_approx(result.scores(), &[3.0 / 8.5; 4], 1e-12);
    assert_eq!(result.warnings(), &[ClosenessWarning::Disconnected]);
}

#[test]
fn test_directed_modes() {
    let graph = Graph::from_edges(3, true, [(0, 1), (1, 2)]).unwrap();

    let out = closeness(&graph, NodeSelection::All, Direction::OUT, None, true).unwrap();
    // node 0 sums 1 + 2, node 1 sums 1 + 3, node 2 reaches nothing
    assert_scores_approx(out.scores(), &[2.0 / 3.0, 0.5, 2.0 / 6.0], 1e-12);
    assert!(out.is_disconnected());

    let into = closeness(&graph, NodeSelection::All, Direction::IN, None, true).unwrap();
    assert_scores_approx(into.scores(), &[2.0 / 6.0, 0.5, 2.0 / 3.0], 1e-12);

    let both = closeness(&graph, NodeSelection::All, Direction::BOTH, None, true).unwrap();
    assert_scores_approx(both.scores(), &[2.0 / 3.0, 1.0, 2.0 / 3.0], 1e-12);
    assert!(!both.is_disconnected());
}

#[test]
fn test_undirected_graph_ignores_mode() {
    let graph = path(4);
    let both = all_scores(&graph, Direction::BOTH, None);
    assert_eq!(all_scores(&graph, Direction::OUT, None), both);
    assert_eq!(all_scores(&graph, Direction::IN, None), both);
}

#[test]
fn test_parallel_edges_and_self_loops() {
    let graph = Graph::from_edges(2, false, [(0, 0), (0, 1), (0, 1)]).unwrap();
    let weights = [0.5, 5.0, 1.0];
    let result = closeness(&graph, VID(0), Direction::BOTH, Some(&weights), true).unwrap();
    assert_eq!(result.scores(), &[1.0]);

    let weights = [0.5, 5.0, 2.0];
    let result = closeness(&graph, VID(0), Direction::BOTH, Some(&weights), true).unwrap();
    assert_eq!(result.scores(), &[0.5]);
}

#[test]
fn test_selection_order_and_duplicates() {
    let graph = path(4);
    let nodes = vec![VID(3), VID(1), VID(3)];
    let result = closeness(&graph, nodes.clone(), Direction::BOTH, None, true).unwrap();
    assert_eq!(result.nodes, nodes);
    assert_eq!(result.scores(), &[0.5, 0.75, 0.5]);

    let result = closeness(&graph, 1usize..3, Direction::BOTH, None, true).unwrap();
    assert_eq!(result.nodes, vec![VID(1), VID(2)]);
    assert_eq!(result.scores(), &[0.75, 0.75]);
    assert_eq!(result.min().map(|(v, _)| v), Some(VID(1)));
}

#[test]
fn test_invalid_mode() {
    let err = "sideways".parse::<Direction>().unwrap_err();
    let err = CentralityError::from(err);
    assert!(matches!(err, CentralityError::InvalidMode { .. }));

    let err = ClosenessConfigBuilder::new().with_mode("up").err().unwrap();
    assert!(err.is_usage_error());
}

#[test]
fn test_invalid_weights() {
    let graph = path(4);
    let err = closeness(&graph, NodeSelection::All, Direction::BOTH, Some(&[1.0, 1.0]), true)
        .unwrap_err();
    assert!(matches!(
        err,
        CentralityError::InvalidWeightsLength {
            expected: 3,
            actual: 2
        }
    ));

    for bad in [0.0, -1.0, f64::NAN] {
        let weights = [1.0, bad, 1.0];
        let err =
            closeness(&graph, NodeSelection::All, Direction::BOTH, Some(&weights), true)
                .unwrap_err();
        assert!(matches!(err, CentralityError::NonPositiveWeight { .. }));
        assert!(err.is_usage_error());
    }
}

#[test]
fn test_tiny_weights_warn_once() {
    let graph = path(3);
    let weights = [SHORTEST_PATH_EPSILON / 100.0, 1.0];
    let result = closeness(&graph, NodeSelection::All, Direction::BOTH, Some(&weights), true)
        .unwrap();
    assert_eq!(result.len(), 3);
    assert_eq!(result.warnings().len(), 1);
    assert!(result.has_warning(&ClosenessWarning::WeightsBelowEpsilon { min: 0.0 }));
    assert!(!result.is_disconnected());
}

#[test]
fn test_invalid_vertex_and_cutoff() {
    let graph = path(3);
    let err = closeness(&graph, vec![VID(0), VID(7)], Direction::BOTH, None, true).unwrap_err();
    assert!(matches!(
        err,
        CentralityError::InvalidVertex {
            vid: VID(7),
            num_nodes: 3
        }
    ));

    let err = closeness(&graph, 2usize..5, Direction::BOTH, None, true).unwrap_err();
    assert!(matches!(err, CentralityError::InvalidVertex { .. }));

    // the cutoff is checked before the weights
    let err = closeness_centrality(
        &graph,
        NodeSelection::All,
        Direction::BOTH,
        Some(&[0.0]),
        Some(f64::NAN),
        true,
    )
    .unwrap_err();
    assert!(matches!(err, CentralityError::InvalidCutoff(_)));
}

#[test]
fn test_cancellation() {
    let graph = path(10);
    let config = ClosenessConfig::default();

    let stop = AtomicBool::new(true);
    let err = closeness_centrality_with(
        &graph,
        NodeSelection::All,
        None,
        &config,
        &mut NoProgress,
        &stop,
    )
    .unwrap_err();
    assert!(matches!(err, CentralityError::Cancelled));

    // fires on the third poll, after two sources were computed
    let polls = Cell::new(0);
    let interrupt = || {
        polls.set(polls.get() + 1);
        polls.get() > 2
    };
    let weights = vec![1.0; graph.num_edges()];
    let err = closeness_centrality_with(
        &graph,
        NodeSelection::All,
        Some(&weights),
        &config,
        &mut NoProgress,
        &interrupt,
    )
    .unwrap_err();
    assert!(matches!(err, CentralityError::Cancelled));
    assert_eq!(polls.get(), 3);

    let stop = Arc::new(AtomicBool::new(false));
    let result = closeness_centrality_with(
        &graph,
        NodeSelection::All,
        None,
        &config,
        &mut NoProgress,
        &stop,
    )
    .unwrap();
    assert_eq!(result.len(), 10);
    stop.store(true, Ordering::Relaxed);
    assert!(closeness_centrality_with(
        &graph,
        NodeSelection::All,
        None,
        &config,
        &mut NoProgress,
        &stop,
    )
    .is_err());
}

#[test]
fn test_progress_reports() {
    let graph = path(4);
    let mut recorder = Recorder::default();
    let config = ClosenessConfigBuilder::new().with_cutoff(Some(1.0)).build();
    closeness_centrality_with(
        &graph,
        NodeSelection::All,
        None,
        &config,
        &mut recorder,
        &NoInterrupt,
    )
    .unwrap();
    assert_eq!(recorder.0, vec![25.0, 50.0, 75.0, 100.0]);

    let mut recorder = Recorder::default();
    closeness_centrality_with(
        &graph,
        Vec::<VID>::new(),
        None,
        &config,
        &mut recorder,
        &NoInterrupt,
    )
    .unwrap();
    assert_eq!(recorder.0, vec![100.0]);

    // only completed sources are reported before a cancellation
    let mut recorder = Recorder::default();
    let polls = Cell::new(0);
    let interrupt = || {
        polls.set(polls.get() + 1);
        polls.get() > 2
    };
    let err = closeness_centrality_with(
        &graph,
        NodeSelection::All,
        None,
        &config,
        &mut recorder,
        &interrupt,
    )
    .unwrap_err();
    assert!(matches!(err, CentralityError::Cancelled));
    assert_eq!(recorder.0, vec![25.0, 50.0]);
}

#[test]
fn test_cutoff_with_disconnected_components() {
    let graph = two_components();
    let weights = [1.0, 1.0];
    for w in [None, Some(&weights[..])] {
        // the cutoff truncates nothing, so the missing component still warns
        let result =
            closeness_centrality(&graph, NodeSelection::All, Direction::BOTH, w, Some(5.0), true)
                .unwrap();
        assert_scores_approx(result.scores(), &[1.0 / 3.0; 4], 1e-12);
        assert_eq!(result.warnings(), &[ClosenessWarning::Disconnected]);

        // the cutoff hides the neighbour, the other component is never seen
        let result =
            closeness_centrality(&graph, NodeSelection::All, Direction::BOTH, w, Some(0.0), true)
                .unwrap();
        assert_eq!(result.scores(), &[0.25; 4]);
        assert!(result.warnings().is_empty());
    }

    // cutoff 0 on a connected weighted graph counts only the source
    let graph = path(4);
    let weights = vec![2.0; graph.num_edges()];
    let result = closeness_centrality(
        &graph,
        NodeSelection::All,
        Direction::BOTH,
        Some(&weights),
        Some(0.0),
        true,
    )
    .unwrap();
    assert_eq!(result.scores(), &[0.25; 4]);
    assert!(!result.is_disconnected());
}

#[test]
fn test_config_entry_point() {
    let graph = Graph::from_edges(3, true, [(0, 1), (1, 2)]).unwrap();
    let config = ClosenessConfigBuilder::new()
        .with_direction(Direction::OUT)
        .with_normalized(false)
        .build();
    let result = closeness_centrality_from_config(&graph, VID(0), None, &config).unwrap();
    assert_eq!(result.scores(), &[1.0 / 3.0]);
    assert_eq!(
        result.repr(),
        "Algorithm Name: Closeness Centrality, Number of Nodes: 1, Result Type: f64"
    );
}
