//! # Closeness centrality
//!
//! The closeness centrality of a node is the number of nodes minus one divided by the sum of
//! the shortest path lengths from (or to) that node. It measures how easily the other nodes
//! can be reached from it, or how easily it can be reached from them.
//!
//! Two engines compute the distance sums: breadth first search for unweighted graphs and
//! Dijkstra's algorithm when edge weights are supplied. Both treat a node that cannot be
//! reached (or that lies beyond the cutoff) as if it were at distance `n`, the number of
//! nodes of the graph. For unweighted graphs this is longer than any geodesic, for weighted
//! graphs it may not be, so closeness on weighted graphs that are not connected should be
//! read with care.
//!
//! A graph with a single node has closeness `NaN` for that node (`0 / 0`).

mod unweighted;
mod weighted;

pub use weighted::SHORTEST_PATH_EPSILON;

use crate::{
    algorithms::algorithm_result::AlgorithmResult,
    config::ClosenessConfig,
    core::utils::{
        interrupt::{Interrupt, NoInterrupt},
        progress::{Progress, TracingProgress},
    },
    db::{api::view::GraphOps, graph::nodes::NodeSelection},
    errors::CentralityError,
};
use closeness_api::core::{entities::VID, Direction};
use std::{
    fmt::{self, Display, Formatter},
    mem::discriminant,
    ops::Deref,
};
use tracing::{debug, warn};
use unweighted::UnweightedEngine;
use weighted::WeightedEngine;

const PROGRESS_LABEL: &str = "Closeness: ";

/// A non-fatal condition found while computing closeness, reported at most once per call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ClosenessWarning {
    /// Some node could not reach (or be reached from) every other node.
    Disconnected,
    /// Some weights are positive but below [`SHORTEST_PATH_EPSILON`].
    WeightsBelowEpsilon { min: f64 },
}

impl Display for ClosenessWarning {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ClosenessWarning::Disconnected => write!(
                f,
                "closeness centrality is not well-defined for disconnected graphs"
            ),
            ClosenessWarning::WeightsBelowEpsilon { min } => write!(
                f,
                "Some weights are smaller than epsilon (minimum weight {min}), calculations may suffer from numerical precision"
            ),
        }
    }
}

/// Latches warnings so each kind is logged and recorded once.
#[derive(Debug, Default)]
pub(crate) struct Warnings {
    raised: Vec<ClosenessWarning>,
}

impl Warnings {
    pub(crate) fn raise(&mut self, warning: ClosenessWarning) {
        if self
            .raised
            .iter()
            .all(|raised| discriminant(raised) != discriminant(&warning))
        {
            warn!("{}", warning);
            self.raised.push(warning);
        }
    }

    pub(crate) fn into_inner(self) -> Vec<ClosenessWarning> {
        self.raised
    }
}

/// Closeness scores in the order the nodes were selected, plus the warnings raised.
#[derive(Debug, Clone, PartialEq)]
pub struct ClosenessResult {
    result: AlgorithmResult<f64>,
    warnings: Vec<ClosenessWarning>,
}

impl ClosenessResult {
    fn new(nodes: Vec<VID>, scores: Vec<f64>, warnings: Vec<ClosenessWarning>) -> Self {
        Self {
            result: AlgorithmResult::new("Closeness Centrality", "f64", nodes, scores),
            warnings,
        }
    }

    pub fn scores(&self) -> &[f64] {
        &self.result.result
    }

    pub fn into_scores(self) -> Vec<f64> {
        self.result.result
    }

    pub fn warnings(&self) -> &[ClosenessWarning] {
        &self.warnings
    }

    /// Whether a warning of the same kind as `warning` was raised, payloads are ignored.
    pub fn has_warning(&self, warning: &ClosenessWarning) -> bool {
        self.warnings
            .iter()
            .any(|raised| discriminant(raised) == discriminant(warning))
    }

    pub fn is_disconnected(&self) -> bool {
        self.has_warning(&ClosenessWarning::Disconnected)
    }
}

impl Deref for ClosenessResult {
    type Target = AlgorithmResult<f64>;

    fn deref(&self) -> &Self::Target {
        &self.result
    }
}

/// Distance cutoff, `None` means unbounded.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Cutoff(Option<f64>);

impl Cutoff {
    /// Negative cutoffs mean no cutoff, NaN is rejected.
    pub(crate) fn new(cutoff: Option<f64>) -> Result<Self, CentralityError> {
        match cutoff {
            Some(c) if c.is_nan() => Err(CentralityError::InvalidCutoff(c)),
            Some(c) if c < 0.0 => Ok(Cutoff(None)),
            c => Ok(Cutoff(c)),
        }
    }

    pub(crate) fn exceeds(&self, distance: f64) -> bool {
        matches!(self.0, Some(c) if distance > c)
    }
}

/// What a single source traversal found.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct SourceDistances {
    /// Sum of the distances of all nodes within the cutoff.
    pub(crate) sum: f64,
    /// Number of nodes within the cutoff, the source included.
    pub(crate) reached: usize,
    /// Distance of the last node taken off the work queue, possibly beyond the cutoff.
    pub(crate) last_distance: f64,
}

impl SourceDistances {
    /// The distance sum with every unreached node counted at distance `num_nodes`.
    pub(crate) fn penalised_sum(&self, num_nodes: usize) -> f64 {
        // float product, the node count squared can overflow an integer
        self.sum + num_nodes as f64 * (num_nodes - self.reached) as f64
    }
}

/// A shortest path engine computing one distance sum per source.
pub(crate) trait DistanceEngine {
    fn traverse(&mut self, source: VID) -> SourceDistances;
}

/// Turn a penalised distance sum into a closeness score.
///
/// The normalized score is `(n - 1) / sum`, the raw score is `1 / sum`. A single node graph
/// has `sum == 0` and yields `NaN`.
pub fn closeness_score(sum: f64, num_nodes: usize, normalized: bool) -> f64 {
    let others = num_nodes as f64 - 1.0;
    let score = others / sum;
    if normalized {
        score
    } else {
        score / others
    }
}

fn run_engine<E: DistanceEngine>(
    engine: &mut E,
    nodes: &[VID],
    num_nodes: usize,
    cutoff: Cutoff,
    normalized: bool,
    progress: &mut impl Progress,
    interrupt: &impl Interrupt,
    warnings: &mut Warnings,
) -> Result<Vec<f64>, CentralityError> {
    let mut scores = Vec::new();
    scores.try_reserve_exact(nodes.len())?;
    let total = nodes.len() as f64;

    for (i, &source) in nodes.iter().enumerate() {
        if interrupt.is_interrupted() {
            debug!("closeness cancelled after {i} of {} nodes", nodes.len());
            return Err(CentralityError::Cancelled);
        }

        let distances = engine.traverse(source);
        // the cutoff did not truncate this traversal, so anything unreached is disconnected
        if distances.reached < num_nodes && !cutoff.exceeds(distances.last_distance) {
            warnings.raise(ClosenessWarning::Disconnected);
        }
        scores.push(closeness_score(
            distances.penalised_sum(num_nodes),
            num_nodes,
            normalized,
        ));
        progress.update(100.0 * (i + 1) as f64 / total);
    }

    if nodes.is_empty() {
        progress.update(100.0);
    }
    Ok(scores)
}

/// Computes the closeness centrality of the selected nodes with full control over progress
/// reporting and cancellation.
///
/// # Arguments
///
/// - `graph`: The graph, it must not change for the duration of the call.
/// - `nodes`: The nodes to compute closeness for, results follow this order.
/// - `weights`: Optional strictly positive weights, one per edge and indexed by edge id.
///   If `None` every edge has length 1 and breadth first search is used.
/// - `config`: Direction, cutoff and normalization.
/// - `progress`: Receives the completed percentage after every source, or a single `100`
///   for an empty selection.
/// - `interrupt`: Polled before every source, the call fails with
///   [`CentralityError::Cancelled`] as soon as it fires and no partial result is returned.
///
/// # Errors
///
/// Argument errors are reported before any traversal starts:
/// [`CentralityError::InvalidWeightsLength`], [`CentralityError::NonPositiveWeight`],
/// [`CentralityError::InvalidVertex`] and [`CentralityError::InvalidCutoff`].
/// [`CentralityError::OutOfMemory`] is returned if working storage cannot be allocated.
pub fn closeness_centrality_with<G: GraphOps>(
    graph: &G,
    nodes: impl Into<NodeSelection>,
    weights: Option<&[f64]>,
    config: &ClosenessConfig,
    progress: &mut impl Progress,
    interrupt: &impl Interrupt,
) -> Result<ClosenessResult, CentralityError> {
    let cutoff = Cutoff::new(config.cutoff)?;
    let min_weight = weights
        .map(|weights| weighted::validate_weights(graph, weights))
        .transpose()?;
    let nodes = nodes.into().resolve(graph)?;
    let num_nodes = graph.num_nodes();
    let mut warnings = Warnings::default();

    let scores = match weights {
        Some(weights) => {
            if let Some(min) = min_weight.filter(|&min| min <= SHORTEST_PATH_EPSILON) {
                warnings.raise(ClosenessWarning::WeightsBelowEpsilon { min });
            }
            debug!(
                "weighted closeness for {} nodes, direction {}, cutoff {:?}",
                nodes.len(),
                config.direction,
                config.cutoff
            );
            let mut engine = WeightedEngine::new(graph, weights, config.direction, cutoff)?;
            run_engine(
                &mut engine,
                &nodes,
                num_nodes,
                cutoff,
                config.normalized,
                progress,
                interrupt,
                &mut warnings,
            )?
        }
        None => {
            debug!(
                "unweighted closeness for {} nodes, direction {}, cutoff {:?}",
                nodes.len(),
                config.direction,
                config.cutoff
            );
            let mut engine = UnweightedEngine::new(graph, config.direction, cutoff)?;
            run_engine(
                &mut engine,
                &nodes,
                num_nodes,
                cutoff,
                config.normalized,
                progress,
                interrupt,
                &mut warnings,
            )?
        }
    };

    Ok(ClosenessResult::new(nodes, scores, warnings.into_inner()))
}

/// Computes closeness centrality using the direction, cutoff and normalization of `config`.
///
/// Progress goes to a terminal progress bar if `config.progress` is set and the `progress`
/// feature is enabled, and to the debug log otherwise.
pub fn closeness_centrality_from_config<G: GraphOps>(
    graph: &G,
    nodes: impl Into<NodeSelection>,
    weights: Option<&[f64]>,
    config: &ClosenessConfig,
) -> Result<ClosenessResult, CentralityError> {
    #[cfg(feature = "progress")]
    {
        if config.progress {
            let mut bar =
                crate::core::utils::progress::BarProgress::new(PROGRESS_LABEL.to_string())?;
            return closeness_centrality_with(
                graph,
                nodes,
                weights,
                config,
                &mut bar,
                &NoInterrupt,
            );
        }
    }
    let mut progress = TracingProgress::new(PROGRESS_LABEL);
    closeness_centrality_with(graph, nodes, weights, config, &mut progress, &NoInterrupt)
}

/// Estimates closeness centrality considering only paths no longer than `cutoff`.
///
/// # Arguments
///
/// - `graph`: The graph.
/// - `nodes`: The nodes to compute closeness for.
/// - `direction`: Which paths are measured in directed graphs: `OUT` from the node, `IN` to
///   the node, or `BOTH` treating the graph as undirected.
/// - `weights`: Optional strictly positive weights, one per edge.
/// - `cutoff`: Maximal path length considered, `None` or a negative value means exact
///   closeness. Nodes further away are treated as unreachable, so the estimate is never
///   above the exact closeness.
/// - `normalized`: If `true` the score is `(n - 1) / sum`, otherwise `1 / sum`.
///
/// # Returns
///
/// A [`ClosenessResult`] with one score per selected node.
pub fn closeness_centrality<G: GraphOps>(
    graph: &G,
    nodes: impl Into<NodeSelection>,
    direction: Direction,
    weights: Option<&[f64]>,
    cutoff: Option<f64>,
    normalized: bool,
) -> Result<ClosenessResult, CentralityError> {
    let config = ClosenessConfig {
        direction,
        cutoff,
        normalized,
        ..Default::default()
    };
    closeness_centrality_from_config(graph, nodes, weights, &config)
}

/// Computes exact closeness centrality, see [`closeness_centrality`].
pub fn closeness<G: GraphOps>(
    graph: &G,
    nodes: impl Into<NodeSelection>,
    direction: Direction,
    weights: Option<&[f64]>,
    normalized: bool,
) -> Result<ClosenessResult, CentralityError> {
    closeness_centrality(graph, nodes, direction, weights, None, normalized)
}
