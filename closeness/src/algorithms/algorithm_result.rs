use closeness_api::core::entities::VID;
use ordered_float::OrderedFloat;
use std::{cmp::Ordering, collections::HashMap};

/// An 'AlgorithmRepr' struct that represents the string output in the terminal after running an algorithm.
///
/// It returns the algorithm name, number of nodes in the result, and the result type.
///
#[derive(Debug, Clone, PartialEq)]
pub struct AlgorithmRepr {
    pub algo_name: String,
    pub result_type: String,
}

/// A generic `AlgorithmResult` struct that represents the result of an algorithm computation.
///
/// Values are stored in the order the nodes were requested, `nodes[i]` owns `result[i]`.
/// A node may appear more than once if it was requested more than once.
///
#[derive(Debug, Clone, PartialEq)]
pub struct AlgorithmResult<V> {
    pub algo_repr: AlgorithmRepr,
    pub nodes: Vec<VID>,
    pub result: Vec<V>,
}

impl<V: Clone> AlgorithmResult<V> {
    /// Creates a new instance of `AlgorithmResult`.
    ///
    /// Arguments:
    ///
    /// * `algo_name`: The name of the algorithm.
    /// * `result_type`: The type of the result.
    /// * `nodes`: The nodes the values belong to.
    /// * `result`: A `Vec` with one value of type `V` per node.
    pub fn new(algo_name: &str, result_type: &str, nodes: Vec<VID>, result: Vec<V>) -> Self {
        debug_assert_eq!(nodes.len(), result.len());
        Self {
            algo_repr: AlgorithmRepr {
                algo_name: algo_name.to_string(),
                result_type: result_type.to_string(),
            },
            nodes,
            result,
        }
    }

    /// Returns a formatted string representation of the algorithm.
    pub fn repr(&self) -> String {
        format!(
            "Algorithm Name: {}, Number of Nodes: {}, Result Type: {}",
            &self.algo_repr.algo_name,
            &self.result.len(),
            &self.algo_repr.result_type
        )
    }

    pub fn len(&self) -> usize {
        self.result.len()
    }

    pub fn is_empty(&self) -> bool {
        self.result.is_empty()
    }

    /// Returns the value of the first occurrence of `node`.
    pub fn get(&self, node: VID) -> Option<&V> {
        self.nodes
            .iter()
            .position(|&v| v == node)
            .map(|pos| &self.result[pos])
    }

    /// Returns all values in request order.
    pub fn values(&self) -> &[V] {
        &self.result
    }

    /// Iterate over `(node, value)` pairs in request order.
    pub fn iter(&self) -> impl Iterator<Item = (VID, &V)> + '_ {
        self.nodes.iter().copied().zip(self.result.iter())
    }

    /// Returns a hashmap from node to value, later duplicates overwrite earlier ones.
    pub fn to_hashmap(&self) -> HashMap<VID, V> {
        self.iter().map(|(v, value)| (v, value.clone())).collect()
    }

    /// Sorts the `AlgorithmResult` by its values in ascending or descending order.
    ///
    /// Arguments:
    ///
    /// * `cmp`: The ordering of two values.
    /// * `reverse`: If `true`, sorts the result in descending order; otherwise, sorts in ascending order.
    ///
    /// Returns:
    ///
    /// A sorted vector of tuples containing nodes and values.
    pub fn sort_by_values<F: FnMut(&V, &V) -> Ordering>(
        &self,
        mut cmp: F,
        reverse: bool,
    ) -> Vec<(VID, V)> {
        let mut all_as_vec: Vec<(VID, V)> =
            self.iter().map(|(v, value)| (v, value.clone())).collect();
        all_as_vec.sort_by(|a, b| {
            let order = cmp(&a.1, &b.1);
            if reverse {
                order.reverse()
            } else {
                order
            }
        });
        all_as_vec
    }

    /// Retrieves the top-k elements from the `AlgorithmResult` based on its values.
    ///
    /// Arguments:
    ///
    /// * `k`: The number of elements to retrieve.
    /// * `percentage`: If `true`, the `k` parameter is treated as a percentage of total elements.
    /// * `reverse`: If `true`, retrieves the elements in descending order; otherwise, in ascending order.
    ///
    /// Returns empty vec if the result is empty or if `k` is 0.
    pub fn top_k_by<F: FnMut(&V, &V) -> Ordering>(
        &self,
        cmp: F,
        k: usize,
        percentage: bool,
        reverse: bool,
    ) -> Vec<(VID, V)> {
        let k = if percentage {
            let total_count = self.result.len();
            (total_count as f64 * (k as f64 / 100.0)) as usize
        } else {
            k
        };
        self.sort_by_values(cmp, reverse)
            .into_iter()
            .take(k)
            .collect()
    }

    pub fn min_by<F: FnMut(&V, &V) -> Ordering>(&self, mut cmp: F) -> Option<(VID, V)> {
        self.iter()
            .min_by(|(_, a_value), (_, b_value)| cmp(a_value, b_value))
            .map(|(v, value)| (v, value.clone()))
    }

    pub fn max_by<F: FnMut(&V, &V) -> Ordering>(&self, mut cmp: F) -> Option<(VID, V)> {
        self.iter()
            .max_by(|(_, a_value), (_, b_value)| cmp(a_value, b_value))
            .map(|(v, value)| (v, value.clone()))
    }

    pub fn median_by<F: FnMut(&V, &V) -> Ordering>(&self, cmp: F) -> Option<(VID, V)> {
        let items = self.sort_by_values(cmp, false);
        let len = items.len();
        if len == 0 {
            return None;
        }
        items.into_iter().nth(len / 2)
    }
}

/// Float results order NaN above every number.
impl AlgorithmResult<f64> {
    pub fn sort_by_value(&self, reverse: bool) -> Vec<(VID, f64)> {
        self.sort_by_values(float_cmp, reverse)
    }

    pub fn top_k(&self, k: usize, percentage: bool, reverse: bool) -> Vec<(VID, f64)> {
        self.top_k_by(float_cmp, k, percentage, reverse)
    }

    pub fn min(&self) -> Option<(VID, f64)> {
        self.min_by(float_cmp)
    }

    pub fn max(&self) -> Option<(VID, f64)> {
        self.max_by(float_cmp)
    }

    pub fn median(&self) -> Option<(VID, f64)> {
        self.median_by(float_cmp)
    }
}

fn float_cmp(a: &f64, b: &f64) -> Ordering {
    OrderedFloat(*a).cmp(&OrderedFloat(*b))
}
