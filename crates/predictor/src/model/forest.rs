use serde::{Deserialize, Serialize};

use super::{Classifier, ModelError};

/// Child index marking a leaf.
const LEAF: i64 = -1;

/// One fitted tree in flat-array form. Node `i` is a leaf when
/// `children_left[i] == -1`; otherwise rows with
/// `x[feature[i]] <= threshold[i]` go to `children_left[i]`, the rest to
/// `children_right[i]`. `value[i]` holds the class weights `[w0, w1]`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecisionTree {
    pub children_left: Vec<i64>,
    pub children_right: Vec<i64>,
    pub feature: Vec<i64>,
    pub threshold: Vec<f64>,
    pub value: Vec<[f64; 2]>,
}

impl DecisionTree {
    fn leaf_for(&self, x: &[f64]) -> usize {
        let mut node = 0usize;
        loop {
            let left = self.children_left[node];
            if left == LEAF {
                return node;
            }
            let feature = self.feature[node] as usize;
            node = if x[feature] <= self.threshold[node] {
                left as usize
            } else {
                self.children_right[node] as usize
            };
        }
    }

    fn positive_fraction(&self, x: &[f64]) -> f64 {
        let [w0, w1] = self.value[self.leaf_for(x)];
        w1 / (w0 + w1)
    }

    fn validate(&self, tree: usize, n_features: usize) -> Result<(), ModelError> {
        let malformed = |node: usize, reason: &'static str| ModelError::MalformedTree {
            tree,
            node,
            reason,
        };

        let n = self.children_left.len();
        if n == 0 {
            return Err(malformed(0, "tree has no nodes"));
        }
        if self.children_right.len() != n
            || self.feature.len() != n
            || self.threshold.len() != n
            || self.value.len() != n
        {
            return Err(malformed(0, "node arrays differ in length"));
        }

        for node in 0..n {
            let [w0, w1] = self.value[node];
            if !w0.is_finite() || !w1.is_finite() || w0 < 0.0 || w1 < 0.0 {
                return Err(malformed(node, "class weights must be finite and non-negative"));
            }

            let (left, right) = (self.children_left[node], self.children_right[node]);
            if left == LEAF {
                if right != LEAF {
                    return Err(malformed(node, "leaf has a right child"));
                }
                let total = w0 + w1;
                if !total.is_finite() {
                    return Err(malformed(node, "leaf class weights overflow"));
                }
                if total <= 0.0 {
                    return Err(malformed(node, "leaf has no class weight"));
                }
                continue;
            }

            // Children always come after their parent, which also rules out cycles.
            let in_range = |child: i64| child > node as i64 && (child as usize) < n;
            if !in_range(left) || !in_range(right) {
                return Err(malformed(node, "child index out of range"));
            }
            let feature = self.feature[node];
            if feature < 0 || feature as usize >= n_features {
                return Err(malformed(node, "split feature out of range"));
            }
            if !self.threshold[node].is_finite() {
                return Err(malformed(node, "non-finite split threshold"));
            }
        }
        Ok(())
    }
}

/// Bagged ensemble; class probabilities are the mean of per-tree leaf
/// class fractions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RandomForest {
    pub n_features: usize,
    pub trees: Vec<DecisionTree>,
}

impl Classifier for RandomForest {
    fn n_features(&self) -> usize {
        self.n_features
    }

    fn class_probabilities(&self, x: &[f64]) -> [f64; 2] {
        let total: f64 = self.trees.iter().map(|t| t.positive_fraction(x)).sum();
        let p = (total / self.trees.len() as f64).clamp(0.0, 1.0);
        [1.0 - p, p]
    }

    fn validate(&self) -> Result<(), ModelError> {
        if self.n_features == 0 || self.trees.is_empty() {
            return Err(ModelError::EmptyModel);
        }
        for (i, tree) in self.trees.iter().enumerate() {
            tree.validate(i, self.n_features)?;
        }
        Ok(())
    }
}
