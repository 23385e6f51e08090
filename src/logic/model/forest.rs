//! Random forest classifier
//!
//! Trees are stored as flat node arrays, the way scikit-learn exports them.
//! A sample goes left when `x[feature] <= threshold`. The forest's class
//! distribution is the mean of every tree's normalised leaf distribution.

use serde::{Deserialize, Serialize};

use super::classifier::{check_width, InferenceError, ProbabilityEstimator};

/// Node of a flattened decision tree
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TreeNode {
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
    Leaf {
        /// Class weights (counts or fractions) of training samples in the leaf
        value: Vec<f64>,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecisionTree {
    pub nodes: Vec<TreeNode>,
}

impl DecisionTree {
    /// Class distribution of the leaf reached by `features`
    fn leaf_distribution(&self, features: &[f64]) -> Result<&[f64], InferenceError> {
        let mut idx = 0;
        loop {
            match self.nodes.get(idx) {
                Some(TreeNode::Split { feature, threshold, left, right }) => {
                    let x = features.get(*feature).ok_or_else(|| {
                        InferenceError(format!("node {} splits on missing feature {}", idx, feature))
                    })?;
                    idx = if *x <= *threshold { *left } else { *right };
                }
                Some(TreeNode::Leaf { value }) => return Ok(value.as_slice()),
                None => return Err(InferenceError(format!("node {} out of range", idx))),
            }
        }
    }

    /// Structural check: children point forward and inside the array,
    /// split features exist, leaves have one weight per class.
    fn validate(&self, n_features: usize, n_classes: usize) -> Result<(), String> {
        if self.nodes.is_empty() {
            return Err("tree has no nodes".to_string());
        }
        let len = self.nodes.len();
        for (idx, node) in self.nodes.iter().enumerate() {
            match node {
                TreeNode::Split { feature, threshold, left, right } => {
                    if *feature >= n_features {
                        return Err(format!("node {} splits on missing feature {}", idx, feature));
                    }
                    if !threshold.is_finite() {
                        return Err(format!("node {} has a non-finite threshold", idx));
                    }
                    for child in [left, right] {
                        if *child <= idx || *child >= len {
                            return Err(format!("node {} has invalid child {}", idx, child));
                        }
                    }
                }
                TreeNode::Leaf { value } => {
                    if value.len() != n_classes {
                        return Err(format!(
                            "leaf {} has {} class weights, expected {}",
                            idx,
                            value.len(),
                            n_classes
                        ));
                    }
                    if value.iter().any(|w| !w.is_finite() || *w < 0.0) {
                        return Err(format!("leaf {} has invalid class weights", idx));
                    }
                }
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RandomForest {
    pub n_features: usize,
    pub n_classes: usize,
    pub trees: Vec<DecisionTree>,
}

impl RandomForest {
    pub fn validate(&self) -> Result<(), String> {
        if self.trees.is_empty() {
            return Err("random forest has no trees".to_string());
        }
        for (idx, tree) in self.trees.iter().enumerate() {
            tree.validate(self.n_features, self.n_classes)
                .map_err(|e| format!("tree {}: {}", idx, e))?;
        }
        Ok(())
    }
}

impl ProbabilityEstimator for RandomForest {
    fn predict_proba(&self, features: &[f64]) -> Result<Vec<f64>, InferenceError> {
        check_width(self.n_features, features)?;

        let mut proba = vec![0.0f64; self.n_classes];
        for tree in &self.trees {
            let leaf = tree.leaf_distribution(features)?;
            let total: f64 = leaf.iter().sum();
            if total <= 0.0 {
                return Err(InferenceError("leaf with zero total weight".to_string()));
            }
            for (acc, weight) in proba.iter_mut().zip(leaf) {
                *acc += weight / total;
            }
        }

        let n_trees = self.trees.len() as f64;
        for p in &mut proba {
            *p /= n_trees;
        }
        Ok(proba)
    }

    fn n_features(&self) -> Option<usize> {
        Some(self.n_features)
    }

    fn kind(&self) -> &'static str {
        "random_forest"
    }
}
