//! Model Module - artifact, classifier and inference

pub mod bundle;
pub mod classifier;
pub mod forest;
pub mod loader;
pub mod logistic;
pub mod predictor;
pub mod store;

pub use bundle::{ModelBundle, RiskTables};
pub use classifier::{InferenceError, ProbabilityEstimator};
pub use forest::{DecisionTree, RandomForest, TreeNode};
pub use loader::{load, ArtifactError};
pub use logistic::LogisticRegression;
pub use predictor::predict;
pub use store::ModelStore;
