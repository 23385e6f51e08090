//! Features Module - request encoding
//!
//! Temporal flags plus target-encoded categorical risk scores, assembled
//! in the order the classifier was trained on.

pub mod encoder;
pub mod layout;


pub use encoder::{encode, FeatureVector};
pub use layout::{layout_fingerprint, Category, Feature};
