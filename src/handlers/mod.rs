//! HTTP handlers

pub mod root;
pub mod health;
pub mod predict;
pub mod model_info;
pub mod admin;
