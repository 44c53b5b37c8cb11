//! Domain layer
//!
//! Contains the project model and the engines that query it.

pub mod project;
pub mod specification;
