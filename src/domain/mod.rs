//! Domain layer: experiment parameter types.

pub mod models;
