//! Infrastructure layer: file formats and process-wide setup.

pub mod config;
pub mod logging;
