pub mod adapters;
pub mod config;
pub mod dataset;
pub mod logging;
