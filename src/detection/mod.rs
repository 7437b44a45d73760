//! Detection module - restricted-zone intrusions and alert dispatch

mod alerts;
mod zones;

pub use alerts::*;
pub use zones::*;
