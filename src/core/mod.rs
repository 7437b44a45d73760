//! Core module - rolling window store and dashboard session

mod session;
mod window;

pub use session::{AlertLogEntry, CurrentStatus, DashboardSnapshot, Metric, Session, TickReport};
pub use window::RollingWindow;
