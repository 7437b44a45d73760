// Copyright (c) 2026 TEAM BHOOMI
// Licensed under the MIT License. See LICENSE file in the project root.

//! BHOOMI - Rockfall Risk Monitoring Core
//!
//! The state and decision logic behind the BHOOMI safety dashboard:
//! - Interchangeable reading sources (simulated live data, preloaded or uploaded datasets)
//! - Bounded rolling window of the most recent readings
//! - Risk tiers with recommended actions
//! - Restricted-zone intrusion detection and alert dispatch
//! - Percentile bands for trend annotation, thermal field and forecast stand-ins
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                        Session                           │
//! ├──────────────────────────────────────────────────────────┤
//! │  ┌─────────┐   ┌──────────┐   ┌────────────┐             │
//! │  │ Reading │ → │ Rolling  │ → │ Classifier │ ─┐          │
//! │  │ Source  │   │ Window   │ → │ Bands      │ ─┤          │
//! │  └─────────┘   └──────────┘   └────────────┘  │          │
//! │                                               ↓          │
//! │  ┌─────────┐   ┌──────────┐   ┌─────────────────────┐    │
//! │  │ Worker  │ → │ Zone     │ → │ Dashboard Snapshot  │    │
//! │  │ Roster  │   │ Detector │   └─────────────────────┘    │
//! │  └─────────┘   └──────────┘                              │
//! │                     ↓                                    │
//! │               ┌────────────┐                             │
//! │               │  Alert     │                             │
//! │               │ Dispatcher │                             │
//! │               └────────────┘                             │
//! └──────────────────────────────────────────────────────────┘
//! ```

pub mod analysis;
pub mod config;
pub mod core;
pub mod detection;
pub mod error;
pub mod sensors;

// Re-exports for convenience
pub use analysis::{band, classify, Action, Assessment, Band, SeverityTier};
pub use config::Config;
pub use crate::core::{DashboardSnapshot, RollingWindow, Session, TickReport};
pub use detection::{
    detect_intrusions, AlertDispatcher, AlertEvent, AlertTrigger, DispatchOutcome, RestrictedZones,
    WorkerAssignment,
};
pub use error::{MonitorError, Result};
pub use sensors::{Reading, ReadingSource, SourceKind, Weather};

/// BHOOMI version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// BHOOMI name
pub const NAME: &str = "BHOOMI";
