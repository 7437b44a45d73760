// Copyright (c) 2026 TEAM BHOOMI
// Licensed under the MIT License. See LICENSE file in the project root.

//! Alert dispatch
//!
//! No transport is wired up: the dispatcher only decides whether an alert
//! would go out and records the acknowledgment. SMS or push delivery slots
//! in behind [`AlertDispatcher`].

use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use super::zones::Zone;

/// What caused an alert
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AlertTrigger {
    /// Workers found inside restricted zones
    ZoneIntrusion,
    /// Operator pressed the manual alert button
    ManualRequest,
}

/// A request to alert workers; lives only for the action that created it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlertEvent {
    pub trigger: AlertTrigger,
    pub zones: Option<Vec<Zone>>,
}

impl AlertEvent {
    pub fn zone_intrusion(zones: Vec<Zone>) -> Self {
        Self {
            trigger: AlertTrigger::ZoneIntrusion,
            zones: Some(zones),
        }
    }

    pub fn manual() -> Self {
        Self {
            trigger: AlertTrigger::ManualRequest,
            zones: None,
        }
    }

    /// Whether this event would be delivered
    pub fn outcome(&self) -> DispatchOutcome {
        match self.trigger {
            AlertTrigger::ManualRequest => DispatchOutcome::Sent,
            AlertTrigger::ZoneIntrusion => match &self.zones {
                Some(zones) if !zones.is_empty() => DispatchOutcome::Sent,
                _ => DispatchOutcome::SuppressedNoIntrusion,
            },
        }
    }

    /// Operator-facing acknowledgment text
    pub fn message(&self, outcome: DispatchOutcome) -> String {
        match (self.trigger, outcome) {
            (AlertTrigger::ManualRequest, _) => "Alert sent to all registered numbers".to_string(),
            (AlertTrigger::ZoneIntrusion, DispatchOutcome::Sent) => format!(
                "Alert sent to workers in restricted zones: {}",
                self.zones.as_deref().unwrap_or_default().join(", ")
            ),
            (AlertTrigger::ZoneIntrusion, DispatchOutcome::SuppressedNoIntrusion) => {
                "No workers currently near restricted areas to alert".to_string()
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DispatchOutcome {
    Sent,
    SuppressedNoIntrusion,
}

/// Acknowledgment of one dispatch decision
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlertRecord {
    pub id: Uuid,
    pub timestamp: DateTime<Utc>,
    pub event: AlertEvent,
    pub outcome: DispatchOutcome,
    pub message: String,
}

/// Delivers alerts. Implementations must report the same outcome as
/// [`AlertEvent::outcome`] so callers never depend on the transport.
pub trait AlertDispatcher: Send + Sync {
    fn dispatch(&self, event: &AlertEvent) -> AlertRecord;
}

/// Demo-mode dispatcher: logs and keeps an in-memory history
#[derive(Default)]
pub struct SimulatedDispatcher {
    history: Mutex<Vec<AlertRecord>>,
}

impl SimulatedDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn history(&self) -> Vec<AlertRecord> {
        self.history.lock().clone()
    }

    pub fn sent_count(&self) -> usize {
        self.history
            .lock()
            .iter()
            .filter(|r| r.outcome == DispatchOutcome::Sent)
            .count()
    }
}

impl AlertDispatcher for SimulatedDispatcher {
    fn dispatch(&self, event: &AlertEvent) -> AlertRecord {
        let outcome = event.outcome();
        let message = event.message(outcome);

        match outcome {
            DispatchOutcome::Sent => warn!("🚨 {} (simulated)", message),
            DispatchOutcome::SuppressedNoIntrusion => info!("{}", message),
        }

        let record = AlertRecord {
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            event: event.clone(),
            outcome,
            message,
        };
        self.history.lock().push(record.clone());
        record
    }
}
