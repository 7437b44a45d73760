// Copyright (c) 2026 TEAM BHOOMI
// Licensed under the MIT License. See LICENSE file in the project root.

//! Restricted-zone intrusion detection

use std::collections::HashSet;

use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Zone identifier
pub type Zone = String;

/// Where a worker is during the current tick
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WorkerAssignment {
    pub worker_id: String,
    pub zone: Zone,
}

impl WorkerAssignment {
    pub fn new(worker_id: impl Into<String>, zone: impl Into<Zone>) -> Self {
        Self {
            worker_id: worker_id.into(),
            zone: zone.into(),
        }
    }
}

/// Fixed set of off-limits zones
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RestrictedZones {
    zones: HashSet<Zone>,
}

impl RestrictedZones {
    pub fn new<I, S>(zones: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Zone>,
    {
        Self {
            zones: zones.into_iter().map(Into::into).collect(),
        }
    }

    pub fn contains(&self, zone: &str) -> bool {
        self.zones.contains(zone)
    }

    pub fn len(&self) -> usize {
        self.zones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }
}

/// Restricted zones occupied by at least one worker, each listed once in
/// the order it first appears in `assignments`.
pub fn detect_intrusions(
    assignments: &[WorkerAssignment],
    restricted: &RestrictedZones,
) -> Vec<Zone> {
    let mut seen = HashSet::new();
    assignments
        .iter()
        .filter(|a| restricted.contains(&a.zone))
        .filter(|a| seen.insert(a.zone.as_str()))
        .map(|a| a.zone.clone())
        .collect()
}

/// Stand-in for worker positioning: scatters the crew uniformly across the
/// site zones on every call.
pub struct WorkerRoster {
    rng: ChaCha8Rng,
    site_zones: Vec<Zone>,
    workers: usize,
}

impl WorkerRoster {
    pub fn new(site_zones: Vec<Zone>, workers: usize, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        Self {
            rng,
            site_zones,
            workers,
        }
    }

    pub fn assign(&mut self) -> Vec<WorkerAssignment> {
        if self.site_zones.is_empty() {
            return Vec::new();
        }
        (1..=self.workers)
            .filter_map(|i| {
                self.site_zones
                    .choose(&mut self.rng)
                    .map(|zone| WorkerAssignment::new(format!("Worker {}", i), zone.clone()))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn restricted() -> RestrictedZones {
        RestrictedZones::new(["Zone A", "Zone C"])
    }

    #[test]
    fn test_no_assignments() {
        assert!(detect_intrusions(&[], &restricted()).is_empty());
        assert!(detect_intrusions(&[], &RestrictedZones::default()).is_empty());
    }

    #[test]
    fn test_single_worker() {
        let inside = [WorkerAssignment::new("w1", "Zone A")];
        assert_eq!(detect_intrusions(&inside, &restricted()), vec!["Zone A"]);

        let outside = [WorkerAssignment::new("w1", "Zone B")];
        assert!(detect_intrusions(&outside, &restricted()).is_empty());
    }

    #[test]
    fn test_first_seen_order_and_dedup() {
        let assignments = [
            WorkerAssignment::new("w1", "Zone C"),
            WorkerAssignment::new("w2", "Zone B"),
            WorkerAssignment::new("w3", "Zone A"),
            WorkerAssignment::new("w4", "Zone C"),
        ];
        let restricted = RestrictedZones::new(["Zone A", "Zone C", "Zone E"]);
        assert_eq!(detect_intrusions(&assignments, &restricted), vec!["Zone C", "Zone A"]);
    }

    #[test]
    fn test_roster() {
        let zones: Vec<Zone> = ["Zone A", "Zone B"].iter().map(|z| z.to_string()).collect();
        let mut roster = WorkerRoster::new(zones.clone(), 5, Some(9));
        let assignments = roster.assign();

        assert_eq!(assignments.len(), 5);
        assert_eq!(assignments[0].worker_id, "Worker 1");
        assert!(assignments.iter().all(|a| zones.contains(&a.zone)));

        let mut empty = WorkerRoster::new(Vec::new(), 5, Some(9));
        assert!(empty.assign().is_empty());
    }
}
