// Copyright (c) 2026 TEAM BHOOMI
// Licensed under the MIT License. See LICENSE file in the project root.

//! Bounded FIFO window of the most recent readings

use std::collections::VecDeque;

use crate::error::{MonitorError, Result};
use crate::sensors::Reading;

/// Rolling window store.
///
/// Holds at most `capacity` readings in arrival order; the oldest reading is
/// evicted first once full. Snapshots are copies, so later appends never
/// affect a sequence already handed out.
#[derive(Debug, Clone)]
pub struct RollingWindow {
    capacity: usize,
    readings: VecDeque<Reading>,
}

impl RollingWindow {
    /// Zero capacity is a configuration error.
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(MonitorError::Config("window capacity must be at least 1".into()));
        }
        Ok(Self {
            capacity,
            readings: VecDeque::with_capacity(capacity),
        })
    }

    pub fn append(&mut self, reading: Reading) {
        if self.readings.len() == self.capacity {
            self.readings.pop_front();
        }
        self.readings.push_back(reading);
    }

    pub fn extend<I: IntoIterator<Item = Reading>>(&mut self, readings: I) {
        for reading in readings {
            self.append(reading);
        }
    }

    /// The most recent `limit` readings, oldest first
    pub fn snapshot(&self, limit: usize) -> Vec<Reading> {
        let skip = self.readings.len().saturating_sub(limit);
        self.readings.iter().skip(skip).cloned().collect()
    }

    pub fn latest(&self) -> Option<&Reading> {
        self.readings.back()
    }

    /// Iterate over the held readings, oldest first
    pub fn iter(&self) -> impl Iterator<Item = &Reading> {
        self.readings.iter()
    }

    pub fn clear(&mut self) {
        self.readings.clear();
    }

    pub fn len(&self) -> usize {
        self.readings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sensors::Weather;

    fn reading(risk: i64) -> Reading {
        Reading::new(format!("t{}", risk), 0.5, 45.0, Weather::Sunny, risk)
    }

    #[test]
    fn test_zero_capacity_is_config_error() {
        assert!(matches!(RollingWindow::new(0), Err(MonitorError::Config(_))));
    }

    #[test]
    fn test_fifo_eviction() {
        let mut window = RollingWindow::new(3).unwrap();
        for risk in 0..4 {
            window.append(reading(risk));
        }

        assert_eq!(window.len(), 3);
        let risks: Vec<i64> = window.iter().map(|r| r.risk_score).collect();
        assert_eq!(risks, vec![1, 2, 3]);
        assert_eq!(window.latest().unwrap().risk_score, 3);
    }

    #[test]
    fn test_snapshot_limit() {
        let mut window = RollingWindow::new(10).unwrap();
        window.extend((0..6).map(reading));

        let tail: Vec<i64> = window.snapshot(2).iter().map(|r| r.risk_score).collect();
        assert_eq!(tail, vec![4, 5]);
        assert_eq!(window.snapshot(100).len(), 6);
        assert!(window.snapshot(0).is_empty());
    }

    #[test]
    fn test_snapshot_is_a_copy() {
        let mut window = RollingWindow::new(2).unwrap();
        window.extend((0..2).map(reading));
        let snapshot = window.snapshot(2);

        window.append(reading(9));
        window.append(reading(10));

        let risks: Vec<i64> = snapshot.iter().map(|r| r.risk_score).collect();
        assert_eq!(risks, vec![0, 1]);
    }

    #[test]
    fn test_clear() {
        let mut window = RollingWindow::new(5).unwrap();
        window.extend((0..5).map(reading));
        window.clear();
        assert!(window.is_empty());
        assert!(window.latest().is_none());
        assert_eq!(window.capacity(), 5);
    }
}
