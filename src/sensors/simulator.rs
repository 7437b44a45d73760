// Copyright (c) 2026 TEAM BHOOMI
// Licensed under the MIT License. See LICENSE file in the project root.

//! Synthetic reading generator for demo/testing

use chrono::Local;
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use rand_distr::{StandardNormal, Uniform};

use super::{Reading, ReadingSource, SourceKind, Weather};

const VIBRATION_MEAN: f64 = 0.5;
const VIBRATION_SD: f64 = 0.2;
const SLOPE_MEAN_DEG: f64 = 45.0;
const SLOPE_SD_DEG: f64 = 3.0;

/// Memoryless generator standing in for real sensor ingestion.
///
/// Every call draws independently: risk uniform in 0..=100, vibration
/// Normal(0.5, 0.2), slope Normal(45, 3) and a uniformly chosen weather.
pub struct SyntheticSource {
    rng: ChaCha8Rng,
    risk: Uniform<i64>,
}

impl SyntheticSource {
    pub fn new() -> Self {
        Self::from_rng(ChaCha8Rng::from_entropy())
    }

    /// Reproducible generator
    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(ChaCha8Rng::seed_from_u64(seed))
    }

    fn from_rng(rng: ChaCha8Rng) -> Self {
        Self {
            rng,
            risk: Uniform::new_inclusive(0, 100),
        }
    }

    fn gaussian(&mut self, mean: f64, sd: f64) -> f64 {
        let z: f64 = self.rng.sample(StandardNormal);
        mean + sd * z
    }

    fn generate(&mut self) -> Reading {
        let vibration = round_to(self.gaussian(VIBRATION_MEAN, VIBRATION_SD), 3);
        let slope_angle = round_to(self.gaussian(SLOPE_MEAN_DEG, SLOPE_SD_DEG), 2);
        let weather = Weather::ALL[self.rng.gen_range(0..Weather::ALL.len())];
        let risk_score = self.rng.sample(&self.risk);

        Reading {
            timestamp: Local::now().format("%H:%M:%S").to_string(),
            vibration,
            slope_angle,
            weather,
            risk_score,
        }
    }
}

impl Default for SyntheticSource {
    fn default() -> Self {
        Self::new()
    }
}

impl ReadingSource for SyntheticSource {
    fn kind(&self) -> SourceKind {
        SourceKind::Synthetic
    }

    fn name(&self) -> &str {
        "simulated live data"
    }

    fn backlog(&mut self) -> Vec<Reading> {
        Vec::new()
    }

    fn next(&mut self) -> Option<Reading> {
        Some(self.generate())
    }
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_synthetic_ranges() {
        let mut source = SyntheticSource::with_seed(7);
        assert!(source.backlog().is_empty());

        for _ in 0..500 {
            let reading = source.next().unwrap();
            assert!((0..=100).contains(&reading.risk_score));
            assert!(reading.vibration.is_finite());
            // 10 standard deviations either side
            assert!((15.0..=75.0).contains(&reading.slope_angle));
            assert_eq!(reading.timestamp.len(), 8);
        }
    }

    #[test]
    fn test_seeded_sources_agree() {
        let mut a = SyntheticSource::with_seed(42);
        let mut b = SyntheticSource::with_seed(42);
        for _ in 0..20 {
            let (ra, rb) = (a.next().unwrap(), b.next().unwrap());
            assert_eq!(ra.risk_score, rb.risk_score);
            assert_eq!(ra.vibration, rb.vibration);
            assert_eq!(ra.weather, rb.weather);
        }
    }

    #[test]
    fn test_rounding() {
        assert_eq!(round_to(0.123456, 3), 0.123);
        assert_eq!(round_to(44.987, 2), 44.99);
    }
}
