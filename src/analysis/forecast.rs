// Copyright (c) 2026 TEAM BHOOMI
// Licensed under the MIT License. See LICENSE file in the project root.

//! Short-horizon risk forecasts

use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Predicted risk for one future hour
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForecastPoint {
    /// Label such as `3h`
    pub hour: String,
    pub risk_percent: i64,
}

/// Anything able to predict risk over the next few hours.
///
/// A real model plugs in here without touching the session.
pub trait Forecaster: Send {
    fn forecast(&mut self, hours: usize) -> Vec<ForecastPoint>;
}

/// Placeholder model drawing each hour uniformly from `[min, max)`
pub struct RandomForecaster {
    rng: ChaCha8Rng,
    min: i64,
    max: i64,
}

impl RandomForecaster {
    pub fn new(min: i64, max: i64, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        Self {
            rng,
            min,
            max: max.max(min + 1),
        }
    }
}

impl Forecaster for RandomForecaster {
    fn forecast(&mut self, hours: usize) -> Vec<ForecastPoint> {
        (1..=hours)
            .map(|h| ForecastPoint {
                hour: format!("{}h", h),
                risk_percent: self.rng.gen_range(self.min..self.max),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forecast_shape() {
        let mut forecaster = RandomForecaster::new(20, 95, Some(5));
        let points = forecaster.forecast(6);

        assert_eq!(points.len(), 6);
        assert_eq!(points[0].hour, "1h");
        assert_eq!(points[5].hour, "6h");
        assert!(points.iter().all(|p| (20..95).contains(&p.risk_percent)));
    }

    #[test]
    fn test_degenerate_range() {
        let mut forecaster = RandomForecaster::new(50, 50, Some(1));
        assert!(forecaster.forecast(3).iter().all(|p| p.risk_percent == 50));
        assert!(forecaster.forecast(0).is_empty());
    }
}
