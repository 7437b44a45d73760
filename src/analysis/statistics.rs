// Copyright (c) 2026 TEAM BHOOMI
// Licensed under the MIT License. See LICENSE file in the project root.

//! Percentile bands used to annotate low/high regions of a series

use serde::{Deserialize, Serialize};

use crate::error::{MonitorError, Result};

/// Low/high thresholds plus extrema of a series
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Band {
    pub low_bound: f64,
    pub high_bound: f64,
    pub min: f64,
    pub max: f64,
}

impl Band {
    /// Region a value falls in relative to the band
    pub fn region(&self, value: f64) -> Region {
        if value <= self.low_bound {
            Region::Low
        } else if value >= self.high_bound {
            Region::High
        } else {
            Region::Normal
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Region {
    Low,
    Normal,
    High,
}

/// Compute the `low_q` and `high_q` quantiles and the extrema of `values`.
///
/// Quantiles are fractions in [0, 1] (clamped) and use linear interpolation
/// between closest ranks: rank `q * (n - 1)` over the sorted values.
/// Non-finite values (NaN, infinities) are ignored.
pub fn band(values: &[f64], low_q: f64, high_q: f64) -> Result<Band> {
    let mut sorted: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
    if sorted.is_empty() {
        return Err(MonitorError::EmptySequence);
    }
    sorted.sort_by(f64::total_cmp);

    Ok(Band {
        low_bound: percentile(&sorted, low_q),
        high_bound: percentile(&sorted, high_q),
        min: sorted[0],
        max: sorted[sorted.len() - 1],
    })
}

/// Linear-interpolated quantile of already sorted data
pub fn percentile(sorted: &[f64], q: f64) -> f64 {
    if sorted.is_empty() {
        return f64::NAN;
    }
    let q = if q.is_nan() { 0.0 } else { q.clamp(0.0, 1.0) };
    let k = q * (sorted.len() - 1) as f64;
    let f = k.floor() as usize;
    let c = k.ceil() as usize;

    if f == c || c >= sorted.len() {
        sorted[f.min(sorted.len() - 1)]
    } else {
        let value = sorted[f] + (sorted[c] - sorted[f]) * (k - f as f64);
        value.clamp(sorted[f], sorted[c])
    }
}
