// Copyright (c) 2026 TEAM BHOOMI
// Licensed under the MIT License. See LICENSE file in the project root.

//! Thermal activity field around the current risk level
//!
//! There is no thermal camera behind this yet; the field is drawn around the
//! latest risk score so the heat map has something consistent to show.

use ndarray::Array2;
use rand::Rng;
use rand_distr::StandardNormal;
use serde::{Deserialize, Serialize};

use super::statistics::{band, Band};

/// Thermal values are clipped into this range
pub const THERMAL_MIN: f64 = 0.0;
pub const THERMAL_MAX: f64 = 100.0;

/// A sensor marker placed on the heat map
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hotspot {
    pub label: String,
    pub x: usize,
    pub y: usize,
}

/// Square grid of thermal intensities
#[derive(Debug, Clone)]
pub struct ThermalField {
    pub values: Array2<f64>,
    pub hotspots: Vec<Hotspot>,
}

impl ThermalField {
    /// Draw a `grid` x `grid` field from Normal(risk, spread), clipped to
    /// [0, 100], with `hotspots` uniformly placed sensor markers.
    pub fn generate<R: Rng>(
        rng: &mut R,
        risk: f64,
        grid: usize,
        spread: f64,
        hotspots: usize,
    ) -> Self {
        let spread = spread.abs();
        let values = Array2::from_shape_fn((grid, grid), |_| {
            let z: f64 = rng.sample(StandardNormal);
            (risk + spread * z).clamp(THERMAL_MIN, THERMAL_MAX)
        });

        let hotspots = if grid == 0 {
            Vec::new()
        } else {
            (0..hotspots)
                .map(|i| Hotspot {
                    label: format!("Sensor {}", i + 1),
                    x: rng.gen_range(0..grid),
                    y: rng.gen_range(0..grid),
                })
                .collect()
        };

        Self { values, hotspots }
    }

    /// Low/high risk annotation levels of the field
    pub fn annotation(&self, low_q: f64, high_q: f64) -> Option<Band> {
        let flat: Vec<f64> = self.values.iter().copied().collect();
        band(&flat, low_q, high_q).ok()
    }

    pub fn mean(&self) -> Option<f64> {
        self.values.mean()
    }
}

/// Heat map summary carried in dashboard snapshots
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThermalSummary {
    pub grid: usize,
    pub mean: Option<f64>,
    pub annotation: Option<Band>,
    pub hotspots: Vec<Hotspot>,
}

impl ThermalSummary {
    pub fn from_field(field: &ThermalField, low_q: f64, high_q: f64) -> Self {
        Self {
            grid: field.values.nrows(),
            mean: field.mean(),
            annotation: field.annotation(low_q, high_q),
            hotspots: field.hotspots.clone(),
        }
    }
}
