// Copyright (c) 2026 TEAM BHOOMI
// Licensed under the MIT License. See LICENSE file in the project root.

//! Reading source trait and common types

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Surface weather at the time of a reading
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Weather {
    Sunny,
    Rainy,
    Cloudy,
    Windy,
}

impl Weather {
    pub const ALL: [Weather; 4] = [Weather::Sunny, Weather::Rainy, Weather::Cloudy, Weather::Windy];

    pub fn as_str(&self) -> &'static str {
        match self {
            Weather::Sunny => "Sunny",
            Weather::Rainy => "Rainy",
            Weather::Cloudy => "Cloudy",
            Weather::Windy => "Windy",
        }
    }
}

impl fmt::Display for Weather {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Weather {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Weather::ALL
            .iter()
            .copied()
            .find(|w| w.as_str() == s)
            .ok_or_else(|| format!("unknown weather '{}'", s))
    }
}

/// A single sensor-derived reading. Immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    /// Wall-clock label as produced by the source
    pub timestamp: String,
    pub vibration: f64,
    /// Slope angle in degrees
    pub slope_angle: f64,
    pub weather: Weather,
    /// Risk score, 0-100 for well-formed sources
    pub risk_score: i64,
}

impl Reading {
    pub fn new(
        timestamp: impl Into<String>,
        vibration: f64,
        slope_angle: f64,
        weather: Weather,
        risk_score: i64,
    ) -> Self {
        Self {
            timestamp: timestamp.into(),
            vibration,
            slope_angle,
            weather,
            risk_score,
        }
    }
}

/// Which kind of provider feeds a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    /// Randomly generated live readings
    Synthetic,
    /// Pre-existing dataset shipped with the deployment
    Static,
    /// Dataset supplied by the operator at start-up
    External,
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SourceKind::Synthetic => "synthetic",
            SourceKind::Static => "static",
            SourceKind::External => "external",
        };
        f.write_str(name)
    }
}

impl FromStr for SourceKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "synthetic" | "simulated" => Ok(SourceKind::Synthetic),
            "static" | "preloaded" => Ok(SourceKind::Static),
            "external" | "upload" => Ok(SourceKind::External),
            other => Err(format!("unknown source kind '{}'", other)),
        }
    }
}

/// Trait for all reading providers.
///
/// A source hands its existing readings over once through [`backlog`] and
/// then, if it is a live stream, one fresh reading per tick through [`next`].
///
/// [`backlog`]: ReadingSource::backlog
/// [`next`]: ReadingSource::next
pub trait ReadingSource: Send {
    /// Provider kind
    fn kind(&self) -> SourceKind;

    /// Human readable name used in logs and errors
    fn name(&self) -> &str;

    /// Readings that exist before the first tick. Drained on first call.
    fn backlog(&mut self) -> Vec<Reading>;

    /// Next live reading, or `None` when the source is not a stream
    fn next(&mut self) -> Option<Reading>;
}
