// Copyright (c) 2026 TEAM BHOOMI
// Licensed under the MIT License. See LICENSE file in the project root.

//! Risk classification

use std::fmt;

use serde::{Deserialize, Serialize};

/// Scores strictly above this are high risk
pub const HIGH_RISK_ABOVE: i64 = 70;
/// Scores strictly above this (and not high) are medium risk
pub const MEDIUM_RISK_ABOVE: i64 = 40;

/// Severity tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SeverityTier {
    Low,
    Medium,
    High,
}

impl fmt::Display for SeverityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SeverityTier::Low => "LOW",
            SeverityTier::Medium => "MEDIUM",
            SeverityTier::High => "HIGH",
        };
        f.write_str(label)
    }
}

/// Recommended response for a tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    Monitoring,
    Warning,
    Evacuation,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Action::Monitoring => "Monitoring",
            Action::Warning => "Warning",
            Action::Evacuation => "Evacuation",
        };
        f.write_str(label)
    }
}

/// Outcome of classifying one risk score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assessment {
    pub tier: SeverityTier,
    pub action: Action,
}

/// Map a risk score to its tier and action.
///
/// Total over all integers. Thresholds are strict: 70 is Medium, 40 is Low.
pub fn classify(risk_score: i64) -> Assessment {
    if risk_score > HIGH_RISK_ABOVE {
        Assessment {
            tier: SeverityTier::High,
            action: Action::Evacuation,
        }
    } else if risk_score > MEDIUM_RISK_ABOVE {
        Assessment {
            tier: SeverityTier::Medium,
            action: Action::Warning,
        }
    } else {
        Assessment {
            tier: SeverityTier::Low,
            action: Action::Monitoring,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundaries() {
        assert_eq!(classify(70).tier, SeverityTier::Medium);
        assert_eq!(classify(71).tier, SeverityTier::High);
        assert_eq!(classify(40).tier, SeverityTier::Low);
        assert_eq!(classify(41).tier, SeverityTier::Medium);
    }

    #[test]
    fn test_actions_follow_tier() {
        assert_eq!(classify(100).action, Action::Evacuation);
        assert_eq!(classify(55).action, Action::Warning);
        assert_eq!(classify(0).action, Action::Monitoring);
    }

    #[test]
    fn test_out_of_range_scores() {
        assert_eq!(classify(-5).tier, SeverityTier::Low);
        assert_eq!(classify(1_000).tier, SeverityTier::High);
        assert_eq!(classify(i64::MIN).tier, SeverityTier::Low);
        assert_eq!(classify(i64::MAX).tier, SeverityTier::High);
    }

    #[test]
    fn test_labels() {
        assert_eq!(SeverityTier::High.to_string(), "HIGH");
        assert_eq!(Action::Evacuation.to_string(), "Evacuation");
        assert!(SeverityTier::High > SeverityTier::Low);
    }
}
