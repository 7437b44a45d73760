// Copyright (c) 2026 TEAM BHOOMI
// Licensed under the MIT License. See LICENSE file in the project root.

//! Error types for the monitoring core

use thiserror::Error;

/// Errors raised by the monitoring core.
///
/// Classification, zone detection and dispatch are total and never fail;
/// only source loading, band computation and configuration can.
#[derive(Debug, Error)]
pub enum MonitorError {
    /// The requested dataset is missing, empty or malformed.
    #[error("source '{source_name}' unavailable: {reason}")]
    SourceUnavailable {
        source_name: String,
        reason: String,
    },

    /// A summary was requested over zero values.
    #[error("cannot summarize an empty sequence")]
    EmptySequence,

    /// Invalid start-up configuration.
    #[error("configuration error: {0}")]
    Config(String),
}

impl MonitorError {
    pub fn unavailable(source_name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::SourceUnavailable {
            source_name: source_name.into(),
            reason: reason.into(),
        }
    }
}

/// Result alias used throughout the library.
pub type Result<T> = std::result::Result<T, MonitorError>;
