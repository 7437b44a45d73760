// Copyright (c) 2026 TEAM BHOOMI
// Licensed under the MIT License. See LICENSE file in the project root.

//! Dashboard session - owns the source, the window and per-tick state

use std::sync::Arc;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::RollingWindow;
use crate::analysis::{
    self, Assessment, Band, ForecastPoint, Forecaster, RandomForecaster, ThermalField,
    ThermalSummary,
};
use crate::config::{AnalysisConfig, Config, SourceConfig};
use crate::detection::{
    self, AlertDispatcher, AlertEvent, AlertRecord, RestrictedZones, SimulatedDispatcher,
    WorkerAssignment, WorkerRoster, Zone,
};
use crate::error::Result;
use crate::sensors::{self, Reading, ReadingSource, SourceKind};

/// Numeric series held by the window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Metric {
    Vibration,
    Slope,
    Risk,
}

impl Metric {
    pub fn of(&self, reading: &Reading) -> f64 {
        match self {
            Metric::Vibration => reading.vibration,
            Metric::Slope => reading.slope_angle,
            Metric::Risk => reading.risk_score as f64,
        }
    }
}

/// What one tick did
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TickReport {
    pub tick: u64,
    /// Reading appended this tick, if the source is a stream
    pub ingested: Option<Reading>,
    pub assessment: Option<Assessment>,
    pub intrusions: Vec<Zone>,
}

/// One row of the alerts log
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlertLogEntry {
    pub reading: Reading,
    pub assessment: Assessment,
}

/// Latest reading with its classification
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentStatus {
    pub reading: Reading,
    pub assessment: Assessment,
}

/// Everything the presentation layer draws for one refresh.
/// Bands and thermal data are `None` when there is not enough data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardSnapshot {
    pub source: SourceKind,
    pub tick: u64,
    pub total_readings: u64,
    pub window_len: usize,
    pub current: Option<CurrentStatus>,
    pub vibration_band: Option<Band>,
    pub slope_band: Option<Band>,
    pub alerts_log: Vec<AlertLogEntry>,
    pub workers: Vec<WorkerAssignment>,
    pub intrusions: Vec<Zone>,
    pub forecast: Vec<ForecastPoint>,
    pub thermal: Option<ThermalSummary>,
}

/// A single dashboard session.
///
/// Owned by whoever drives the refresh loop; nothing here is shared
/// between sessions.
pub struct Session {
    capacity: usize,
    alerts_log_len: usize,
    analysis: AnalysisConfig,
    source_config: SourceConfig,
    source: Box<dyn ReadingSource>,
    window: RollingWindow,
    restricted: RestrictedZones,
    roster: WorkerRoster,
    dispatcher: Arc<dyn AlertDispatcher>,
    forecaster: Box<dyn Forecaster>,
    thermal_rng: ChaCha8Rng,
    workers: Vec<WorkerAssignment>,
    intrusions: Vec<Zone>,
    ticks: u64,
    total_readings: u64,
}

impl Session {
    /// Open the configured source and start a session on it
    pub fn open(config: &Config) -> Result<Self> {
        let source = sensors::open_source(config.source.kind, &config.source)?;
        Self::new(config, source)
    }

    pub fn new(config: &Config, source: Box<dyn ReadingSource>) -> Result<Self> {
        let capacity = config.window.capacity;
        let seed = config.source.seed;
        let analysis = config.analysis.clone();

        let mut session = Self {
            capacity,
            alerts_log_len: config.window.alerts_log_len,
            forecaster: Box::new(RandomForecaster::new(
                analysis.forecast_min,
                analysis.forecast_max,
                seed,
            )),
            analysis,
            source_config: config.source.clone(),
            source,
            window: RollingWindow::new(capacity)?,
            restricted: RestrictedZones::new(config.zones.restricted.iter().cloned()),
            roster: WorkerRoster::new(config.zones.site_zones.clone(), config.zones.workers, seed),
            dispatcher: Arc::new(SimulatedDispatcher::new()),
            thermal_rng: match seed {
                Some(seed) => ChaCha8Rng::seed_from_u64(seed),
                None => ChaCha8Rng::from_entropy(),
            },
            workers: Vec::new(),
            intrusions: Vec::new(),
            ticks: 0,
            total_readings: 0,
        };
        session.load_backlog()?;

        info!(
            "Session started on {} source '{}' (window {})",
            session.source.kind(),
            session.source.name(),
            session.window.capacity()
        );
        Ok(session)
    }

    /// Replace the alert transport
    pub fn with_dispatcher(mut self, dispatcher: Arc<dyn AlertDispatcher>) -> Self {
        self.dispatcher = dispatcher;
        self
    }

    /// Replace the forecast model
    pub fn with_forecaster(mut self, forecaster: Box<dyn Forecaster>) -> Self {
        self.forecaster = forecaster;
        self
    }

    /// Swap in a new source. The window and all derived state are discarded.
    pub fn switch_source(&mut self, source: Box<dyn ReadingSource>) -> Result<()> {
        info!(
            "Switching source {} -> {} ('{}'), discarding {} readings",
            self.source.kind(),
            source.kind(),
            source.name(),
            self.window.len()
        );
        self.source = source;
        self.window = RollingWindow::new(self.capacity)?;
        self.workers.clear();
        self.intrusions.clear();
        self.load_backlog()
    }

    /// Open `kind` from the session's source configuration and switch to it.
    /// On failure the current source and window are left untouched.
    pub fn switch_to(&mut self, kind: SourceKind) -> Result<()> {
        let source = sensors::open_source(kind, &self.source_config).map_err(|e| {
            warn!("Cannot switch to {} source: {}", kind, e);
            e
        })?;
        self.switch_source(source)
    }

    fn load_backlog(&mut self) -> Result<()> {
        let backlog = self.source.backlog();
        if backlog.is_empty() {
            return Ok(());
        }
        // A dataset is shown whole, even when longer than the live window.
        if backlog.len() > self.window.capacity() {
            self.window = RollingWindow::new(backlog.len())?;
        }
        self.total_readings += backlog.len() as u64;
        debug!("Loaded {} backlog readings into window", backlog.len());
        self.window.extend(backlog);
        Ok(())
    }

    /// Run one refresh: ingest, classify, place workers, detect intrusions
    pub fn tick(&mut self) -> TickReport {
        self.ticks += 1;

        let ingested = self.source.next();
        if let Some(reading) = &ingested {
            self.window.append(reading.clone());
            self.total_readings += 1;
        }

        self.workers = self.roster.assign();
        self.intrusions = detection::detect_intrusions(&self.workers, &self.restricted);
        if !self.intrusions.is_empty() {
            warn!("Restricted area alert! Workers detected in: {}", self.intrusions.join(", "));
        }

        let assessment = self.current_assessment();
        if let (Some(reading), Some(assessment)) = (self.current_reading(), assessment) {
            debug!(
                "Tick {}: risk {} -> {} ({}), window {}",
                self.ticks,
                reading.risk_score,
                assessment.tier,
                assessment.action,
                self.window.len()
            );
        }

        TickReport {
            tick: self.ticks,
            ingested,
            assessment,
            intrusions: self.intrusions.clone(),
        }
    }

    /// Latest reading in the window
    pub fn current_reading(&self) -> Option<&Reading> {
        self.window.latest()
    }

    /// Classification of the latest reading
    pub fn current_assessment(&self) -> Option<Assessment> {
        self.current_reading().map(|r| analysis::classify(r.risk_score))
    }

    /// Most recent `limit` readings, oldest first
    pub fn window(&self, limit: usize) -> Vec<Reading> {
        self.window.snapshot(limit)
    }

    pub fn window_len(&self) -> usize {
        self.window.len()
    }

    pub fn classify(&self, risk_score: i64) -> Assessment {
        analysis::classify(risk_score)
    }

    /// Intrusions among `assignments` against this session's restricted zones
    pub fn detect_intrusions(&self, assignments: &[WorkerAssignment]) -> Vec<Zone> {
        detection::detect_intrusions(assignments, &self.restricted)
    }

    pub fn dispatch(&self, event: &AlertEvent) -> AlertRecord {
        self.dispatcher.dispatch(event)
    }

    pub fn band(&self, series: &[f64], low_q: f64, high_q: f64) -> Result<Band> {
        analysis::band(series, low_q, high_q)
    }

    /// Values of `metric` across the window, oldest first
    pub fn series(&self, metric: Metric) -> Vec<f64> {
        self.window.iter().map(|r| metric.of(r)).collect()
    }

    /// Configured band of `metric`, or `None` when the window is empty
    pub fn metric_band(&self, metric: Metric) -> Option<Band> {
        let (low_q, high_q) = (self.analysis.low_quantile, self.analysis.high_quantile);
        match analysis::band(&self.series(metric), low_q, high_q) {
            Ok(band) => Some(band),
            Err(e) => {
                debug!("No {:?} band: {}", metric, e);
                None
            }
        }
    }

    /// Alert the workers found in restricted zones on the last tick
    pub fn alert_restricted(&self) -> AlertRecord {
        self.dispatch(&AlertEvent::zone_intrusion(self.intrusions.clone()))
    }

    /// Operator-triggered alert; never suppressed
    pub fn manual_alert(&self) -> AlertRecord {
        self.dispatch(&AlertEvent::manual())
    }

    pub fn intrusions(&self) -> &[Zone] {
        &self.intrusions
    }

    pub fn source_kind(&self) -> SourceKind {
        self.source.kind()
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Most recent readings paired with their recommended action
    pub fn alerts_log(&self) -> Vec<AlertLogEntry> {
        self.window
            .snapshot(self.alerts_log_len)
            .into_iter()
            .map(|reading| AlertLogEntry {
                assessment: analysis::classify(reading.risk_score),
                reading,
            })
            .collect()
    }

    /// Build everything the dashboard renders for this refresh
    pub fn dashboard(&mut self) -> DashboardSnapshot {
        let current = self.current_reading().cloned().map(|reading| CurrentStatus {
            assessment: analysis::classify(reading.risk_score),
            reading,
        });

        let thermal = current.as_ref().map(|status| {
            let field = ThermalField::generate(
                &mut self.thermal_rng,
                status.reading.risk_score as f64,
                self.analysis.thermal_grid,
                self.analysis.thermal_spread,
                self.analysis.hotspots,
            );
            let (low_q, high_q) = (self.analysis.low_quantile, self.analysis.high_quantile);
            ThermalSummary::from_field(&field, low_q, high_q)
        });

        DashboardSnapshot {
            source: self.source.kind(),
            tick: self.ticks,
            total_readings: self.total_readings,
            window_len: self.window.len(),
            vibration_band: self.metric_band(Metric::Vibration),
            slope_band: self.metric_band(Metric::Slope),
            alerts_log: self.alerts_log(),
            workers: self.workers.clone(),
            intrusions: self.intrusions.clone(),
            forecast: self.forecaster.forecast(self.analysis.forecast_hours),
            current,
            thermal,
        }
    }
}
