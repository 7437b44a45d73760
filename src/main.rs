// Copyright (c) 2026 TEAM BHOOMI
// Licensed under the MIT License. See LICENSE file in the project root.

//! BHOOMI - Rockfall Risk Monitoring
//!
//! Headless driver for one dashboard session: refreshes on a fixed timer,
//! logs the risk status and restricted-zone alerts, and optionally emits
//! each dashboard snapshot as a JSON line for a front end to render.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{error, info, warn, Level};
use tracing_subscriber::FmtSubscriber;

use bhoomi::core::{DashboardSnapshot, Session};
use bhoomi::detection::AlertRecord;
use bhoomi::{Config, DispatchOutcome, SourceKind, NAME, VERSION};

/// BHOOMI - Rockfall risk monitoring and restricted-zone alerts
#[derive(Parser, Debug)]
#[command(name = "bhoomi")]
#[command(author = "TEAM BHOOMI")]
#[command(version = VERSION)]
#[command(about = "Rockfall risk monitoring with restricted-zone alerts")]
struct Args {
    /// Configuration file path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Reading source: synthetic, static or external
    #[arg(short, long)]
    source: Option<SourceKind>,

    /// Operator-supplied dataset (implies --source external unless set)
    #[arg(long)]
    dataset: Option<PathBuf>,

    /// Refresh interval in seconds
    #[arg(short, long)]
    interval: Option<u64>,

    /// Stop after this many refreshes (runs until Ctrl+C when omitted)
    #[arg(short, long)]
    ticks: Option<u64>,

    /// Seed the synthetic generator and stand-ins
    #[arg(long)]
    seed: Option<u64>,

    /// Print each dashboard snapshot as a JSON line
    #[arg(long)]
    json: bool,

    /// Alert workers automatically whenever a restricted zone is occupied
    #[arg(long)]
    auto_alert: bool,

    /// Send a manual alert once at start-up
    #[arg(long)]
    manual_alert: bool,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    /// Enable trace-level logging
    #[arg(long)]
    trace: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config_path = args.config.clone().unwrap_or_else(Config::default_path);
    let mut config = Config::load_or_create(&config_path)
        .with_context(|| format!("loading configuration from {:?}", config_path))?;

    let log_level = if args.trace {
        Level::TRACE
    } else if args.debug {
        Level::DEBUG
    } else {
        config.log_level.parse().unwrap_or(Level::INFO)
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_file(args.debug)
        .with_line_number(args.debug)
        .with_ansi(!args.json)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("🤖 {} Safety Core v{} - Rockfall Prediction & Alert System", NAME, VERSION);
    info!("Configuration loaded from {:?}", config_path);

    // Command line overrides
    if let Some(dataset) = args.dataset {
        config.source.external_dataset = Some(dataset);
        config.source.kind = SourceKind::External;
    }
    if let Some(kind) = args.source {
        config.source.kind = kind;
    }
    if let Some(secs) = args.interval {
        config.refresh.interval_secs = secs;
    }
    if args.seed.is_some() {
        config.source.seed = args.seed;
    }
    config.validate()?;

    let session = match Session::open(&config) {
        Ok(session) => session,
        Err(e) => {
            error!("⚠ {}", e);
            return Err(e).context("please select another data source");
        }
    };

    if args.manual_alert {
        info!("{}", acknowledgement(&session.manual_alert()));
    }

    let options = RunOptions {
        interval: config.refresh.interval(),
        ticks: args.ticks,
        json: args.json,
        auto_alert: args.auto_alert,
    };

    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(run(session, options))
}

struct RunOptions {
    interval: Duration,
    ticks: Option<u64>,
    json: bool,
    auto_alert: bool,
}

/// Refresh the session on a fixed timer until the tick budget runs out or
/// Ctrl+C arrives
async fn run(mut session: Session, options: RunOptions) -> Result<()> {
    info!("🚀 Refreshing every {:?} from {} source", options.interval, session.source_kind());
    info!("   Press Ctrl+C to shutdown");

    let mut timer = tokio::time::interval(options.interval);

    loop {
        tokio::select! {
            _ = timer.tick() => {
                let report = session.tick();
                if options.auto_alert && !report.intrusions.is_empty() {
                    info!("{}", acknowledgement(&session.alert_restricted()));
                }

                let snapshot = session.dashboard();
                if options.json {
                    println!("{}", serde_json::to_string(&snapshot)?);
                } else {
                    log_snapshot(&snapshot);
                }

                if options.ticks.map_or(false, |limit| report.tick >= limit) {
                    info!("Tick budget reached");
                    break;
                }
            }
            _ = tokio::signal::ctrl_c() => {
                info!("Shutdown signal received");
                break;
            }
        }
    }

    info!("{} shutdown complete after {} refreshes", NAME, session.ticks());
    Ok(())
}

fn log_snapshot(snapshot: &DashboardSnapshot) {
    match &snapshot.current {
        Some(status) => info!(
            "Current Risk: {} ({}%) | Action: {} | Last Update: {} | Weather: {}",
            status.assessment.tier,
            status.reading.risk_score,
            status.assessment.action,
            status.reading.timestamp,
            status.reading.weather
        ),
        None => warn!("No readings yet - insufficient data"),
    }

    let bands = [("Vibration", &snapshot.vibration_band), ("Slope", &snapshot.slope_band)];
    for (label, band) in bands {
        if let Some(band) = band {
            info!(
                "{} band: low <= {:.3}, high >= {:.3} (range {:.3}..{:.3})",
                label, band.low_bound, band.high_bound, band.min, band.max
            );
        }
    }

    if snapshot.intrusions.is_empty() {
        info!("✅ No workers in restricted areas");
    }

    let forecast = snapshot
        .forecast
        .iter()
        .map(|p| format!("{}={}%", p.hour, p.risk_percent))
        .collect::<Vec<_>>()
        .join(" ");
    info!("Forecast: {}", forecast);
}

/// Operator-facing line for a dispatched alert
fn acknowledgement(record: &AlertRecord) -> String {
    match record.outcome {
        DispatchOutcome::Sent => format!("✅ {} [{}]", record.message, record.id),
        DispatchOutcome::SuppressedNoIntrusion => format!("ℹ {}", record.message),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bhoomi::detection::{AlertDispatcher, AlertEvent, SimulatedDispatcher};

    #[test]
    fn test_acknowledgement_carries_dispatch_message() {
        let dispatcher = SimulatedDispatcher::new();

        let manual = dispatcher.dispatch(&AlertEvent::manual());
        let line = acknowledgement(&manual);
        assert!(line.contains("Alert sent to all registered numbers"));
        assert!(line.contains(&manual.id.to_string()));

        let quiet = dispatcher.dispatch(&AlertEvent::zone_intrusion(Vec::new()));
        assert!(acknowledgement(&quiet).contains("No workers currently near restricted areas"));
    }
}
