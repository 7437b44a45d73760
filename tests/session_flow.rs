//! End-to-end session behaviour over real dataset files.

use std::io::Write;

use bhoomi::analysis::SeverityTier;
use bhoomi::core::Session;
use bhoomi::detection::DispatchOutcome;
use bhoomi::{Config, MonitorError, SourceKind};
use tempfile::NamedTempFile;

const HEADER: &str = "Timestamp,Vibration,Slope,Weather,Risk\n";

fn dataset_file(rows: &[&str]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(HEADER.as_bytes()).unwrap();
    for row in rows {
        writeln!(file, "{}", row).unwrap();
    }
    file.flush().unwrap();
    file
}

fn config_with(kind: SourceKind) -> Config {
    let mut config = Config::default();
    config.source.kind = kind;
    config.source.seed = Some(2024);
    config.analysis.thermal_grid = 20;
    config
}

#[test]
fn static_dataset_session() {
    let file = dataset_file(&[
        "09:00:00,0.45,44.2,Sunny,20",
        "09:01:00,0.48,44.9,Windy,70",
        "09:02:00,0.52,45.5,Rainy,71",
    ]);
    let mut config = config_with(SourceKind::Static);
    config.source.static_dataset = file.path().to_path_buf();

    let mut session = Session::open(&config).unwrap();
    assert_eq!(session.window_len(), 3);

    session.tick();
    let snapshot = session.dashboard();
    let current = snapshot.current.unwrap();
    assert_eq!(current.reading.timestamp, "09:02:00");
    assert_eq!(current.assessment.tier, SeverityTier::High);
    assert_eq!(snapshot.alerts_log.len(), 3);
    assert_eq!(snapshot.alerts_log[1].assessment.tier, SeverityTier::Medium);
    assert!(snapshot.vibration_band.is_some());
}

#[test]
fn external_dataset_rejected_when_malformed() {
    let file = dataset_file(&["09:00:00,0.45,44.2,Sunny,20", "09:01:00,0.48,44.9,Foggy,30"]);
    let mut config = config_with(SourceKind::External);
    config.source.external_dataset = Some(file.path().to_path_buf());

    let err = Session::open(&config).err().unwrap();
    assert!(matches!(err, MonitorError::SourceUnavailable { .. }));
}

#[test]
fn external_dataset_missing() {
    let config = config_with(SourceKind::External);
    assert!(matches!(
        Session::open(&config),
        Err(MonitorError::SourceUnavailable { .. })
    ));
}

#[test]
fn switching_sources_mid_session() {
    let file = dataset_file(&["09:00:00,0.45,44.2,Sunny,20", "09:01:00,0.48,44.9,Windy,90"]);
    let mut config = config_with(SourceKind::Synthetic);
    config.source.external_dataset = Some(file.path().to_path_buf());

    let mut session = Session::open(&config).unwrap();
    for _ in 0..10 {
        session.tick();
    }
    assert_eq!(session.window_len(), 10);

    session.switch_to(SourceKind::External).unwrap();
    assert_eq!(session.window_len(), 2);
    assert_eq!(session.current_reading().unwrap().risk_score, 90);

    session.switch_to(SourceKind::Synthetic).unwrap();
    assert_eq!(session.window_len(), 0);
    session.tick();
    assert_eq!(session.window_len(), 1);
}

#[test]
fn synthetic_window_is_bounded() {
    let mut session = Session::open(&config_with(SourceKind::Synthetic)).unwrap();
    for _ in 0..75 {
        session.tick();
    }
    assert_eq!(session.window_len(), 50);
    assert_eq!(session.window(5).len(), 5);
    assert_eq!(session.dashboard().total_readings, 75);
}

#[test]
fn manual_alert_always_sent() {
    let session = Session::open(&config_with(SourceKind::Synthetic)).unwrap();
    let record = session.manual_alert();
    assert_eq!(record.outcome, DispatchOutcome::Sent);
    assert_eq!(record.message, "Alert sent to all registered numbers");
}
