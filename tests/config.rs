use std::io::Write;

use scatterview::render::MarkerShape;
use scatterview::{
    ColorScheme, ConfigError, DatasetKey, NeighborExclusion, OriginMode, ViewerConfig,
};

fn write(dir: &tempfile::TempDir, name: &str, body: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    std::fs::File::create(&path)
        .unwrap()
        .write_all(body.as_bytes())
        .unwrap();
    path
}

#[test]
fn defaults_are_valid() {
    let cfg = ViewerConfig::default();
    cfg.validate().unwrap();
    assert_eq!(cfg.canvas.width, 800.0);
    assert_eq!(cfg.canvas.height, 600.0);
    assert_eq!(cfg.canvas.padding, 50.0);
    assert_eq!(cfg.interaction.pick_tolerance_px, 10.0);
    assert_eq!(cfg.interaction.neighbor_count, 5);
    assert_eq!(cfg.initial_key().as_str(), "data1");

    let d1 = cfg.dataset(&DatasetKey::from("data1")).unwrap();
    assert_eq!(d1.origin, OriginMode::DataZero);
    assert_eq!(d1.shapes.shape_for("b"), Some(MarkerShape::Square));
    let d2 = cfg.dataset(&DatasetKey::from("data2")).unwrap();
    assert_eq!(d2.origin, OriginMode::Corner);
    assert_eq!(d2.shapes.shape_for("bar"), Some(MarkerShape::Triangle));
}

#[test]
fn yaml_overrides_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(
        &dir,
        "viewer.yaml",
        r#"
title: Points
color_scheme: dark
interaction:
  neighbor_count: 3
  neighbor_exclusion: position
datasets:
  - key: cities
    name: Cities
    origin: data-zero
    shapes:
      entries:
        - { label: big, shape: square }
  - key: rivers
    source: rivers/points.csv
initial_dataset: rivers
data_dir: csv
"#,
    );
    let cfg = ViewerConfig::load_file(&path).unwrap();
    cfg.validate().unwrap();

    assert_eq!(cfg.title, "Points");
    assert_eq!(cfg.color_scheme, ColorScheme::Dark);
    assert_eq!(cfg.interaction.neighbor_count, 3);
    assert_eq!(cfg.interaction.pick_tolerance_px, 10.0);
    assert_eq!(cfg.interaction.neighbor_exclusion, NeighborExclusion::Position);
    assert_eq!(cfg.initial_key().as_str(), "rivers");
    assert_eq!(cfg.data_dir, dir.path().join("csv"));

    let cities = cfg.dataset(&DatasetKey::from("cities")).unwrap();
    assert_eq!(cities.display_name(), "Cities");
    assert_eq!(cities.shapes.shape_for("big"), Some(MarkerShape::Square));
    assert_eq!(cities.shapes.shape_for("small"), None);

    // shapes omitted: every label is a circle
    let rivers = cfg.dataset(&DatasetKey::from("rivers")).unwrap();
    assert_eq!(rivers.display_name(), "rivers");
    assert_eq!(rivers.shapes.shape_for("anything"), Some(MarkerShape::Circle));
    assert_eq!(rivers.source.as_deref(), Some(dir.path().join("rivers/points.csv").as_path()));

    let loader = cfg.csv_loader();
    assert_eq!(
        loader.locate(&DatasetKey::from("cities")),
        dir.path().join("csv").join("cities.csv")
    );
}

#[test]
fn json_is_accepted() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(&dir, "viewer.json", r#"{ "tick_step": 5, "canvas": { "width": 400 } }"#);
    let cfg = ViewerConfig::load_file(&path).unwrap();
    assert_eq!(cfg.tick_step, 5.0);
    assert_eq!(cfg.canvas.width, 400.0);
    assert_eq!(cfg.canvas.height, 600.0);
}

#[test]
fn unknown_extension_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(&dir, "viewer.toml", "title = 'x'");
    assert!(matches!(
        ViewerConfig::load_file(&path),
        Err(ConfigError::UnsupportedFormat(ext)) if ext == "toml"
    ));
}

#[test]
fn unknown_field_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(&dir, "viewer.yaml", "zoom: 2\n");
    assert!(matches!(ViewerConfig::load_file(&path), Err(ConfigError::Yaml(_))));
}

#[test]
fn unknown_color_scheme_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(&dir, "viewer.yaml", "color_scheme: neon\n");
    assert!(matches!(ViewerConfig::load_file(&path), Err(ConfigError::Invalid(_))));
}

#[test]
fn missing_file_is_io_error() {
    assert!(matches!(
        ViewerConfig::load_file("/definitely/not/here.yaml"),
        Err(ConfigError::Io { .. })
    ));
}

#[test]
fn validate_rejects_bad_values() {
    let mut cfg = ViewerConfig::default();
    cfg.canvas.padding = 400.0;
    assert!(cfg.validate().is_err());

    let mut cfg = ViewerConfig::default();
    cfg.tick_step = 0.0;
    assert!(cfg.validate().is_err());

    let mut cfg = ViewerConfig::default();
    cfg.interaction.neighbor_count = 0;
    assert!(cfg.validate().is_err());

    let mut cfg = ViewerConfig::default();
    cfg.interaction.pick_tolerance_px = -1.0;
    assert!(cfg.validate().is_err());

    let mut cfg = ViewerConfig::default();
    cfg.datasets.clear();
    assert!(cfg.validate().is_err());

    let mut cfg = ViewerConfig::default();
    let dup = cfg.datasets[0].clone();
    cfg.datasets.push(dup);
    assert!(cfg.validate().is_err());

    let mut cfg = ViewerConfig::default();
    cfg.initial_dataset = Some(DatasetKey::from("nope"));
    assert!(matches!(cfg.validate(), Err(ConfigError::Invalid(msg)) if msg.contains("nope")));
}
