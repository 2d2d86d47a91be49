use std::io::Write;

use surface_placer::config::Config;
use surface_placer::session::PlaneAlignment;

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{
            "instance_prefix": "Bird_",
            "plane_detection": ["horizontal"],
            "scale": {{ "min": 0.1, "max": 1.5, "initial": 0.5 }}
        }}"#
    )
    .unwrap();

    let config = Config::load(file.path()).unwrap();

    assert_eq!(config.instance_prefix, "Bird_");
    assert_eq!(config.plane_detection, vec![PlaneAlignment::Horizontal]);
    assert_eq!(config.scale.initial, 0.5);
    assert_eq!(config.validate(), Ok(()));
}

#[test]
fn test_load_missing_file() {
    let err = Config::load("/nonexistent/surface-placer.json").unwrap_err();
    assert!(err.to_string().contains("Failed to read config file"));
}

#[test]
fn test_load_malformed_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "{{ not json").unwrap();
    let err = Config::load(file.path()).unwrap_err();
    assert!(err.to_string().contains("Failed to parse config file"));
}

#[test]
fn test_default_round_trips_through_json() {
    let config = Config::default();
    let text = serde_json::to_string_pretty(&config).unwrap();
    let back: Config = serde_json::from_str(&text).unwrap();
    assert_eq!(back, config);
}
