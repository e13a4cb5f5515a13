//! Tests for harness configuration.

use super::*;
use mcubench_core::BenchParams;

#[test]
fn test_toml_parsing() {
    let toml = r#"
        run_count = 3
        warmup_count = 1

        [hardware]
        board = "Feather M4"
        processor = "SAMD51"
        speed = "120"
        version = "8.2.0"

        [scale]
        n = 1000
        m = 100

        [[nqueens_params]]
        key = { n = 10, m = 10 }
        params = { repeat_count = 2, workload_size = 4 }
    "#;

    let config = HarnessConfig::from_toml_str(toml).unwrap();
    assert_eq!(config.run_count, 3);
    assert_eq!(config.warmup_count, 1);
    assert_eq!(config.hardware.processor, "SAMD51");
    assert_eq!(config.scale, Scale::new(1000, 100));
    assert_eq!(config.nqueens_params.entries().len(), 1);
    assert_eq!(
        config.nqueens_params.select(config.scale),
        Some(BenchParams::new(2, 4))
    );
    // untouched table falls back to defaults
    assert_eq!(config.float_params, ParamTable::float_defaults());
}

#[test]
fn test_yaml_parsing() {
    let yaml = r#"
        run_count: 7
        hardware:
          board: Pico
          processor: RP2040
          speed: "133"
          version: "1.0"
        scale:
          n: 50
          m: 25
    "#;

    let config = HarnessConfig::from_yaml_str(yaml).unwrap();
    assert_eq!(config.run_count, 7);
    assert_eq!(config.hardware.board, "Pico");
    assert_eq!(config.scale, Scale::new(50, 25));
}

#[test]
fn test_empty_document_uses_defaults() {
    let config = HarnessConfig::from_toml_str("").unwrap();
    assert_eq!(config, HarnessConfig::default());
    assert_eq!(config.run_count, DEFAULT_RUN_COUNT);
    assert_eq!(config.scale, Scale::new(100, 100));
    assert_eq!(config.hardware.processor, "nRF52840");
}

#[test]
fn test_builder() {
    let config = HarnessConfig::new()
        .with_scale(5000, 1000)
        .with_run_count(20)
        .with_warmup_count(2)
        .with_hardware(HardwareInfo::new("b", "p", "1", "v"));

    assert_eq!(config.scale, Scale::new(5000, 1000));
    assert_eq!(config.run_count, 20);
    assert_eq!(config.warmup_count, 2);
    assert_eq!(config.hardware.speed, "1");
    assert!(config.validate().is_ok());
}

#[test]
fn test_validate_rejects_empty_hardware_field() {
    let config = HarnessConfig::new().with_hardware(HardwareInfo::new("b", " ", "1", "v"));
    let err = config.validate().unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));
    assert!(err.to_string().contains("hardware.processor"));
}

#[test]
fn test_validate_rejects_zero_repeat_count() {
    let table = ParamTable::default().with_entry(Scale::new(1, 1), BenchParams::new(0, 3));
    let config = HarnessConfig::new().with_float_params(table);
    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("float_params"));
}

#[test]
fn test_invalid_toml() {
    let err = HarnessConfig::from_toml_str("run_count = \"ten\"").unwrap_err();
    assert!(matches!(err, ConfigError::Toml(_)));
}

#[test]
fn test_missing_file() {
    let err = HarnessConfig::load("/nonexistent/mcubench.toml").unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
}

#[test]
fn test_round_trip_through_toml() {
    let config = HarnessConfig::new().with_scale(1000, 1000).with_run_count(4);
    let text = toml::to_string(&config).unwrap();
    assert_eq!(HarnessConfig::from_toml_str(&text).unwrap(), config);
}

#[test]
fn test_optional_path() {
    let config = HarnessConfig::from_optional_path(None::<&str>).unwrap();
    assert_eq!(config, HarnessConfig::default());

    let err = HarnessConfig::from_optional_path(Some("/nonexistent/mcubench.yaml")).unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
}
