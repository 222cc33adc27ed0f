//! Config domain: tests for validation and RON parsing.

use std::path::Path;

use super::{ConfigError, MotionConfig, parse_motion_config, resolve_motion_config};

#[test]
fn test_default_config_is_valid() {
    assert!(MotionConfig::default().validate().is_ok());
}

#[test]
fn test_zero_dash_duration_rejected() {
    let config = MotionConfig {
        dash_duration: 0.0,
        ..Default::default()
    };

    let errors = config.validate().unwrap_err();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].field, "dash_duration");
    assert_eq!(errors[0].value, 0.0);
}

#[test]
fn test_negative_durations_rejected() {
    let config = MotionConfig {
        coyote_time: -0.1,
        jump_buffer_time: -0.1,
        dash_cooldown: -1.0,
        ..Default::default()
    };

    let fields: Vec<&str> = config
        .validate()
        .unwrap_err()
        .iter()
        .map(|e| e.field)
        .collect();
    assert_eq!(fields, vec!["coyote_time", "jump_buffer_time", "dash_cooldown"]);
}

#[test]
fn test_air_control_bounds() {
    for bad in [0.0, -0.5, 1.5] {
        let config = MotionConfig {
            air_control: bad,
            ..Default::default()
        };
        assert!(config.validate().is_err(), "air_control {} accepted", bad);
    }

    let full = MotionConfig {
        air_control: 1.0,
        ..Default::default()
    };
    assert!(full.validate().is_ok());
}

#[test]
fn test_non_finite_values_rejected() {
    let config = MotionConfig {
        move_speed: f32::NAN,
        squash_speed: f32::INFINITY,
        ..Default::default()
    };

    let errors = config.validate().unwrap_err();
    assert_eq!(errors.len(), 2);
    assert_eq!(errors[0].field, "move_speed");
    assert_eq!(errors[1].field, "squash_speed");
}

#[test]
fn test_zero_squash_speed_rejected() {
    let config = MotionConfig {
        squash_speed: 0.0,
        ..Default::default()
    };
    assert_eq!(config.validate().unwrap_err()[0].field, "squash_speed");
}

#[test]
fn test_config_error_display() {
    let error = ConfigError {
        field: "dash_duration",
        value: -1.0,
        expected: "> 0",
    };
    assert_eq!(
        error.to_string(),
        "motion config field 'dash_duration' is -1 but must be > 0"
    );
}

#[test]
fn test_parse_partial_config_keeps_defaults() {
    let config = parse_motion_config("(move_speed: 12.5, dash_cooldown: 0.5)", "inline").unwrap();

    assert_eq!(config.move_speed, 12.5);
    assert_eq!(config.dash_cooldown, 0.5);
    assert_eq!(config.jump_force, MotionConfig::default().jump_force);
    assert_eq!(
        config.ground_layer_mask,
        MotionConfig::default().ground_layer_mask
    );
}

#[test]
fn test_parse_error_names_file() {
    let err = parse_motion_config("(move_speed: fast)", "motion.ron").unwrap_err();
    assert_eq!(err.file, "motion.ron");
    assert!(err.message.starts_with("Parse error"));
    assert!(err.to_string().starts_with("Failed to load motion.ron"));
}

#[test]
fn test_missing_file_falls_back_to_defaults() {
    let config = resolve_motion_config(Path::new("does/not/exist/motion.ron"));
    assert_eq!(config, MotionConfig::default());
}

#[test]
fn test_shipped_config_is_valid() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("assets/config/motion.ron");
    let config = super::load_motion_config(&path).unwrap();
    assert!(config.validate().is_ok());
}
