// Host-side tests for field configuration and its attribute parsing.

use hero_core::config::{
    ATTR_AREA_PER_PARTICLE, ATTR_EASE_FACTOR, ATTR_INTERACTION_RADIUS, ATTR_LOG_LEVEL, ATTR_SEED,
};
use hero_core::constants::*;
use hero_core::{ConfigError, FieldConfig};
use log::LevelFilter;
use std::collections::HashMap;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |name: &str| map.get(name).cloned()
}

#[test]
fn defaults_come_from_constants() {
    let config = FieldConfig::default();
    assert_eq!(config.area_per_particle, AREA_PER_PARTICLE);
    assert_eq!(config.interaction_radius, INTERACTION_RADIUS);
    assert_eq!(config.ease_factor, EASE_FACTOR);
    assert_eq!(config.seed, None);
    assert_eq!(config.log_level, None);
    assert!(config.validate().is_ok());
}

#[test]
fn missing_attributes_keep_defaults() {
    let config = FieldConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(config, FieldConfig::default());
}

#[test]
fn attributes_override_defaults() {
    let config = FieldConfig::from_lookup(lookup(&[
        (ATTR_AREA_PER_PARTICLE, "25000"),
        (ATTR_INTERACTION_RADIUS, " 90.5 "),
        (ATTR_EASE_FACTOR, "0.1"),
        (ATTR_SEED, "42"),
    ]))
    .unwrap();
    assert_eq!(config.area_per_particle, 25_000);
    assert_eq!(config.interaction_radius, 90.5);
    assert_eq!(config.ease_factor, 0.1);
    assert_eq!(config.seed, Some(42));
}

#[test]
fn garbage_numbers_are_rejected() {
    let err = FieldConfig::from_lookup(lookup(&[(ATTR_AREA_PER_PARTICLE, "lots")])).unwrap_err();
    assert_eq!(
        err,
        ConfigError::InvalidNumber {
            attribute: ATTR_AREA_PER_PARTICLE,
            value: "lots".to_string(),
        }
    );
    assert!(err.to_string().contains("lots"));

    assert!(FieldConfig::from_lookup(lookup(&[(ATTR_SEED, "-1")])).is_err());
}

#[test]
fn out_of_range_values_are_rejected() {
    let zero_area = FieldConfig::from_lookup(lookup(&[(ATTR_AREA_PER_PARTICLE, "0")]));
    assert!(matches!(
        zero_area,
        Err(ConfigError::OutOfRange {
            attribute: ATTR_AREA_PER_PARTICLE,
            ..
        })
    ));

    for bad in ["0", "-0.5", "1.5", "NaN"] {
        let res = FieldConfig::from_lookup(lookup(&[(ATTR_EASE_FACTOR, bad)]));
        assert!(res.is_err(), "ease factor {} should be rejected", bad);
    }
    for bad in ["0", "-10", "inf"] {
        let res = FieldConfig::from_lookup(lookup(&[(ATTR_INTERACTION_RADIUS, bad)]));
        assert!(res.is_err(), "radius {} should be rejected", bad);
    }
}

#[test]
fn log_level_attribute_can_raise_verbosity() {
    let config = FieldConfig::from_lookup(lookup(&[(ATTR_LOG_LEVEL, "debug")])).unwrap();
    assert_eq!(config.log_level, Some(LevelFilter::Debug));

    let config = FieldConfig::from_lookup(lookup(&[(ATTR_LOG_LEVEL, " TRACE ")])).unwrap();
    assert_eq!(config.log_level, Some(LevelFilter::Trace));

    let err = FieldConfig::from_lookup(lookup(&[(ATTR_LOG_LEVEL, "chatty")])).unwrap_err();
    assert_eq!(
        err,
        ConfigError::InvalidLevel {
            attribute: ATTR_LOG_LEVEL,
            value: "chatty".to_string(),
        }
    );
}

#[test]
fn with_seed_sets_only_the_seed() {
    let config = FieldConfig::default().with_seed(7);
    assert_eq!(config.seed, Some(7));
    assert_eq!(config.area_per_particle, AREA_PER_PARTICLE);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn tuning_constants_are_consistent() {
    assert!(EASE_FACTOR > 0.0 && EASE_FACTOR <= 1.0);
    assert!(INTERACTION_RADIUS > FLOAT_RADIUS_MIN + FLOAT_RADIUS_SPAN);
    assert!(SIZE_MIN > 0.0 && DENSITY_MIN >= 1.0);
    assert!(FLOAT_Y_PHASE_RATIO > 0.0 && FLOAT_Y_PHASE_RATIO < 1.0);
    // opacity may exceed 1; the canvas clamps it
    assert!(OPACITY_MIN + OPACITY_SPAN > 1.0);
}
