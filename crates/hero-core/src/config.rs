use crate::constants::{AREA_PER_PARTICLE, EASE_FACTOR, INTERACTION_RADIUS};
use crate::error::ConfigError;
use log::LevelFilter;
use std::str::FromStr;

pub const ATTR_AREA_PER_PARTICLE: &str = "data-area-per-particle";
pub const ATTR_INTERACTION_RADIUS: &str = "data-interaction-radius";
pub const ATTR_EASE_FACTOR: &str = "data-ease-factor";
pub const ATTR_SEED: &str = "data-seed";
pub const ATTR_LOG_LEVEL: &str = "data-log-level";

/// Runtime-tunable subset of the field parameters.
///
/// - `area_per_particle`: surface px² per particle (> 0)
/// - `interaction_radius`: pointer distance below which particles are repelled (> 0)
/// - `ease_factor`: per-tick fraction of the gap to the idle target, in (0, 1]
/// - `seed`: fixed RNG seed; `None` draws from entropy
/// - `log_level`: overrides the page's log level (`off`, `error` .. `trace`)
#[derive(Clone, Debug, PartialEq)]
pub struct FieldConfig {
    pub area_per_particle: u32,
    pub interaction_radius: f32,
    pub ease_factor: f32,
    pub seed: Option<u64>,
    pub log_level: Option<LevelFilter>,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            area_per_particle: AREA_PER_PARTICLE,
            interaction_radius: INTERACTION_RADIUS,
            ease_factor: EASE_FACTOR,
            seed: None,
            log_level: None,
        }
    }
}

impl FieldConfig {
    /// Build a config from named attributes, e.g. the canvas element's
    /// `data-*` attributes. Missing attributes keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(v) = parse_attr::<u32, _>(&lookup, ATTR_AREA_PER_PARTICLE)? {
            config.area_per_particle = v;
        }
        if let Some(v) = parse_attr::<f32, _>(&lookup, ATTR_INTERACTION_RADIUS)? {
            config.interaction_radius = v;
        }
        if let Some(v) = parse_attr::<f32, _>(&lookup, ATTR_EASE_FACTOR)? {
            config.ease_factor = v;
        }
        config.seed = parse_attr::<u64, _>(&lookup, ATTR_SEED)?;
        if let Some(raw) = lookup(ATTR_LOG_LEVEL) {
            let level = raw.trim().parse::<LevelFilter>().map_err(|_| {
                ConfigError::InvalidLevel {
                    attribute: ATTR_LOG_LEVEL,
                    value: raw.clone(),
                }
            })?;
            config.log_level = Some(level);
        }
        config.validate()?;
        Ok(config)
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.area_per_particle == 0 {
            return Err(ConfigError::OutOfRange {
                attribute: ATTR_AREA_PER_PARTICLE,
                value: 0.0,
                expected: "> 0",
            });
        }
        if !(self.interaction_radius.is_finite() && self.interaction_radius > 0.0) {
            return Err(ConfigError::OutOfRange {
                attribute: ATTR_INTERACTION_RADIUS,
                value: self.interaction_radius as f64,
                expected: "> 0",
            });
        }
        if !(self.ease_factor > 0.0 && self.ease_factor <= 1.0) {
            return Err(ConfigError::OutOfRange {
                attribute: ATTR_EASE_FACTOR,
                value: self.ease_factor as f64,
                expected: "(0, 1]",
            });
        }
        Ok(())
    }
}

fn parse_attr<T, F>(lookup: &F, attribute: &'static str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(attribute) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|_| ConfigError::InvalidNumber {
                attribute,
                value: raw,
            }),
    }
}
