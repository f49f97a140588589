/***************************************/
/*        3rd party libraries          */
/***************************************/
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::error::ConfigError;

/***************************************/
/*             Constants               */
/***************************************/
pub const MIN_FLOORS: u8 = 5;
pub const MAX_FLOORS: u8 = 20;

/***************************************/
/*       Public data structures        */
/***************************************/
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Default)]
#[serde(default)]
pub struct Config {
    pub building: BuildingConfig,
    pub dispatcher: DispatcherConfig,
}

/**
 * Physical description of the building and the cabin.
 *
 * # Fields
 * - `n_floors`:        Number of floors served, floors are numbered from 1.
 * - `cabin_speed`:     Cabin speed in meters per second. Zero means instantaneous travel.
 * - `floor_height`:    Height of one floor in meters.
 * - `door_time`:       Seconds between the doors opening and closing.
 */
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct BuildingConfig {
    pub n_floors: u8,
    pub cabin_speed: f64,
    pub floor_height: f64,
    pub door_time: u64,
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct DispatcherConfig {
    pub poll_interval_ms: u64,
}

impl Default for BuildingConfig {
    fn default() -> Self {
        BuildingConfig {
            n_floors: 5,
            cabin_speed: 1.0,
            floor_height: 3.0,
            door_time: 5,
        }
    }
}

impl Default for DispatcherConfig {
    fn default() -> Self {
        DispatcherConfig { poll_interval_ms: 10 }
    }
}

impl BuildingConfig {
    /// Time the cabin needs to pass one floor, or `None` when it does not fit a `Duration`.
    /// A speed of zero (or below) yields zero.
    pub fn checked_time_per_floor(&self) -> Option<Duration> {
        if !(self.cabin_speed > 0.0) {
            return Some(Duration::ZERO);
        }
        Duration::try_from_secs_f64(self.floor_height / self.cabin_speed).ok()
    }

    /// Like `checked_time_per_floor`, saturating at `Duration::MAX` when too long and
    /// falling back to zero for a negative or undefined ratio.
    pub fn time_per_floor(&self) -> Duration {
        match self.checked_time_per_floor() {
            Some(duration) => duration,
            None if self.floor_height / self.cabin_speed > 0.0 => Duration::MAX,
            None => Duration::ZERO,
        }
    }

    pub fn door_duration(&self) -> Duration {
        Duration::from_secs(self.door_time)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_FLOORS..=MAX_FLOORS).contains(&self.n_floors) {
            return Err(ConfigError::FloorCount(self.n_floors));
        }
        if !(self.cabin_speed.is_finite() && self.cabin_speed > 0.0) {
            return Err(ConfigError::CabinSpeed(self.cabin_speed));
        }
        if !(self.floor_height.is_finite() && self.floor_height > 0.0) {
            return Err(ConfigError::FloorHeight(self.floor_height));
        }
        if self.checked_time_per_floor().is_none() {
            return Err(ConfigError::TimePerFloor {
                floor_height: self.floor_height,
                cabin_speed: self.cabin_speed,
            });
        }
        if self.door_time == 0 {
            return Err(ConfigError::DoorTime);
        }
        Ok(())
    }
}

impl DispatcherConfig {
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }
}

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.building.validate()?;
        if self.dispatcher.poll_interval_ms == 0 {
            return Err(ConfigError::PollInterval);
        }
        Ok(())
    }
}

/***************************************/
/*             Public API              */
/***************************************/
pub fn parse_config(config_str: &str) -> Result<Config, ConfigError> {
    Ok(toml::from_str(config_str)?)
}

pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    let config_str = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_config(&config_str)
}

/***************************************/
/*             Unit tests              */
/***************************************/
