use bevy::prelude::*;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::Value;
use std::path::Path;

use super::{physics::PhysicsConfig, road::RoadConfig, road::SpawnConfig};
use crate::components::{HandlingConfig, VehicleConfig};
use crate::utils::errors::{ConfigError, Result};

/// Everything needed to start a race session.
#[derive(Resource, Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub physics: PhysicsConfig,
    pub vehicle: VehicleConfig,
    pub handling: HandlingConfig,
    pub road: RoadConfig,
    pub spawn: SpawnConfig,
    /// Master seed for collision kicks and entity placement
    pub seed: Option<u64>,
}

impl SimulationConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)?;
        let config: Self = serde_yaml::from_reader(file)?;
        config.validate()?;
        info!("Loaded simulation config from {}", path.display());
        Ok(config)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let file = std::fs::File::create(path)?;
        serde_yaml::to_writer(file, self)?;
        info!("Saved simulation config to {}", path.display());
        Ok(())
    }

    pub fn from_json(value: &Value) -> Result<Self> {
        SimulationConfigBuilder::from_json(value)?.build()
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// The config itself if it validates, otherwise the defaults with the
    /// same seed. The rejected value is logged.
    pub fn validated_or_default(self) -> Self {
        match self.validate() {
            Ok(()) => self,
            Err(err) => {
                warn!("Invalid simulation config ({err}), falling back to defaults");
                Self {
                    seed: self.seed,
                    ..Self::default()
                }
            }
        }
    }

    /// Reject values the simulation cannot run with. Zero or negative sizes
    /// would stall recycling or divide by zero in the force model.
    pub fn validate(&self) -> Result<()> {
        let positive = [
            ("vehicle.mass", self.vehicle.mass),
            ("vehicle.max_speed", self.vehicle.max_speed),
            ("vehicle.wheelbase", self.vehicle.wheelbase),
            ("physics.max_delta_time", self.physics.max_delta_time),
            ("road.segment_length", self.road.segment_length),
            ("road.road_half_width", self.road.road_half_width),
            ("road.fallback_half_width", self.road.fallback_half_width),
            ("road.lane_width", self.road.lane_width),
            ("spawn.obstacles.interval", self.spawn.obstacles.interval),
            ("spawn.collectibles.interval", self.spawn.collectibles.interval),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::invalid(name, value));
            }
        }

        if self.vehicle.max_reverse_speed < 0.0 {
            return Err(ConfigError::invalid(
                "vehicle.max_reverse_speed",
                self.vehicle.max_reverse_speed,
            ));
        }
        if self.road.segment_count == 0 {
            return Err(ConfigError::invalid("road.segment_count", 0));
        }
        if self.road.pool_length() <= self.road.trailing_distance {
            return Err(ConfigError::invalid(
                "road.trailing_distance",
                self.road.trailing_distance,
            ));
        }
        let maintenance = &self.road.maintenance;
        if maintenance.light_interval == 0 || maintenance.resync_interval == 0 {
            return Err(ConfigError::invalid(
                "road.maintenance",
                format!("{:?}", maintenance),
            ));
        }
        for (name, entity) in [
            ("spawn.obstacles", &self.spawn.obstacles),
            ("spawn.collectibles", &self.spawn.collectibles),
        ] {
            if entity.min_ahead > entity.max_ahead {
                return Err(ConfigError::invalid(
                    name,
                    format!("min_ahead {} > max_ahead {}", entity.min_ahead, entity.max_ahead),
                ));
            }
        }

        self.road.track.validate()
    }
}

/// Builds a [`SimulationConfig`] from a partial JSON document. Only the
/// sections present override the defaults, and within a section only the
/// keys present.
#[derive(Default, Debug, Clone)]
pub struct SimulationConfigBuilder {
    pub physics: Option<PhysicsConfig>,
    pub vehicle: Option<VehicleConfig>,
    pub handling: Option<HandlingConfig>,
    pub road: Option<RoadConfig>,
    pub spawn: Option<SpawnConfig>,
    pub seed: Option<u64>,
}

impl SimulationConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn physics(mut self, physics: PhysicsConfig) -> Self {
        self.physics = Some(physics);
        self
    }

    pub fn vehicle(mut self, vehicle: VehicleConfig) -> Self {
        self.vehicle = Some(vehicle);
        self
    }

    pub fn handling(mut self, handling: HandlingConfig) -> Self {
        self.handling = Some(handling);
        self
    }

    pub fn road(mut self, road: RoadConfig) -> Self {
        self.road = Some(road);
        self
    }

    pub fn spawn(mut self, spawn: SpawnConfig) -> Self {
        self.spawn = Some(spawn);
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn from_json(value: &Value) -> Result<Self> {
        let mut builder = Self::new();

        if let Some(physics) = section(value, "physics")? {
            builder = builder.physics(physics);
        }
        if let Some(vehicle) = section(value, "vehicle")? {
            builder = builder.vehicle(vehicle);
        }
        if let Some(handling) = section(value, "handling")? {
            builder = builder.handling(handling);
        }
        if let Some(road) = section(value, "road")? {
            builder = builder.road(road);
        }
        if let Some(spawn) = section(value, "spawn")? {
            builder = builder.spawn(spawn);
        }
        if let Some(seed) = value.get("seed").and_then(|v| v.as_u64()) {
            builder = builder.seed(seed);
        }

        Ok(builder)
    }

    pub fn build(self) -> Result<SimulationConfig> {
        let mut config = SimulationConfig::default();

        if let Some(physics) = self.physics {
            config.physics = physics;
        }
        if let Some(vehicle) = self.vehicle {
            config.vehicle = vehicle;
        }
        if let Some(handling) = self.handling {
            config.handling = handling;
        }
        if let Some(road) = self.road {
            config.road = road;
        }
        if let Some(spawn) = self.spawn {
            config.spawn = spawn;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }

        config.validate()?;
        Ok(config)
    }
}

/// Deserialize `key` laid over the section's defaults, so nested objects
/// only need the keys they change.
fn section<T>(value: &Value, key: &str) -> Result<Option<T>>
where
    T: Default + Serialize + DeserializeOwned,
{
    let Some(overrides) = value.get(key) else {
        return Ok(None);
    };
    let mut merged = serde_json::to_value(T::default())?;
    merge_json(&mut merged, overrides);
    Ok(Some(serde_json::from_value(merged)?))
}

fn merge_json(base: &mut Value, overrides: &Value) {
    match (base, overrides) {
        (Value::Object(base), Value::Object(overrides)) => {
            for (key, value) in overrides {
                match base.get_mut(key) {
                    Some(slot) => merge_json(slot, value),
                    None => {
                        base.insert(key.clone(), value.clone());
                    }
                }
            }
        }
        (slot, value) => *slot = value.clone(),
    }
}
