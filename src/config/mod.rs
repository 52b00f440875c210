use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};

use crate::geometry::Point;
use crate::vision::{Direction, Observer};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Scene presets: road extents plus the default observer.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SceneConfig {
    pub road: RoadSettings,
    pub observer: ObserverSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RoadSettings {
    pub width: f64,
    pub length: f64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ObserverSettings {
    pub width: f64,
    pub length: f64,
    /// Field of view in degrees, (0, 360].
    pub fov: f64,
    pub direction: Direction,
}

impl SceneConfig {
    pub fn load_from_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: SceneConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Build an observer at `position` from the configured presets.
    pub fn observer_at(&self, position: Point) -> Observer {
        Observer {
            position,
            width: self.observer.width,
            length: self.observer.length,
            fov: self.observer.fov,
            direction: self.observer.direction,
        }
    }
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            road: RoadSettings {
                width: 60.0,
                length: 780.0,
            },
            observer: ObserverSettings {
                width: 10.0,
                length: 20.0,
                fov: 178.0,
                direction: Direction::Forward,
            },
        }
    }
}

impl Validate for SceneConfig {
    fn validate(&self) -> Result<()> {
        if self.road.width <= 0.0 || self.road.length <= 0.0 {
            return Err(anyhow!("Road dimensions must be positive"));
        }

        if self.observer.width <= 0.0 || self.observer.length <= 0.0 {
            return Err(anyhow!("Observer dimensions must be positive"));
        }

        if !(self.observer.fov > 0.0 && self.observer.fov <= 360.0) {
            return Err(anyhow!(
                "Observer fov {} must be in range (0, 360]",
                self.observer.fov
            ));
        }

        Ok(())
    }
}

/// Ray-length tuning for the vision engine.
#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
#[serde(default)]
pub struct EngineConfig {
    /// How far the rendered FOV boundary rays extend from the observer.
    pub fov_ray_length: f64,
    /// How far the boundary rays extend when clipping vehicle rectangles.
    /// Must exceed any observer-to-vehicle distance in the scene.
    pub clip_ray_length: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            fov_ray_length: 500.0,
            clip_ray_length: 1000.0,
        }
    }
}

impl Validate for EngineConfig {
    fn validate(&self) -> Result<()> {
        if self.fov_ray_length <= 0.0 || self.clip_ray_length <= 0.0 {
            return Err(anyhow!("Ray lengths must be positive"));
        }

        Ok(())
    }
}
