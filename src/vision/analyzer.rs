use log::debug;

use super::{
    classify_vehicle, AnalyzedVehicle, FovWedge, Observer, RoadSnapshot, Vehicle, VisionAnalysis,
    VisionError,
};
use crate::config::EngineConfig;
use crate::geometry::distance;

/// Stateless per-snapshot vision analysis.
///
/// Holds only immutable tuning; every call takes read-only inputs and
/// returns a fresh `VisionAnalysis`, so concurrent calls are safe.
#[derive(Debug, Clone)]
pub struct VisionEngine {
    config: EngineConfig,
}

impl VisionEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Analyze one snapshot's worth of vehicles against the observer's FOV.
    ///
    /// `road_length` is accepted for future FOV truncation at road bounds;
    /// it does not constrain visibility today.
    pub fn analyze(
        &self,
        vehicles: &[Vehicle],
        observer: &Observer,
        road_length: f64,
    ) -> Result<VisionAnalysis, VisionError> {
        let _ = road_length;

        let wedge = FovWedge::from_observer(observer)?;

        let mut analyzed = Vec::with_capacity(vehicles.len());
        for (index, vehicle) in vehicles.iter().enumerate() {
            let (status, ratio) =
                classify_vehicle(vehicle, observer, &wedge, self.config.clip_ray_length)?;

            analyzed.push(AnalyzedVehicle {
                id: format!("vehicle-{}", index),
                vehicle: vehicle.clone(),
                vision_status: status,
                visibility_ratio: ratio,
                distance_to_observer: distance(&vehicle.position, &observer.position),
            });
        }

        let analysis = VisionAnalysis {
            observer: observer.clone(),
            vehicles: analyzed,
            fov_lines: wedge.boundary_rays(self.config.fov_ray_length),
        };

        let counts = analysis.status_counts();
        debug!(
            "analyzed {} vehicles: {} visible, {} partial, {} hidden",
            analysis.vehicles.len(),
            counts.fully_visible,
            counts.partially_visible,
            counts.fully_hidden
        );

        Ok(analysis)
    }

    pub fn analyze_snapshot(&self, snapshot: &RoadSnapshot) -> Result<VisionAnalysis, VisionError> {
        self.analyze(&snapshot.vehicles, &snapshot.observer, snapshot.length)
    }
}

impl Default for VisionEngine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

/// One-shot analysis with the default engine tuning.
pub fn analyze_road_vision(
    vehicles: &[Vehicle],
    observer: &Observer,
    road_length: f64,
) -> Result<VisionAnalysis, VisionError> {
    VisionEngine::default().analyze(vehicles, observer, road_length)
}
