use std::collections::HashMap;

use glam::DVec3;
use serde::{Deserialize, Serialize};

use super::PositionProvider;

/// Closed-form orbit models evaluated directly from the time parameter.
/// No integration state; each evaluation depends only on `t`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "model", rename_all = "snake_case")]
pub enum OrbitModel {
    /// A body pinned at a fixed point.
    Fixed { x: f64, y: f64, z: f64 },
    /// A circle of radius `radius` in the plane at depth `z`,
    /// one radian of phase per unit of time.
    Circular { radius: f64, z: f64 },
    /// A circular deferent of radius `radius` plus an epicycle of radius
    /// `epicycle_radius` turning at `epicycle_rate` times the deferent phase.
    Epicyclic {
        radius: f64,
        epicycle_radius: f64,
        epicycle_rate: f64,
        z: f64,
    },
}

impl OrbitModel {
    pub fn evaluate(&self, t: f64) -> DVec3 {
        match *self {
            OrbitModel::Fixed { x, y, z } => DVec3::new(x, y, z),
            OrbitModel::Circular { radius, z } => {
                DVec3::new(radius * t.cos(), radius * t.sin(), z)
            }
            OrbitModel::Epicyclic {
                radius,
                epicycle_radius,
                epicycle_rate,
                z,
            } => {
                let phase = epicycle_rate * t;
                DVec3::new(
                    radius * t.cos() + epicycle_radius * phase.cos(),
                    radius * t.sin() + epicycle_radius * phase.sin(),
                    z,
                )
            }
        }
    }
}

/// Analytic position provider: a map from body name to orbit model.
/// Serves as the fallback while tabulated data is still loading.
#[derive(Debug, Clone, Default)]
pub struct AnalyticEphemeris {
    orbits: HashMap<String, OrbitModel>,
}

impl AnalyticEphemeris {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, model: OrbitModel) {
        self.orbits.insert(name.into(), model);
    }

    pub fn model(&self, name: &str) -> Option<&OrbitModel> {
        self.orbits.get(name)
    }
}

impl PositionProvider for AnalyticEphemeris {
    fn position_at(&self, body: &str, time: f64) -> Option<DVec3> {
        self.orbits.get(body).map(|m| m.evaluate(time))
    }
}
