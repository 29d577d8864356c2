use glam::DVec3;

use crate::api::types::BodyId;
use crate::mesh::sphere::{uv_sphere, Mesh};

/// Reference to the body a celestial body orbits, resolved once at scene
/// construction instead of compared by name every frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CentralBody {
    /// Orbits the scene origin (or does not orbit at all).
    Barycenter,
    Body(BodyId),
}

/// Fat celestial-body struct — a single struct with everything a renderable
/// body needs. Created once at scene setup; only `position` changes per frame.
#[derive(Debug, Clone)]
pub struct Body {
    /// Unique identifier.
    pub id: BodyId,
    /// Ephemeris-facing name ("EARTH", "MOON", "SUN").
    pub name: String,
    /// Whether this body is drawn (inactive bodies are skipped).
    pub active: bool,
    /// Display radius in scene units.
    pub radius: f32,
    /// RGBA vertex color.
    pub color: [f32; 4],
    /// What this body orbits; display-only, never physics.
    pub central: CentralBody,
    /// Self-luminous bodies are drawn unlit and act as the light source.
    pub emissive: bool,
    /// Current position in view space, written by the position provider.
    pub position: DVec3,
    /// Tessellated sphere, generated once from the radius.
    pub mesh: Mesh,
}

impl Body {
    /// Create a body at the origin with its mesh already tessellated.
    pub fn new(id: BodyId, name: impl Into<String>, radius: f32) -> Self {
        Self {
            id,
            name: name.into(),
            active: true,
            radius,
            color: [1.0, 1.0, 1.0, 1.0],
            central: CentralBody::Barycenter,
            emissive: false,
            position: DVec3::ZERO,
            mesh: uv_sphere(radius),
        }
    }

    // -- Builder pattern --

    pub fn with_color(mut self, color: [f32; 4]) -> Self {
        self.color = color;
        self
    }

    pub fn with_central(mut self, central: CentralBody) -> Self {
        self.central = central;
        self
    }

    pub fn with_emissive(mut self, emissive: bool) -> Self {
        self.emissive = emissive;
        self
    }

    pub fn with_position(mut self, position: DVec3) -> Self {
        self.position = position;
        self
    }
}
