use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::ephemeris::analytic::OrbitModel;

/// Scene manifest describing every celestial body in a scene.
/// Loaded from a JSON string at runtime.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneManifest {
    /// Bodies in spawn order.
    pub bodies: Vec<BodyDescriptor>,
    /// Translation moving the whole scene in front of the camera,
    /// applied to tabulated positions.
    #[serde(default)]
    pub camera_offset: [f64; 3],
}

/// Describes a single celestial body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BodyDescriptor {
    /// Unique name (e.g., "EARTH"), also the key into position tables.
    pub name: String,
    /// Sphere radius in scene units.
    pub radius: f32,
    /// RGBA base color.
    pub color: [f32; 4],
    /// Name of the body this one orbits. Resolved to a typed reference at
    /// scene construction; absent means the scene barycenter.
    #[serde(default)]
    pub central: Option<String>,
    /// Emissive bodies light the scene and render unshaded.
    #[serde(default)]
    pub emissive: bool,
    /// Analytic orbit used until tabulated data is available.
    pub orbit: OrbitModel,
    /// Scalar compressing real table distances (km) into scene units.
    #[serde(default = "default_display_factor")]
    pub display_factor: f64,
    /// Relative path of this body's position table, when one exists.
    #[serde(default)]
    pub table: Option<String>,
}

fn default_display_factor() -> f64 {
    1.0
}

/// Errors raised while loading a scene manifest.
#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("manifest is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("duplicate body name {0:?}")]
    DuplicateName(String),
    #[error("body {body:?} orbits unknown body {central:?}")]
    UnknownCentralBody { body: String, central: String },
}

impl SceneManifest {
    /// Parse a manifest from a JSON string and validate its references.
    pub fn from_json(json: &str) -> Result<Self, ManifestError> {
        let manifest: SceneManifest = serde_json::from_str(json)?;
        manifest.validate()?;
        Ok(manifest)
    }

    /// Check that names are unique and every central reference names a body
    /// in the manifest. Catching dangling references here means scene
    /// construction can resolve names without failure paths.
    fn validate(&self) -> Result<(), ManifestError> {
        for (i, body) in self.bodies.iter().enumerate() {
            if self.bodies[..i].iter().any(|b| b.name == body.name) {
                return Err(ManifestError::DuplicateName(body.name.clone()));
            }
            if let Some(central) = &body.central {
                if !self.bodies.iter().any(|b| &b.name == central) {
                    return Err(ManifestError::UnknownCentralBody {
                        body: body.name.clone(),
                        central: central.clone(),
                    });
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r#"{
        "bodies": [
            {
                "name": "SUN",
                "radius": 1.0,
                "color": [1.0, 1.0, 0.0, 1.0],
                "emissive": true,
                "orbit": { "model": "fixed", "x": 0.0, "y": 0.0, "z": -20.0 }
            },
            {
                "name": "EARTH",
                "radius": 1.25,
                "color": [0.2, 0.2, 1.0, 1.0],
                "central": "SUN",
                "orbit": { "model": "circular", "radius": 7.0, "z": -20.0 },
                "display_factor": 1.3333e-8,
                "table": "earth.txt"
            }
        ],
        "camera_offset": [0.0, 0.0, -20.0]
    }"#;

    #[test]
    fn parse_minimal_manifest() {
        let manifest = SceneManifest::from_json(MINIMAL).unwrap();
        assert_eq!(manifest.bodies.len(), 2);
        assert!(manifest.bodies[0].emissive);
        assert_eq!(manifest.bodies[1].central.as_deref(), Some("SUN"));
        assert_eq!(manifest.bodies[1].table.as_deref(), Some("earth.txt"));
        assert_eq!(manifest.camera_offset, [0.0, 0.0, -20.0]);
    }

    #[test]
    fn defaults_apply() {
        let manifest = SceneManifest::from_json(MINIMAL).unwrap();
        let sun = &manifest.bodies[0];
        assert!(sun.central.is_none());
        assert_eq!(sun.display_factor, 1.0);
        assert!(sun.table.is_none());
    }

    #[test]
    fn dangling_central_reference_is_rejected() {
        let json = r#"{
            "bodies": [
                {
                    "name": "MOON",
                    "radius": 0.75,
                    "color": [0.9, 0.9, 0.9, 1.0],
                    "central": "EARTH",
                    "orbit": { "model": "fixed", "x": 0.0, "y": 0.0, "z": 0.0 }
                }
            ]
        }"#;
        let err = SceneManifest::from_json(json).unwrap_err();
        assert!(matches!(err, ManifestError::UnknownCentralBody { .. }));
    }

    #[test]
    fn duplicate_names_are_rejected() {
        let json = r#"{
            "bodies": [
                { "name": "SUN", "radius": 1.0, "color": [1,1,0,1],
                  "orbit": { "model": "fixed", "x": 0, "y": 0, "z": 0 } },
                { "name": "SUN", "radius": 2.0, "color": [1,1,0,1],
                  "orbit": { "model": "fixed", "x": 0, "y": 0, "z": 0 } }
            ]
        }"#;
        let err = SceneManifest::from_json(json).unwrap_err();
        assert!(matches!(err, ManifestError::DuplicateName(_)));
    }
}
