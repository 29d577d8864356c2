/// Body data — names, visual properties and placeholder orbits.
///
/// Radii and distances are exaggerated for readability; the display factors
/// compress real SPICE distances (km) into the same scene units.

/// Ephemeris-facing body names, shared with the position table files.
/// The scene itself reads names from the manifest; these anchor the tests.
#[cfg(test)]
pub const SUN: &str = "SUN";
#[cfg(test)]
pub const EARTH: &str = "EARTH";
#[cfg(test)]
pub const MOON: &str = "MOON";

// ── Display factors ──────────────────────────────────────────────────

/// Earth: 1 AU (~1.5e8 km) maps to 2 scene units.
#[cfg(test)]
pub const EARTH_DISPLAY_FACTOR: f64 = 2.0 / 1.5e8;
/// Moon: its ~4e5 km orbit around Earth maps to 1 scene unit.
#[cfg(test)]
pub const MOON_DISPLAY_FACTOR: f64 = 1.0 / 4.0e5;

/// Default scene, used until the host supplies a manifest of its own.
/// The placeholder orbits mimic the tables closely enough that the
/// analytic-to-tabulated handover is not jarring.
pub const DEFAULT_MANIFEST: &str = r#"{
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
            "display_factor": 1.3333333333e-8,
            "table": "earth.txt"
        },
        {
            "name": "MOON",
            "radius": 0.75,
            "color": [0.9, 0.9, 0.9, 1.0],
            "central": "EARTH",
            "orbit": {
                "model": "epicyclic",
                "radius": 7.0,
                "epicycle_radius": 3.0,
                "epicycle_rate": 3.0,
                "z": -20.0
            },
            "display_factor": 2.5e-6,
            "table": "moon.txt"
        }
    ],
    "camera_offset": [0.0, 0.0, -20.0]
}"#;

#[cfg(test)]
mod tests {
    use super::*;
    use orrery_engine::SceneManifest;

    #[test]
    fn default_manifest_parses_and_validates() {
        let manifest = SceneManifest::from_json(DEFAULT_MANIFEST).unwrap();
        assert_eq!(manifest.bodies.len(), 3);
        assert_eq!(manifest.bodies[0].name, SUN);
        assert_eq!(manifest.camera_offset, [0.0, 0.0, -20.0]);
    }

    #[test]
    fn display_factors_match_the_manifest() {
        let manifest = SceneManifest::from_json(DEFAULT_MANIFEST).unwrap();
        let earth = &manifest.bodies[1];
        let moon = &manifest.bodies[2];
        assert!((earth.display_factor - EARTH_DISPLAY_FACTOR).abs() < 1e-12);
        assert!((moon.display_factor - MOON_DISPLAY_FACTOR).abs() < 1e-12);
    }
}
