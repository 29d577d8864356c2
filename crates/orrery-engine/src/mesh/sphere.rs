//! UV-sphere tessellation shared by every celestial body.
//!
//! One fixed latitude/longitude grid, only the radius varies. The longitude
//! seam (0° and 360°) is kept as two coincident vertex columns rather than
//! deduplicated, so vertex count is always lat samples × lon samples.

/// Latitude sampled inclusively from -90° to 90° in 10° steps.
pub const LAT_SAMPLES: usize = 19;
/// Longitude sampled inclusively from 0° to 360° in 10° steps.
pub const LON_SAMPLES: usize = 37;

const STEP_DEG: f32 = 10.0;

/// Vertex/index buffer pair for one tessellated sphere.
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    /// Flattened x,y,z triples in generation order (latitude outer loop).
    pub vertices: Vec<f32>,
    /// Triangle list; every index is a valid vertex offset.
    pub indices: Vec<u16>,
}

impl Mesh {
    pub fn vertex_count(&self) -> usize {
        self.vertices.len() / 3
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// The outward normal of an origin-centered sphere points along the
    /// vertex position, so the vertex buffer doubles as the normal buffer.
    /// Only valid before the body's translation is applied.
    pub fn normals(&self) -> &[f32] {
        &self.vertices
    }
}

/// Convert geographic coordinates to cartesian.
/// The south-north axis maps to Y for WebGL compatibility.
pub fn geographic_to_cartesian(lat_deg: f32, lon_deg: f32, r: f32) -> [f32; 3] {
    let lat = lat_deg.to_radians();
    let lon = lon_deg.to_radians();
    [
        r * lon.cos() * lat.cos(),
        r * lat.sin(),
        r * lon.sin() * lat.cos(),
    ]
}

/// Tessellate a sphere of the given radius.
///
/// Deterministic and pure; the radius is not validated (a non-positive
/// radius is geometrically meaningless but produces a well-formed buffer).
pub fn uv_sphere(radius: f32) -> Mesh {
    let mut vertices = Vec::with_capacity(LAT_SAMPLES * LON_SAMPLES * 3);
    for i in 0..LAT_SAMPLES {
        let lat = -90.0 + i as f32 * STEP_DEG;
        for j in 0..LON_SAMPLES {
            let lon = j as f32 * STEP_DEG;
            vertices.extend_from_slice(&geographic_to_cartesian(lat, lon, radius));
        }
    }

    // Two triangles per quad; the last row/column has no "next" neighbor.
    let w = LON_SAMPLES as u16;
    let mut indices = Vec::with_capacity((LAT_SAMPLES - 1) * (LON_SAMPLES - 1) * 6);
    for i in 0..(LAT_SAMPLES as u16 - 1) {
        for j in 0..(w - 1) {
            indices.push(j + i * w);
            indices.push(j + 1 + i * w);
            indices.push(j + 1 + (i + 1) * w);
            indices.push(j + 1 + (i + 1) * w);
            indices.push(j + (i + 1) * w);
            indices.push(j + i * w);
        }
    }

    Mesh { vertices, indices }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertex_and_triangle_counts() {
        let mesh = uv_sphere(1.0);
        assert_eq!(mesh.vertex_count(), 19 * 37); // 703
        assert_eq!(mesh.triangle_count(), 18 * 36 * 2); // 1296
        assert_eq!(mesh.indices.len(), 3888);
    }

    #[test]
    fn every_vertex_lies_on_the_sphere() {
        let radius = 2.5;
        let mesh = uv_sphere(radius);
        for v in mesh.vertices.chunks_exact(3) {
            let dist = (v[0] * v[0] + v[1] * v[1] + v[2] * v[2]).sqrt();
            assert!((dist - radius).abs() < 1e-4, "dist = {dist}");
        }
    }

    #[test]
    fn indices_are_valid_vertex_offsets() {
        let mesh = uv_sphere(1.0);
        let count = mesh.vertex_count() as u16;
        assert!(mesh.indices.iter().all(|&i| i < count));
    }

    #[test]
    fn equator_prime_meridian_maps_to_x_axis() {
        let v = geographic_to_cartesian(0.0, 0.0, 3.0);
        assert!((v[0] - 3.0).abs() < 1e-6);
        assert!(v[1].abs() < 1e-6);
        assert!(v[2].abs() < 1e-6);
    }

    #[test]
    fn north_pole_maps_to_polar_axis() {
        let v = geographic_to_cartesian(90.0, 0.0, 3.0);
        assert!(v[0].abs() < 1e-6);
        assert!((v[1] - 3.0).abs() < 1e-6);
        assert!(v[2].abs() < 1e-6);
    }

    #[test]
    fn normals_alias_vertex_positions() {
        let mesh = uv_sphere(4.0);
        let normals = mesh.normals();
        assert_eq!(normals.len(), mesh.vertices.len());
        // Normalizing a normal must give the unit direction of its vertex.
        for (n, v) in normals.chunks_exact(3).zip(mesh.vertices.chunks_exact(3)) {
            let len = (n[0] * n[0] + n[1] * n[1] + n[2] * n[2]).sqrt();
            for k in 0..3 {
                assert!((n[k] / len - v[k] / 4.0).abs() < 1e-4);
            }
        }
    }

    #[test]
    fn same_radius_gives_identical_meshes() {
        assert_eq!(uv_sphere(1.25), uv_sphere(1.25));
    }
}
