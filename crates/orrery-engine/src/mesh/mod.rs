pub mod sphere;

pub use sphere::{geographic_to_cartesian, uv_sphere, Mesh};
