pub mod api;
pub mod bridge;
pub mod components;
pub mod config;
pub mod core;
pub mod ephemeris;
pub mod input;
pub mod mesh;
pub mod renderer;
pub mod systems;

// Re-export key types at crate root for convenience
pub use api::simulation::{EngineContext, SceneConfig, Simulation};
pub use api::types::{BodyId, FrameEvent};
pub use bridge::protocol::ProtocolLayout;
pub use components::body::{Body, CentralBody};
pub use config::manifest::{BodyDescriptor, ManifestError, SceneManifest};
pub use crate::core::scene::Scene;
pub use crate::core::time::{AnimationClock, FixedTimestep, PlaybackState};
pub use ephemeris::analytic::{AnalyticEphemeris, OrbitModel};
pub use ephemeris::table::{
    parse_positions, parse_times, sample_index, BodySeries, TableError, TabulatedEphemeris,
};
pub use ephemeris::PositionProvider;
pub use input::queue::{InputEvent, InputQueue};
pub use mesh::sphere::{geographic_to_cartesian, uv_sphere, Mesh};
pub use renderer::camera::Camera;
pub use renderer::uniforms::{BodyUniforms, FrameUniforms, UniformBuffer};
pub use systems::render::build_uniform_buffer;
