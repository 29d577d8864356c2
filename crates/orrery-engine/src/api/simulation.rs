use crate::api::types::{BodyId, FrameEvent};
use crate::core::scene::Scene;
use crate::input::queue::InputQueue;

/// Configuration for the engine, provided by the simulation.
#[derive(Debug, Clone)]
pub struct SceneConfig {
    /// Fixed timestep in seconds (default: 1/60).
    pub fixed_dt: f32,
    /// Canvas width in pixels, used for the projection aspect ratio.
    pub canvas_width: f32,
    /// Canvas height in pixels.
    pub canvas_height: f32,
    /// Vertical field of view in degrees.
    pub fov_y_deg: f32,
    /// Near clip plane distance.
    pub z_near: f32,
    /// Far clip plane distance.
    pub z_far: f32,
    /// Maximum number of bodies (default: 16).
    pub max_bodies: usize,
    /// Maximum number of frame events per frame (default: 32).
    pub max_events: usize,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            fixed_dt: 1.0 / 60.0,
            canvas_width: 800.0,
            canvas_height: 600.0,
            fov_y_deg: 45.0,
            z_near: 0.1,
            z_far: 100.0,
            max_bodies: 16,
            max_events: 32,
        }
    }
}

/// The core contract every simulation must fulfill.
pub trait Simulation {
    /// Return engine configuration. Called once before init.
    fn config(&self) -> SceneConfig {
        SceneConfig::default()
    }

    /// Setup initial state: spawn bodies, configure the scene.
    fn init(&mut self, ctx: &mut EngineContext);

    /// The per-step tick. Query providers, move bodies, emit frame events.
    fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue);

    /// A scene manifest fetched by the host has arrived.
    fn load_manifest(&mut self, _ctx: &mut EngineContext, _json: &str) {}

    /// A position table fetched by the host has arrived.
    /// `name` identifies the table ("times", or a body name for positions).
    fn load_table(&mut self, _name: &str, _text: &str) {}
}

/// Mutable access to engine state, passed to Simulation::init and update.
pub struct EngineContext {
    pub scene: Scene,
    pub events: Vec<FrameEvent>,
    next_id: u32,
}

impl EngineContext {
    pub fn new() -> Self {
        Self {
            scene: Scene::new(),
            events: Vec::new(),
            next_id: 1,
        }
    }

    /// Generate the next unique body ID.
    pub fn next_id(&mut self) -> BodyId {
        let id = BodyId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Emit a frame event to be forwarded to the UI layer.
    pub fn emit_event(&mut self, event: FrameEvent) {
        self.events.push(event);
    }

    /// Clear per-frame transient data.
    pub fn clear_frame_data(&mut self) {
        self.events.clear();
    }
}

impl Default for EngineContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique_and_increasing() {
        let mut ctx = EngineContext::new();
        let a = ctx.next_id();
        let b = ctx.next_id();
        assert_ne!(a, b);
        assert!(b.0 > a.0);
    }

    #[test]
    fn clear_frame_data_drops_events() {
        let mut ctx = EngineContext::new();
        ctx.emit_event(FrameEvent {
            kind: 1.0,
            a: 2.0,
            b: 3.0,
            c: 4.0,
        });
        assert_eq!(ctx.events.len(), 1);
        ctx.clear_frame_data();
        assert!(ctx.events.is_empty());
    }
}
