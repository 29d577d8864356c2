use orrery_engine::systems::render::build_uniform_buffer;
use orrery_engine::{
    Camera, EngineContext, FixedTimestep, FrameUniforms, InputEvent, InputQueue, ProtocolLayout,
    SceneConfig, Simulation, UniformBuffer,
};

/// Generic scene runner that wires up the engine loop.
///
/// Each concrete scene (e.g., `dark-side`) creates a `thread_local!`
/// SceneRunner and exports free functions via `#[wasm_bindgen]`, because
/// wasm-bindgen cannot export generic structs directly.
pub struct SceneRunner<S: Simulation> {
    sim: S,
    ctx: EngineContext,
    input: InputQueue,
    camera: Camera,
    frame_uniforms: FrameUniforms,
    uniform_buffer: UniformBuffer,
    timestep: FixedTimestep,
    config: SceneConfig,
    layout: ProtocolLayout,
    initialized: bool,
}

impl<S: Simulation> SceneRunner<S> {
    pub fn new(sim: S) -> Self {
        let config = sim.config();
        let timestep = FixedTimestep::new(config.fixed_dt);
        let layout = ProtocolLayout::from_config(&config);
        let mut camera = Camera::new(config.fov_y_deg, config.canvas_width, config.canvas_height);
        camera.z_near = config.z_near;
        camera.z_far = config.z_far;

        Self {
            sim,
            ctx: EngineContext::new(),
            input: InputQueue::new(),
            camera,
            frame_uniforms: FrameUniforms::default(),
            uniform_buffer: UniformBuffer::new(),
            timestep,
            layout,
            config,
            initialized: false,
        }
    }

    /// Initialize the scene. Call once after construction.
    pub fn init(&mut self) {
        self.config = self.sim.config();
        self.layout = ProtocolLayout::from_config(&self.config);
        self.sim.init(&mut self.ctx);
        self.initialized = true;
    }

    /// Push an input event into the queue.
    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Forward a fetched scene manifest to the simulation.
    pub fn load_manifest(&mut self, json: &str) {
        self.sim.load_manifest(&mut self.ctx, json);
    }

    /// Forward a fetched position table to the simulation.
    pub fn load_table(&mut self, name: &str, text: &str) {
        self.sim.load_table(name, text);
    }

    /// Resize the viewport (e.g. on canvas resize).
    pub fn resize(&mut self, width: f32, height: f32) {
        self.camera.resize(width, height);
    }

    /// Run one frame tick: update the simulation, rebuild the uniform buffers.
    pub fn tick(&mut self, dt: f32) {
        if !self.initialized {
            return;
        }

        // Clear per-frame transient data
        self.ctx.clear_frame_data();

        // Fixed timestep accumulation. Input events are state transitions
        // (a toggle must land exactly once), so the queue is delivered to
        // the first step only and kept for the next tick when no step runs.
        let steps = self.timestep.accumulate(dt);
        for step in 0..steps {
            self.sim.update(&mut self.ctx, &self.input);
            if step == 0 {
                self.input.drain();
            }
        }

        // Build uniform buffers from the scene
        build_uniform_buffer(
            &self.camera,
            &self.ctx.scene,
            &mut self.frame_uniforms,
            &mut self.uniform_buffer,
        );
    }

    // ---- Pointer accessors for SharedArrayBuffer reads ----

    pub fn frame_uniforms_ptr(&self) -> *const f32 {
        &self.frame_uniforms as *const FrameUniforms as *const f32
    }

    pub fn body_uniforms_ptr(&self) -> *const f32 {
        self.uniform_buffer.bodies_ptr()
    }

    pub fn body_count(&self) -> u32 {
        self.uniform_buffer.body_count()
    }

    pub fn frame_events_ptr(&self) -> *const f32 {
        self.ctx.events.as_ptr() as *const f32
    }

    pub fn frame_events_len(&self) -> u32 {
        self.ctx.events.len() as u32
    }

    // ---- Mesh accessors (read once at startup, per body spawn order) ----

    pub fn mesh_vertices_ptr(&self, body_index: usize) -> *const f32 {
        match self.ctx.scene.at(body_index) {
            Some(body) => body.mesh.vertices.as_ptr(),
            None => std::ptr::null(),
        }
    }

    pub fn mesh_vertices_len(&self, body_index: usize) -> u32 {
        self.ctx
            .scene
            .at(body_index)
            .map_or(0, |body| body.mesh.vertices.len() as u32)
    }

    pub fn mesh_indices_ptr(&self, body_index: usize) -> *const u16 {
        match self.ctx.scene.at(body_index) {
            Some(body) => body.mesh.indices.as_ptr(),
            None => std::ptr::null(),
        }
    }

    pub fn mesh_indices_len(&self, body_index: usize) -> u32 {
        self.ctx
            .scene
            .at(body_index)
            .map_or(0, |body| body.mesh.indices.len() as u32)
    }

    // ---- Capacity accessors (read by JS via wasm_bindgen exports) ----

    pub fn canvas_width(&self) -> f32 {
        self.config.canvas_width
    }

    pub fn canvas_height(&self) -> f32 {
        self.config.canvas_height
    }

    pub fn max_bodies(&self) -> u32 {
        self.layout.max_bodies as u32
    }

    pub fn max_events(&self) -> u32 {
        self.layout.max_events as u32
    }

    pub fn buffer_total_floats(&self) -> u32 {
        self.layout.buffer_total_floats as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use orrery_engine::Body;

    struct Still {
        stepped: u32,
    }

    impl Simulation for Still {
        fn init(&mut self, ctx: &mut EngineContext) {
            let id = ctx.next_id();
            ctx.scene.spawn(Body::new(id, "SUN", 1.0).with_emissive(true));
        }

        fn update(&mut self, _ctx: &mut EngineContext, _input: &InputQueue) {
            self.stepped += 1;
        }
    }

    #[test]
    fn tick_before_init_is_a_no_op() {
        let mut runner = SceneRunner::new(Still { stepped: 0 });
        runner.tick(1.0);
        assert_eq!(runner.sim.stepped, 0);
    }

    #[test]
    fn tick_runs_fixed_steps_and_builds_uniforms() {
        let mut runner = SceneRunner::new(Still { stepped: 0 });
        runner.init();
        runner.tick(1.0 / 60.0);
        assert_eq!(runner.sim.stepped, 1);
        assert_eq!(runner.body_count(), 1);
    }

    struct Toggler {
        running: bool,
    }

    impl Simulation for Toggler {
        fn init(&mut self, _ctx: &mut EngineContext) {}

        fn update(&mut self, _ctx: &mut EngineContext, input: &InputQueue) {
            for event in input.iter() {
                if let InputEvent::PlaybackToggled = event {
                    self.running = !self.running;
                }
            }
        }
    }

    #[test]
    fn input_survives_a_tick_with_no_fixed_step() {
        let mut runner = SceneRunner::new(Toggler { running: false });
        runner.init();
        runner.push_input(InputEvent::PlaybackToggled);
        // 144 Hz frame: shorter than the fixed step, no update runs.
        runner.tick(1.0 / 144.0);
        assert!(!runner.sim.running);
        // The event must still land on the next full step.
        runner.tick(1.0 / 60.0);
        assert!(runner.sim.running);
    }

    #[test]
    fn input_lands_once_on_a_multi_step_tick() {
        let mut runner = SceneRunner::new(Toggler { running: false });
        runner.init();
        runner.push_input(InputEvent::PlaybackToggled);
        // A slow frame worth two fixed steps must not toggle twice.
        runner.tick(2.0 / 60.0);
        assert!(runner.sim.running);
    }

    #[test]
    fn mesh_accessors_guard_out_of_range_indices() {
        let mut runner = SceneRunner::new(Still { stepped: 0 });
        runner.init();
        assert_eq!(runner.mesh_vertices_len(0), 703 * 3);
        assert_eq!(runner.mesh_indices_len(0), 3888);
        assert!(runner.mesh_vertices_ptr(5).is_null());
        assert_eq!(runner.mesh_indices_len(5), 0);
    }
}
