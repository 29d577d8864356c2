pub mod runner;

pub use runner::SceneRunner;

/// Generate all `#[wasm_bindgen]` exports for a scene.
///
/// Generates:
/// - `thread_local!` storage for the SceneRunner
/// - `with_runner()` helper function
/// - All wasm-bindgen exports (scene_init, scene_tick, input handlers, data accessors)
///
/// # Usage
///
/// ```ignore
/// use wasm_bindgen::prelude::*;
/// use orrery_engine::*;
/// use orrery_web::SceneRunner;
///
/// mod scene;
/// use scene::MyScene;
///
/// orrery_web::export_scene!(MyScene, "my-scene");
/// ```
///
/// # Arguments
///
/// - `$scene_type`: The scene struct type that implements `orrery_engine::Simulation`
/// - `$scene_name`: A string literal used in the initialization log message
#[macro_export]
macro_rules! export_scene {
    ($scene_type:ty, $scene_name:literal) => {
        use std::cell::RefCell;

        thread_local! {
            static RUNNER: RefCell<Option<$crate::SceneRunner<$scene_type>>> = RefCell::new(None);
        }

        fn with_runner<R>(f: impl FnOnce(&mut $crate::SceneRunner<$scene_type>) -> R) -> R {
            RUNNER.with(|cell| {
                let mut borrow = cell.borrow_mut();
                let runner = borrow.as_mut().expect("Scene not initialized. Call scene_init() first.");
                f(runner)
            })
        }

        #[wasm_bindgen]
        pub fn scene_init() {
            console_error_panic_hook::set_once();
            let _ = console_log::init_with_level(log::Level::Info);

            let scene = <$scene_type>::new();
            let runner = $crate::SceneRunner::new(scene);

            RUNNER.with(|cell| {
                *cell.borrow_mut() = Some(runner);
            });

            with_runner(|r| r.init());
            log::info!("{}: initialized", $scene_name);
        }

        #[wasm_bindgen]
        pub fn scene_tick(dt: f32) {
            with_runner(|r| r.tick(dt));
        }

        #[wasm_bindgen]
        pub fn scene_slider_changed(value: f64, min: f64, max: f64) {
            with_runner(|r| r.push_input(InputEvent::SliderChanged { value, min, max }));
        }

        #[wasm_bindgen]
        pub fn scene_playback_toggled() {
            with_runner(|r| r.push_input(InputEvent::PlaybackToggled));
        }

        #[wasm_bindgen]
        pub fn scene_custom_event(kind: u32, a: f32, b: f32, c: f32) {
            with_runner(|r| r.push_input(InputEvent::Custom { kind, a, b, c }));
        }

        #[wasm_bindgen]
        pub fn scene_resize(width: f32, height: f32) {
            with_runner(|r| r.resize(width, height));
        }

        #[wasm_bindgen]
        pub fn scene_load_manifest(json: &str) {
            with_runner(|r| r.load_manifest(json));
        }

        #[wasm_bindgen]
        pub fn scene_load_table(name: &str, text: &str) {
            with_runner(|r| r.load_table(name, text));
        }

        // ---- Data accessors ----

        #[wasm_bindgen]
        pub fn get_frame_uniforms_ptr() -> *const f32 {
            with_runner(|r| r.frame_uniforms_ptr())
        }

        #[wasm_bindgen]
        pub fn get_body_uniforms_ptr() -> *const f32 {
            with_runner(|r| r.body_uniforms_ptr())
        }

        #[wasm_bindgen]
        pub fn get_body_count() -> u32 {
            with_runner(|r| r.body_count())
        }

        #[wasm_bindgen]
        pub fn get_frame_events_ptr() -> *const f32 {
            with_runner(|r| r.frame_events_ptr())
        }

        #[wasm_bindgen]
        pub fn get_frame_events_len() -> u32 {
            with_runner(|r| r.frame_events_len())
        }

        // ---- Mesh accessors ----

        #[wasm_bindgen]
        pub fn get_mesh_vertices_ptr(body_index: usize) -> *const f32 {
            with_runner(|r| r.mesh_vertices_ptr(body_index))
        }

        #[wasm_bindgen]
        pub fn get_mesh_vertices_len(body_index: usize) -> u32 {
            with_runner(|r| r.mesh_vertices_len(body_index))
        }

        #[wasm_bindgen]
        pub fn get_mesh_indices_ptr(body_index: usize) -> *const u16 {
            with_runner(|r| r.mesh_indices_ptr(body_index))
        }

        #[wasm_bindgen]
        pub fn get_mesh_indices_len(body_index: usize) -> u32 {
            with_runner(|r| r.mesh_indices_len(body_index))
        }

        // ---- Capacity accessors ----

        #[wasm_bindgen]
        pub fn get_canvas_width() -> f32 {
            with_runner(|r| r.canvas_width())
        }

        #[wasm_bindgen]
        pub fn get_canvas_height() -> f32 {
            with_runner(|r| r.canvas_height())
        }

        #[wasm_bindgen]
        pub fn get_max_bodies() -> u32 {
            with_runner(|r| r.max_bodies())
        }

        #[wasm_bindgen]
        pub fn get_max_events() -> u32 {
            with_runner(|r| r.max_events())
        }

        #[wasm_bindgen]
        pub fn get_buffer_total_floats() -> u32 {
            with_runner(|r| r.buffer_total_floats())
        }
    };
}
