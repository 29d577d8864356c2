use glam::Vec3;

use crate::core::scene::Scene;
use crate::renderer::camera::Camera;
use crate::renderer::uniforms::{BodyUniforms, FrameUniforms, UniformBuffer};

/// Fill the frame and per-body uniform blocks from the current scene state.
///
/// Per-body blocks are emitted in spawn order for active bodies only; the JS
/// renderer draws them in that order, one mesh per block. The light position
/// is taken from the first active emissive body, falling back to the origin
/// when no sun exists.
pub fn build_uniform_buffer(
    camera: &Camera,
    scene: &Scene,
    frame: &mut FrameUniforms,
    buffer: &mut UniformBuffer,
) {
    buffer.clear();

    frame.projection = camera.projection_matrix().to_cols_array();
    let sun = scene
        .iter()
        .find(|b| b.active && b.emissive)
        .map(|b| Vec3::new(b.position.x as f32, b.position.y as f32, b.position.z as f32))
        .unwrap_or(Vec3::ZERO);
    frame.sun_position = sun.to_array();

    for body in scene.iter() {
        if !body.active {
            continue;
        }
        let model_view = camera.model_view_matrix(body.position);
        let normal = camera.normal_matrix(&model_view);
        buffer.push(BodyUniforms {
            model_view: model_view.to_cols_array(),
            normal: normal.to_cols_array(),
            color: body.color,
            lit: if body.emissive { 0.0 } else { 1.0 },
            _pad: [0.0; 3],
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::BodyId;
    use crate::components::body::Body;
    use glam::DVec3;

    fn scene_with_sun() -> Scene {
        let mut scene = Scene::new();
        scene.spawn(
            Body::new(BodyId(0), "SUN", 1.0)
                .with_emissive(true)
                .with_position(DVec3::new(0.0, 0.0, -20.0)),
        );
        scene.spawn(
            Body::new(BodyId(1), "EARTH", 1.25).with_position(DVec3::new(7.0, 0.0, -20.0)),
        );
        scene
    }

    #[test]
    fn emits_one_block_per_active_body() {
        let scene = scene_with_sun();
        let camera = Camera::new(45.0, 800.0, 600.0);
        let mut frame = FrameUniforms::default();
        let mut buffer = UniformBuffer::new();
        build_uniform_buffer(&camera, &scene, &mut frame, &mut buffer);
        assert_eq!(buffer.body_count(), 2);
    }

    #[test]
    fn inactive_bodies_are_skipped() {
        let mut scene = scene_with_sun();
        scene.find_by_name_mut("EARTH").unwrap().active = false;
        let camera = Camera::new(45.0, 800.0, 600.0);
        let mut frame = FrameUniforms::default();
        let mut buffer = UniformBuffer::new();
        build_uniform_buffer(&camera, &scene, &mut frame, &mut buffer);
        assert_eq!(buffer.body_count(), 1);
    }

    #[test]
    fn sun_position_comes_from_the_emissive_body() {
        let scene = scene_with_sun();
        let camera = Camera::new(45.0, 800.0, 600.0);
        let mut frame = FrameUniforms::default();
        let mut buffer = UniformBuffer::new();
        build_uniform_buffer(&camera, &scene, &mut frame, &mut buffer);
        assert_eq!(frame.sun_position, [0.0, 0.0, -20.0]);
        // The sun itself renders unshaded.
        assert_eq!(buffer.bodies[0].lit, 0.0);
        assert_eq!(buffer.bodies[1].lit, 1.0);
    }

    #[test]
    fn no_emissive_body_defaults_the_light_to_origin() {
        let mut scene = Scene::new();
        scene.spawn(Body::new(BodyId(0), "EARTH", 1.25));
        let camera = Camera::new(45.0, 800.0, 600.0);
        let mut frame = FrameUniforms::default();
        let mut buffer = UniformBuffer::new();
        build_uniform_buffer(&camera, &scene, &mut frame, &mut buffer);
        assert_eq!(frame.sun_position, [0.0, 0.0, 0.0]);
    }
}
