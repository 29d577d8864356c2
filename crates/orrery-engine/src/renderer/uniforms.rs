use bytemuck::{Pod, Zeroable};

/// Per-frame uniform data shared by every draw call.
/// Must match the JS renderer protocol: 20 floats = 80 bytes.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, Pod, Zeroable)]
pub struct FrameUniforms {
    /// Column-major projection matrix.
    pub projection: [f32; 16],
    /// Light source position in view space.
    pub sun_position: [f32; 3],
    pub _pad: f32,
}

impl FrameUniforms {
    pub const FLOATS: usize = 20;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;
}

/// Per-body uniform data written once per active body per frame.
/// Must match the JS renderer protocol: 40 floats = 160 bytes stride.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, Pod, Zeroable)]
pub struct BodyUniforms {
    /// Column-major model-view matrix.
    pub model_view: [f32; 16],
    /// Column-major normal matrix.
    pub normal: [f32; 16],
    /// RGBA base color.
    pub color: [f32; 4],
    /// 1.0 for lit bodies, 0.0 for emissive ones (drawn unshaded).
    pub lit: f32,
    pub _pad: [f32; 3],
}

impl BodyUniforms {
    pub const FLOATS: usize = 40;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;
}

/// Uniform buffer containing all per-body blocks for one frame.
pub struct UniformBuffer {
    pub bodies: Vec<BodyUniforms>,
}

impl UniformBuffer {
    pub fn new() -> Self {
        Self {
            bodies: Vec::with_capacity(16),
        }
    }

    pub fn clear(&mut self) {
        self.bodies.clear();
    }

    pub fn push(&mut self, body: BodyUniforms) {
        self.bodies.push(body);
    }

    pub fn body_count(&self) -> u32 {
        self.bodies.len() as u32
    }

    /// Raw pointer to body uniform data for SharedArrayBuffer reads.
    pub fn bodies_ptr(&self) -> *const f32 {
        self.bodies.as_ptr() as *const f32
    }
}

impl Default for UniformBuffer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_uniforms_are_20_floats() {
        assert_eq!(std::mem::size_of::<FrameUniforms>(), 80);
        assert_eq!(FrameUniforms::FLOATS, 20);
    }

    #[test]
    fn body_uniforms_are_40_floats() {
        assert_eq!(std::mem::size_of::<BodyUniforms>(), 160);
        assert_eq!(BodyUniforms::FLOATS, 40);
    }

    #[test]
    fn uniform_buffer_push_and_count() {
        let mut buf = UniformBuffer::new();
        buf.push(BodyUniforms::default());
        buf.push(BodyUniforms::default());
        assert_eq!(buf.body_count(), 2);
    }
}
