/// SharedArrayBuffer layout.
/// Must stay in sync with the JS `protocol.js`.
///
/// Layout (all values in f32 / 4 bytes):
/// ```text
/// [Header: 12 floats]
/// [Frame uniforms: 20 floats]
/// [Body uniforms: max_bodies × 40 floats]
/// [Events: max_events × 4 floats]
/// ```
///
/// Capacities are written once into the header at init.
/// JS reads them from the header to compute offsets dynamically.

use crate::api::simulation::SceneConfig;

/// Number of floats in the header section.
pub const HEADER_FLOATS: usize = 12;

/// Header field indices.
pub const HEADER_LOCK: usize = 0;
pub const HEADER_FRAME_COUNTER: usize = 1;
pub const HEADER_MAX_BODIES: usize = 2;
pub const HEADER_BODY_COUNT: usize = 3;
pub const HEADER_MAX_EVENTS: usize = 4;
pub const HEADER_EVENT_COUNT: usize = 5;
pub const HEADER_CANVAS_WIDTH: usize = 6;
pub const HEADER_CANVAS_HEIGHT: usize = 7;
pub const HEADER_PROTOCOL_VERSION: usize = 8;
// Indices 9-11 are reserved.

/// Protocol version written into the header.
pub const PROTOCOL_VERSION: f32 = 1.0;

/// Floats per frame-uniform block (wire format — never changes).
pub const FRAME_UNIFORM_FLOATS: usize = 20;

/// Floats per body-uniform block (wire format — never changes).
pub const BODY_UNIFORM_FLOATS: usize = 40;

/// Floats per frame event: kind, a, b, c (wire format — never changes).
pub const EVENT_FLOATS: usize = 4;

/// Runtime-computed buffer layout.
#[derive(Debug, Clone, PartialEq)]
pub struct ProtocolLayout {
    /// Maximum bodies per frame.
    pub max_bodies: usize,
    /// Maximum frame events per frame.
    pub max_events: usize,

    /// Size of body uniform section in floats.
    pub body_data_floats: usize,
    /// Size of event data section in floats.
    pub event_data_floats: usize,

    /// Offset (in floats) where the frame uniforms begin.
    pub frame_data_offset: usize,
    /// Offset (in floats) where body uniform data begins.
    pub body_data_offset: usize,
    /// Offset (in floats) where event data begins.
    pub event_data_offset: usize,

    /// Total buffer size in floats.
    pub buffer_total_floats: usize,
    /// Total buffer size in bytes.
    pub buffer_total_bytes: usize,
}

impl ProtocolLayout {
    /// Compute layout from raw capacity values.
    pub fn new(max_bodies: usize, max_events: usize) -> Self {
        let body_data_floats = max_bodies * BODY_UNIFORM_FLOATS;
        let event_data_floats = max_events * EVENT_FLOATS;

        let frame_data_offset = HEADER_FLOATS;
        let body_data_offset = frame_data_offset + FRAME_UNIFORM_FLOATS;
        let event_data_offset = body_data_offset + body_data_floats;

        let buffer_total_floats = event_data_offset + event_data_floats;
        let buffer_total_bytes = buffer_total_floats * 4;

        Self {
            max_bodies,
            max_events,
            body_data_floats,
            event_data_floats,
            frame_data_offset,
            body_data_offset,
            event_data_offset,
            buffer_total_floats,
            buffer_total_bytes,
        }
    }

    /// Compute layout from a SceneConfig.
    pub fn from_config(config: &SceneConfig) -> Self {
        Self::new(config.max_bodies, config.max_events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_default_config_matches_expected_sizes() {
        let layout = ProtocolLayout::from_config(&SceneConfig::default());

        assert_eq!(layout.max_bodies, 16);
        assert_eq!(layout.max_events, 32);
        assert_eq!(layout.body_data_floats, 16 * 40);
        assert_eq!(layout.event_data_floats, 32 * 4);
        assert_eq!(layout.frame_data_offset, 12);
        assert_eq!(layout.body_data_offset, 12 + 20);
        assert_eq!(layout.event_data_offset, 12 + 20 + 16 * 40);
        assert_eq!(layout.buffer_total_floats, 12 + 20 + 16 * 40 + 32 * 4);
        assert_eq!(layout.buffer_total_bytes, layout.buffer_total_floats * 4);
    }

    #[test]
    fn offsets_are_contiguous() {
        let layout = ProtocolLayout::new(8, 16);

        assert_eq!(layout.frame_data_offset, HEADER_FLOATS);
        assert_eq!(
            layout.body_data_offset,
            layout.frame_data_offset + FRAME_UNIFORM_FLOATS
        );
        assert_eq!(
            layout.event_data_offset,
            layout.body_data_offset + layout.body_data_floats
        );
        assert_eq!(
            layout.buffer_total_floats,
            layout.event_data_offset + layout.event_data_floats
        );
    }
}
