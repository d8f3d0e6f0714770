/// Shared buffer layout.
/// Must stay in sync with the host's `protocol.ts`.
///
/// Layout (all values in f32 / 4 bytes):
/// ```text
/// [Header: 16 floats]
/// [Instances: max_instances × 24 floats]
/// [Lights: max_lights × 8 floats]
/// [Events: max_events × 4 floats]
/// [Camera: 40 floats]
/// [Points: max_points × 3 floats]
/// ```
///
/// Capacities are written once into the header at init.
/// The host reads them from the header to compute offsets dynamically.

use crate::api::game::GameConfig;

/// Number of floats in the header section.
pub const HEADER_FLOATS: usize = 16;

/// Header field indices.
pub const HEADER_LOCK: usize = 0;
pub const HEADER_FRAME_COUNTER: usize = 1;
pub const HEADER_MAX_INSTANCES: usize = 2;
pub const HEADER_INSTANCE_COUNT: usize = 3;
pub const HEADER_MAX_LIGHTS: usize = 4;
pub const HEADER_LIGHT_COUNT: usize = 5;
pub const HEADER_MAX_EVENTS: usize = 6;
pub const HEADER_EVENT_COUNT: usize = 7;
pub const HEADER_MAX_POINTS: usize = 8;
pub const HEADER_POINT_COUNT: usize = 9;
pub const HEADER_VIEWPORT_WIDTH: usize = 10;
pub const HEADER_VIEWPORT_HEIGHT: usize = 11;
pub const HEADER_PROTOCOL_VERSION: usize = 12;

/// Protocol version written into the header.
pub const PROTOCOL_VERSION: f32 = 1.0;

/// Floats per mesh instance (wire format).
pub const INSTANCE_FLOATS: usize = 24;

/// Floats per point light: x, y, z, r, g, b, intensity, distance.
pub const LIGHT_FLOATS: usize = 8;

/// Default light capacity.
pub const DEFAULT_MAX_LIGHTS: usize = 8;

/// Floats per game event: kind, a, b, c.
pub const EVENT_FLOATS: usize = 4;

/// Floats in the camera block: view (16), projection (16), position (4), lens (4).
pub const CAMERA_FLOATS: usize = 40;

/// Floats per point: x, y, z.
pub const POINT_FLOATS: usize = 3;

/// Runtime-computed buffer layout.
#[derive(Debug, Clone, PartialEq)]
pub struct ProtocolLayout {
    pub max_instances: usize,
    pub max_lights: usize,
    pub max_events: usize,
    pub max_points: usize,

    pub instance_data_floats: usize,
    pub light_data_floats: usize,
    pub event_data_floats: usize,
    pub point_data_floats: usize,

    /// Offset (in floats) where instance data begins.
    pub instance_data_offset: usize,
    pub light_data_offset: usize,
    pub event_data_offset: usize,
    pub camera_data_offset: usize,
    pub point_data_offset: usize,

    /// Total buffer size in floats.
    pub buffer_total_floats: usize,
    /// Total buffer size in bytes.
    pub buffer_total_bytes: usize,
}

impl ProtocolLayout {
    /// Compute layout from raw capacity values.
    pub fn new(max_instances: usize, max_lights: usize, max_events: usize, max_points: usize) -> Self {
        let instance_data_floats = max_instances * INSTANCE_FLOATS;
        let light_data_floats = max_lights * LIGHT_FLOATS;
        let event_data_floats = max_events * EVENT_FLOATS;
        let point_data_floats = max_points * POINT_FLOATS;

        let instance_data_offset = HEADER_FLOATS;
        let light_data_offset = instance_data_offset + instance_data_floats;
        let event_data_offset = light_data_offset + light_data_floats;
        let camera_data_offset = event_data_offset + event_data_floats;
        let point_data_offset = camera_data_offset + CAMERA_FLOATS;

        let buffer_total_floats = point_data_offset + point_data_floats;

        Self {
            max_instances,
            max_lights,
            max_events,
            max_points,
            instance_data_floats,
            light_data_floats,
            event_data_floats,
            point_data_floats,
            instance_data_offset,
            light_data_offset,
            event_data_offset,
            camera_data_offset,
            point_data_offset,
            buffer_total_floats,
            buffer_total_bytes: buffer_total_floats * 4,
        }
    }

    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(
            config.max_instances,
            config.max_lights,
            config.max_events,
            config.max_points,
        )
    }

    /// Header block with capacities filled in; counts are left at zero.
    pub fn header(&self, viewport_width: f32, viewport_height: f32) -> [f32; HEADER_FLOATS] {
        let mut header = [0.0; HEADER_FLOATS];
        header[HEADER_MAX_INSTANCES] = self.max_instances as f32;
        header[HEADER_MAX_LIGHTS] = self.max_lights as f32;
        header[HEADER_MAX_EVENTS] = self.max_events as f32;
        header[HEADER_MAX_POINTS] = self.max_points as f32;
        header[HEADER_VIEWPORT_WIDTH] = viewport_width;
        header[HEADER_VIEWPORT_HEIGHT] = viewport_height;
        header[HEADER_PROTOCOL_VERSION] = PROTOCOL_VERSION;
        header
    }
}
