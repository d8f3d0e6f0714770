use glam::Vec3;
use crate::components::mesh::Color;

/// Static point cloud (e.g. a starfield). Written once; the host uploads
/// the positions as a single vertex buffer.
#[derive(Debug, Clone, Default)]
pub struct PointCloud {
    positions: Vec<Vec3>,
    pub color: Color,
    /// Point size in pixels.
    pub size: f32,
}

impl PointCloud {
    pub fn new(color: Color, size: f32) -> Self {
        Self {
            positions: Vec::new(),
            color,
            size,
        }
    }

    pub fn push(&mut self, position: Vec3) {
        self.positions.push(position);
    }

    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Pointer to tightly packed `[x, y, z]` triples.
    pub fn positions_ptr(&self) -> *const f32 {
        self.positions.as_ptr() as *const f32
    }
}
