use glam::Vec3;
use crate::api::types::EntityId;
use crate::components::mesh::MeshComponent;

/// Fat Entity: a single struct with optional components.
/// Plays the role of a scene-graph node: a transform, an optional mesh and
/// an optional parent whose transform it inherits.
#[derive(Debug, Clone)]
pub struct Entity {
    /// Unique identifier.
    pub id: EntityId,
    /// String tag for finding entities by name.
    pub tag: String,
    /// Inactive entities are skipped by every system.
    pub active: bool,
    /// Hidden entities keep updating but are not written to the instance buffer.
    pub visible: bool,
    /// Position relative to the parent (world space when there is no parent).
    pub pos: Vec3,
    /// Euler rotation in radians, applied in XYZ order.
    pub rotation: Vec3,
    /// Uniform scale factor.
    pub scale: f32,
    /// Renderable mesh (entities without one are pure transforms).
    pub mesh: Option<MeshComponent>,
    /// Parent node.
    pub parent: Option<EntityId>,
}

impl Entity {
    /// Create a new entity with the given ID at the origin.
    pub fn new(id: EntityId) -> Self {
        Self {
            id,
            tag: String::new(),
            active: true,
            visible: true,
            pos: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scale: 1.0,
            mesh: None,
            parent: None,
        }
    }

    // -- Builder pattern --

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    pub fn with_pos(mut self, pos: Vec3) -> Self {
        self.pos = pos;
        self
    }

    pub fn with_rotation(mut self, rotation: Vec3) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_mesh(mut self, mesh: MeshComponent) -> Self {
        self.mesh = Some(mesh);
        self
    }

    pub fn with_parent(mut self, parent: EntityId) -> Self {
        self.parent = Some(parent);
        self
    }
}
