use glam::{EulerRot, Quat, Vec3};
use crate::api::types::EntityId;
use crate::components::entity::Entity;

/// Parent chains deeper than this are treated as broken (cycle guard).
const MAX_HIERARCHY_DEPTH: usize = 16;

/// Resolved world-space transform of an entity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorldTransform {
    pub position: Vec3,
    pub rotation: Quat,
    pub scale: f32,
}

impl WorldTransform {
    pub const IDENTITY: Self = Self {
        position: Vec3::ZERO,
        rotation: Quat::IDENTITY,
        scale: 1.0,
    };

    fn local(entity: &Entity) -> Self {
        Self {
            position: entity.pos,
            rotation: euler_to_quat(entity.rotation),
            scale: entity.scale,
        }
    }

    /// `self` as parent applied to `child` (child expressed in parent space).
    fn then(&self, child: &WorldTransform) -> Self {
        Self {
            position: self.position + self.rotation * (child.position * self.scale),
            rotation: self.rotation * child.rotation,
            scale: self.scale * child.scale,
        }
    }
}

/// XYZ-order Euler angles to a quaternion.
pub fn euler_to_quat(rotation: Vec3) -> Quat {
    Quat::from_euler(EulerRot::XYZ, rotation.x, rotation.y, rotation.z)
}

/// Simple entity storage using a flat Vec.
/// Designed for small entity counts (tens to hundreds).
pub struct Scene {
    entities: Vec<Entity>,
}

impl Scene {
    pub fn new() -> Self {
        Self {
            entities: Vec::with_capacity(64),
        }
    }

    /// Add an entity to the scene.
    pub fn spawn(&mut self, entity: Entity) {
        self.entities.push(entity);
    }

    /// Get a reference to an entity by ID.
    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        self.entities.iter().find(|e| e.id == id)
    }

    /// Get a mutable reference to an entity by ID.
    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        self.entities.iter_mut().find(|e| e.id == id)
    }

    /// Iterate over all entities.
    pub fn iter(&self) -> impl Iterator<Item = &Entity> {
        self.entities.iter()
    }

    /// Find the first entity with the given tag.
    pub fn find_by_tag(&self, tag: &str) -> Option<&Entity> {
        self.entities.iter().find(|e| e.tag == tag)
    }

    /// World transform of `id`, composing its parent chain.
    /// A missing parent ends the chain; a chain deeper than the cycle guard yields `None`.
    pub fn world_transform(&self, id: EntityId) -> Option<WorldTransform> {
        let mut entity = self.get(id)?;
        let mut world = WorldTransform::local(entity);
        let mut depth = 0;
        while let Some(parent_id) = entity.parent {
            depth += 1;
            if depth > MAX_HIERARCHY_DEPTH {
                log::warn!("scene: parent chain of {:?} exceeds depth {}", id, MAX_HIERARCHY_DEPTH);
                return None;
            }
            let Some(parent) = self.get(parent_id) else { break };
            world = WorldTransform::local(parent).then(&world);
            entity = parent;
        }
        Some(world)
    }

    /// World-space position of `id`.
    pub fn world_position(&self, id: EntityId) -> Option<Vec3> {
        self.world_transform(id).map(|t| t.position)
    }

    /// Number of entities in the scene.
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// Whether the scene is empty.
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}
