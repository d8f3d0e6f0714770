//! Ray picking against sphere meshes.
//!
//! Candidates are tested analytically (not per triangle) using the sphere's
//! geometry radius times its world scale, and hits come back nearest first.

use glam::Vec3;
use crate::api::types::EntityId;
use crate::components::mesh::Geometry;
use crate::core::scene::Scene;

/// Half-line from `origin` along unit `direction`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    /// The direction is normalized; a zero direction stays zero and hits nothing.
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize_or_zero(),
        }
    }

    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }

    /// Distance along the ray to the first surface crossing of a sphere, if any.
    /// A ray starting inside the sphere reports the exit point.
    pub fn intersect_sphere(&self, center: Vec3, radius: f32) -> Option<f32> {
        if self.direction == Vec3::ZERO || !(radius > 0.0) {
            return None;
        }
        let oc = self.origin - center;
        let b = oc.dot(self.direction);
        let c = oc.length_squared() - radius * radius;
        let disc = b * b - c;
        if disc < 0.0 {
            return None;
        }
        let root = disc.sqrt();
        let near = -b - root;
        let far = -b + root;
        if near >= 0.0 {
            Some(near)
        } else if far >= 0.0 {
            Some(far)
        } else {
            None
        }
    }
}

/// One ray/mesh intersection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    pub entity: EntityId,
    pub distance: f32,
    pub point: Vec3,
}

/// Intersect `ray` with the sphere meshes among `candidates`, nearest first.
/// Inactive entities, entities without a sphere mesh and unknown ids are skipped.
pub fn pick(scene: &Scene, ray: &Ray, candidates: impl IntoIterator<Item = EntityId>) -> Vec<Hit> {
    let mut hits: Vec<Hit> = candidates
        .into_iter()
        .filter_map(|id| {
            let entity = scene.get(id)?;
            if !entity.active {
                return None;
            }
            let Geometry::Sphere { radius, .. } = entity.mesh.as_ref()?.geometry else {
                return None;
            };
            let world = scene.world_transform(id)?;
            let distance = ray.intersect_sphere(world.position, radius * world.scale)?;
            Some(Hit { entity: id, distance, point: ray.at(distance) })
        })
        .collect();

    hits.sort_by(|a, b| a.distance.partial_cmp(&b.distance).unwrap_or(std::cmp::Ordering::Equal));
    hits
}

/// Nearest hit among `candidates`.
pub fn pick_nearest(scene: &Scene, ray: &Ray, candidates: impl IntoIterator<Item = EntityId>) -> Option<Hit> {
    pick(scene, ray, candidates).into_iter().next()
}

/// Every active entity whose mesh is flagged pickable.
pub fn pickable_ids(scene: &Scene) -> Vec<EntityId> {
    scene
        .iter()
        .filter(|e| e.active && e.mesh.map_or(false, |m| m.pickable))
        .map(|e| e.id)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::entity::Entity;
    use crate::components::mesh::{Color, Material, MeshComponent};

    fn ball(id: u32, pos: Vec3, radius: f32) -> Entity {
        Entity::new(EntityId(id))
            .with_pos(pos)
            .with_mesh(MeshComponent::new(Geometry::sphere(radius, 16), Material::standard(Color::WHITE)).pickable())
    }

    #[test]
    fn ray_hits_front_of_sphere() {
        let ray = Ray::new(Vec3::new(0.0, 0.0, 10.0), Vec3::NEG_Z);
        let t = ray.intersect_sphere(Vec3::ZERO, 1.0).unwrap();
        assert!((t - 9.0).abs() < 1e-5);
    }

    #[test]
    fn ray_misses_and_ignores_spheres_behind() {
        let ray = Ray::new(Vec3::new(0.0, 0.0, 10.0), Vec3::NEG_Z);
        assert!(ray.intersect_sphere(Vec3::new(5.0, 0.0, 0.0), 1.0).is_none());
        assert!(ray.intersect_sphere(Vec3::new(0.0, 0.0, 20.0), 1.0).is_none());
        assert!(Ray::new(Vec3::ZERO, Vec3::ZERO).intersect_sphere(Vec3::ZERO, 1.0).is_none());
    }

    #[test]
    fn ray_from_inside_reports_exit() {
        let ray = Ray::new(Vec3::ZERO, Vec3::X);
        let t = ray.intersect_sphere(Vec3::ZERO, 2.0).unwrap();
        assert!((t - 2.0).abs() < 1e-5);
    }

    #[test]
    fn pick_sorts_nearest_first_and_uses_scale() {
        let mut scene = Scene::new();
        scene.spawn(ball(1, Vec3::new(0.0, 0.0, -20.0), 1.0));
        scene.spawn(ball(2, Vec3::new(0.0, 0.0, -10.0), 1.0));
        // Tiny geometry, but scaled up enough to be hit off-axis.
        scene.spawn(ball(3, Vec3::new(1.5, 0.0, -5.0), 0.5).with_scale(4.0));

        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);
        let hits = pick(&scene, &ray, [EntityId(1), EntityId(2), EntityId(3)]);
        let order: Vec<u32> = hits.iter().map(|h| h.entity.0).collect();
        assert_eq!(order, vec![3, 2, 1]);
    }

    #[test]
    fn pick_skips_unknown_inactive_and_non_spheres() {
        let mut scene = Scene::new();
        let mut hidden = ball(1, Vec3::new(0.0, 0.0, -10.0), 1.0);
        hidden.active = false;
        scene.spawn(hidden);
        scene.spawn(
            Entity::new(EntityId(2))
                .with_pos(Vec3::new(0.0, 0.0, -5.0))
                .with_mesh(MeshComponent::new(Geometry::ring(1.0, 2.0, 8), Material::basic(Color::WHITE))),
        );

        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);
        assert!(pick_nearest(&scene, &ray, [EntityId(1), EntityId(2), EntityId(99)]).is_none());
        assert!(pickable_ids(&scene).is_empty());
    }
}
