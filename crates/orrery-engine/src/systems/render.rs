use crate::api::types::EntityId;
use crate::assets::registry::TextureRegistry;
use crate::core::scene::Scene;
use crate::renderer::instance::{
    InstanceBuffer, MeshInstance, FLAG_DOUBLE_SIDED, FLAG_LIT, FLAG_TRANSPARENT,
};

/// Build the instance buffer from the scene.
///
/// Every active, visible entity with a mesh becomes one instance in world
/// space. An entity is drawn only if its whole parent chain is visible.
/// Textures that are still loading (or failed) are left out so the host
/// draws the untextured material instead.
pub fn build_instance_buffer(scene: &Scene, textures: &TextureRegistry, buffer: &mut InstanceBuffer) {
    buffer.clear();

    for entity in scene.iter() {
        if !entity.active || !entity.visible || !ancestors_visible(scene, entity.parent) {
            continue;
        }
        let Some(mesh) = &entity.mesh else { continue };
        let Some(world) = scene.world_transform(entity.id) else { continue };

        let material = &mesh.material;
        let (p0, p1, segments) = mesh.geometry.params();
        let texture = material
            .texture
            .filter(|&id| textures.is_ready(id))
            .map_or(MeshInstance::NO_TEXTURE, |id| id.0 as f32);

        let mut flags = 0;
        if material.lit {
            flags |= FLAG_LIT;
        }
        if material.double_sided {
            flags |= FLAG_DOUBLE_SIDED;
        }
        if material.is_transparent() {
            flags |= FLAG_TRANSPARENT;
        }

        let pushed = buffer.push(MeshInstance {
            x: world.position.x,
            y: world.position.y,
            z: world.position.z,
            scale: world.scale,
            qx: world.rotation.x,
            qy: world.rotation.y,
            qz: world.rotation.z,
            qw: world.rotation.w,
            r: material.color.r,
            g: material.color.g,
            b: material.color.b,
            opacity: material.opacity,
            er: material.emissive.r,
            eg: material.emissive.g,
            eb: material.emissive.b,
            emissive_intensity: material.emissive_intensity,
            kind: mesh.geometry.kind(),
            p0,
            p1,
            segments,
            texture,
            flags: flags as f32,
            roughness: material.roughness,
            metalness: material.metalness,
        });
        if !pushed {
            log::warn!("render: instance buffer full, dropping {:?}", entity.id);
            break;
        }
    }
}

fn ancestors_visible(scene: &Scene, mut parent: Option<EntityId>) -> bool {
    // Bounded walk; cycles are rejected by world_transform anyway.
    for _ in 0..16 {
        let Some(id) = parent else { return true };
        let Some(p) = scene.get(id) else { return true };
        if !p.active || !p.visible {
            return false;
        }
        parent = p.parent;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::entity::Entity;
    use crate::components::mesh::{Color, Geometry, Material, MeshComponent};
    use glam::Vec3;

    fn sphere(id: u32) -> Entity {
        Entity::new(EntityId(id))
            .with_mesh(MeshComponent::new(Geometry::sphere(1.0, 32), Material::standard(Color::WHITE)))
    }

    #[test]
    fn children_are_written_in_world_space() {
        let mut scene = Scene::new();
        scene.spawn(sphere(1).with_pos(Vec3::new(3.0, 0.0, 4.0)).with_scale(0.5));
        scene.spawn(
            Entity::new(EntityId(2))
                .with_parent(EntityId(1))
                .with_mesh(MeshComponent::new(
                    Geometry::ring(1.2, 1.7, 64),
                    Material::basic(Color::WHITE).with_opacity(0.3).double_sided(),
                )),
        );

        let mut buffer = InstanceBuffer::new();
        build_instance_buffer(&scene, &TextureRegistry::new(), &mut buffer);

        let ring = buffer.instances()[1];
        assert_eq!((ring.x, ring.y, ring.z), (3.0, 0.0, 4.0));
        assert_eq!(ring.scale, 0.5);
        assert_eq!(ring.kind, 1.0);
        assert_eq!(ring.flags as u32, FLAG_DOUBLE_SIDED | FLAG_TRANSPARENT);
    }

    #[test]
    fn hidden_and_inactive_entities_are_skipped() {
        let mut scene = Scene::new();
        let mut hidden = sphere(1);
        hidden.visible = false;
        let mut inactive = sphere(2);
        inactive.active = false;
        scene.spawn(hidden);
        scene.spawn(inactive);
        scene.spawn(sphere(3).with_parent(EntityId(1)));
        scene.spawn(Entity::new(EntityId(4)));

        let mut buffer = InstanceBuffer::new();
        build_instance_buffer(&scene, &TextureRegistry::new(), &mut buffer);
        assert_eq!(buffer.instance_count(), 0);
    }

    #[test]
    fn texture_is_written_only_when_ready() {
        let mut textures = TextureRegistry::new();
        let tex = textures.register("sun", "https://example.invalid/sun.jpg");

        let mut scene = Scene::new();
        scene.spawn(Entity::new(EntityId(1)).with_mesh(MeshComponent::new(
            Geometry::sphere(2.0, 64),
            Material::standard(Color::WHITE).with_texture(tex),
        )));

        let mut buffer = InstanceBuffer::new();
        build_instance_buffer(&scene, &textures, &mut buffer);
        assert_eq!(buffer.instances()[0].texture, MeshInstance::NO_TEXTURE);

        textures.mark_failed(tex);
        build_instance_buffer(&scene, &textures, &mut buffer);
        assert_eq!(buffer.instances()[0].texture, MeshInstance::NO_TEXTURE);

        textures.mark_ready(tex);
        build_instance_buffer(&scene, &textures, &mut buffer);
        assert_eq!(buffer.instances()[0].texture, tex.0 as f32);
    }
}
