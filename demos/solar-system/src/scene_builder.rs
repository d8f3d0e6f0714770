/// Builds the scene once at startup: stars, sun, planets with rings,
/// the light and the camera.

use glam::Vec3;
use orrery_engine::*;

use crate::bodies::{self, PlanetRecord, RingStyle, PLANETS};
use crate::config::SolarConfig;
use crate::planet::Planet;
use crate::starfield::build_starfield;

/// Entities the animation loop drives.
pub struct SceneHandles {
    pub sun: EntityId,
    pub planets: Vec<Planet>,
}

pub fn build_scene(ctx: &mut EngineContext, config: &SolarConfig) -> SceneHandles {
    // ── Stars ───────────────────────────────────────────────────────
    ctx.stars = build_starfield(&mut ctx.rng, config);

    // ── Camera ──────────────────────────────────────────────────────
    ctx.camera = PerspectiveCamera::new(config.fov_deg, ctx.viewport.aspect(), config.near, config.far);
    ctx.camera.set_pose(config.default_pose);

    // ── Sun ─────────────────────────────────────────────────────────
    let sun_texture = ctx.textures.register(bodies::SUN_TEXTURE, &config.sun_texture_url);
    let sun = ctx.next_id();
    ctx.scene.spawn(
        Entity::new(sun).with_tag("sun").with_mesh(MeshComponent::new(
            Geometry::sphere(bodies::SUN_RADIUS, bodies::SUN_SEGMENTS),
            Material::standard(Color::WHITE)
                .with_emissive(bodies::SUN_EMISSIVE, bodies::SUN_EMISSIVE_INTENSITY)
                .with_surface(bodies::SUN_ROUGHNESS, bodies::SUN_METALNESS)
                .with_texture(sun_texture),
        )),
    );

    // ── Planets ─────────────────────────────────────────────────────
    let planets = PLANETS
        .iter()
        .enumerate()
        .map(|(index, record)| spawn_planet(ctx, config, record, index))
        .collect();

    // ── Light ───────────────────────────────────────────────────────
    ctx.lights.add(PointLight::new(
        Vec3::ZERO,
        bodies::LIGHT_COLOR,
        bodies::LIGHT_INTENSITY,
        bodies::LIGHT_DISTANCE,
    ));

    log::info!(
        "scene built: {} stars, {} planets, {} entities",
        ctx.stars.len(),
        PLANETS.len(),
        ctx.scene.len()
    );

    SceneHandles { sun, planets }
}

fn spawn_planet(
    ctx: &mut EngineContext,
    config: &SolarConfig,
    record: &'static PlanetRecord,
    index: usize,
) -> Planet {
    let id = ctx.next_id();
    ctx.scene.spawn(
        Entity::new(id)
            .with_tag(record.name)
            .with_scale(record.radius)
            .with_mesh(
                MeshComponent::new(
                    Geometry::sphere(record.radius, bodies::PLANET_SEGMENTS),
                    Material::standard(record.color),
                )
                .pickable(),
            ),
    );

    let spin = ctx.rng.range(config.spin_min, config.spin_min + config.spin_jitter);
    let planet = Planet::new(record, index, id, spin);

    match record.ring {
        Some(style) => {
            let ring = spawn_ring(ctx, record, id, style);
            planet.with_ring(ring)
        }
        None => planet,
    }
}

fn spawn_ring(ctx: &mut EngineContext, record: &PlanetRecord, parent: EntityId, style: RingStyle) -> EntityId {
    let id = ctx.next_id();
    ctx.scene.spawn(
        Entity::new(id)
            .with_tag(format!("{} ring", record.name))
            .with_parent(parent)
            .with_rotation(Vec3::new(bodies::RING_TILT_X, 0.0, 0.0))
            .with_mesh(MeshComponent::new(
                Geometry::ring(
                    record.radius * bodies::RING_INNER_FACTOR,
                    record.radius * bodies::RING_OUTER_FACTOR,
                    bodies::RING_SEGMENTS,
                ),
                Material::basic(style.color)
                    .with_opacity(style.opacity)
                    .double_sided(),
            )),
    );
    id
}
