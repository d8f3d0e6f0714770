use crate::api::types::{EntityId, GameEvent};
use crate::assets::registry::TextureRegistry;
use crate::bridge::protocol::DEFAULT_MAX_LIGHTS;
use crate::core::rng::Rng;
use crate::core::scene::Scene;
use crate::core::viewport::Viewport;
use crate::input::queue::InputQueue;
use crate::renderer::camera::PerspectiveCamera;
use crate::systems::lighting::LightState;
use crate::systems::points::PointCloud;

/// Configuration for the engine, provided by the game.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Fixed timestep in seconds (default: 1/60).
    pub fixed_dt: f32,
    /// Maximum simulation steps per frame (default: 10).
    pub max_steps: u32,
    /// Maximum number of mesh instances (default: 64).
    pub max_instances: usize,
    /// Maximum number of point lights (default: 8).
    pub max_lights: usize,
    /// Maximum number of game events per frame (default: 32).
    pub max_events: usize,
    /// Maximum number of static points (default: 1024).
    pub max_points: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            fixed_dt: 1.0 / 60.0,
            max_steps: crate::core::time::DEFAULT_MAX_STEPS,
            max_instances: 64,
            max_lights: DEFAULT_MAX_LIGHTS,
            max_events: 32,
            max_points: 1024,
        }
    }
}

/// The core contract every app must fulfill.
///
/// Per frame the runner calls `update` (once, plus once per resize),
/// `step` zero or more times (one per fixed timestep), then `late_update` once.
pub trait Game {
    /// Return engine configuration. Called once before init.
    fn config(&self) -> GameConfig {
        GameConfig::default()
    }

    /// Setup initial state, spawn entities, configure the scene.
    fn init(&mut self, ctx: &mut EngineContext);

    /// Handle this frame's input. Every event is seen exactly once, in
    /// arrival order. A resize splits the frame's input into two calls so
    /// events before it still see the old viewport.
    fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue);

    /// Advance the simulation by one fixed timestep.
    fn step(&mut self, _ctx: &mut EngineContext, _dt: f32) {}

    /// Runs after all steps of the frame, before buffers are built.
    /// `ctx.frame_alpha` tells how far the frame sits past the last step.
    fn late_update(&mut self, _ctx: &mut EngineContext) {}

    /// State for the host's DOM overlay, serialized to JSON each frame.
    fn ui_snapshot(&self) -> serde_json::Value {
        serde_json::Value::Null
    }
}

/// Mutable access to engine state, passed to every `Game` hook.
pub struct EngineContext {
    pub scene: Scene,
    pub camera: PerspectiveCamera,
    pub lights: LightState,
    /// Static background points.
    pub stars: PointCloud,
    pub textures: TextureRegistry,
    pub viewport: Viewport,
    pub rng: Rng,
    pub events: Vec<GameEvent>,
    /// Unconsumed fraction of a fixed step after this frame's steps, in
    /// [0, 1). Set by the runner before `late_update`.
    pub frame_alpha: f32,
    next_id: u32,
}

impl EngineContext {
    pub fn new() -> Self {
        Self::with_seed(42)
    }

    pub fn with_seed(seed: u64) -> Self {
        let viewport = Viewport::default();
        Self {
            scene: Scene::new(),
            camera: PerspectiveCamera::new(75.0, viewport.aspect(), 0.1, 1000.0),
            lights: LightState::new(),
            stars: PointCloud::default(),
            textures: TextureRegistry::new(),
            viewport,
            rng: Rng::new(seed),
            events: Vec::new(),
            frame_alpha: 0.0,
            next_id: 1,
        }
    }

    /// Generate the next unique entity ID.
    pub fn next_id(&mut self) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Emit a game event to be forwarded to the host.
    pub fn emit_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Clear per-frame transient data.
    pub fn clear_frame_data(&mut self) {
        self.events.clear();
    }

    /// Apply a surface resize to the viewport and camera aspect.
    pub fn resize(&mut self, width: f32, height: f32, left: f32, top: f32) {
        if self.viewport.resize(width, height, left, top) {
            self.camera.set_aspect(self.viewport.aspect());
        }
    }
}

impl Default for EngineContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique_and_increasing() {
        let mut ctx = EngineContext::new();
        let a = ctx.next_id();
        let b = ctx.next_id();
        assert_ne!(a, b);
        assert!(b.0 > a.0);
    }

    #[test]
    fn resize_updates_camera_aspect() {
        let mut ctx = EngineContext::new();
        ctx.resize(1000.0, 500.0, 0.0, 0.0);
        assert!((ctx.camera.aspect - 2.0).abs() < 1e-6);

        ctx.resize(0.0, 500.0, 0.0, 0.0);
        assert!((ctx.camera.aspect - 2.0).abs() < 1e-6);
    }

    #[test]
    fn frame_data_is_cleared() {
        let mut ctx = EngineContext::new();
        ctx.emit_event(GameEvent::new(1.0, 0.0));
        assert_eq!(ctx.events.len(), 1);
        ctx.clear_frame_data();
        assert!(ctx.events.is_empty());
    }
}
