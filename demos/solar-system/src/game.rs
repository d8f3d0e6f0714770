/// Solar System: a sun, eight orbiting planets and a starfield.
///
/// Hovering a planet enlarges it and shows its name tag; clicking a label
/// in the control panel zooms the camera onto that planet.

use glam::Vec2;
use orrery_engine::*;

use crate::config::SolarConfig;
use crate::controls::{ControlPanel, Theme, UiCommand};
use crate::hud::{SelectionChange, SelectionPanel, UiSnapshot};
use crate::orbit::spin_angle;
use crate::planet::Planet;
use crate::scene_builder::build_scene;

// ── Game event kinds to the host ─────────────────────────────────────

pub const EVENT_SELECTION: f32 = 1.0;
pub const EVENT_PAUSE: f32 = 2.0;
pub const EVENT_THEME: f32 = 3.0;
pub const EVENT_SPEEDS_RESET: f32 = 4.0;

// ── Game struct ──────────────────────────────────────────────────────

pub struct SolarSystem {
    config: SolarConfig,
    clock: SimClock,
    sun: Option<EntityId>,
    planets: Vec<Planet>,
    controls: ControlPanel,
    selection: SelectionPanel,
    /// Pointer in NDC; the center until the pointer first moves.
    pointer: Vec2,
    hovered: Option<usize>,
}

impl SolarSystem {
    pub fn new() -> Self {
        Self::with_config(SolarConfig::default())
    }

    pub fn with_config(config: SolarConfig) -> Self {
        Self {
            config,
            clock: SimClock::new(),
            sun: None,
            planets: Vec::new(),
            controls: ControlPanel::new(),
            selection: SelectionPanel::new(),
            pointer: Vec2::ZERO,
            hovered: None,
        }
    }

    pub fn planets(&self) -> &[Planet] {
        &self.planets
    }

    pub fn elapsed(&self) -> f32 {
        self.clock.elapsed()
    }

    pub fn controls(&self) -> &ControlPanel {
        &self.controls
    }

    pub fn selection(&self) -> &SelectionPanel {
        &self.selection
    }

    pub fn hovered(&self) -> Option<usize> {
        self.hovered
    }

    fn snapshot(&self) -> UiSnapshot {
        UiSnapshot::capture(&self.planets, &self.controls, &self.selection, &self.config.speed_slider)
    }

    // ── Commands ───────────────────────────────────────────────────

    fn apply(&mut self, ctx: &mut EngineContext, command: UiCommand) {
        match command {
            UiCommand::Select(index) => match self.selection.toggle(index) {
                SelectionChange::Selected(i) => {
                    log::debug!("zoom to {}", self.planets[i].name());
                    ctx.emit_event(GameEvent::new(EVENT_SELECTION, i as f32));
                }
                SelectionChange::Cleared => {
                    ctx.camera.set_pose(self.config.default_pose);
                    ctx.emit_event(GameEvent::new(EVENT_SELECTION, -1.0));
                }
            },
            UiCommand::SetSpeed { planet, value } => {
                let domain = self.config.speed_slider;
                if !self.planets[planet].set_speed(value, &domain) {
                    log::debug!("ignoring speed {} for {}", value, self.planets[planet].name());
                }
            }
            UiCommand::TogglePause => {
                let paused = self.controls.toggle_pause();
                ctx.emit_event(GameEvent::new(EVENT_PAUSE, if paused { 1.0 } else { 0.0 }));
            }
            UiCommand::ToggleTheme => {
                let theme = self.controls.toggle_theme();
                ctx.emit_event(GameEvent::new(EVENT_THEME, if theme == Theme::Light { 1.0 } else { 0.0 }));
            }
            UiCommand::ResetSpeeds => {
                let default = self.config.speed_slider.default;
                for planet in &mut self.planets {
                    planet.speed = default;
                }
                ctx.emit_event(GameEvent::new(EVENT_SPEEDS_RESET, 0.0));
            }
        }
    }

    // ── Animation ──────────────────────────────────────────────────

    /// Simulation time shown this frame: the clock plus the unconsumed part
    /// of the next step. A paused scene holds the clock value.
    fn frame_time(&self, frame_alpha: f32) -> f64 {
        let t = self.clock.elapsed_f64();
        if self.controls.paused() {
            t
        } else {
            t + frame_alpha.clamp(0.0, 1.0) as f64 * self.config.fixed_dt as f64
        }
    }

    /// Place and spin every body for simulation time `t`.
    fn pose_bodies(&self, ctx: &mut EngineContext, t: f64) {
        let steps = t / self.config.fixed_dt as f64;
        for planet in &self.planets {
            if let Some(entity) = ctx.scene.get_mut(planet.entity) {
                entity.pos = planet.position_at(t);
                entity.rotation.y = planet.rotation_at(steps);
            }
        }
        if let Some(sun) = self.sun {
            if let Some(entity) = ctx.scene.get_mut(sun) {
                entity.rotation.y = spin_angle(self.config.sun_spin, steps);
            }
        }
    }

    /// Ease the camera toward the zoomed planet as it stands at the clock time.
    fn follow_selected(&self, ctx: &mut EngineContext) {
        let Some(index) = self.selection.selected() else { return };
        let target = self.planets[index].position_at(self.clock.elapsed_f64());
        ctx.camera.lerp_toward(target + self.config.follow_offset, self.config.follow_factor);
    }

    /// Aim at the zoomed planet and pin its label over it.
    fn track_selected(&mut self, ctx: &mut EngineContext) {
        let Some(index) = self.selection.selected() else { return };
        let Some(target) = ctx.scene.world_position(self.planets[index].entity) else { return };

        ctx.camera.look_at(target);
        let screen = ctx.camera.project_to_screen(target, ctx.viewport.width, ctx.viewport.height);
        self.selection.place_label(screen);
    }

    fn update_hover(&mut self, ctx: &mut EngineContext) {
        let ray = ctx.camera.ray_from_ndc(self.pointer);
        let hit = pick_nearest(&ctx.scene, &ray, pickable_ids(&ctx.scene));

        for planet in &mut self.planets {
            if let Some(entity) = ctx.scene.get_mut(planet.entity) {
                entity.scale = planet.base_scale();
            }
            planet.tag.hide();
        }

        self.hovered = hit.and_then(|h| self.planets.iter().position(|p| p.entity == h.entity));
        let Some(index) = self.hovered else { return };

        let planet = &mut self.planets[index];
        let Some(entity) = ctx.scene.get_mut(planet.entity) else { return };
        entity.scale = planet.base_scale() * self.config.hover_scale;
        let world = entity.pos;

        let screen = ctx.camera.project_to_screen(world, ctx.viewport.width, ctx.viewport.height);
        planet.tag.show_at(Vec2::new(screen.x, screen.y - self.config.tag_offset_px));
    }
}

impl Default for SolarSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Game for SolarSystem {
    fn config(&self) -> GameConfig {
        GameConfig {
            max_instances: 32,
            max_lights: 4,
            max_points: self.config.star_count,
            fixed_dt: self.config.fixed_dt,
            ..GameConfig::default()
        }
    }

    fn init(&mut self, ctx: &mut EngineContext) {
        let handles = build_scene(ctx, &self.config);
        self.sun = Some(handles.sun);
        self.planets = handles.planets;
    }

    fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue) {
        for event in input.iter() {
            match *event {
                InputEvent::PointerMove { x, y } => {
                    if let Some(ndc) = ctx.viewport.to_ndc(Vec2::new(x, y)) {
                        self.pointer = ndc;
                    }
                }
                InputEvent::Custom { kind, a, b, .. } => {
                    if let Some(command) = UiCommand::from_custom(kind, a, b, self.planets.len()) {
                        self.apply(ctx, command);
                    }
                }
                // Resize and texture reports are applied by the runner.
                _ => {}
            }
        }
    }

    fn step(&mut self, ctx: &mut EngineContext, dt: f32) {
        if self.controls.paused() {
            return;
        }
        self.clock.advance(dt);
        self.follow_selected(ctx);
    }

    fn late_update(&mut self, ctx: &mut EngineContext) {
        let t = self.frame_time(ctx.frame_alpha);
        self.pose_bodies(ctx, t);
        self.track_selected(ctx);
        self.update_hover(ctx);
    }

    fn ui_snapshot(&self) -> serde_json::Value {
        serde_json::to_value(self.snapshot()).unwrap_or_else(|e| {
            log::error!("ui snapshot failed: {}", e);
            serde_json::Value::Null
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controls::{CUSTOM_RESET_SPEEDS, CUSTOM_SELECT, CUSTOM_SET_SPEED, CUSTOM_TOGGLE_PAUSE};

    const DT: f32 = 1.0 / 60.0;

    fn setup() -> (SolarSystem, EngineContext) {
        let mut game = SolarSystem::new();
        let mut ctx = EngineContext::with_seed(5);
        game.init(&mut ctx);
        (game, ctx)
    }

    fn send(game: &mut SolarSystem, ctx: &mut EngineContext, events: &[InputEvent]) {
        let mut input = InputQueue::new();
        for e in events {
            input.push(*e);
        }
        game.update(ctx, &input);
    }

    fn custom(kind: u32, a: f32, b: f32) -> InputEvent {
        InputEvent::Custom { kind, a, b, c: 0.0 }
    }

    fn run(game: &mut SolarSystem, ctx: &mut EngineContext, steps: usize) {
        for _ in 0..steps {
            game.step(ctx, DT);
        }
        game.late_update(ctx);
    }

    #[test]
    fn planets_follow_the_orbit_formula() {
        let (mut game, mut ctx) = setup();
        run(&mut game, &mut ctx, 90);
        let t = game.elapsed();
        assert!((t - 1.5).abs() < 1e-3);

        for p in game.planets() {
            let d = p.record.distance;
            let i = p.index as f32;
            let pos = ctx.scene.get(p.entity).unwrap().pos;
            assert!((pos.x - (t + i).cos() * d).abs() < 1e-4, "{} x", p.name());
            assert_eq!(pos.y, 0.0);
            assert!((pos.z - (t + i).sin() * d).abs() < 1e-4, "{} z", p.name());
        }
    }

    #[test]
    fn planets_and_sun_spin_each_step() {
        let (mut game, mut ctx) = setup();
        run(&mut game, &mut ctx, 10);
        for p in game.planets() {
            let rot = ctx.scene.get(p.entity).unwrap().rotation.y;
            assert!((rot - 10.0 * p.spin).abs() < 1e-5);
        }
        let sun = ctx.scene.find_by_tag("sun").unwrap();
        assert!((sun.rotation.y - 0.01).abs() < 1e-6);
    }

    #[test]
    fn reset_speeds_restores_every_slider() {
        let (mut game, mut ctx) = setup();
        send(&mut game, &mut ctx, &[custom(CUSTOM_SET_SPEED, 0.0, 1.7), custom(CUSTOM_SET_SPEED, 6.0, 0.3)]);
        assert!((game.planets()[0].speed - 1.7).abs() < 1e-5);
        assert!((game.planets()[6].speed - 0.3).abs() < 1e-5);
        assert_eq!(game.planets()[1].speed, 1.0);

        send(&mut game, &mut ctx, &[custom(CUSTOM_RESET_SPEEDS, 0.0, 0.0)]);
        let ui = game.snapshot();
        for (p, ui) in game.planets().iter().zip(&ui.planets) {
            assert_eq!(p.speed, 1.0);
            assert_eq!(ui.slider.value, "1");
        }
        assert_eq!(ctx.events.last().map(|e| e.kind), Some(EVENT_SPEEDS_RESET));
    }

    #[test]
    fn pause_freezes_time_and_resumes_in_place() {
        let (mut game, mut ctx) = setup();
        run(&mut game, &mut ctx, 30);
        let before = game.elapsed();
        let earth_before = ctx.scene.get(game.planets()[2].entity).unwrap().pos;

        send(&mut game, &mut ctx, &[custom(CUSTOM_TOGGLE_PAUSE, 0.0, 0.0)]);
        assert_eq!(game.controls().pause_label(), "Resume");
        run(&mut game, &mut ctx, 120);
        assert_eq!(game.elapsed(), before);
        assert_eq!(ctx.scene.get(game.planets()[2].entity).unwrap().pos, earth_before);

        send(&mut game, &mut ctx, &[custom(CUSTOM_TOGGLE_PAUSE, 0.0, 0.0)]);
        assert_eq!(game.controls().pause_label(), "Pause");
        run(&mut game, &mut ctx, 1);
        assert!((game.elapsed() - (before + DT)).abs() < 1e-5);
    }

    #[test]
    fn reselecting_restores_the_default_camera() {
        let (mut game, mut ctx) = setup();
        let default_pose = SolarConfig::default().default_pose;

        send(&mut game, &mut ctx, &[custom(CUSTOM_SELECT, 4.0, 0.0)]);
        run(&mut game, &mut ctx, 60);
        assert_ne!(ctx.camera.pose(), default_pose);
        let ui = game.snapshot();
        assert!(ui.selected_label.visible);
        assert_eq!(ui.selected_label.text, "Jupiter");
        assert!(ui.info_box.visible);

        send(&mut game, &mut ctx, &[custom(CUSTOM_SELECT, 4.0, 0.0)]);
        assert_eq!(ctx.camera.pose(), default_pose);
        let ui = game.snapshot();
        assert!(!ui.selected_label.visible);
        assert!(!ui.info_box.visible);
        assert!(ui.planets.iter().all(|p| !p.highlighted));
    }

    #[test]
    fn camera_closes_in_on_the_selected_planet() {
        let (mut game, mut ctx) = setup();
        send(&mut game, &mut ctx, &[custom(CUSTOM_SELECT, 2.0, 0.0)]);

        let start = ctx.camera.position;
        run(&mut game, &mut ctx, 1);
        let earth = ctx.scene.get(game.planets()[2].entity).unwrap().pos;
        let goal = earth + SolarConfig::default().follow_offset;
        let expected = start + (goal - start) * 0.05;
        assert!((ctx.camera.position - expected).length() < 1e-4);
        assert_eq!(ctx.camera.target, earth);

        run(&mut game, &mut ctx, 600);
        let earth = ctx.scene.get(game.planets()[2].entity).unwrap().pos;
        assert!(ctx.camera.position.distance(earth) < 10.0);
    }

    #[test]
    fn switching_selection_highlights_only_the_new_label() {
        let (mut game, mut ctx) = setup();
        send(&mut game, &mut ctx, &[custom(CUSTOM_SELECT, 1.0, 0.0), custom(CUSTOM_SELECT, 3.0, 0.0)]);
        let ui = game.snapshot();
        let lit: Vec<&str> = ui.planets.iter().filter(|p| p.highlighted).map(|p| p.name).collect();
        assert_eq!(lit, vec!["Mars"]);
        assert_eq!(ui.info_box.text, crate::bodies::PLANETS[3].info);
    }

    #[test]
    fn hovering_a_planet_enlarges_only_that_planet() {
        let (mut game, mut ctx) = setup();
        run(&mut game, &mut ctx, 1);

        let earth = &game.planets()[2];
        let earth_pos = ctx.scene.get(earth.entity).unwrap().pos;
        let screen = ctx.camera.project_to_screen(earth_pos, ctx.viewport.width, ctx.viewport.height);
        send(&mut game, &mut ctx, &[InputEvent::PointerMove { x: screen.x, y: screen.y }]);
        game.late_update(&mut ctx);

        assert_eq!(game.hovered(), Some(2));
        for p in game.planets() {
            let scale = ctx.scene.get(p.entity).unwrap().scale;
            let expected = if p.index == 2 { p.record.radius * 1.5 } else { p.record.radius };
            assert!((scale - expected).abs() < 1e-6, "{} scale {}", p.name(), scale);
            assert_eq!(p.tag.visible, p.index == 2);
        }
        let tag = game.planets()[2].tag;
        assert!((tag.x - screen.x).abs() < 1e-3);
        assert!((tag.y - (screen.y - 60.0)).abs() < 1e-3);
    }

    #[test]
    fn hover_tag_and_zoom_label_show_together() {
        let (mut game, mut ctx) = setup();
        send(&mut game, &mut ctx, &[custom(CUSTOM_SELECT, 2.0, 0.0)]);
        run(&mut game, &mut ctx, 600);

        let earth_pos = ctx.scene.get(game.planets()[2].entity).unwrap().pos;
        let screen = ctx.camera.project_to_screen(earth_pos, ctx.viewport.width, ctx.viewport.height);
        send(&mut game, &mut ctx, &[InputEvent::PointerMove { x: screen.x, y: screen.y }]);
        game.late_update(&mut ctx);

        assert_eq!(game.hovered(), Some(2));
        let ui = game.snapshot();
        assert!(ui.selected_label.visible);
        assert_eq!(ui.selected_label.text, "Earth");
        assert!((ui.selected_label.x - screen.x).abs() < 1e-3);
        assert!((ui.selected_label.y - screen.y).abs() < 1e-3);

        let tag = game.planets()[2].tag;
        assert!(tag.visible);
        assert!((tag.x - screen.x).abs() < 1e-3);
        assert!((tag.y - (screen.y - 60.0)).abs() < 1e-3);
    }

    #[test]
    fn orbits_keep_moving_after_a_week_of_uptime() {
        let (mut game, mut ctx) = setup();
        game.clock.advance(604_800.0);
        run(&mut game, &mut ctx, 0);

        for _ in 0..60 {
            let before = game.clock.elapsed_f64();
            let earth_before = ctx.scene.get(game.planets()[2].entity).unwrap().pos;
            run(&mut game, &mut ctx, 1);

            let moved = game.clock.elapsed_f64() - before;
            assert!((moved - DT as f64).abs() < 1e-9, "clock moved {}", moved);
            let earth = ctx.scene.get(game.planets()[2].entity).unwrap().pos;
            assert!(earth.distance(earth_before) > 0.1, "earth moved {}", earth.distance(earth_before));
        }
    }

    #[test]
    fn frames_between_steps_show_interpolated_orbits() {
        let (mut game, mut ctx) = setup();
        run(&mut game, &mut ctx, 3);
        let t = game.clock.elapsed_f64();

        ctx.frame_alpha = 0.5;
        game.late_update(&mut ctx);
        let earth = &game.planets()[2];
        let expected = earth.position_at(t + 0.5 * DT as f64);
        assert!((ctx.scene.get(earth.entity).unwrap().pos - expected).length() < 1e-5);
        let spin = ctx.scene.get(earth.entity).unwrap().rotation.y;
        assert!((spin - 3.5 * earth.spin).abs() < 1e-5);

        // Paused frames hold the clock, whatever the leftover fraction.
        send(&mut game, &mut ctx, &[custom(CUSTOM_TOGGLE_PAUSE, 0.0, 0.0)]);
        game.late_update(&mut ctx);
        let earth = &game.planets()[2];
        assert!((ctx.scene.get(earth.entity).unwrap().pos - earth.position_at(t)).length() < 1e-5);
    }

    #[test]
    fn moving_off_the_planet_restores_base_scale() {
        let (mut game, mut ctx) = setup();
        run(&mut game, &mut ctx, 1);
        let earth_pos = ctx.scene.get(game.planets()[2].entity).unwrap().pos;
        let screen = ctx.camera.project_to_screen(earth_pos, ctx.viewport.width, ctx.viewport.height);
        send(&mut game, &mut ctx, &[InputEvent::PointerMove { x: screen.x, y: screen.y }]);
        game.late_update(&mut ctx);
        assert_eq!(game.hovered(), Some(2));

        // Top-left corner looks out into empty space above the orbital plane.
        send(&mut game, &mut ctx, &[InputEvent::PointerMove { x: 0.0, y: 0.0 }]);
        game.late_update(&mut ctx);
        assert_eq!(game.hovered(), None);
        for p in game.planets() {
            assert_eq!(ctx.scene.get(p.entity).unwrap().scale, p.record.radius);
            assert!(!p.tag.visible);
        }
    }

    #[test]
    fn missing_touch_data_keeps_the_pointer() {
        let (mut game, mut ctx) = setup();
        send(&mut game, &mut ctx, &[InputEvent::PointerMove { x: 0.0, y: 0.0 }]);
        let pointer = game.pointer;
        send(&mut game, &mut ctx, &[InputEvent::PointerMove { x: f32::NAN, y: f32::NAN }]);
        assert_eq!(game.pointer, pointer);
        assert_eq!(pointer, Vec2::new(-1.0, 1.0));
    }

    #[test]
    fn invalid_commands_change_nothing() {
        let (mut game, mut ctx) = setup();
        send(
            &mut game,
            &mut ctx,
            &[custom(CUSTOM_SELECT, 12.0, 0.0), custom(CUSTOM_SET_SPEED, 0.0, f32::NAN), custom(99, 0.0, 0.0)],
        );
        assert_eq!(game.selection().selected(), None);
        assert_eq!(game.planets()[0].speed, 1.0);
        assert!(ctx.events.is_empty());
    }

    #[test]
    fn ui_snapshot_is_json() {
        let (mut game, mut ctx) = setup();
        send(&mut game, &mut ctx, &[custom(crate::controls::CUSTOM_TOGGLE_THEME, 0.0, 0.0)]);
        let json = game.ui_snapshot();
        assert_eq!(json["theme"], "light");
        assert_eq!(json["bodyClass"], "light-mode");
        assert_eq!(json["planets"].as_array().map(|a| a.len()), Some(8));
    }
}
