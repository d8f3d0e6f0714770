/// Tunables for the solar-system scene. Everything the scene builder,
/// animation loop and control panel need lives here so tests can reason
/// about exact values.

use glam::Vec3;
use orrery_engine::{CameraPose, Color};

/// Default sun surface texture.
pub const SUN_TEXTURE_URL: &str =
    "https://raw.githubusercontent.com/rajatkantinandi/solar-system-threejs/main/assets/textures/sun.jpg";

/// A range input's domain: values are clamped to `[min, max]` and snapped to `step`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderDomain {
    pub min: f32,
    pub max: f32,
    pub step: f32,
    pub default: f32,
}

impl SliderDomain {
    /// Bring a raw input value into the domain, as a browser range input would.
    /// Non-finite input has no meaning and yields `None`.
    pub fn apply(&self, raw: f32) -> Option<f32> {
        if !raw.is_finite() {
            return None;
        }
        let clamped = raw.clamp(self.min, self.max);
        let steps = ((clamped - self.min) / self.step).round();
        Some((self.min + steps * self.step).clamp(self.min, self.max))
    }

    /// Display string for a value, with as many decimals as the step needs
    /// and no trailing zeros (`1.0` → `"1"`, `1.3` → `"1.3"`).
    pub fn format(&self, value: f32) -> String {
        let decimals = (-self.step.log10()).ceil().max(0.0) as usize;
        let text = format!("{:.*}", decimals, value);
        if text.contains('.') {
            text.trim_end_matches('0').trim_end_matches('.').to_owned()
        } else {
            text
        }
    }
}

#[derive(Debug, Clone)]
pub struct SolarConfig {
    // ── Starfield ──
    pub star_count: usize,
    /// Full edge length of the sampling cube.
    pub star_extent: f32,
    /// Stars closer than this to the origin are resampled.
    pub star_clearance: f32,
    pub star_max_attempts: u32,
    pub star_color: Color,
    pub star_size: f32,

    // ── Camera ──
    pub fov_deg: f32,
    pub near: f32,
    pub far: f32,
    pub default_pose: CameraPose,
    /// Fraction of the remaining distance covered per step while following.
    pub follow_factor: f32,
    /// Follow target relative to the zoomed planet.
    pub follow_offset: Vec3,

    // ── Animation ──
    /// Simulation step length in seconds; per-step rates below assume it.
    pub fixed_dt: f32,
    /// Sun Y rotation per step (radians).
    pub sun_spin: f32,
    /// Per-planet spin is drawn from `[spin_min, spin_min + spin_jitter)`.
    pub spin_min: f32,
    pub spin_jitter: f32,

    // ── Overlays ──
    pub hover_scale: f32,
    /// Name tags sit this many pixels above the planet.
    pub tag_offset_px: f32,
    pub speed_slider: SliderDomain,

    // ── Assets ──
    pub sun_texture_url: String,
}

impl Default for SolarConfig {
    fn default() -> Self {
        Self {
            star_count: 200,
            star_extent: 400.0,
            star_clearance: 40.0,
            star_max_attempts: 1000,
            star_color: Color::WHITE,
            star_size: 1.0,

            fov_deg: 75.0,
            near: 0.1,
            far: 1000.0,
            default_pose: CameraPose::new(Vec3::new(0.0, 10.0, 30.0), Vec3::ZERO),
            follow_factor: 0.05,
            follow_offset: Vec3::new(0.0, 1.0, 3.0),

            fixed_dt: 1.0 / 60.0,
            sun_spin: 0.001,
            spin_min: 0.01,
            spin_jitter: 0.01,

            hover_scale: 1.5,
            tag_offset_px: 60.0,
            speed_slider: SliderDomain { min: 0.1, max: 2.0, step: 0.1, default: 1.0 },

            sun_texture_url: SUN_TEXTURE_URL.to_owned(),
        }
    }
}
