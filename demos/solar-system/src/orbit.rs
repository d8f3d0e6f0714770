/// Circular orbit in the XZ plane.
///
/// Each planet starts at a different phase (its index, in radians) so they
/// do not line up at t = 0.

use std::f64::consts::TAU;

use glam::Vec3;

/// Position at simulation time `t` for a planet with speed multiplier
/// `speed`, phase `phase` and orbit radius `distance`.
///
/// The angle is formed in f64; only the final coordinates drop to f32.
pub fn orbit_position(t: f64, speed: f32, phase: f32, distance: f32) -> Vec3 {
    let angle = t * speed as f64 + phase as f64;
    let distance = distance as f64;
    Vec3::new((angle.cos() * distance) as f32, 0.0, (angle.sin() * distance) as f32)
}

/// Rotation after `steps` fixed steps of `per_step` radians, wrapped to [0, 2π).
pub fn spin_angle(per_step: f32, steps: f64) -> f32 {
    (per_step as f64 * steps).rem_euclid(TAU) as f32
}
