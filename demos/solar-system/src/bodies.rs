/// Body data: the eight planets, their rings and the sun.
///
/// Distances and sizes are display units, not astronomy.

use orrery_engine::Color;

/// Ring appearance for ringed planets.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingStyle {
    pub color: Color,
    pub opacity: f32,
}

/// Static description of one planet.
#[derive(Debug, Clone, Copy)]
pub struct PlanetRecord {
    pub name: &'static str,
    /// Geometry radius; also the base scale.
    pub radius: f32,
    /// Orbit radius around the sun.
    pub distance: f32,
    pub color: Color,
    pub info: &'static str,
    pub ring: Option<RingStyle>,
}

pub const PLANET_COUNT: usize = 8;
pub const SATURN: usize = 5;

pub const PLANET_SEGMENTS: u32 = 32;

// ── Rings ────────────────────────────────────────────────────────────

pub const RING_INNER_FACTOR: f32 = 1.2;
pub const RING_OUTER_FACTOR: f32 = 1.7;
pub const RING_SEGMENTS: u32 = 64;
/// Rings lie flat in the orbital plane.
pub const RING_TILT_X: f32 = std::f32::consts::FRAC_PI_2;

const SATURN_RING: RingStyle = RingStyle { color: Color::hex(0xdeb887), opacity: 0.7 };
const ICE_RING: RingStyle = RingStyle { color: Color::hex(0xcccccc), opacity: 0.3 };

pub static PLANETS: [PlanetRecord; PLANET_COUNT] = [
    PlanetRecord {
        name: "Mercury",
        radius: 0.3,
        distance: 4.0,
        color: Color::hex(0xaaaaaa),
        info: "Mercury is the smallest planet, closest to the Sun.",
        ring: None,
    },
    PlanetRecord {
        name: "Venus",
        radius: 0.5,
        distance: 6.0,
        color: Color::hex(0xffcc66),
        info: "Venus has a thick toxic atmosphere and intense heat.",
        ring: None,
    },
    PlanetRecord {
        name: "Earth",
        radius: 0.6,
        distance: 8.0,
        color: Color::hex(0x3399ff),
        info: "Earth supports life with water and a breathable atmosphere.",
        ring: None,
    },
    PlanetRecord {
        name: "Mars",
        radius: 0.4,
        distance: 10.0,
        color: Color::hex(0xff3300),
        info: "Mars is a red desert world with frozen poles.",
        ring: None,
    },
    PlanetRecord {
        name: "Jupiter",
        radius: 1.1,
        distance: 13.0,
        color: Color::hex(0xff9966),
        info: "Jupiter is the largest gas giant with a huge storm.",
        ring: None,
    },
    PlanetRecord {
        name: "Saturn",
        radius: 0.9,
        distance: 16.0,
        color: Color::hex(0xffcc99),
        info: "Saturn is famous for its spectacular ring system.",
        ring: Some(SATURN_RING),
    },
    PlanetRecord {
        name: "Uranus",
        radius: 0.7,
        distance: 19.0,
        color: Color::hex(0x66ffff),
        info: "Uranus rotates sideways and is icy cold.",
        ring: Some(ICE_RING),
    },
    PlanetRecord {
        name: "Neptune",
        radius: 0.7,
        distance: 22.0,
        color: Color::hex(0x3366ff),
        info: "Neptune has supersonic winds and dark storms.",
        ring: Some(ICE_RING),
    },
];

// ── Sun ──────────────────────────────────────────────────────────────

pub const SUN_RADIUS: f32 = 2.0;
pub const SUN_SEGMENTS: u32 = 64;
pub const SUN_EMISSIVE: Color = Color::hex(0xffaa00);
pub const SUN_EMISSIVE_INTENSITY: f32 = 1.5;
pub const SUN_ROUGHNESS: f32 = 0.7;
pub const SUN_METALNESS: f32 = 0.2;
/// Registry name of the sun's surface texture.
pub const SUN_TEXTURE: &str = "sun";

// ── Light ────────────────────────────────────────────────────────────

pub const LIGHT_COLOR: Color = Color::WHITE;
pub const LIGHT_INTENSITY: f32 = 2.0;
pub const LIGHT_DISTANCE: f32 = 100.0;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_outer_giants_have_rings() {
        let ringed: Vec<&str> = PLANETS.iter().filter(|p| p.ring.is_some()).map(|p| p.name).collect();
        assert_eq!(ringed, vec!["Saturn", "Uranus", "Neptune"]);
        assert_eq!(PLANETS[SATURN].ring.map(|r| r.opacity), Some(0.7));
    }

    #[test]
    fn orbits_are_ordered_outward() {
        assert!(PLANETS.windows(2).all(|w| w[0].distance < w[1].distance));
        assert!(PLANETS.iter().all(|p| p.distance > SUN_RADIUS));
    }
}
