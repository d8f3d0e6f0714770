/// Runtime state of one planet: the scene entities plus everything the
/// animation loop and the control panel mutate.

use glam::Vec3;
use orrery_engine::EntityId;

use crate::bodies::PlanetRecord;
use crate::config::SliderDomain;
use crate::hud::NameTag;
use crate::orbit::{orbit_position, spin_angle};

#[derive(Debug, Clone)]
pub struct Planet {
    pub record: &'static PlanetRecord,
    /// Position in the planet table; also the orbit phase offset.
    pub index: usize,
    /// Orbital speed multiplier, always inside the speed slider's domain.
    pub speed: f32,
    /// Y rotation added per simulation step.
    pub spin: f32,
    pub entity: EntityId,
    pub ring: Option<EntityId>,
    pub tag: NameTag,
}

impl Planet {
    pub fn new(record: &'static PlanetRecord, index: usize, entity: EntityId, spin: f32) -> Self {
        Self {
            record,
            index,
            speed: 1.0,
            spin,
            entity,
            ring: None,
            tag: NameTag::default(),
        }
    }

    pub fn with_ring(mut self, ring: EntityId) -> Self {
        self.ring = Some(ring);
        self
    }

    pub fn name(&self) -> &'static str {
        self.record.name
    }

    /// Resting scale; hover enlarges relative to this.
    pub fn base_scale(&self) -> f32 {
        self.record.radius
    }

    /// Where the planet sits at simulation time `t`.
    pub fn position_at(&self, t: f64) -> Vec3 {
        orbit_position(t, self.speed, self.index as f32, self.record.distance)
    }

    /// Y rotation after `steps` fixed steps.
    pub fn rotation_at(&self, steps: f64) -> f32 {
        spin_angle(self.spin, steps)
    }

    /// Apply a slider input. Returns false (and keeps the old speed) for
    /// values the slider cannot represent.
    pub fn set_speed(&mut self, raw: f32, domain: &SliderDomain) -> bool {
        match domain.apply(raw) {
            Some(speed) => {
                self.speed = speed;
                true
            }
            None => false,
        }
    }

    pub fn label_text(&self) -> String {
        format!("{} Speed:", self.record.name)
    }

    pub fn slider_value(&self, domain: &SliderDomain) -> String {
        domain.format(self.speed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bodies::PLANETS;
    use crate::config::SolarConfig;

    fn earth() -> Planet {
        Planet::new(&PLANETS[2], 2, EntityId(3), 0.015)
    }

    #[test]
    fn defaults_match_the_control_panel() {
        let p = earth();
        let domain = SolarConfig::default().speed_slider;
        assert_eq!(p.speed, 1.0);
        assert_eq!(p.label_text(), "Earth Speed:");
        assert_eq!(p.slider_value(&domain), "1");
        assert_eq!(p.base_scale(), 0.6);
    }

    #[test]
    fn invalid_speed_is_rejected() {
        let mut p = earth();
        let domain = SolarConfig::default().speed_slider;
        assert!(!p.set_speed(f32::INFINITY, &domain));
        assert_eq!(p.speed, 1.0);
        assert!(p.set_speed(1.5, &domain));
        assert!((p.speed - 1.5).abs() < 1e-5);
        assert_eq!(p.slider_value(&domain), "1.5");
    }

    #[test]
    fn phase_is_the_index() {
        let p = earth();
        let pos = p.position_at(0.0);
        assert!((pos.x - 2.0f32.cos() * 8.0).abs() < 1e-5);
        assert!((pos.z - 2.0f32.sin() * 8.0).abs() < 1e-5);
    }
}
