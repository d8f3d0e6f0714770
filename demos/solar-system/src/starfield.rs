/// Background stars: uniform in a cube, with a clear sphere around the sun.

use glam::Vec3;
use orrery_engine::{PointCloud, Rng};

use crate::config::SolarConfig;

/// Rejection-sample one star. Gives up after `max_attempts` and keeps the
/// last sample.
pub fn sample_star(rng: &mut Rng, extent: f32, clearance: f32, max_attempts: u32) -> Vec3 {
    let mut candidate = Vec3::ZERO;
    for _ in 0..max_attempts.max(1) {
        candidate = Vec3::new(rng.spread(extent), rng.spread(extent), rng.spread(extent));
        if candidate.length() > clearance {
            return candidate;
        }
    }
    log::warn!(
        "starfield: no sample beyond {} after {} attempts, keeping {:?}",
        clearance, max_attempts, candidate
    );
    candidate
}

/// Fill a point cloud with the configured number of stars.
pub fn build_starfield(rng: &mut Rng, config: &SolarConfig) -> PointCloud {
    let mut stars = PointCloud::new(config.star_color, config.star_size);
    for _ in 0..config.star_count {
        stars.push(sample_star(rng, config.star_extent, config.star_clearance, config.star_max_attempts));
    }
    stars
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_starfield_respects_bounds() {
        let config = SolarConfig::default();
        for seed in [1, 7, 12345] {
            let mut rng = Rng::new(seed);
            let stars = build_starfield(&mut rng, &config);
            assert_eq!(stars.len(), 200);
            for s in stars.positions() {
                assert!(s.length() > 40.0, "star too close: {:?}", s);
                assert!(s.abs().max_element() <= 200.0, "star outside cube: {:?}", s);
            }
        }
    }

    #[test]
    fn impossible_clearance_keeps_last_sample() {
        let mut rng = Rng::new(3);
        let s = sample_star(&mut rng, 2.0, 100.0, 5);
        assert!(s.abs().max_element() <= 1.0);
    }
}
