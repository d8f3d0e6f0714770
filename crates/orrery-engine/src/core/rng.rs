//! Seedable pseudo-random number generator (xorshift64).
//! Deterministic and fast; the web bridge seeds it from the host.

#[derive(Debug, Clone)]
pub struct Rng {
    state: u64,
}

impl Rng {
    pub fn new(seed: u64) -> Self {
        Rng {
            state: if seed == 0 { 1 } else { seed },
        }
    }

    fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }

    /// Uniform float in [0, 1).
    pub fn next_f32(&mut self) -> f32 {
        // Top 24 bits fit the f32 mantissa exactly.
        (self.next_u64() >> 40) as f32 / (1u64 << 24) as f32
    }

    /// Uniform float in [min, max).
    pub fn range(&mut self, min: f32, max: f32) -> f32 {
        lerp_half_open(min, max, self.next_f32())
    }

    /// Uniform float in (-extent / 2, extent / 2].
    pub fn spread(&mut self, extent: f32) -> f32 {
        extent * (0.5 - self.next_f32())
    }
}

/// `min + u * (max - min)` for `u` in [0, 1). Rounding can land exactly on
/// `max`; those samples fold back to `min`.
fn lerp_half_open(min: f32, max: f32, u: f32) -> f32 {
    let r = min + u * (max - min);
    if r < max { r } else { min }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rng_deterministic() {
        let mut rng1 = Rng::new(42);
        let mut rng2 = Rng::new(42);
        for _ in 0..10 {
            assert_eq!(rng1.next_f32(), rng2.next_f32());
        }
    }

    #[test]
    fn rng_zero_seed_handled() {
        let mut rng = Rng::new(0);
        for _ in 0..100 {
            assert!((0.0..1.0).contains(&rng.next_f32()));
        }
    }

    #[test]
    fn floats_stay_in_range() {
        let mut rng = Rng::new(7);
        for _ in 0..10_000 {
            let u = rng.next_f32();
            assert!((0.0..1.0).contains(&u), "u = {}", u);

            let r = rng.range(0.01, 0.02);
            assert!(r >= 0.01 && r < 0.02, "r = {}", r);

            let s = rng.spread(400.0);
            assert!(s > -200.0 - 1e-3 && s <= 200.0, "s = {}", s);
        }
    }

    #[test]
    fn range_never_reaches_its_upper_bound() {
        let largest_u = 1.0 - 1.0 / (1u32 << 24) as f32;
        let r = lerp_half_open(0.01, 0.02, largest_u);
        assert!(r >= 0.01 && r < 0.02, "r = {}", r);
        assert_eq!(lerp_half_open(0.01, 0.02, 0.0), 0.01);
    }
}
