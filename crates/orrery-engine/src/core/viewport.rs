use glam::Vec2;

/// The drawing surface's rectangle on the page, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { left: 0.0, top: 0.0, width, height }
    }

    pub fn aspect(&self) -> f32 {
        self.width / self.height
    }

    /// Apply a resize. Zero, negative or non-finite sizes are ignored.
    /// Returns whether the viewport changed.
    pub fn resize(&mut self, width: f32, height: f32, left: f32, top: f32) -> bool {
        let valid = width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0;
        if !valid {
            log::debug!("viewport: ignoring degenerate size {}x{}", width, height);
            return false;
        }
        self.width = width;
        self.height = height;
        self.left = if left.is_finite() { left } else { 0.0 };
        self.top = if top.is_finite() { top } else { 0.0 };
        true
    }

    /// Convert page coordinates to normalized device coordinates
    /// (x right, y up, both -1..1 across the surface).
    /// Points outside the surface map outside that range.
    pub fn to_ndc(&self, client: Vec2) -> Option<Vec2> {
        if !client.is_finite() {
            return None;
        }
        let x = (client.x - self.left) / self.width * 2.0 - 1.0;
        let y = -(client.y - self.top) / self.height * 2.0 + 1.0;
        Some(Vec2::new(x, y))
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(800.0, 600.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corners_and_center_map_to_ndc() {
        let mut vp = Viewport::new(800.0, 600.0);
        vp.resize(800.0, 600.0, 100.0, 50.0);
        assert_eq!(vp.to_ndc(Vec2::new(100.0, 50.0)), Some(Vec2::new(-1.0, 1.0)));
        assert_eq!(vp.to_ndc(Vec2::new(500.0, 350.0)), Some(Vec2::new(0.0, 0.0)));
        assert_eq!(vp.to_ndc(Vec2::new(900.0, 650.0)), Some(Vec2::new(1.0, -1.0)));
    }

    #[test]
    fn non_finite_pointer_is_rejected() {
        let vp = Viewport::default();
        assert_eq!(vp.to_ndc(Vec2::new(f32::NAN, 10.0)), None);
    }

    #[test]
    fn degenerate_resize_is_ignored() {
        let mut vp = Viewport::new(800.0, 600.0);
        assert!(!vp.resize(0.0, 600.0, 0.0, 0.0));
        assert!(!vp.resize(800.0, f32::INFINITY, 0.0, 0.0));
        assert_eq!(vp.width, 800.0);
        assert!(vp.resize(1024.0, 512.0, 0.0, 0.0));
        assert!((vp.aspect() - 2.0).abs() < 1e-6);
    }
}
