use crate::api::types::TextureId;

/// Linear RGB color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const WHITE: Self = Self { r: 1.0, g: 1.0, b: 1.0 };
    pub const BLACK: Self = Self { r: 0.0, g: 0.0, b: 0.0 };

    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Color from a 0xRRGGBB literal.
    pub const fn hex(rgb: u32) -> Self {
        Self {
            r: ((rgb >> 16) & 0xff) as f32 / 255.0,
            g: ((rgb >> 8) & 0xff) as f32 / 255.0,
            b: (rgb & 0xff) as f32 / 255.0,
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

/// Mesh geometry. The host tessellates; Rust only carries the parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Geometry {
    Sphere { radius: f32, segments: u32 },
    /// Flat annulus in the local XY plane.
    Ring { inner: f32, outer: f32, segments: u32 },
}

impl Geometry {
    pub fn sphere(radius: f32, segments: u32) -> Self {
        Geometry::Sphere { radius, segments }
    }

    pub fn ring(inner: f32, outer: f32, segments: u32) -> Self {
        Geometry::Ring { inner, outer, segments }
    }

    /// Wire value for the instance buffer `kind` field.
    pub fn kind(&self) -> f32 {
        match self {
            Geometry::Sphere { .. } => 0.0,
            Geometry::Ring { .. } => 1.0,
        }
    }

    /// `(p0, p1, segments)` as written to the instance buffer.
    pub fn params(&self) -> (f32, f32, f32) {
        match *self {
            Geometry::Sphere { radius, segments } => (radius, 0.0, segments as f32),
            Geometry::Ring { inner, outer, segments } => (inner, outer, segments as f32),
        }
    }
}

/// Surface description for a mesh.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    pub color: Color,
    pub emissive: Color,
    pub emissive_intensity: f32,
    pub opacity: f32,
    pub roughness: f32,
    pub metalness: f32,
    /// Lit (standard) vs. unlit (basic) shading.
    pub lit: bool,
    pub double_sided: bool,
    /// Surface map. Rendered only once the registry reports it ready.
    pub texture: Option<TextureId>,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            color: Color::WHITE,
            emissive: Color::BLACK,
            emissive_intensity: 1.0,
            opacity: 1.0,
            roughness: 1.0,
            metalness: 0.0,
            lit: true,
            double_sided: false,
            texture: None,
        }
    }
}

impl Material {
    /// Lit material of a single color.
    pub fn standard(color: Color) -> Self {
        Self { color, ..Default::default() }
    }

    /// Unlit material of a single color.
    pub fn basic(color: Color) -> Self {
        Self { color, lit: false, ..Default::default() }
    }

    pub fn with_emissive(mut self, emissive: Color, intensity: f32) -> Self {
        self.emissive = emissive;
        self.emissive_intensity = intensity;
        self
    }

    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity;
        self
    }

    pub fn with_surface(mut self, roughness: f32, metalness: f32) -> Self {
        self.roughness = roughness;
        self.metalness = metalness;
        self
    }

    pub fn double_sided(mut self) -> Self {
        self.double_sided = true;
        self
    }

    pub fn with_texture(mut self, texture: TextureId) -> Self {
        self.texture = Some(texture);
        self
    }

    pub fn is_transparent(&self) -> bool {
        self.opacity < 1.0
    }
}

/// Component for renderable meshes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeshComponent {
    pub geometry: Geometry,
    pub material: Material,
    /// Candidate for ray picking.
    pub pickable: bool,
}

impl MeshComponent {
    pub fn new(geometry: Geometry, material: Material) -> Self {
        Self {
            geometry,
            material,
            pickable: false,
        }
    }

    pub fn pickable(mut self) -> Self {
        self.pickable = true;
        self
    }
}
