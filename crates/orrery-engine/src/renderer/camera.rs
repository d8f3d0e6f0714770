use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec2, Vec3};
use crate::systems::picking::Ray;

/// Position + look-at target. Enough to restore a camera exactly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    pub position: Vec3,
    pub target: Vec3,
}

impl CameraPose {
    pub const fn new(position: Vec3, target: Vec3) -> Self {
        Self { position, target }
    }
}

/// Perspective camera with a right-handed, Y-up view and OpenGL clip space
/// (NDC in [-1, 1] on every axis), which is what WebGL scene libraries expect.
#[derive(Debug, Clone)]
pub struct PerspectiveCamera {
    /// Vertical field of view in degrees.
    pub fov_deg: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
    pub position: Vec3,
    /// Point the camera looks at.
    pub target: Vec3,
    pub up: Vec3,
}

/// GPU-side camera data written to the shared buffer.
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct CameraUniform {
    pub view: [[f32; 4]; 4],
    pub projection: [[f32; 4]; 4],
    /// Camera position, w = 1.
    pub position: [f32; 4],
    /// fov (degrees), aspect, near, far.
    pub lens: [f32; 4],
}

impl CameraUniform {
    pub const FLOATS: usize = 40;
}

impl PerspectiveCamera {
    pub fn new(fov_deg: f32, aspect: f32, near: f32, far: f32) -> Self {
        Self {
            fov_deg,
            aspect,
            near,
            far,
            position: Vec3::ZERO,
            target: Vec3::NEG_Z,
            up: Vec3::Y,
        }
    }

    /// Current pose.
    pub fn pose(&self) -> CameraPose {
        CameraPose::new(self.position, self.target)
    }

    /// Snap to a pose.
    pub fn set_pose(&mut self, pose: CameraPose) {
        self.position = pose.position;
        self.target = pose.target;
    }

    /// Aim the camera at `target` without moving it.
    pub fn look_at(&mut self, target: Vec3) {
        self.target = target;
    }

    /// Move `factor` of the remaining distance toward `goal`.
    pub fn lerp_toward(&mut self, goal: Vec3, factor: f32) {
        self.position = self.position.lerp(goal, factor);
    }

    /// Update the aspect ratio. Zero or non-finite ratios are ignored.
    pub fn set_aspect(&mut self, aspect: f32) {
        if aspect.is_finite() && aspect > 0.0 {
            self.aspect = aspect;
        }
    }

    pub fn view_matrix(&self) -> Mat4 {
        let forward = self.target - self.position;
        let target = if forward.length_squared() < 1e-12 {
            self.position + Vec3::NEG_Z
        } else {
            self.target
        };
        Mat4::look_at_rh(self.position, target, self.up)
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh_gl(self.fov_deg.to_radians(), self.aspect, self.near, self.far)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// World position to normalized device coordinates.
    pub fn project(&self, world: Vec3) -> Vec3 {
        self.view_projection().project_point3(world)
    }

    /// World position to screen pixels for a surface of the given size.
    pub fn project_to_screen(&self, world: Vec3, width: f32, height: f32) -> Vec2 {
        ndc_to_screen(self.project(world).truncate(), width, height)
    }

    /// Ray from the camera through a point in NDC.
    pub fn ray_from_ndc(&self, ndc: Vec2) -> Ray {
        let inverse = self.view_projection().inverse();
        let through = inverse.project_point3(ndc.extend(0.5));
        Ray::new(self.position, through - self.position)
    }

    pub fn uniform(&self) -> CameraUniform {
        CameraUniform {
            view: self.view_matrix().to_cols_array_2d(),
            projection: self.projection_matrix().to_cols_array_2d(),
            position: self.position.extend(1.0).to_array(),
            lens: [self.fov_deg, self.aspect, self.near, self.far],
        }
    }
}

/// NDC to pixel coordinates, origin top-left, Y down.
pub fn ndc_to_screen(ndc: Vec2, width: f32, height: f32) -> Vec2 {
    Vec2::new((ndc.x * 0.5 + 0.5) * width, (-ndc.y * 0.5 + 0.5) * height)
}
