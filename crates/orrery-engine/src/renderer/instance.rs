use bytemuck::{Pod, Zeroable};

/// Material flag bits in [`MeshInstance::flags`].
pub const FLAG_LIT: u32 = 1;
pub const FLAG_DOUBLE_SIDED: u32 = 1 << 1;
pub const FLAG_TRANSPARENT: u32 = 1 << 2;

/// Per-mesh render data written to the shared buffer for the host renderer.
/// Must match the host protocol: 24 floats = 96 bytes stride.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct MeshInstance {
    /// World position.
    pub x: f32,
    pub y: f32,
    pub z: f32,
    /// Uniform world scale.
    pub scale: f32,
    /// World rotation quaternion.
    pub qx: f32,
    pub qy: f32,
    pub qz: f32,
    pub qw: f32,
    /// Base color.
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub opacity: f32,
    /// Emissive color and intensity.
    pub er: f32,
    pub eg: f32,
    pub eb: f32,
    pub emissive_intensity: f32,
    /// Geometry kind (0 = sphere, 1 = ring).
    pub kind: f32,
    /// Sphere radius, or ring inner radius.
    pub p0: f32,
    /// Ring outer radius (unused for spheres).
    pub p1: f32,
    pub segments: f32,
    /// Ready texture id, or -1 for none.
    pub texture: f32,
    /// `FLAG_*` bits.
    pub flags: f32,
    pub roughness: f32,
    pub metalness: f32,
}

impl MeshInstance {
    pub const FLOATS: usize = 24;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;
    pub const NO_TEXTURE: f32 = -1.0;
}

/// All mesh instances for one frame.
pub struct InstanceBuffer {
    instances: Vec<MeshInstance>,
    capacity: usize,
}

impl InstanceBuffer {
    pub fn new() -> Self {
        Self::with_capacity(64)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            instances: Vec::with_capacity(capacity),
            capacity,
        }
    }

    pub fn clear(&mut self) {
        self.instances.clear();
    }

    /// Append an instance. Returns false (and drops it) once capacity is reached,
    /// since the host sized its view of the buffer from the capacity.
    pub fn push(&mut self, instance: MeshInstance) -> bool {
        if self.instances.len() >= self.capacity {
            return false;
        }
        self.instances.push(instance);
        true
    }

    pub fn instances(&self) -> &[MeshInstance] {
        &self.instances
    }

    pub fn instance_count(&self) -> u32 {
        self.instances.len() as u32
    }

    /// Raw pointer to instance data for shared-buffer reads.
    pub fn instances_ptr(&self) -> *const f32 {
        self.instances.as_ptr() as *const f32
    }
}

impl Default for InstanceBuffer {
    fn default() -> Self {
        Self::new()
    }
}
