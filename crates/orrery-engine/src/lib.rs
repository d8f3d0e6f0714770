pub mod api;
pub mod core;
pub mod components;
pub mod systems;
pub mod renderer;
pub mod bridge;
pub mod input;
pub mod assets;

// Re-export key types at crate root for convenience
pub use api::game::{Game, GameConfig, EngineContext};
pub use api::types::{EntityId, TextureId, GameEvent};
pub use components::entity::Entity;
pub use components::mesh::{Color, Geometry, Material, MeshComponent};
pub use core::scene::{Scene, WorldTransform};
pub use core::time::{FixedTimestep, SimClock};
pub use core::rng::Rng;
pub use core::viewport::Viewport;
pub use renderer::instance::{MeshInstance, InstanceBuffer};
pub use renderer::camera::{PerspectiveCamera, CameraPose, CameraUniform, ndc_to_screen};
pub use input::queue::{InputEvent, InputQueue};
pub use assets::manifest::{AssetManifest, TextureDescriptor};
pub use assets::registry::{TextureRegistry, TextureState, TextureRequest};
pub use bridge::protocol::ProtocolLayout;
pub use systems::lighting::{PointLight, LightState};
pub use systems::points::PointCloud;
pub use systems::picking::{Ray, Hit, pick, pick_nearest, pickable_ids};
pub use systems::render::build_instance_buffer;
pub use bridge::protocol::{LIGHT_FLOATS, DEFAULT_MAX_LIGHTS};
