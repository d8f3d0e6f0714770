use orrery_engine::{
    Game, GameConfig, EngineContext,
    InputEvent, InputQueue, InstanceBuffer,
    FixedTimestep, ProtocolLayout, AssetManifest, TextureId,
    CameraUniform, build_instance_buffer,
};

/// Generic runner that wires up the engine loop.
///
/// Each concrete app creates a `thread_local!` GameRunner and exports free
/// functions via `#[wasm_bindgen]`, because wasm-bindgen cannot export
/// generic structs directly.
pub struct GameRunner<G: Game> {
    game: G,
    ctx: EngineContext,
    input: InputQueue,
    instances: InstanceBuffer,
    camera: CameraUniform,
    timestep: FixedTimestep,
    config: GameConfig,
    layout: ProtocolLayout,
    initialized: bool,
    frame_counter: u64,
    /// UI snapshot of the last frame, as JSON.
    ui_json: String,
}

impl<G: Game> GameRunner<G> {
    pub fn new(game: G) -> Self {
        Self::with_seed(game, 42)
    }

    pub fn with_seed(game: G, seed: u64) -> Self {
        let config = game.config();
        let timestep = FixedTimestep::with_max_steps(config.fixed_dt, config.max_steps);
        let layout = ProtocolLayout::from_config(&config);
        let ctx = EngineContext::with_seed(seed);
        let camera = ctx.camera.uniform();

        Self {
            game,
            ctx,
            input: InputQueue::new(),
            instances: InstanceBuffer::with_capacity(config.max_instances),
            camera,
            timestep,
            layout,
            config,
            initialized: false,
            frame_counter: 0,
            ui_json: "null".to_owned(),
        }
    }

    /// Initialize the game. Call once after construction.
    pub fn init(&mut self) {
        self.config = self.game.config();
        self.layout = ProtocolLayout::from_config(&self.config);
        self.game.init(&mut self.ctx);
        self.initialized = true;
        self.build_frame_buffers();
    }

    /// Push an input event into the queue.
    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Run one frame: input in arrival order, fixed steps, late update, buffers.
    pub fn tick(&mut self, dt: f32) {
        if !self.initialized {
            return;
        }

        // Clear per-frame transient data
        self.ctx.clear_frame_data();

        // Walk the queue in arrival order. Texture reports apply in place; a
        // resize first hands the events before it to the game, so pointer
        // positions are read against the surface they were measured on.
        let mut batch = InputQueue::new();
        for event in self.input.drain() {
            match event {
                InputEvent::Resize { width, height, left, top } => {
                    if !batch.is_empty() {
                        self.game.update(&mut self.ctx, &batch);
                        batch.drain();
                    }
                    self.ctx.resize(width, height, left, top);
                }
                InputEvent::TextureLoaded { id } => self.ctx.textures.mark_ready(TextureId(id)),
                InputEvent::TextureFailed { id } => self.ctx.textures.mark_failed(TextureId(id)),
                InputEvent::PointerMove { .. } | InputEvent::Custom { .. } => {}
            }
            batch.push(event);
        }
        self.game.update(&mut self.ctx, &batch);

        let steps = self.timestep.accumulate(dt);
        for _ in 0..steps {
            self.game.step(&mut self.ctx, self.timestep.dt());
        }

        self.ctx.frame_alpha = self.timestep.alpha().clamp(0.0, 1.0);
        self.game.late_update(&mut self.ctx);

        self.build_frame_buffers();
        self.frame_counter += 1;
    }

    fn build_frame_buffers(&mut self) {
        build_instance_buffer(&self.ctx.scene, &self.ctx.textures, &mut self.instances);
        self.camera = self.ctx.camera.uniform();
        self.ui_json = serde_json::to_string(&self.game.ui_snapshot()).unwrap_or_else(|e| {
            log::error!("ui snapshot serialization failed: {}", e);
            "null".to_owned()
        });
    }

    /// Apply a JSON asset manifest. Malformed manifests are logged and ignored.
    pub fn load_manifest(&mut self, json: &str) {
        match AssetManifest::from_json(json) {
            Ok(manifest) => {
                let changed = self.ctx.textures.apply_manifest(&manifest);
                log::info!("manifest loaded: {} texture url(s) overridden", changed);
            }
            Err(e) => log::error!("manifest rejected: {}", e),
        }
    }

    pub fn game(&self) -> &G {
        &self.game
    }

    pub fn context(&self) -> &EngineContext {
        &self.ctx
    }

    pub fn frame_counter(&self) -> u64 {
        self.frame_counter
    }

    // ---- Pointer accessors for shared-buffer reads ----

    pub fn instances_ptr(&self) -> *const f32 {
        self.instances.instances_ptr()
    }

    pub fn instance_count(&self) -> u32 {
        self.instances.instance_count()
    }

    pub fn lights_ptr(&self) -> *const f32 {
        self.ctx.lights.buffer_ptr()
    }

    pub fn light_count(&self) -> u32 {
        self.ctx.lights.count().min(self.layout.max_lights) as u32
    }

    pub fn ambient(&self) -> [f32; 3] {
        let c = self.ctx.lights.ambient();
        [c.r, c.g, c.b]
    }

    pub fn game_events_ptr(&self) -> *const f32 {
        self.ctx.events.as_ptr() as *const f32
    }

    pub fn game_events_len(&self) -> u32 {
        self.ctx.events.len().min(self.layout.max_events) as u32
    }

    pub fn camera_ptr(&self) -> *const f32 {
        &self.camera as *const CameraUniform as *const f32
    }

    pub fn camera_uniform(&self) -> &CameraUniform {
        &self.camera
    }

    pub fn points_ptr(&self) -> *const f32 {
        self.ctx.stars.positions_ptr()
    }

    pub fn point_count(&self) -> u32 {
        self.ctx.stars.len().min(self.layout.max_points) as u32
    }

    pub fn point_size(&self) -> f32 {
        self.ctx.stars.size
    }

    pub fn point_color(&self) -> [f32; 3] {
        let c = self.ctx.stars.color;
        [c.r, c.g, c.b]
    }

    pub fn viewport_width(&self) -> f32 {
        self.ctx.viewport.width
    }

    pub fn viewport_height(&self) -> f32 {
        self.ctx.viewport.height
    }

    /// Header block for hosts that copy everything into one shared buffer.
    pub fn header(&self) -> [f32; orrery_engine::bridge::protocol::HEADER_FLOATS] {
        use orrery_engine::bridge::protocol::*;
        let mut header = self.layout.header(self.viewport_width(), self.viewport_height());
        header[HEADER_FRAME_COUNTER] = self.frame_counter as f32;
        header[HEADER_INSTANCE_COUNT] = self.instance_count() as f32;
        header[HEADER_LIGHT_COUNT] = self.light_count() as f32;
        header[HEADER_EVENT_COUNT] = self.game_events_len() as f32;
        header[HEADER_POINT_COUNT] = self.point_count() as f32;
        header
    }

    // ---- JSON channels ----

    pub fn ui_json(&self) -> &str {
        &self.ui_json
    }

    /// Textures the host should start fetching.
    pub fn texture_requests_json(&self) -> String {
        self.ctx.textures.pending_json()
    }

    // ---- Capacity accessors (read by the host via wasm_bindgen exports) ----

    pub fn max_instances(&self) -> u32 {
        self.layout.max_instances as u32
    }

    pub fn max_lights(&self) -> u32 {
        self.layout.max_lights as u32
    }

    pub fn max_events(&self) -> u32 {
        self.layout.max_events as u32
    }

    pub fn max_points(&self) -> u32 {
        self.layout.max_points as u32
    }

    pub fn buffer_total_floats(&self) -> u32 {
        self.layout.buffer_total_floats as u32
    }
}
