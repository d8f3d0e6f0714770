use wasm_bindgen::prelude::*;
use orrery_engine::*;

mod bodies;
mod config;
mod controls;
mod game;
mod hud;
mod orbit;
mod planet;
mod scene_builder;
mod starfield;
use game::SolarSystem;

orrery_web::export_game!(SolarSystem, "solar-system");
