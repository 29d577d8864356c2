use wasm_bindgen::prelude::*;
use orrery_engine::*;

mod bodies;
mod scene;
use scene::DarkSide;

orrery_web::export_scene!(DarkSide, "dark-side");
