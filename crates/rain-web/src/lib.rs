//! Browser entry points for the rain simulation.
//!
//! The host page owns the canvas and the animation frame loop. It calls
//! `sim_init` once, forwards key and resize events, calls `sim_tick` with the
//! elapsed seconds each frame, then draws the rectangles exposed through
//! `get_instances_ptr` / `get_instance_count` (8 floats each: x, y, w, h, r, g, b, a).

pub mod runner;

pub use runner::SimRunner;

use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use rain_engine::InputEvent;

thread_local! {
    static RUNNER: RefCell<Option<SimRunner>> = const { RefCell::new(None) };
}

fn with_runner<R>(f: impl FnOnce(&mut SimRunner) -> R) -> R {
    RUNNER.with(|cell| {
        let mut borrow = cell.borrow_mut();
        let runner = borrow.as_mut().expect("Simulation not initialized. Call sim_init() first.");
        f(runner)
    })
}

/// Create the simulation from a JSON config (empty string for defaults).
/// An invalid config is a fatal startup error and is thrown to the host.
#[wasm_bindgen]
pub fn sim_init(config_json: &str) -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let runner = SimRunner::from_json(config_json).map_err(|e| {
        log::error!("rain-web: {}", e);
        JsValue::from(js_sys::Error::new(&e.to_string()))
    })?;

    RUNNER.with(|cell| {
        *cell.borrow_mut() = Some(runner);
    });
    log::info!("rain-web: initialized");
    Ok(())
}

#[wasm_bindgen]
pub fn sim_tick(dt: f32) {
    with_runner(|r| r.tick(dt));
}

#[wasm_bindgen]
pub fn sim_key_down(key_code: u32) {
    with_runner(|r| r.push_input(InputEvent::KeyDown { key_code }));
}

#[wasm_bindgen]
pub fn sim_key_up(key_code: u32) {
    with_runner(|r| r.push_input(InputEvent::KeyUp { key_code }));
}

#[wasm_bindgen]
pub fn sim_resize(width: f32, height: f32) {
    with_runner(|r| r.push_input(InputEvent::Resize { width, height }));
}

// ---- Data accessors ----

#[wasm_bindgen]
pub fn get_instances_ptr() -> *const f32 {
    with_runner(|r| r.instances_ptr())
}

#[wasm_bindgen]
pub fn get_instance_count() -> u32 {
    with_runner(|r| r.instance_count())
}

#[wasm_bindgen]
pub fn get_drops_start() -> u32 {
    with_runner(|r| r.drops_start())
}

#[wasm_bindgen]
pub fn get_actor_index() -> u32 {
    with_runner(|r| r.actor_index())
}

#[wasm_bindgen]
pub fn get_events_ptr() -> *const f32 {
    with_runner(|r| r.events_ptr())
}

#[wasm_bindgen]
pub fn get_events_len() -> u32 {
    with_runner(|r| r.events_len())
}

#[wasm_bindgen]
pub fn get_wetness() -> f32 {
    with_runner(|r| r.wetness())
}

#[wasm_bindgen]
pub fn get_drop_count() -> u32 {
    with_runner(|r| r.drop_count())
}

#[wasm_bindgen]
pub fn get_viewport_width() -> f32 {
    with_runner(|r| r.viewport_width())
}

#[wasm_bindgen]
pub fn get_viewport_height() -> f32 {
    with_runner(|r| r.viewport_height())
}

#[wasm_bindgen]
pub fn is_terminated() -> bool {
    with_runner(|r| r.is_terminated())
}
