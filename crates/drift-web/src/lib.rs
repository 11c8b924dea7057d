//! WASM bridge for the Drift particle field.
//!
//! The hosting page owns the frame loop: its `requestAnimationFrame`
//! callback calls `field_tick()` once per display refresh, then reads the
//! circle and link buffers straight out of wasm memory via the pointer
//! accessors and rasterizes them onto a Canvas2D overlay. Resize events
//! land between ticks on the same event loop, so no locking is needed
//! anywhere.

use std::cell::RefCell;

use wasm_bindgen::prelude::*;

use drift_engine::{CircleInstance, FieldConfig, FieldRunner, FrameBuffer, LinkInstance};

thread_local! {
    static RUNNER: RefCell<Option<FieldRunner<FrameBuffer>>> = RefCell::new(None);
}

fn with_runner<R>(f: impl FnOnce(&mut FieldRunner<FrameBuffer>) -> R) -> R {
    RUNNER.with(|cell| {
        let mut borrow = cell.borrow_mut();
        let runner = borrow
            .as_mut()
            .expect("Field not initialized. Call field_init() first.");
        f(runner)
    })
}

fn init_runner(width: f32, height: f32, config: FieldConfig) {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    if width <= 0.0 || height <= 0.0 {
        // No drawing surface to cover; stay inert.
        log::warn!("drift: refusing to start on a {}x{} surface", width, height);
        return;
    }

    let seed = js_sys::Date::now() as u64;
    let surface = FrameBuffer::for_field(config.particle_count);
    let runner = FieldRunner::new(config, width, height, seed, surface);

    RUNNER.with(|cell| {
        *cell.borrow_mut() = Some(runner);
    });

    log::info!("drift: field initialized at {}x{}", width, height);
}

/// Start the engine over a `width x height` viewport with the built-in
/// constants.
#[wasm_bindgen]
pub fn field_init(width: f32, height: f32) {
    init_runner(width, height, FieldConfig::default());
}

/// Start the engine with JSON overrides for the built-in constants.
/// Malformed JSON falls back to the defaults.
#[wasm_bindgen]
pub fn field_init_with_config(width: f32, height: f32, json: &str) {
    let config = match FieldConfig::from_json(json) {
        Ok(config) => config,
        Err(err) => {
            log::warn!("drift: bad config, using defaults: {}", err);
            FieldConfig::default()
        }
    };
    init_runner(width, height, config);
}

/// Run one frame tick: advance the field, rebuild the draw buffers.
#[wasm_bindgen]
pub fn field_tick() {
    with_runner(|r| r.tick());
}

/// Viewport resized. Updates the surface dimensions in place; particles
/// keep drifting and wrap against the new bounds on the next tick.
#[wasm_bindgen]
pub fn field_resize(width: f32, height: f32) {
    with_runner(|r| r.resize(width, height));
}

/// Discard the field and sample a fresh one at the current dimensions.
#[wasm_bindgen]
pub fn field_reset() {
    with_runner(|r| r.reset());
}

// ---- Data accessors ----

#[wasm_bindgen]
pub fn get_circles_ptr() -> *const f32 {
    with_runner(|r| r.surface().circles_ptr())
}

#[wasm_bindgen]
pub fn get_circle_count() -> u32 {
    with_runner(|r| r.surface().circle_count())
}

#[wasm_bindgen]
pub fn get_links_ptr() -> *const f32 {
    with_runner(|r| r.surface().links_ptr())
}

#[wasm_bindgen]
pub fn get_link_count() -> u32 {
    with_runner(|r| r.surface().link_count())
}

#[wasm_bindgen]
pub fn get_field_width() -> f32 {
    with_runner(|r| r.field().width())
}

#[wasm_bindgen]
pub fn get_field_height() -> f32 {
    with_runner(|r| r.field().height())
}

#[wasm_bindgen]
pub fn get_particle_count() -> u32 {
    with_runner(|r| r.field().len() as u32)
}

// ---- Capacity accessors (read once by the host to size its views) ----

#[wasm_bindgen]
pub fn get_max_circles() -> u32 {
    with_runner(|r| r.surface().max_circles())
}

#[wasm_bindgen]
pub fn get_max_links() -> u32 {
    with_runner(|r| r.surface().max_links())
}

#[wasm_bindgen]
pub fn get_circle_floats() -> u32 {
    CircleInstance::FLOATS as u32
}

#[wasm_bindgen]
pub fn get_link_floats() -> u32 {
    LinkInstance::FLOATS as u32
}

// ---- Link style (uniform across every link of a frame) ----

#[wasm_bindgen]
pub fn get_link_width() -> f32 {
    with_runner(|r| r.config().link_width)
}

#[wasm_bindgen]
pub fn get_link_r() -> f32 {
    with_runner(|r| r.config().link_color().r)
}

#[wasm_bindgen]
pub fn get_link_g() -> f32 {
    with_runner(|r| r.config().link_color().g)
}

#[wasm_bindgen]
pub fn get_link_b() -> f32 {
    with_runner(|r| r.config().link_color().b)
}
