//! Rect Cascade core crate.
//!
//! Renders a fixed chain of nested, centred rectangles on a full-viewport
//! canvas. A pointer press (or `trigger_cycle()` from JS) animates one
//! rectangle at a time between fully open and fully collapsed; each finished
//! leg hands the baton to the next rectangle along the chain, and the sweep
//! reverses at either end so activations ping-pong across the whole stack.
//!
//! The animation state machine (`anim`, `chain`, `traversal`, `ticker`) is
//! pure Rust and runs under native `cargo test`; only `stage` touches the
//! browser.

use wasm_bindgen::prelude::*;

pub mod anim;
pub mod chain;
pub mod ticker;
pub mod traversal;

mod stage;

// Optional small allocator for size (feature gated)
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

// -----------------------------------------------------------------------------
// Stage configuration
// -----------------------------------------------------------------------------

/// Construction-time tuning for the stage. One instance is created at startup
/// and never changes afterwards; there is deliberately no runtime
/// configuration surface.
#[derive(Clone, Copy, Debug)]
pub struct StageConfig {
    /// Number of rectangles in the chain.
    pub node_count: usize,
    /// Interval between animation ticks, in milliseconds.
    pub tick_period_ms: i32,
    /// Progress added to the animating rectangle per tick.
    pub step_size: f64,
    /// Distance from the resting endpoint past which a leg counts as done.
    pub completion_threshold: f64,
}

impl Default for StageConfig {
    fn default() -> Self {
        Self {
            node_count: 5,
            tick_period_ms: 50,
            step_size: 0.1,
            completion_threshold: 1.0,
        }
    }
}

// -----------------------------------------------------------------------------
// Unified entrypoint
// -----------------------------------------------------------------------------

/// Mounts the stage canvas, renders the resting chain, and wires the pointer
/// listener.
#[wasm_bindgen]
pub fn start_stage() -> Result<(), JsValue> {
    stage::mount(StageConfig::default())
}

/// Programmatic equivalent of a pointer press on the canvas. Ignored while a
/// leg is already animating, exactly like a press.
#[wasm_bindgen]
pub fn trigger_cycle() {
    stage::activate();
}
