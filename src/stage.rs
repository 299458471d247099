//! Canvas stage glue: surface setup, pointer listener, and the interval
//! clock. Every decision about what animates lives in the pure `anim` /
//! `chain` / `traversal` modules; this file only pushes pixels and timer
//! handles through web-sys.

use std::cell::RefCell;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, window};

use crate::StageConfig;
use crate::anim::{CycleStart, Step};
use crate::chain::RectChain;
use crate::ticker::Ticker;
use crate::traversal::Traversal;

const BACKGROUND: &str = "#212121";
const RECT_COLOR: &str = "#c3ae4d";
const CANVAS_ID: &str = "rc-stage-canvas";

/// Runtime stage state: the surface plus the animation core.
struct Stage {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    cfg: StageConfig,
    chain: RectChain,
    traversal: Traversal,
    ticker: Ticker,
}

// RefCell::new isn't const on this toolchain; allow Clippy lint until a const initializer is feasible.
thread_local! {
    static STAGE: RefCell<Option<Stage>> = RefCell::new(None);
    // The tick closure is created once at mount and reused for every interval,
    // so repeated activations never leak a closure per cycle.
    static TICK_CB: RefCell<Option<Closure<dyn FnMut()>>> = RefCell::new(None);
}

/// Creates (or reuses) the stage canvas, sizes it to the viewport once,
/// renders the resting chain, and wires the pointer listener.
pub(crate) fn mount(cfg: StageConfig) -> Result<(), JsValue> {
    let win = window().ok_or_else(|| JsValue::from_str("no window"))?;
    let doc = win
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    // Viewport dimensions are read once; the surface keeps this size for the
    // process lifetime.
    let width = win.inner_width()?.as_f64().unwrap_or(640.0);
    let height = win.inner_height()?.as_f64().unwrap_or(480.0);

    let canvas: HtmlCanvasElement = if let Some(el) = doc.get_element_by_id(CANVAS_ID) {
        el.dyn_into()?
    } else {
        let c: HtmlCanvasElement = doc.create_element("canvas")?.dyn_into()?;
        c.set_id(CANVAS_ID);
        doc.body()
            .ok_or_else(|| JsValue::from_str("no body"))?
            .append_child(&c)?;
        c
    };
    canvas.set_width(width as u32);
    canvas.set_height(height as u32);
    let ctx: CanvasRenderingContext2d = canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("no 2d context"))?
        .dyn_into()?;

    let stage = Stage {
        canvas: canvas.clone(),
        ctx,
        cfg,
        chain: RectChain::new(cfg.node_count),
        traversal: Traversal::new(),
        ticker: Ticker::new(),
    };
    render(&stage);
    STAGE.with(|cell| cell.replace(Some(stage)));

    install_tick_callback();

    // Pointer press is the single activation trigger.
    {
        let closure = Closure::wrap(Box::new(move |_evt: web_sys::MouseEvent| {
            activate();
        }) as Box<dyn FnMut(_)>);
        canvas.add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    Ok(())
}

/// Activation entry shared by the pointer listener and the JS-facing
/// `trigger_cycle`. Begins a leg on the active node and arms the clock; a
/// press while a leg is running is ignored.
pub(crate) fn activate() {
    STAGE.with(|cell| {
        if let Some(stage) = cell.borrow_mut().as_mut() {
            if stage.traversal.begin(&mut stage.chain) == CycleStart::Started {
                start_ticker(stage);
            }
        }
    });
}

fn install_tick_callback() {
    TICK_CB.with(|cell| {
        if cell.borrow().is_some() {
            return;
        }
        let closure = Closure::wrap(Box::new(on_tick) as Box<dyn FnMut()>);
        *cell.borrow_mut() = Some(closure);
    });
}

fn start_ticker(stage: &mut Stage) {
    let period = stage.cfg.tick_period_ms;
    if let Some(win) = window() {
        TICK_CB.with(|cell| {
            if let Some(cb) = cell.borrow().as_ref() {
                stage.ticker.start_with(|| {
                    win.set_interval_with_callback_and_timeout_and_arguments_0(
                        cb.as_ref().unchecked_ref(),
                        period,
                    )
                    .unwrap_or(0)
                });
            }
        });
    }
}

fn on_tick() {
    STAGE.with(|cell| {
        if let Some(stage) = cell.borrow_mut().as_mut() {
            let outcome = stage.traversal.tick(
                &mut stage.chain,
                stage.cfg.step_size,
                stage.cfg.completion_threshold,
            );
            render(stage);
            if outcome == Step::Completed {
                stage.ticker.stop_with(|handle| {
                    if let Some(win) = window() {
                        win.clear_interval_with_handle(handle);
                    }
                });
            }
        }
    });
}

/// Full redraw: background clear, then one fill per chain node back to front
/// so the front node lands topmost.
fn render(stage: &Stage) {
    let width = stage.canvas.width() as f64;
    let height = stage.canvas.height() as f64;
    stage.ctx.set_fill_style_str(BACKGROUND);
    stage.ctx.fill_rect(0.0, 0.0, width, height);

    stage.ctx.set_fill_style_str(RECT_COLOR);
    for spec in stage.chain.draw_list(width, height) {
        stage.ctx.save();
        stage.ctx.set_global_alpha(spec.alpha);
        stage.ctx.translate(width / 2.0, height / 2.0).ok();
        stage.ctx.fill_rect(spec.x, spec.y, spec.w, spec.h);
        stage.ctx.restore();
    }
}
