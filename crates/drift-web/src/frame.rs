//! Per-frame state and the requestAnimationFrame loop.

use std::cell::RefCell;
use std::rc::Rc;

use drift_core::{
    CameraRig, FrameGate, LoopState, ParticleField, PointerState, ResizeDebouncer,
};
use instant::Instant;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::dom;
use crate::render;

/// Everything one animation frame touches, owned by the loop closure.
pub struct FrameContext {
    pub field: ParticleField,
    pub rig: CameraRig,
    pub pointer: Rc<RefCell<PointerState>>,
    pub debouncer: Rc<RefCell<ResizeDebouncer>>,
    pub gate: FrameGate,
    pub started: Instant,
    pub canvas: web::HtmlCanvasElement,
    pub gpu: Option<render::GpuState>,
}

impl FrameContext {
    pub fn frame(&mut self) {
        if !self.gate.tick() {
            // Off-beat callback: reschedule only, no work.
            return;
        }

        let elapsed = self.started.elapsed();
        let now_ms = elapsed.as_secs_f64() * 1000.0;

        if let Some(viewport) = self.debouncer.borrow_mut().fire(now_ms) {
            self.rig.set_aspect(viewport.aspect());
            dom::sync_canvas_backing_size(&self.canvas);
            if let Some(gpu) = &mut self.gpu {
                gpu.resize_if_needed(self.canvas.width(), self.canvas.height());
            }
            log::info!(
                "[resize] viewport {:.0}x{:.0}",
                viewport.width,
                viewport.height
            );
        }

        self.field.step(elapsed.as_secs_f32());
        let pointer = *self.pointer.borrow();
        self.rig.ease_toward(pointer);

        let upload = self.field.take_dirty();
        if let Some(gpu) = &mut self.gpu {
            if let Err(e) = gpu.render(&self.field, &self.rig.camera, upload) {
                log::error!("render error: {:?}", e);
            }
        }
    }
}

/// Build the renderer; on failure the loop still runs, it just draws nothing.
pub async fn init_gpu(
    canvas: &web::HtmlCanvasElement,
    field: &ParticleField,
) -> Option<render::GpuState> {
    match render::GpuState::new(canvas, field).await {
        Ok(gpu) => Some(gpu),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

/// Drive `ctx.frame()` from requestAnimationFrame. The run state is checked
/// before every reschedule; once it leaves Running the chain simply ends.
pub fn start_loop(ctx: Rc<RefCell<FrameContext>>, run: Rc<LoopState>) {
    if !run.begin() {
        return;
    }
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let run_in_tick = run.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if !run_in_tick.is_running() {
            log::info!("[loop] stopped");
            return;
        }
        ctx.borrow_mut().frame();
        if let Some(window) = web::window() {
            let _ = window.request_animation_frame(
                tick_clone.borrow().as_ref().unwrap().as_ref().unchecked_ref(),
            );
        }
    }) as Box<dyn FnMut()>));
    if let Some(window) = web::window() {
        let _ = window
            .request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}
