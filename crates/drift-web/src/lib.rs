#![cfg(target_arch = "wasm32")]

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use drift_core::{
    CameraRig, FieldParams, FrameGate, InitOutcome, LoopState, ParticleField, PointerState,
    ResizeDebouncer, RunPhase, FRAME_DIVISOR, RESIZE_QUIET_MS,
};
use instant::Instant;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

mod constants;
mod dom;
mod events;
mod frame;
mod render;

thread_local! {
    // One background per page; these let the JS exports observe and stop it.
    static LOOP_HANDLE: RefCell<Option<Rc<LoopState>>> = RefCell::new(None);
    static BOOT_OUTCOME: Cell<Option<InitOutcome>> = Cell::new(None);
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("drift-web starting");

    spawn_local(async move {
        match init().await {
            Ok(outcome) => {
                BOOT_OUTCOME.with(|cell| cell.set(Some(outcome)));
                match outcome {
                    InitOutcome::Started => log::info!("[boot] background running"),
                    InitOutcome::SkippedReducedMotion => {
                        log::info!("[boot] reduced motion preferred; background disabled")
                    }
                    InitOutcome::SkippedMissingSurface => {
                        log::info!(
                            "[boot] no #{} canvas on this page; background disabled",
                            constants::CANVAS_ID
                        )
                    }
                }
            }
            Err(e) => log::error!("init error: {:?}", e),
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<InitOutcome> {
    let (window, document) =
        dom::window_document().ok_or_else(|| anyhow::anyhow!("no window/document"))?;

    // Startup gate. Both skips return before anything observable happens:
    // no listeners, no GPU work, no loop.
    let reduced_motion = dom::prefers_reduced_motion(&window);
    let canvas = dom::find_canvas(&document, constants::CANVAS_ID);
    let outcome = InitOutcome::resolve(reduced_motion, canvas.is_some());
    let canvas = match canvas {
        Some(canvas) if outcome == InitOutcome::Started => canvas,
        _ => return Ok(outcome),
    };

    dom::sync_canvas_backing_size(&canvas);
    let viewport = dom::viewport_size(&window);
    let seed = js_sys::Date::now() as u64;
    let field = ParticleField::new(&FieldParams::for_viewport(viewport.width, seed));
    log::info!(
        "[field] {} particles for a {:.0}px-wide viewport",
        field.len(),
        viewport.width
    );

    let rig = CameraRig::new(viewport.aspect());
    let pointer = Rc::new(RefCell::new(PointerState::default()));
    let debouncer = Rc::new(RefCell::new(ResizeDebouncer::new(RESIZE_QUIET_MS)));
    let started = Instant::now();

    events::wire_pointermove(pointer.clone());
    events::wire_resize(debouncer.clone(), started);

    let gpu = frame::init_gpu(&canvas, &field).await;

    let run = Rc::new(LoopState::new());
    LOOP_HANDLE.with(|cell| *cell.borrow_mut() = Some(run.clone()));

    let ctx = Rc::new(RefCell::new(frame::FrameContext {
        field,
        rig,
        pointer,
        debouncer,
        gate: FrameGate::new(FRAME_DIVISOR),
        started,
        canvas,
        gpu,
    }));
    frame::start_loop(ctx, run);

    Ok(outcome)
}

/// Stop the background loop; it will never reschedule again. Returns true
/// when a running loop was told to stop.
#[wasm_bindgen]
pub fn stop_background() -> bool {
    LOOP_HANDLE.with(|cell| match cell.borrow().as_ref() {
        Some(run) => {
            let was_running = run.is_running();
            run.stop();
            was_running
        }
        None => false,
    })
}

/// Lifecycle report for the host page: "starting", "running", "stopped",
/// "idle", or one of the two skip reasons.
#[wasm_bindgen]
pub fn background_status() -> String {
    match BOOT_OUTCOME.with(|cell| cell.get()) {
        None => "starting".to_string(),
        Some(InitOutcome::SkippedReducedMotion) => "skipped-reduced-motion".to_string(),
        Some(InitOutcome::SkippedMissingSurface) => "skipped-missing-surface".to_string(),
        Some(InitOutcome::Started) => LOOP_HANDLE.with(|cell| {
            match cell.borrow().as_ref().map(|run| run.phase()) {
                Some(RunPhase::Running) => "running",
                Some(RunPhase::Stopped) => "stopped",
                Some(RunPhase::Idle) | None => "idle",
            }
            .to_string()
        }),
    }
}
