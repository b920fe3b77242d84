//! Thin DOM helpers; everything here degrades to a no-op or a default when
//! the browser API is unavailable.

use drift_core::{clamped_pixel_ratio, Viewport};
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::constants::REDUCED_MOTION_QUERY;

#[inline]
pub fn window_document() -> Option<(web::Window, web::Document)> {
    let window = web::window()?;
    let document = window.document()?;
    Some((window, document))
}

/// Host accessibility signal; defaults to false when the query fails.
pub fn prefers_reduced_motion(window: &web::Window) -> bool {
    window
        .match_media(REDUCED_MOTION_QUERY)
        .ok()
        .flatten()
        .map(|mql| mql.matches())
        .unwrap_or(false)
}

/// Find the target canvas. `None` is the expected missing-surface skip.
pub fn find_canvas(document: &web::Document, id: &str) -> Option<web::HtmlCanvasElement> {
    document
        .get_element_by_id(id)?
        .dyn_into::<web::HtmlCanvasElement>()
        .ok()
}

/// Viewport size in CSS pixels.
pub fn viewport_size(window: &web::Window) -> Viewport {
    let width = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let height = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    Viewport::new(width as f32, height as f32)
}

/// Match the canvas backing store to its CSS size, with the device pixel
/// ratio capped so dense displays do not quadruple the fill cost.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(window) = web::window() {
        let ratio = clamped_pixel_ratio(window.device_pixel_ratio());
        let rect = canvas.get_bounding_client_rect();
        let width = (rect.width() * ratio) as u32;
        let height = (rect.height() * ratio) as u32;
        canvas.set_width(width.max(1));
        canvas.set_height(height.max(1));
    }
}
