// Browser-only constants.

/// Canvas element the background binds to. Absence is a silent skip, so
/// pages without the canvas pay nothing.
pub const CANVAS_ID: &str = "drift-canvas";

/// Media query consulted once at startup.
pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";
