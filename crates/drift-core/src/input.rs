/// Viewport dimensions in the host's logical pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn aspect(&self) -> f32 {
        self.width / self.height.max(1.0)
    }
}

/// Most recent pointer position, normalized so x and y sit in [-1, 1] with
/// y pointing up. Events between executed frames overwrite each other; the
/// frame step only ever sees the newest sample.
#[derive(Default, Clone, Copy, Debug, PartialEq)]
pub struct PointerState {
    pub x: f32,
    pub y: f32,
}

impl PointerState {
    /// Map host client coordinates (origin top-left, y down) into [-1, 1].
    pub fn from_client(client_x: f32, client_y: f32, viewport: Viewport) -> Self {
        let w = viewport.width.max(1.0);
        let h = viewport.height.max(1.0);
        Self {
            x: (client_x / w) * 2.0 - 1.0,
            y: -(client_y / h) * 2.0 + 1.0,
        }
    }
}
