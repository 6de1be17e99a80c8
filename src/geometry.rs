//! Geometry primitives and hit testing for drag targets
//!
//! The engine never measures anything itself; the host reports element
//! geometry (pane bounds, tab chip bounds, pointer position) and these
//! helpers turn it into drop targets.

/// Rectangle in the host's coordinate space
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn contains(&self, px: f32, py: f32) -> bool {
        px >= self.x && px < self.x + self.width && py >= self.y && py < self.y + self.height
    }

    pub fn mid_x(&self) -> f32 {
        self.x + self.width / 2.0
    }
}

/// Insertion slot for a drop over a tab chip: before the chip when the
/// pointer sits left of its horizontal midpoint, after it otherwise.
/// Re-evaluated on every hover tick since the pointer moves continuously.
pub fn insertion_index(tab_index: usize, pointer_x: f32, chip: &Rect) -> usize {
    if pointer_x < chip.mid_x() {
        tab_index
    } else {
        tab_index + 1
    }
}

/// Index of the pane whose bounds contain the point, if any
pub fn pane_at_point(bounds: &[Rect], x: f32, y: f32) -> Option<usize> {
    bounds.iter().position(|rect| rect.contains(x, y))
}
