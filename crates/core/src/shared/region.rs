/// Vertical gap between a face box and its label baseline.
pub const LABEL_OFFSET: i32 = 10;

/// An axis-aligned face box in frame pixel coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Region {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Region {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    pub fn area(&self) -> i64 {
        self.width.max(0) as i64 * self.height.max(0) as i64
    }

    /// Bottom-left origin of the text label drawn above the box.
    ///
    /// May be negative for faces touching the top edge; the renderer clips.
    pub fn label_origin(&self) -> (i32, i32) {
        (self.x, self.y - LABEL_OFFSET)
    }

    /// Intersects the region with a `frame_width` x `frame_height` frame.
    ///
    /// Returns `None` when nothing of the region lies inside the frame.
    pub fn clamped(&self, frame_width: i32, frame_height: i32) -> Option<Region> {
        let x1 = self.x.max(0);
        let y1 = self.y.max(0);
        let x2 = self.right().min(frame_width);
        let y2 = self.bottom().min(frame_height);
        if x2 <= x1 || y2 <= y1 {
            return None;
        }
        Some(Region::new(x1, y1, x2 - x1, y2 - y1))
    }
}
