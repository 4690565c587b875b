use crate::display::domain::key::Key;
use crate::overlay::domain::overlay::Overlay;
use crate::shared::frame::Frame;

/// Presents annotated frames and reports keypresses.
pub trait FrameDisplay: Send {
    /// Shows `frame` with `overlay` painted on top. The frame is not modified.
    fn show(&mut self, frame: &Frame, overlay: &Overlay) -> Result<(), Box<dyn std::error::Error>>;

    /// Waits up to `delay_ms` for a keypress.
    fn poll_key(&mut self, delay_ms: i32) -> Result<Option<Key>, Box<dyn std::error::Error>>;

    /// Tears down any window. Safe to call more than once.
    fn close(&mut self);
}
