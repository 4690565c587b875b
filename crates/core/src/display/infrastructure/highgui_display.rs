use opencv::highgui;

use crate::display::domain::frame_display::FrameDisplay;
use crate::display::domain::key::Key;
use crate::overlay::domain::overlay::Overlay;
use crate::overlay::infrastructure::opencv_painter::paint;
use crate::shared::frame::Frame;
use crate::shared::mat_conversion::frame_to_bgr_mat;

/// Desktop window via OpenCV's HighGUI.
///
/// The window is created on the first `show`, so a camera that fails to
/// open never flashes an empty window.
pub struct HighGuiDisplay {
    title: String,
    window_open: bool,
}

impl HighGuiDisplay {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            window_open: false,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }
}

impl FrameDisplay for HighGuiDisplay {
    fn show(&mut self, frame: &Frame, overlay: &Overlay) -> Result<(), Box<dyn std::error::Error>> {
        if !self.window_open {
            highgui::named_window(&self.title, highgui::WINDOW_AUTOSIZE)?;
            self.window_open = true;
        }
        let mut canvas = frame_to_bgr_mat(frame)?;
        paint(&mut canvas, overlay)?;
        highgui::imshow(&self.title, &canvas)?;
        Ok(())
    }

    fn poll_key(&mut self, delay_ms: i32) -> Result<Option<Key>, Box<dyn std::error::Error>> {
        // wait_key also pumps the window's event loop, so it runs every frame
        let code = highgui::wait_key(delay_ms)?;
        Ok(Key::from_code(code))
    }

    fn close(&mut self) {
        if !self.window_open {
            return;
        }
        self.window_open = false;
        if let Err(e) = highgui::destroy_window(&self.title) {
            log::warn!("Failed to close window '{}': {e}", self.title);
        }
    }
}

impl Drop for HighGuiDisplay {
    fn drop(&mut self) {
        self.close();
    }
}
