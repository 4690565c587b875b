use crate::display::domain::frame_display::FrameDisplay;
use crate::display::domain::key::Key;
use crate::overlay::domain::overlay::Overlay;
use crate::shared::frame::Frame;

/// Display for machines without a screen: nothing is drawn and no key is
/// ever pressed.
#[derive(Default)]
pub struct HeadlessDisplay {
    shown: usize,
}

impl HeadlessDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frames_shown(&self) -> usize {
        self.shown
    }
}

impl FrameDisplay for HeadlessDisplay {
    fn show(&mut self, _frame: &Frame, _overlay: &Overlay) -> Result<(), Box<dyn std::error::Error>> {
        self.shown += 1;
        Ok(())
    }

    fn poll_key(&mut self, _delay_ms: i32) -> Result<Option<Key>, Box<dyn std::error::Error>> {
        Ok(None)
    }

    fn close(&mut self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_frames_and_never_reports_keys() {
        let mut display = HeadlessDisplay::new();
        let frame = Frame::new(vec![0u8; 12], 2, 2, 3, 0);
        display.show(&frame, &Overlay::new()).unwrap();
        display.show(&frame, &Overlay::new()).unwrap();
        assert_eq!(display.frames_shown(), 2);
        assert_eq!(display.poll_key(1).unwrap(), None);
    }
}
