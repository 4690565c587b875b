use crate::capture::domain::camera_info::CameraInfo;
use crate::capture::domain::capture_error::CaptureError;
use crate::shared::frame::Frame;

/// A live source of frames, typically a camera.
///
/// Reads block until the next frame is available. There is no end of
/// stream: a source that cannot produce a frame reports `ReadFailed`.
pub trait FrameSource: Send {
    /// Opens the device and returns what it negotiated.
    fn open(&mut self) -> Result<CameraInfo, CaptureError>;

    /// Blocks for the next frame.
    fn next_frame(&mut self) -> Result<Frame, CaptureError>;

    /// Releases the device. Safe to call more than once.
    fn close(&mut self);
}
