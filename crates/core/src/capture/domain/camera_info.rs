/// What the capture backend negotiated when the camera opened.
#[derive(Clone, Debug, PartialEq)]
pub struct CameraInfo {
    pub device: i32,
    pub width: u32,
    pub height: u32,
    /// Reported frame rate; 0.0 when the backend doesn't say.
    pub fps: f64,
}
