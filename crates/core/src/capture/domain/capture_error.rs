use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CaptureError {
    #[error("Could not open camera {device}. Check if another app is using it.")]
    OpenFailed { device: i32 },
    #[error("Failed to read from camera {device}.")]
    ReadFailed { device: i32 },
    #[error("camera {device} is not open")]
    NotOpen { device: i32 },
    #[error("capture backend error: {0}")]
    Backend(String),
}
