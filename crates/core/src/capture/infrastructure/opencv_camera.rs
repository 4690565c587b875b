use opencv::core::Mat;
use opencv::prelude::*;
use opencv::videoio::{
    VideoCapture, CAP_ANY, CAP_PROP_FPS, CAP_PROP_FRAME_HEIGHT, CAP_PROP_FRAME_WIDTH,
};

use crate::capture::domain::camera_info::CameraInfo;
use crate::capture::domain::capture_error::CaptureError;
use crate::capture::domain::frame_source::FrameSource;
use crate::shared::frame::Frame;
use crate::shared::mat_conversion::mat_to_frame;

/// Camera capture through OpenCV's `VideoCapture`.
pub struct OpencvCamera {
    device: i32,
    capture: Option<VideoCapture>,
    frame_index: usize,
}

impl OpencvCamera {
    pub fn new(device: i32) -> Self {
        Self {
            device,
            capture: None,
            frame_index: 0,
        }
    }

    fn backend(e: opencv::Error) -> CaptureError {
        CaptureError::Backend(e.to_string())
    }
}

impl FrameSource for OpencvCamera {
    fn open(&mut self) -> Result<CameraInfo, CaptureError> {
        let device = self.device;
        let capture = VideoCapture::new(device, CAP_ANY).map_err(|e| {
            log::debug!("VideoCapture::new({device}) failed: {e}");
            CaptureError::OpenFailed { device }
        })?;
        if !capture.is_opened().map_err(Self::backend)? {
            return Err(CaptureError::OpenFailed { device });
        }

        let info = CameraInfo {
            device,
            width: capture.get(CAP_PROP_FRAME_WIDTH).unwrap_or(0.0) as u32,
            height: capture.get(CAP_PROP_FRAME_HEIGHT).unwrap_or(0.0) as u32,
            fps: capture.get(CAP_PROP_FPS).unwrap_or(0.0),
        };
        log::debug!("Opened camera {device}: {info:?}");
        self.capture = Some(capture);
        self.frame_index = 0;
        Ok(info)
    }

    fn next_frame(&mut self) -> Result<Frame, CaptureError> {
        let device = self.device;
        let capture = self
            .capture
            .as_mut()
            .ok_or(CaptureError::NotOpen { device })?;

        let mut mat = Mat::default();
        let grabbed = capture.read(&mut mat).map_err(Self::backend)?;
        let size = mat.size().map_err(Self::backend)?;
        if !grabbed || size.width <= 0 || size.height <= 0 {
            return Err(CaptureError::ReadFailed { device });
        }

        let frame = mat_to_frame(&mat, self.frame_index).map_err(Self::backend)?;
        self.frame_index += 1;
        Ok(frame)
    }

    fn close(&mut self) {
        if let Some(mut capture) = self.capture.take() {
            if let Err(e) = capture.release() {
                log::warn!("Failed to release camera {}: {e}", self.device);
            }
        }
    }
}

impl Drop for OpencvCamera {
    fn drop(&mut self) {
        self.close();
    }
}
