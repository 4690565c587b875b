use opencv::core::{self, Mat, Scalar, CV_8UC1, CV_8UC3};
use opencv::imgproc;
use opencv::prelude::*;

use crate::shared::frame::Frame;

/// Converts a camera `Mat` (BGR, or single-channel gray) into an RGB `Frame`.
pub fn mat_to_frame(mat: &Mat, index: usize) -> opencv::Result<Frame> {
    let code = match mat.channels() {
        1 => imgproc::COLOR_GRAY2RGB,
        3 => imgproc::COLOR_BGR2RGB,
        4 => imgproc::COLOR_BGRA2RGB,
        n => {
            return Err(opencv::Error::new(
                core::StsBadArg,
                format!("unsupported channel count: {n}"),
            ))
        }
    };
    let mut rgb = Mat::default();
    imgproc::cvt_color(mat, &mut rgb, code, 0)?;

    let width = rgb.cols() as u32;
    let height = rgb.rows() as u32;
    let data = rgb.data_bytes()?.to_vec();
    Ok(Frame::new(data, width, height, 3, index))
}

/// Copies a `Frame` into a `Mat` with the frame's own channel layout.
fn frame_to_raw_mat(frame: &Frame) -> opencv::Result<Mat> {
    let typ = match frame.channels() {
        1 => CV_8UC1,
        3 => CV_8UC3,
        n => {
            return Err(opencv::Error::new(
                core::StsBadArg,
                format!("unsupported channel count: {n}"),
            ))
        }
    };
    let mut mat = Mat::new_rows_cols_with_default(
        frame.height() as i32,
        frame.width() as i32,
        typ,
        Scalar::all(0.0),
    )?;
    mat.data_bytes_mut()?.copy_from_slice(frame.data());
    Ok(mat)
}

/// Converts an RGB `Frame` into a BGR `Mat` ready for drawing and display.
pub fn frame_to_bgr_mat(frame: &Frame) -> opencv::Result<Mat> {
    let raw = frame_to_raw_mat(frame)?;
    if frame.channels() == 1 {
        let mut bgr = Mat::default();
        imgproc::cvt_color(&raw, &mut bgr, imgproc::COLOR_GRAY2BGR, 0)?;
        return Ok(bgr);
    }
    let mut bgr = Mat::default();
    imgproc::cvt_color(&raw, &mut bgr, imgproc::COLOR_RGB2BGR, 0)?;
    Ok(bgr)
}

/// Converts a `Frame` into a single-channel grayscale `Mat`.
pub fn frame_to_gray_mat(frame: &Frame) -> opencv::Result<Mat> {
    let raw = frame_to_raw_mat(frame)?;
    if frame.channels() == 1 {
        return Ok(raw);
    }
    let mut gray = Mat::default();
    imgproc::cvt_color(&raw, &mut gray, imgproc::COLOR_RGB2GRAY, 0)?;
    Ok(gray)
}
