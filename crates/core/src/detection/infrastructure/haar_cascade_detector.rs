use std::path::Path;

use opencv::core::{Rect, Size, Vector};
use opencv::objdetect::CascadeClassifier;
use opencv::prelude::*;

use crate::detection::domain::detection_params::DetectionParams;
use crate::detection::domain::face_detector::FaceDetector;
use crate::shared::frame::Frame;
use crate::shared::mat_conversion::frame_to_gray_mat;
use crate::shared::region::Region;

/// Frontal face detection with an OpenCV Haar cascade.
///
/// The classifier is used as shipped; detection runs on a grayscale copy
/// of each frame.
pub struct HaarCascadeDetector {
    classifier: CascadeClassifier,
    params: DetectionParams,
}

impl HaarCascadeDetector {
    pub fn new(
        cascade_path: &Path,
        params: DetectionParams,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        params.validate()?;
        let path = cascade_path
            .to_str()
            .ok_or_else(|| format!("Cascade path is not valid UTF-8: {}", cascade_path.display()))?;
        let classifier = CascadeClassifier::new(path)?;
        if classifier.empty()? {
            return Err(format!("Failed to load cascade from {}", cascade_path.display()).into());
        }
        log::debug!("Loaded cascade {}", cascade_path.display());
        Ok(Self { classifier, params })
    }
}

impl FaceDetector for HaarCascadeDetector {
    fn detect(&mut self, frame: &Frame) -> Result<Vec<Region>, Box<dyn std::error::Error>> {
        let gray = frame_to_gray_mat(frame)?;
        let mut faces: Vector<Rect> = Vector::new();
        let min = self.params.min_size;
        self.classifier.detect_multi_scale(
            &gray,
            &mut faces,
            self.params.scale_factor,
            self.params.min_neighbors,
            0,
            Size::new(min, min),
            Size::default(),
        )?;

        let regions: Vec<Region> = faces
            .iter()
            .map(|r| Region::new(r.x, r.y, r.width, r.height))
            .collect();
        log::debug!("Frame {}: {} face(s)", frame.index(), regions.len());
        Ok(regions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::cascade_resolver::{default_search_dirs, find_local};
    use crate::shared::constants::CASCADE_NAME;
    use std::path::PathBuf;

    /// Locally installed cascade, if any. Tests needing it return early
    /// otherwise rather than hitting the network.
    fn installed_cascade() -> Option<PathBuf> {
        find_local(CASCADE_NAME, &default_search_dirs())
    }

    #[test]
    fn test_missing_cascade_file_is_error() {
        let result = HaarCascadeDetector::new(
            Path::new("/nonexistent/cascade.xml"),
            DetectionParams::default(),
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_params_rejected_before_loading() {
        let params = DetectionParams {
            scale_factor: 1.0,
            ..DetectionParams::default()
        };
        let result = HaarCascadeDetector::new(Path::new("/nonexistent/cascade.xml"), params);
        let msg = result.err().unwrap().to_string();
        assert!(msg.contains("Scale factor"));
    }

    #[test]
    fn test_blank_frame_has_no_faces() {
        let Some(path) = installed_cascade() else {
            return;
        };
        let mut detector = HaarCascadeDetector::new(&path, DetectionParams::default()).unwrap();
        let frame = Frame::new(vec![127u8; 320 * 240 * 3], 320, 240, 3, 0);
        assert!(detector.detect(&frame).unwrap().is_empty());
    }

    #[test]
    fn test_frame_smaller_than_min_size_has_no_faces() {
        let Some(path) = installed_cascade() else {
            return;
        };
        let mut detector = HaarCascadeDetector::new(&path, DetectionParams::default()).unwrap();
        let frame = Frame::new(vec![0u8; 10 * 10 * 3], 10, 10, 3, 0);
        assert!(detector.detect(&frame).unwrap().is_empty());
    }
}
