use thiserror::Error;

pub const DEFAULT_SCALE_FACTOR: f64 = 1.1;
pub const DEFAULT_MIN_NEIGHBORS: i32 = 5;
/// Smallest face side, in pixels, worth reporting.
pub const DEFAULT_MIN_SIZE: i32 = 30;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DetectionParamsError {
    #[error("Scale factor must be greater than 1.0, got {0}")]
    ScaleFactor(f64),
    #[error("Min neighbors must be non-negative, got {0}")]
    MinNeighbors(i32),
    #[error("Min size must be a positive number of pixels, got {0}")]
    MinSize(i32),
}

/// Multi-scale sliding-window settings for the cascade classifier.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DetectionParams {
    /// Image pyramid step between scales.
    pub scale_factor: f64,
    /// Overlapping candidates required to keep a detection.
    pub min_neighbors: i32,
    /// Minimum face side length in pixels.
    pub min_size: i32,
}

impl DetectionParams {
    pub fn new(
        scale_factor: f64,
        min_neighbors: i32,
        min_size: i32,
    ) -> Result<Self, DetectionParamsError> {
        let params = Self {
            scale_factor,
            min_neighbors,
            min_size,
        };
        params.validate()?;
        Ok(params)
    }

    pub fn validate(&self) -> Result<(), DetectionParamsError> {
        // `!(x > 1.0)` also rejects NaN
        if !(self.scale_factor > 1.0) {
            return Err(DetectionParamsError::ScaleFactor(self.scale_factor));
        }
        if self.min_neighbors < 0 {
            return Err(DetectionParamsError::MinNeighbors(self.min_neighbors));
        }
        if self.min_size <= 0 {
            return Err(DetectionParamsError::MinSize(self.min_size));
        }
        Ok(())
    }
}

impl Default for DetectionParams {
    fn default() -> Self {
        Self {
            scale_factor: DEFAULT_SCALE_FACTOR,
            min_neighbors: DEFAULT_MIN_NEIGHBORS,
            min_size: DEFAULT_MIN_SIZE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rstest::rstest;

    #[test]
    fn test_defaults() {
        let params = DetectionParams::default();
        assert_relative_eq!(params.scale_factor, 1.1);
        assert_eq!(params.min_neighbors, 5);
        assert_eq!(params.min_size, 30);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_new_accepts_valid_values() {
        let params = DetectionParams::new(1.3, 0, 1).unwrap();
        assert_relative_eq!(params.scale_factor, 1.3);
    }

    #[rstest]
    #[case::scale_one(1.0, 5, 30, DetectionParamsError::ScaleFactor(1.0))]
    #[case::scale_below_one(0.5, 5, 30, DetectionParamsError::ScaleFactor(0.5))]
    #[case::negative_neighbors(1.1, -1, 30, DetectionParamsError::MinNeighbors(-1))]
    #[case::zero_size(1.1, 5, 0, DetectionParamsError::MinSize(0))]
    #[case::negative_size(1.1, 5, -10, DetectionParamsError::MinSize(-10))]
    fn test_new_rejects_invalid_values(
        #[case] scale_factor: f64,
        #[case] min_neighbors: i32,
        #[case] min_size: i32,
        #[case] expected: DetectionParamsError,
    ) {
        assert_eq!(
            DetectionParams::new(scale_factor, min_neighbors, min_size).unwrap_err(),
            expected
        );
    }

    #[test]
    fn test_nan_scale_factor_rejected() {
        assert!(DetectionParams::new(f64::NAN, 5, 30).is_err());
    }
}
