//! Face presence monitoring: a camera loop that detects frontal faces and
//! drives an on/off light status with an annotated preview.

pub mod capture;
pub mod detection;
pub mod display;
pub mod overlay;
pub mod pipeline;
pub mod shared;
pub mod status;
