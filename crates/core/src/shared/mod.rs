pub mod cascade_resolver;
pub mod color;
pub mod constants;
pub mod frame;
#[cfg(feature = "opencv")]
pub mod mat_conversion;
pub mod region;
