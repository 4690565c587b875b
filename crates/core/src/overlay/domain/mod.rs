pub mod overlay;
pub mod overlay_builder;
