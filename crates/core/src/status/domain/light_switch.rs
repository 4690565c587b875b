use crate::status::domain::light_status::LightStatus;

/// Receives the light status computed for every frame.
///
/// Called once per frame, so implementations driving real hardware should
/// act on changes only.
pub trait LightSwitch: Send {
    fn apply(&mut self, status: LightStatus) -> Result<(), Box<dyn std::error::Error>>;
}
