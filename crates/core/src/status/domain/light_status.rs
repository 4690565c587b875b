use std::fmt;

use crate::shared::color::Rgb;

/// Whether the light should be on for the current frame.
///
/// Derived from a single frame's detections; carries no history.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LightStatus {
    On,
    Off,
}

impl LightStatus {
    pub fn from_face_count(count: usize) -> Self {
        if count > 0 {
            LightStatus::On
        } else {
            LightStatus::Off
        }
    }

    pub fn is_on(self) -> bool {
        self == LightStatus::On
    }

    /// Banner caption.
    pub fn label(self) -> &'static str {
        match self {
            LightStatus::On => "LIGHT: ON",
            LightStatus::Off => "LIGHT: OFF",
        }
    }

    pub fn text_color(self) -> Rgb {
        match self {
            LightStatus::On => Rgb::GREEN,
            LightStatus::Off => Rgb::RED,
        }
    }

    pub fn banner_color(self) -> Rgb {
        match self {
            LightStatus::On => Rgb(0, 60, 0),
            LightStatus::Off => Rgb(80, 0, 0),
        }
    }
}

impl fmt::Display for LightStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LightStatus::On => f.write_str("ON"),
            LightStatus::Off => f.write_str("OFF"),
        }
    }
}
