use crate::status::domain::light_status::LightStatus;
use crate::status::domain::light_switch::LightSwitch;

/// Light switch that only logs: each change of status is reported once.
#[derive(Default)]
pub struct LoggingLightSwitch {
    current: Option<LightStatus>,
    transitions: usize,
}

impl LoggingLightSwitch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last applied status, `None` before the first frame.
    pub fn current(&self) -> Option<LightStatus> {
        self.current
    }

    /// Number of status changes seen, counting the first application.
    pub fn transitions(&self) -> usize {
        self.transitions
    }
}

impl LightSwitch for LoggingLightSwitch {
    fn apply(&mut self, status: LightStatus) -> Result<(), Box<dyn std::error::Error>> {
        if self.current != Some(status) {
            log::info!("Light {status}");
            self.current = Some(status);
            self.transitions += 1;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_unset() {
        let switch = LoggingLightSwitch::new();
        assert!(switch.current().is_none());
        assert_eq!(switch.transitions(), 0);
    }

    #[test]
    fn test_first_apply_is_a_transition() {
        let mut switch = LoggingLightSwitch::new();
        switch.apply(LightStatus::Off).unwrap();
        assert_eq!(switch.current(), Some(LightStatus::Off));
        assert_eq!(switch.transitions(), 1);
    }

    #[test]
    fn test_repeated_status_is_not_a_transition() {
        let mut switch = LoggingLightSwitch::new();
        for _ in 0..5 {
            switch.apply(LightStatus::On).unwrap();
        }
        assert_eq!(switch.transitions(), 1);
    }

    #[test]
    fn test_counts_each_change() {
        let mut switch = LoggingLightSwitch::new();
        let sequence = [
            LightStatus::Off,
            LightStatus::Off,
            LightStatus::On,
            LightStatus::On,
            LightStatus::Off,
        ];
        for status in sequence {
            switch.apply(status).unwrap();
        }
        assert_eq!(switch.transitions(), 3);
        assert_eq!(switch.current(), Some(LightStatus::Off));
    }
}
