use std::collections::HashMap;
use std::time::Instant;

use crate::status::domain::light_status::LightStatus;

/// Cross-cutting logger for monitor session events.
///
/// Decouples the monitor loop from specific output mechanisms so callers
/// can observe it without changing the orchestration code.
pub trait SessionLogger: Send {
    /// Report how many frames have been processed so far.
    fn progress(&mut self, frames: usize);

    /// Record how long a named stage took for one frame.
    fn timing(&mut self, stage: &str, duration_ms: f64);

    /// Record the light status and face count decided for one frame.
    fn frame_status(&mut self, status: LightStatus, faces: usize);

    /// Log a human-readable status message.
    fn info(&mut self, message: &str);

    /// Emit an end-of-session summary. Default: no-op.
    fn summary(&self) {}
}

/// Silent logger that discards all events. Used by tests.
pub struct NullSessionLogger;

impl SessionLogger for NullSessionLogger {
    fn progress(&mut self, _frames: usize) {}
    fn timing(&mut self, _stage: &str, _duration_ms: f64) {}
    fn frame_status(&mut self, _status: LightStatus, _faces: usize) {}
    fn info(&mut self, _message: &str) {}
}

/// Light-on frames, face totals and switch count for one session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LightTally {
    pub frames: usize,
    pub frames_on: usize,
    pub faces: usize,
    pub switches: usize,
    last: Option<LightStatus>,
}

impl LightTally {
    pub fn record(&mut self, status: LightStatus, faces: usize) {
        self.frames += 1;
        self.faces += faces;
        if status.is_on() {
            self.frames_on += 1;
        }
        if self.last.is_some_and(|last| last != status) {
            self.switches += 1;
        }
        self.last = Some(status);
    }

    /// Share of frames with the light on, in percent.
    pub fn on_percent(&self) -> f64 {
        if self.frames == 0 {
            0.0
        } else {
            self.frames_on as f64 / self.frames as f64 * 100.0
        }
    }

    pub fn faces_per_frame(&self) -> f64 {
        if self.frames == 0 {
            0.0
        } else {
            self.faces as f64 / self.frames as f64
        }
    }
}

/// CLI-oriented logger that tracks per-stage timing and light statistics
/// and reports a summary when the session ends.
///
/// Progress output is throttled to every `throttle_frames` frames.
pub struct StdoutSessionLogger {
    throttle_frames: usize,
    timings: HashMap<String, Vec<f64>>,
    tally: LightTally,
    start_time: Instant,
}

impl StdoutSessionLogger {
    pub fn new(throttle_frames: usize) -> Self {
        Self {
            throttle_frames: throttle_frames.max(1),
            timings: HashMap::new(),
            tally: LightTally::default(),
            start_time: Instant::now(),
        }
    }

    /// Returns the formatted summary string, or `None` before the first frame.
    pub fn summary_string(&self) -> Option<String> {
        let tally = &self.tally;
        if tally.frames == 0 {
            return None;
        }

        let elapsed_s = self.start_time.elapsed().as_secs_f64();
        let mut lines = vec![
            format!(
                "Session summary ({} frames, {elapsed_s:.1}s):",
                tally.frames
            ),
            format!(
                "  Light ON: {}/{} frames ({:.1}%), {} switch(es)",
                tally.frames_on,
                tally.frames,
                tally.on_percent(),
                tally.switches
            ),
            format!("  Faces per frame: {:.2}", tally.faces_per_frame()),
        ];

        let mut stages: Vec<_> = self.timings.keys().collect();
        stages.sort();
        for stage in stages {
            let durations = &self.timings[stage];
            let avg_ms = durations.iter().sum::<f64>() / durations.len() as f64;
            lines.push(format!("  {stage:8}: avg {avg_ms:6.1}ms"));
        }

        if elapsed_s > 0.0 {
            lines.push(format!(
                "  Throughput: {:.1} fps",
                tally.frames as f64 / elapsed_s
            ));
        }

        Some(lines.join("\n"))
    }

    pub fn timings_for(&self, stage: &str) -> Option<&[f64]> {
        self.timings.get(stage).map(|v| v.as_slice())
    }

    pub fn tally(&self) -> &LightTally {
        &self.tally
    }
}

impl Default for StdoutSessionLogger {
    fn default() -> Self {
        Self::new(100)
    }
}

impl SessionLogger for StdoutSessionLogger {
    fn progress(&mut self, frames: usize) {
        if frames % self.throttle_frames == 0 {
            log::debug!(
                "Processed {frames} frames, light on {:.1}%",
                self.tally.on_percent()
            );
        }
    }

    fn timing(&mut self, stage: &str, duration_ms: f64) {
        self.timings
            .entry(stage.to_string())
            .or_default()
            .push(duration_ms);
    }

    fn frame_status(&mut self, status: LightStatus, faces: usize) {
        self.tally.record(status, faces);
    }

    fn info(&mut self, message: &str) {
        log::info!("{message}");
    }

    fn summary(&self) {
        if let Some(text) = self.summary_string() {
            log::info!("\n\n{text}");
        }
    }
}
