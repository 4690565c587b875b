use std::time::Instant;

use thiserror::Error;

use crate::capture::domain::capture_error::CaptureError;
use crate::capture::domain::frame_source::FrameSource;
use crate::detection::domain::face_detector::FaceDetector;
use crate::display::domain::frame_display::FrameDisplay;
use crate::overlay::domain::overlay_builder::OverlayBuilder;
use crate::pipeline::session_logger::SessionLogger;
use crate::shared::constants::KEY_POLL_DELAY_MS;
use crate::status::domain::light_status::LightStatus;
use crate::status::domain::light_switch::LightSwitch;

#[derive(Error, Debug)]
pub enum MonitorError {
    #[error(transparent)]
    Capture(#[from] CaptureError),
    #[error("face detection failed: {0}")]
    Detection(String),
    #[error("display failed: {0}")]
    Display(String),
    #[error("light switch failed: {0}")]
    Switch(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StopReason {
    /// `q` or `Q` pressed in the window.
    UserQuit,
    /// The configured frame limit was reached.
    FrameLimit,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MonitorReport {
    pub frames: usize,
    pub frames_with_faces: usize,
    pub stop_reason: StopReason,
}

/// Live monitoring loop: capture → detect → switch → annotate → display.
///
/// Each iteration is independent; the light status is recomputed from the
/// current frame alone. The source and display are closed on every exit
/// path, including errors.
pub struct LightMonitorUseCase {
    source: Box<dyn FrameSource>,
    detector: Box<dyn FaceDetector>,
    display: Box<dyn FrameDisplay>,
    switch: Box<dyn LightSwitch>,
    logger: Box<dyn SessionLogger>,
    max_frames: Option<usize>,
}

impl LightMonitorUseCase {
    pub fn new(
        source: Box<dyn FrameSource>,
        detector: Box<dyn FaceDetector>,
        display: Box<dyn FrameDisplay>,
        switch: Box<dyn LightSwitch>,
        logger: Box<dyn SessionLogger>,
        max_frames: Option<usize>,
    ) -> Self {
        Self {
            source,
            detector,
            display,
            switch,
            logger,
            max_frames,
        }
    }

    pub fn run(&mut self) -> Result<MonitorReport, MonitorError> {
        let result = self.monitor();
        self.source.close();
        self.display.close();
        self.logger.summary();
        result
    }

    fn monitor(&mut self) -> Result<MonitorReport, MonitorError> {
        let info = self.source.open()?;
        self.logger.info(&format!(
            "Camera {} started ({}x{}). Press 'Q' to quit.",
            info.device, info.width, info.height
        ));

        let mut frames = 0;
        let mut frames_with_faces = 0;

        let stop_reason = loop {
            if self.max_frames.is_some_and(|limit| frames >= limit) {
                break StopReason::FrameLimit;
            }

            let started = Instant::now();
            let frame = self.source.next_frame()?;
            self.logger.timing("capture", elapsed_ms(started));

            let started = Instant::now();
            let regions = self
                .detector
                .detect(&frame)
                .map_err(|e| MonitorError::Detection(e.to_string()))?;
            self.logger.timing("detect", elapsed_ms(started));

            let status = LightStatus::from_face_count(regions.len());
            self.switch
                .apply(status)
                .map_err(|e| MonitorError::Switch(e.to_string()))?;

            let started = Instant::now();
            let overlay = OverlayBuilder::build(
                frame.width() as i32,
                frame.height() as i32,
                &regions,
                status,
            );
            self.display
                .show(&frame, &overlay)
                .map_err(|e| MonitorError::Display(e.to_string()))?;
            self.logger.timing("render", elapsed_ms(started));
            self.logger.frame_status(status, regions.len());

            frames += 1;
            if status.is_on() {
                frames_with_faces += 1;
            }
            self.logger.progress(frames);

            let key = self
                .display
                .poll_key(KEY_POLL_DELAY_MS)
                .map_err(|e| MonitorError::Display(e.to_string()))?;
            if key.is_some_and(|k| k.is_quit()) {
                self.logger.info("Exiting...");
                break StopReason::UserQuit;
            }
        };

        Ok(MonitorReport {
            frames,
            frames_with_faces,
            stop_reason,
        })
    }
}

fn elapsed_ms(started: Instant) -> f64 {
    started.elapsed().as_secs_f64() * 1000.0
}
