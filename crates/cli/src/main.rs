use std::path::PathBuf;
use std::process;

use clap::Parser;
use env_logger::Env;

use smartlight_core::capture::infrastructure::opencv_camera::OpencvCamera;
use smartlight_core::detection::domain::detection_params::{
    DetectionParams, DEFAULT_MIN_NEIGHBORS, DEFAULT_MIN_SIZE, DEFAULT_SCALE_FACTOR,
};
use smartlight_core::detection::infrastructure::haar_cascade_detector::HaarCascadeDetector;
use smartlight_core::display::domain::frame_display::FrameDisplay;
use smartlight_core::display::infrastructure::headless_display::HeadlessDisplay;
use smartlight_core::display::infrastructure::highgui_display::HighGuiDisplay;
use smartlight_core::pipeline::light_monitor_use_case::{LightMonitorUseCase, StopReason};
use smartlight_core::pipeline::session_logger::StdoutSessionLogger;
use smartlight_core::shared::cascade_resolver;
use smartlight_core::shared::constants::{
    CASCADE_NAME, CASCADE_URL, DEFAULT_CAMERA_INDEX, WINDOW_TITLE,
};
use smartlight_core::status::infrastructure::logging_light_switch::LoggingLightSwitch;

/// Turns a light status ON while a face is in front of the camera.
#[derive(Parser, Debug)]
#[command(name = "smartlight")]
struct Cli {
    /// Camera device index.
    #[arg(long, default_value_t = DEFAULT_CAMERA_INDEX)]
    camera: i32,

    /// Haar cascade XML (default: installed or downloaded frontal face cascade).
    #[arg(long)]
    cascade: Option<PathBuf>,

    /// Image pyramid scale step (must be > 1.0).
    #[arg(long, default_value_t = DEFAULT_SCALE_FACTOR)]
    scale_factor: f64,

    /// Neighboring detections required to keep a face.
    #[arg(long, default_value_t = DEFAULT_MIN_NEIGHBORS)]
    min_neighbors: i32,

    /// Smallest face side in pixels.
    #[arg(long, default_value_t = DEFAULT_MIN_SIZE)]
    min_size: i32,

    /// Window title.
    #[arg(long, default_value = WINDOW_TITLE)]
    title: String,

    /// Run without a window; stop with --max-frames or Ctrl-C.
    #[arg(long)]
    headless: bool,

    /// Stop after this many frames.
    #[arg(long)]
    max_frames: Option<usize>,
}

fn main() {
    init_logging();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

/// Lifecycle messages (camera started, light changes, exit) show by default;
/// `RUST_LOG` still overrides the level.
fn init_logging() {
    env_logger::Builder::from_env(default_log_env()).init();
}

fn default_log_env() -> Env<'static> {
    Env::default().default_filter_or("info")
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let params = validate(&cli)?;

    let cascade_path = match cli.cascade {
        Some(path) => path,
        None => cascade_resolver::resolve(
            CASCADE_NAME,
            CASCADE_URL,
            &cascade_resolver::default_search_dirs(),
            Some(Box::new(download_progress)),
        )?,
    };
    log::info!("Using cascade {}", cascade_path.display());
    let detector = HaarCascadeDetector::new(&cascade_path, params)?;

    let display: Box<dyn FrameDisplay> = if cli.headless {
        Box::new(HeadlessDisplay::new())
    } else {
        Box::new(HighGuiDisplay::new(cli.title))
    };

    let mut use_case = LightMonitorUseCase::new(
        Box::new(OpencvCamera::new(cli.camera)),
        Box::new(detector),
        display,
        Box::new(LoggingLightSwitch::new()),
        Box::new(StdoutSessionLogger::default()),
        cli.max_frames,
    );
    let report = use_case.run()?;

    let reason = match report.stop_reason {
        StopReason::UserQuit => "quit requested",
        StopReason::FrameLimit => "frame limit reached",
    };
    log::info!(
        "Program ended cleanly ({reason}): {} frames, {} with faces",
        report.frames,
        report.frames_with_faces
    );
    Ok(())
}

fn validate(cli: &Cli) -> Result<DetectionParams, Box<dyn std::error::Error>> {
    if cli.camera < 0 {
        return Err(format!("Camera index must be non-negative, got {}", cli.camera).into());
    }
    if let Some(path) = &cli.cascade {
        if !path.is_file() {
            return Err(format!("Cascade file not found: {}", path.display()).into());
        }
    }
    if cli.max_frames == Some(0) {
        return Err("Max frames must be positive".into());
    }
    let params = DetectionParams::new(cli.scale_factor, cli.min_neighbors, cli.min_size)?;
    Ok(params)
}

fn download_progress(downloaded: u64, total: u64) {
    if total > 0 {
        let pct = (downloaded as f64 / total as f64 * 100.0) as u32;
        eprint!("\rDownloading face cascade... {pct}%");
        if downloaded >= total {
            eprintln!();
        }
    } else {
        eprint!("\rDownloading face cascade... {downloaded} bytes");
    }
}
