pub const CASCADE_NAME: &str = "haarcascade_frontalface_default.xml";
pub const CASCADE_URL: &str =
    "https://raw.githubusercontent.com/opencv/opencv/4.x/data/haarcascades/haarcascade_frontalface_default.xml";

/// Directories where distribution OpenCV packages install their cascades.
pub const CASCADE_SEARCH_DIRS: &[&str] = &[
    "/usr/share/opencv4/haarcascades",
    "/usr/local/share/opencv4/haarcascades",
    "/opt/homebrew/share/opencv4/haarcascades",
    "/usr/share/opencv/haarcascades",
    "/usr/local/share/opencv/haarcascades",
];

/// Environment variable pointing at an OpenCV `data` directory.
pub const OPENCV_DATA_DIR_ENV: &str = "OPENCV_DATA_DIR";

pub const DEFAULT_CAMERA_INDEX: i32 = 0;
pub const WINDOW_TITLE: &str = "Smart Light Control System";

/// Milliseconds to wait for a keypress after each displayed frame.
pub const KEY_POLL_DELAY_MS: i32 = 1;
