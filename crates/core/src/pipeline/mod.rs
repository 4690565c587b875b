pub mod light_monitor_use_case;
pub mod session_logger;
