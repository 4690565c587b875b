pub mod light_status;
pub mod light_switch;
