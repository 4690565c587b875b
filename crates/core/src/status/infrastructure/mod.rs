pub mod logging_light_switch;
