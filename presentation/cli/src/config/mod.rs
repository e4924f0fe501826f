pub mod app_config;
pub mod follow_up_config;
pub mod project_config;
