pub mod api_utils;
pub mod client_log;
pub mod components;
pub mod config;
pub mod error;
pub mod icons;
