pub mod api_utils;
pub mod config;
pub mod date_utils;
pub mod form_utils;
pub mod http;
pub mod icons;
