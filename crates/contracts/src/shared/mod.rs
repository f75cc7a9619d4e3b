pub mod action_status;
pub mod api_error;
pub mod number_format;
pub mod validation;
