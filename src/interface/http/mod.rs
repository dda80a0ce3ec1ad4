pub mod api_error;
pub mod auth;
pub mod commands_handler;
