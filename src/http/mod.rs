pub mod app_error;
pub mod health;
pub mod server;
pub mod sessions;
pub mod state;
pub mod views;
