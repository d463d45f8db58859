pub mod app;
pub mod config;
pub mod greeting;
pub mod message;
pub mod reply;
pub mod session;
pub mod setup;
