pub mod animation;
pub mod config;
pub mod draw;
pub mod views;
