pub mod cache_bust;
pub mod camera;
pub mod config;
pub mod network;
pub mod status;
