pub mod config;
pub mod handler;
pub mod http;
pub mod models;
pub mod utils;
