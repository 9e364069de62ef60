pub mod api;
pub mod client;
pub mod commands;
pub mod config;
pub mod panel;
pub mod wallet;
