pub mod api;
pub mod config;
pub mod error;
pub mod story;
pub mod view;
