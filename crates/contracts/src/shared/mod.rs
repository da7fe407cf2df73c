pub mod config;
pub mod error;
pub mod list_view;
