pub mod badge;
pub mod select;

pub use badge::{Badge, StatusBadge};
pub use select::StatusSelect;
