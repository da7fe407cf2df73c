pub mod aggregate;

pub use aggregate::{seed, DataSource};
