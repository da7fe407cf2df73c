pub mod aggregate;

pub use aggregate::{seed, DataSet};
