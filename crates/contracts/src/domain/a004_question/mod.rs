pub mod aggregate;

pub use aggregate::{seed, ChartType, Question};
