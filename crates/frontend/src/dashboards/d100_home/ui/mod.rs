mod dashboard;

pub use dashboard::HomePage;
