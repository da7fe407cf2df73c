pub mod d100_home;

pub use d100_home::ui::HomePage;
