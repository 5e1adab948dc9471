//! Board commands and seed data

mod get;
pub mod seed;

pub use get::{BoardView, GetBoard, LaneView};
pub use seed::{demo_board, empty_board, SeedKind};
