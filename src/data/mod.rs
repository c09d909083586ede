pub mod derivative;
pub mod draw;
pub mod grid;
pub mod hotkeys;
pub mod integral;
pub mod mapper;
pub mod session;
