pub mod canvas;
pub mod comet;
pub mod commands;
pub mod error;
pub mod utils;

pub use canvas::Canvas;
pub use error::IconError;
