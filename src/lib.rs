// Crate root library declaration and module exports.
pub mod builder;
pub mod cli;
pub mod config;
pub mod context;
pub mod error;
pub mod export;
pub mod loader;
pub mod model;
pub mod parser;
pub mod pipeline;

pub use error::ScheduleError;
