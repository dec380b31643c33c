pub mod commands;
pub mod telemetry;

pub use commands::{execute, Command, Outcome, ParseError};
