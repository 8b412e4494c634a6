pub mod people;

#[cfg(feature = "cli")]
pub mod cli;

#[cfg(feature = "cli")]
pub use cli::{CandlesArgs, CliConfig, Command, TotalArgs};
