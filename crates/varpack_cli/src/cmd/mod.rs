mod config;
mod error;
mod file;
mod infos;
pub(crate) mod util;

/// JSON-to-`.vpk` packing command.
pub mod pack;
/// Registered type listing command.
pub mod types;
/// `.vpk` inspection command.
pub mod unpack;

pub(crate) use config::load as load_config;
/// Command error and result types.
pub use error::{CliError, Result};
