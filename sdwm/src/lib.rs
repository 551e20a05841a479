//! The sdwm binary's configuration and process setup.
mod config;
pub mod utils;

pub use config::*;
