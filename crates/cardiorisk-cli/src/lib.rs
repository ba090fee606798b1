//! cardiorisk-cli
//!
//! Config file handling and the subcommand bodies behind the `cardiorisk`
//! binary.

pub mod commands;
pub mod config;
