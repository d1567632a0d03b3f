//! CLI command implementations.
//!
//! Each subcommand has its own module with argument definitions and handlers.
//!
//! # Command Modules
//!
//! - [`search`] - Multi-criteria airport search
//! - [`lookup`] - Single airport by ICAO or IATA code
//! - [`list`] - Known values of a grouping field
//! - [`measure`] - Distance and bearings between two places
//! - [`parse`] - Coordinate text parsing

pub mod common;
pub mod list;
pub mod lookup;
pub mod measure;
pub mod parse;
pub mod search;
