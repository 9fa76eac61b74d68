pub mod cli;
pub mod common;
pub mod config;
pub mod em;
pub mod error;
pub mod io;
pub mod mocks;
pub mod params;
pub mod prelude;
pub mod prob;
pub mod sample;
pub mod stats;

#[cfg_attr(test, macro_use)]
extern crate approx;
