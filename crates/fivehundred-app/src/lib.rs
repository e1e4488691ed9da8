#![deny(warnings)]
pub mod config;
pub mod console;
pub mod logging;
