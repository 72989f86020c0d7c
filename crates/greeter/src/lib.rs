//! Greeter library - exposes CLI modules for testing

pub mod cli;
pub mod errors;
pub mod logging;
