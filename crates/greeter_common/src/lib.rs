//! Greeter common library
//!
//! Domain types and the greeting sequence shared by the `greeter` binary
//! and its tests.

pub mod config;
pub mod error;
pub mod greeter;
pub mod hostname;
pub mod person;
pub mod trig;

pub use config::GreeterConfig;
pub use error::{GreeterError, Result};
pub use greeter::{Greeter, Line, LineKind, Transcript};
pub use hostname::{Hostname, HostnameFailure, HostnameSource};
pub use person::Person;
