//! Person record printed at the end of the greeting sequence.

use serde::{Deserialize, Serialize};

pub const DEFAULT_NAME: &str = "Ilya";
pub const DEFAULT_AGE: u32 = 21;

/// A name and an age
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    #[serde(default = "default_name")]
    pub name: String,

    #[serde(default = "default_age")]
    pub age: u32,
}

fn default_name() -> String {
    DEFAULT_NAME.to_string()
}

fn default_age() -> u32 {
    DEFAULT_AGE
}

impl Default for Person {
    fn default() -> Self {
        Self {
            name: default_name(),
            age: default_age(),
        }
    }
}

impl Person {
    pub fn new(name: impl Into<String>, age: u32) -> Self {
        Self {
            name: name.into(),
            age,
        }
    }

    pub fn greeting(&self) -> String {
        format!("Hello, {}! Your age is {}.", self.name, self.age)
    }
}
