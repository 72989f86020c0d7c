//! Sine sample for the math line.

use serde::{Deserialize, Serialize};

/// Input used when no config overrides it
pub const DEFAULT_SINE_INPUT: f64 = 0.34891;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SineSample {
    pub x: f64,
    pub value: f64,
}

impl SineSample {
    pub fn of(x: f64) -> Self {
        Self { x, value: x.sin() }
    }

    /// Both values at six decimal digits, like C's `%f`
    pub fn line(&self) -> String {
        format!("sin({:.6}) = {:.6}", self.x, self.value)
    }
}
