//! The greeting sequence
//!
//! Lines are written in a fixed order: greeting, address, counter, sine,
//! hostname, person. Each line goes to the writer as soon as it is produced
//! and is also kept in a `Transcript`.

use crate::config::GreeterConfig;
use crate::error::{GreeterError, Result};
use crate::hostname::{FixedHostname, Hostname, HostnameFailure, HostnameSource, SystemHostname};
use crate::trig::SineSample;
use serde::{Deserialize, Serialize};
use std::io::Write;
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineKind {
    Greeting,
    Address,
    Counter,
    Sine,
    Hostname,
    Person,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Line {
    pub kind: LineKind,
    pub text: String,
}

/// Everything one run printed, in order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transcript {
    pub lines: Vec<Line>,
}

impl Transcript {
    pub fn push(&mut self, kind: LineKind, text: String) {
        self.lines.push(Line { kind, text });
    }

    pub fn texts_of(&self, kind: LineKind) -> Vec<&str> {
        self.lines
            .iter()
            .filter(|line| line.kind == kind)
            .map(|line| line.text.as_str())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Plain-text form, one line per entry with a trailing newline
    pub fn render(&self) -> String {
        let mut text = String::new();
        for line in &self.lines {
            text.push_str(&line.text);
            text.push('\n');
        }
        text
    }

    /// Pretty-printed JSON, as printed by `--json`
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Lines whose content does not depend on the host or the allocator
    pub fn stable_lines(&self) -> Vec<&str> {
        self.lines
            .iter()
            .filter(|line| !matches!(line.kind, LineKind::Address | LineKind::Hostname))
            .map(|line| line.text.as_str())
            .collect()
    }
}

pub struct Greeter {
    config: GreeterConfig,
    source: Box<dyn HostnameSource>,
}

impl Greeter {
    /// Uses the fixed hostname from config when set, the system otherwise
    pub fn new(config: GreeterConfig) -> Self {
        let source: Box<dyn HostnameSource> = match &config.hostname.fixed {
            Some(name) => Box::new(FixedHostname(Some(name.clone()))),
            None => Box::new(SystemHostname::new()),
        };
        Self { config, source }
    }

    pub fn with_source(config: GreeterConfig, source: Box<dyn HostnameSource>) -> Self {
        Self { config, source }
    }

    pub fn run<W: Write>(&self, out: &mut W) -> Result<Transcript> {
        let mut transcript = Transcript::default();

        let message = self.config.message.as_str();
        emit(out, &mut transcript, LineKind::Greeting, message.to_string())?;
        emit(
            out,
            &mut transcript,
            LineKind::Address,
            format!("Message points to {:p}.", message.as_ptr()),
        )?;

        for i in self.config.count_from..=self.config.count_to {
            emit(out, &mut transcript, LineKind::Counter, format!("i is {}", i))?;
        }

        let sample = SineSample::of(self.config.sine_input);
        debug!("sin({}) = {}", sample.x, sample.value);
        emit(out, &mut transcript, LineKind::Sine, sample.line())?;

        let hostname = self.resolve_hostname()?;
        emit(out, &mut transcript, LineKind::Hostname, hostname.line())?;

        let person = self.config.person.clone();
        emit(out, &mut transcript, LineKind::Person, person.greeting())?;
        drop(person);

        out.flush()?;
        debug!("greeting sequence wrote {} lines", transcript.len());
        Ok(transcript)
    }

    fn resolve_hostname(&self) -> Result<Hostname> {
        match self.source.hostname() {
            Ok(hostname) => Ok(hostname),
            Err(GreeterError::HostnameQuery(e))
                if self.config.hostname.failure == HostnameFailure::ReportEmpty =>
            {
                warn!("Hostname query failed, reporting empty: {}", e);
                Ok(Hostname::Empty)
            }
            Err(e) => Err(e),
        }
    }
}

fn emit<W: Write>(
    out: &mut W,
    transcript: &mut Transcript,
    kind: LineKind,
    text: String,
) -> Result<()> {
    writeln!(out, "{}", text)?;
    transcript.push(kind, text);
    Ok(())
}
