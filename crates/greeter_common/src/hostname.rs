//! Hostname lookup through a bounded buffer
//!
//! The buffer is sized from the platform's maximum hostname length plus one
//! byte for the terminating NUL, filled by `gethostname(2)` and dropped as
//! soon as its contents have been copied out. Allocation failure and a
//! failing system call are both reported as errors; only a successful call
//! that yields an empty string counts as "empty".

use crate::error::{GreeterError, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// POSIX `_POSIX_HOST_NAME_MAX` is 255; used when sysconf has no answer
pub const FALLBACK_HOST_NAME_MAX: usize = 255;

/// Result of a successful hostname query
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Hostname {
    Named(String),
    Empty,
}

impl Hostname {
    pub fn from_text(text: &str) -> Self {
        if text.is_empty() {
            Hostname::Empty
        } else {
            Hostname::Named(text.to_string())
        }
    }

    pub fn line(&self) -> String {
        match self {
            Hostname::Named(name) => format!("Hostname is {}.", name),
            Hostname::Empty => "Hostname is empty.".to_string(),
        }
    }
}

/// What to print when the hostname query itself fails
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HostnameFailure {
    /// Abort the sequence with `GreeterError::HostnameQuery`
    #[default]
    Error,
    /// Print "Hostname is empty." and log a warning
    ReportEmpty,
}

/// Platform maximum hostname length, not counting the NUL
pub fn max_hostname_len() -> usize {
    #[cfg(unix)]
    {
        let limit = unsafe { libc::sysconf(libc::_SC_HOST_NAME_MAX) };
        if limit > 0 {
            return limit as usize;
        }
    }

    FALLBACK_HOST_NAME_MAX
}

/// Fixed-capacity, zero-initialized byte buffer for one hostname query
pub struct HostnameBuffer {
    bytes: Vec<u8>,
}

impl HostnameBuffer {
    pub fn acquire(capacity: usize) -> Result<Self> {
        let capacity = capacity.max(1);
        let mut bytes = Vec::new();
        bytes
            .try_reserve_exact(capacity)
            .map_err(|_| GreeterError::BufferAllocation { capacity })?;
        bytes.resize(capacity, 0);
        debug!("acquired hostname buffer of {} bytes", capacity);
        Ok(Self { bytes })
    }

    pub fn capacity(&self) -> usize {
        self.bytes.len()
    }

    #[cfg(unix)]
    pub fn fill_from_system(&mut self) -> Result<()> {
        let rc = unsafe {
            libc::gethostname(self.bytes.as_mut_ptr() as *mut libc::c_char, self.bytes.len())
        };
        if rc != 0 {
            return Err(GreeterError::HostnameQuery(std::io::Error::last_os_error()));
        }
        self.terminate();
        Ok(())
    }

    #[cfg(not(unix))]
    pub fn fill_from_system(&mut self) -> Result<()> {
        Err(GreeterError::HostnameQuery(std::io::Error::new(
            std::io::ErrorKind::Unsupported,
            "gethostname is not available on this platform",
        )))
    }

    /// Copy `src` in, truncated so the terminating NUL always fits
    pub fn fill_from(&mut self, src: &[u8]) {
        self.bytes.fill(0);
        let n = src.len().min(self.bytes.len() - 1);
        self.bytes[..n].copy_from_slice(&src[..n]);
    }

    pub fn contents(&self) -> Hostname {
        let end = self
            .bytes
            .iter()
            .position(|&b| b == 0)
            .unwrap_or(self.bytes.len());
        Hostname::from_text(&String::from_utf8_lossy(&self.bytes[..end]))
    }

    // gethostname(2) need not NUL-terminate a truncated name
    fn terminate(&mut self) {
        if let Some(last) = self.bytes.last_mut() {
            *last = 0;
        }
    }
}

impl Drop for HostnameBuffer {
    fn drop(&mut self) {
        debug!("released hostname buffer of {} bytes", self.bytes.len());
    }
}

/// Where the greeting sequence gets its hostname from
pub trait HostnameSource {
    fn hostname(&self) -> Result<Hostname>;
}

/// Queries the local system through a `HostnameBuffer`
pub struct SystemHostname {
    capacity: usize,
}

impl SystemHostname {
    pub fn new() -> Self {
        Self::with_capacity(max_hostname_len() + 1)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self { capacity }
    }
}

impl Default for SystemHostname {
    fn default() -> Self {
        Self::new()
    }
}

impl HostnameSource for SystemHostname {
    fn hostname(&self) -> Result<Hostname> {
        let mut buffer = HostnameBuffer::acquire(self.capacity)?;
        buffer.fill_from_system()?;
        Ok(buffer.contents())
    }
}

/// Always answers with the same value; `None` means empty
pub struct FixedHostname(pub Option<String>);

impl HostnameSource for FixedHostname {
    fn hostname(&self) -> Result<Hostname> {
        Ok(Hostname::from_text(self.0.as_deref().unwrap_or("")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max_len_is_positive() {
        assert!(max_hostname_len() >= 1);
    }

    #[test]
    fn test_zero_capacity_rounds_up() {
        let buf = HostnameBuffer::acquire(0).unwrap();
        assert_eq!(buf.capacity(), 1);
        assert_eq!(buf.contents(), Hostname::Empty);
    }

    #[test]
    fn test_fill_truncates_before_nul() {
        let mut buf = HostnameBuffer::acquire(5).unwrap();
        buf.fill_from(b"workstation");
        assert_eq!(buf.contents(), Hostname::Named("work".to_string()));
    }
}
