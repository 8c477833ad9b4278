//! Bounded debug line formatter
//!
//! Formats diagnostic lines into a fixed buffer, forwards them to an output
//! channel when enabled, and always hands the text back so it can also be
//! shown on the panel's debug line.

use core::fmt::{self, Write};

use heapless::String;

/// Capacity of the formatted debug line in bytes
pub const DEBUG_BUFFER_SIZE: usize = 100;

/// Prefix sent before every emitted line
pub const DEBUG_PREFIX: &str = "D: ";

/// Destination for emitted debug lines (serial port, RTT, ...)
pub trait DebugOutput {
    /// Write one complete line
    fn write_line(&mut self, prefix: &str, line: &str);
}

/// Output that discards everything
#[derive(Debug, Clone, Copy, Default)]
pub struct NullOutput;

impl DebugOutput for NullOutput {
    fn write_line(&mut self, _prefix: &str, _line: &str) {}
}

/// Output that forwards lines to defmt at debug level
#[cfg(feature = "defmt")]
#[derive(Debug, Clone, Copy, Default)]
pub struct DefmtOutput;

#[cfg(feature = "defmt")]
impl DebugOutput for DefmtOutput {
    fn write_line(&mut self, prefix: &str, line: &str) {
        defmt::debug!("{}{}", prefix, line);
    }
}

/// Debug line formatter
pub struct DebugSink<O> {
    output: O,
    enabled: bool,
    line: String<DEBUG_BUFFER_SIZE>,
}

impl<O: DebugOutput> DebugSink<O> {
    /// Create a sink; lines are only emitted when `enabled` is set
    pub fn new(output: O, enabled: bool) -> Self {
        Self {
            output,
            enabled,
            line: String::new(),
        }
    }

    /// Enable or disable emitting to the output
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Check if lines are emitted
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Format a line, emit it if enabled, and return it
    ///
    /// Text beyond [`DEBUG_BUFFER_SIZE`] bytes is dropped.
    pub fn print(&mut self, args: fmt::Arguments<'_>) -> &str {
        self.line.clear();
        // Err only means the line was truncated
        let _ = Truncating(&mut self.line).write_fmt(args);

        if self.enabled {
            self.output.write_line(DEBUG_PREFIX, &self.line);
        }
        &self.line
    }

    /// The most recently formatted line
    pub fn last_line(&self) -> &str {
        &self.line
    }

    /// Access the output channel
    pub fn output(&self) -> &O {
        &self.output
    }
}

/// Writer that fills a heapless string up to its capacity
struct Truncating<'a, const N: usize>(&'a mut String<N>);

impl<const N: usize> Write for Truncating<'_, N> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        for ch in s.chars() {
            // Pushing whole chars keeps the buffer valid UTF-8
            self.0.push(ch).map_err(|_| fmt::Error)?;
        }
        Ok(())
    }
}

/// Format and print a debug line through a [`DebugSink`]
///
/// ```
/// use radiola_display::{dbgprint, debug::NullOutput, DebugSink};
///
/// let mut sink = DebugSink::new(NullOutput, false);
/// let line = dbgprint!(sink, "bitrate {} kbps", 128);
/// assert_eq!(line, "bitrate 128 kbps");
/// ```
#[macro_export]
macro_rules! dbgprint {
    ($sink:expr, $($arg:tt)*) => {
        $sink.print(core::format_args!($($arg)*))
    };
}
