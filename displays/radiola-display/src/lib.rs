//! Display layer for the Radiola web radio front panel
//!
//! This crate provides:
//! - `DisplayBackend` trait for the pixel display the panel draws on
//! - `DisplayConfig` describing panel and font geometry
//! - `TextLine` fixed-capacity lines converted to the font's one-byte charset
//! - `RadioScreen` layout for stream metadata, status icon and debug line
//! - `DebugSink` bounded formatter for diagnostic lines
//!
//! # Architecture
//!
//! Stream metadata arrives as UTF-8. Every string drawn by `RadioScreen` is
//! truncated to the line capacity and folded to extended ASCII by
//! `radiola-text` before it reaches the backend, so backends only ever see
//! 7-bit text plus icon glyph codes.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod backend;
pub mod config;
pub mod debug;
pub mod screen;
pub mod text;

// Re-export key types
pub use backend::{DisplayBackend, DisplayError};
pub use config::DisplayConfig;
pub use debug::{DebugOutput, DebugSink, DEBUG_BUFFER_SIZE};
pub use screen::RadioScreen;
pub use text::{TextLine, LINE_BUF_LEN};
