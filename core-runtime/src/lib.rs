//! # Core Runtime Module
//!
//! Provides the runtime infrastructure shared by the file list crates:
//! - Logging and tracing initialization
//! - File list configuration
//!
//! ## Overview
//!
//! Nothing in here knows about files. `core-filelist` reads its behavioral
//! switches from [`config::FileListConfig`], and hosts call
//! [`logging::init_logging`] once at startup to route `tracing` events to
//! stdout (native) or the browser console (WebAssembly).

pub mod config;
pub mod error;
pub mod logging;

pub use config::{ArgumentPolicy, DefaultSort, FileListConfig};
pub use error::{Error, Result};
