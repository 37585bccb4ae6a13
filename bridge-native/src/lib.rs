//! # Native Bridge Implementations
//!
//! In-memory implementations of the file bridge traits for native targets
//! (desktop hosts, servers, and tests).
//!
//! ## Overview
//!
//! - [`MemoryFile`] implements `FileHandle` over shared `Bytes`
//! - [`MemoryFileList`] implements `NativeFileList` as an immutable snapshot
//! - [`MemoryDataTransfer`] implements `FileTransfer`
//!
//! Like browser `File` objects, two `MemoryFile`s are equal only when one
//! is a clone of the other. Building two files with identical names and
//! content yields two distinct handles.
//!
//! ## Usage
//!
//! ```
//! use bridge_native::{MemoryDataTransfer, MemoryFile};
//! use bridge_traits::{FileTransfer, NativeFileList};
//!
//! let file = MemoryFile::new("notes.txt", "hello").with_mime_type("text/plain");
//!
//! let mut transfer = MemoryDataTransfer::create().unwrap();
//! transfer.add(&file).unwrap();
//! let files = transfer.into_files().unwrap();
//!
//! assert_eq!(files.length(), 1);
//! assert_eq!(files.item(0), Some(file));
//! ```

mod collection;
mod file;

pub use collection::{MemoryDataTransfer, MemoryFileList};
pub use file::MemoryFile;
