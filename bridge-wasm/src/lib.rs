//! WebAssembly Bridge Implementations
//!
//! This crate provides the browser implementations of the file bridge traits
//! defined in `bridge-traits`, plus the JavaScript-facing `FileListExt` class.
//! The implementations wrap `web-sys` types so that `core-filelist` can work
//! with real `File`, `FileList` and `DataTransfer` objects.
//!
//! # Platform Support
//!
//! This crate is designed exclusively for the `wasm32-unknown-unknown` target.
//! It will not compile for native targets.
//!
//! # Implementations
//!
//! - `WasmFile`: `FileHandle` over `web_sys::File`, compared by JS identity
//! - `WasmFileList`: `NativeFileList` over `web_sys::FileList`
//! - `WasmDataTransfer`: `FileTransfer` over `web_sys::DataTransfer`
//! - `FileListExt`: the exported JS class
//!
//! # Examples
//!
//! ```javascript
//! import init, { FileListExt, initFileListExt } from "bridge-wasm";
//!
//! await init();
//! initFileListExt({ argumentPolicy: "reject", logLevel: "debug" });
//!
//! const list = FileListExt.fromFileList(input.files);
//! list.push(extraFile);
//! list.sort();
//! input.files = list.toFileList();
//! ```

#![cfg(target_arch = "wasm32")]
#![warn(missing_docs)]

pub mod classify;
pub mod collection;
pub mod error;
pub mod file;
pub mod wasm;

// Re-export commonly used types
pub use collection::{WasmDataTransfer, WasmFileList};
pub use error::{WasmError, WasmResult};
pub use file::WasmFile;
pub use wasm::{init_file_list_ext, FileListExt};
