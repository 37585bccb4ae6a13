//! # File Bridge Traits
//!
//! Platform abstraction traits for the file values handed to the core by a
//! host platform.
//!
//! ## Overview
//!
//! The core list type never talks to `web_sys` or any other platform API
//! directly. Instead it works against three small capabilities:
//!
//! - [`FileHandle`](file::FileHandle) - a single selected file (name, size, MIME type)
//! - [`NativeFileList`](collection::NativeFileList) - the platform's immutable, indexable file collection
//! - [`FileTransfer`](collection::FileTransfer) - the mutable transfer object used to mint a new collection
//!
//! ## Platform Requirements
//!
//! | Platform | Implementation Crate | Backing types |
//! |----------|---------------------|---------------|
//! | Native   | `bridge-native`     | `Arc`-shared in-memory files |
//! | Web      | `bridge-wasm`       | `File`, `FileList`, `DataTransfer` |
//!
//! ## Identity
//!
//! `FileHandle` equality is identity, not structural equality. Two files
//! with the same name and bytes are still different handles unless they
//! refer to the same platform object. Search operations (`index_of`,
//! `includes`) rely on this.
//!
//! ## Error Handling
//!
//! Transfer operations return [`BridgeError`](error::BridgeError). Platform
//! implementations should convert their native failures (e.g. a thrown
//! `DOMException`) into `BridgeError::OperationFailed` with the original
//! message preserved.
//!
//! ## Examples
//!
//! ### Implementing FileTransfer
//!
//! ```ignore
//! use bridge_traits::collection::FileTransfer;
//! use bridge_traits::error::Result;
//!
//! pub struct MyTransfer {
//!     files: Vec<MyFile>,
//! }
//!
//! impl FileTransfer for MyTransfer {
//!     type File = MyFile;
//!     type List = MyFileList;
//!
//!     fn create() -> Result<Self> {
//!         Ok(Self { files: Vec::new() })
//!     }
//!
//!     fn add(&mut self, file: &MyFile) -> Result<()> {
//!         self.files.push(file.clone());
//!         Ok(())
//!     }
//!
//!     fn into_files(self) -> Result<MyFileList> {
//!         Ok(MyFileList::from(self.files))
//!     }
//! }
//! ```

pub mod collection;
pub mod error;
pub mod file;

pub use error::BridgeError;

// Re-export commonly used types
pub use collection::{FileTransfer, NativeFileList};
pub use file::FileHandle;
