//! # Core File List
//!
//! A mutable, array-style companion to a platform's immutable file
//! collection.
//!
//! ## Overview
//!
//! Browsers hand out selected files as a `FileList`, which can be read but
//! never edited. [`ExtendedFileList`] copies the handles into an ordered
//! list that supports `push`/`pop`/`shift`/`unshift`, `sort`/`reverse`,
//! `filter`/`find`/`slice`/`concat`, and identity search with
//! `index_of`/`includes`. When the files need to go back to a platform API
//! (an `<input>` element, a form submission), [`ExtendedFileList::to_file_list`]
//! mints a fresh native collection through the platform's transfer object.
//!
//! The list is generic over the bridge traits in `bridge-traits`, so the same
//! code runs against `web-sys` types in the browser and against in-memory
//! files in native tests.
//!
//! ## Construction
//!
//! | Input | Constructor |
//! |-------|-------------|
//! | one native collection | [`ExtendedFileList::from_file_list`] |
//! | a sequence of handles | [`ExtendedFileList::from_array`], `collect()`, `From<Vec<_>>` |
//! | a mix of the above | [`ExtendedFileList::new`] with [`FileListArg`] |
//! | untyped host values | [`ExtendedFileList::from_classified`] with [`ClassifiedArg`] |
//!
//! ## Absence
//!
//! Nothing here panics on a missing element. `pop`, `shift`, `get`, `find`
//! and `index_of` return `None` instead.

pub mod args;
pub mod error;
pub mod index;
pub mod list;
pub mod order;

pub use args::{ClassifiedArg, ConcatItem, FileListArg};
pub use error::{FileListError, Result};
pub use list::ExtendedFileList;
