//! Workspace facade crate.
//!
//! Re-exports `core-filelist` and, behind feature flags, the platform
//! bridges. Host applications can depend on `filelist-workspace` and pick a
//! platform without wiring each crate individually.
//!
//! - `native` (default): in-memory files from `bridge-native`
//! - `wasm`: browser types and the `FileListExt` JS class from `bridge-wasm`

pub use core_filelist::*;

#[cfg(feature = "native")]
pub use bridge_native as native;

#[cfg(feature = "wasm")]
pub use bridge_wasm as wasm;
