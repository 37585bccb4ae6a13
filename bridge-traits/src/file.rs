//! Single file handle abstraction.

use std::fmt::Debug;

/// An immutable handle to one selected or uploaded file.
///
/// Handles are cheap to clone: cloning yields another reference to the same
/// underlying platform object, and `PartialEq` compares that identity.
///
/// # Example
///
/// ```ignore
/// use bridge_traits::file::FileHandle;
///
/// fn describe(file: &impl FileHandle) -> String {
///     format!("{} ({} bytes, {})", file.name(), file.size(), file.mime_type())
/// }
/// ```
pub trait FileHandle: Clone + PartialEq + Debug {
    /// File name as reported by the platform, without any path component
    fn name(&self) -> String;

    /// Content length in bytes
    fn size(&self) -> u64;

    /// MIME type, or an empty string when the platform could not infer one
    fn mime_type(&self) -> String {
        String::new()
    }
}
