//! Native File Collection Abstractions
//!
//! The platform collection (`FileList` in browsers) is immutable and cannot
//! be constructed from a sequence directly. New collections are minted by
//! feeding files into a mutable transfer object (`DataTransfer`) and then
//! extracting its collection.

use crate::error::Result;
use crate::file::FileHandle;

/// Platform-native, ordered, immutable collection of file handles.
pub trait NativeFileList {
    /// Handle type stored in this collection
    type File: FileHandle;

    /// Number of slots in the collection
    fn length(&self) -> usize;

    /// Handle at `index`, or `None` when out of range or the slot is empty
    fn item(&self, index: usize) -> Option<Self::File>;

    /// Whether the collection has no slots
    fn is_empty(&self) -> bool {
        self.length() == 0
    }

    /// Collect the handles in native order, skipping empty slots
    fn to_vec(&self) -> Vec<Self::File> {
        (0..self.length()).filter_map(|i| self.item(i)).collect()
    }
}

/// Mutable transfer object used to build a fresh [`NativeFileList`].
///
/// # Example
///
/// ```ignore
/// use bridge_traits::collection::FileTransfer;
///
/// fn rebuild<T: FileTransfer>(files: &[T::File]) -> bridge_traits::error::Result<T::List> {
///     let mut transfer = T::create()?;
///     for file in files {
///         transfer.add(file)?;
///     }
///     transfer.into_files()
/// }
/// ```
pub trait FileTransfer: Sized {
    /// Handle type accepted by this transfer object
    type File: FileHandle;

    /// Collection type produced by [`FileTransfer::into_files`]
    type List: NativeFileList<File = Self::File>;

    /// Create an empty transfer object
    ///
    /// # Errors
    ///
    /// Returns `BridgeError::NotAvailable` when the platform cannot provide one
    fn create() -> Result<Self>;

    /// Append a handle
    fn add(&mut self, file: &Self::File) -> Result<()>;

    /// Extract the immutable collection holding every added handle in order
    fn into_files(self) -> Result<Self::List>;
}
