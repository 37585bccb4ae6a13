//! The `ExtendedFileList` container.

use std::cmp::Ordering;

use bridge_traits::{FileHandle, FileTransfer, NativeFileList};
use core_runtime::config::{DefaultSort, FileListConfig};
use tracing::{debug, trace, warn};

use crate::args::{ClassifiedArg, ConcatItem, FileListArg};
use crate::error::{FileListError, Result};
use crate::index::{resolve_range, resolve_relative};
use crate::order::{compare_names, try_sorted_indices};

/// A mutable, ordered list of file handles.
///
/// The list is built from platform collections, single handles or
/// sequences, supports the usual array operations, and converts back into
/// a fresh platform collection with [`to_file_list`](Self::to_file_list).
///
/// Indices are always contiguous: every removal compacts. There is no
/// public indexed assignment; reads out of range return `None`.
///
/// # Example
///
/// ```ignore
/// use core_filelist::{ExtendedFileList, FileListArg};
///
/// let mut list = ExtendedFileList::new([
///     FileListArg::Collection(input.files()),
///     FileListArg::File(extra),
/// ]);
/// list.sort();
/// let files = list.to_file_list::<WasmDataTransfer>()?;
/// ```
#[derive(Debug, Clone)]
pub struct ExtendedFileList<F> {
    files: Vec<F>,
    config: FileListConfig,
}

impl<F> Default for ExtendedFileList<F> {
    fn default() -> Self {
        Self {
            files: Vec::new(),
            config: FileListConfig::default(),
        }
    }
}

impl<F: PartialEq> PartialEq for ExtendedFileList<F> {
    fn eq(&self, other: &Self) -> bool {
        self.files == other.files
    }
}

impl<F: FileHandle> ExtendedFileList<F> {
    /// Build a list by flattening `args` in order.
    pub fn new<L, I>(args: I) -> Self
    where
        L: NativeFileList<File = F>,
        I: IntoIterator<Item = FileListArg<L>>,
    {
        let mut files = Vec::new();
        for arg in args {
            trace!(kind = arg.kind(), "Expanding constructor argument");
            arg.append_to(&mut files);
        }
        Self::from(files)
    }

    /// Build a list from one platform collection, in its native order.
    pub fn from_file_list<L>(list: L) -> Self
    where
        L: NativeFileList<File = F>,
    {
        Self::new([FileListArg::Collection(list)])
    }

    /// Build a list from an ordered sequence of handles.
    pub fn from_array(files: impl IntoIterator<Item = F>) -> Self {
        files.into_iter().collect()
    }

    /// Build a list from arguments already classified by an untyped boundary.
    ///
    /// Malformed arguments are handled according to
    /// `config.argument_policy`.
    ///
    /// # Errors
    ///
    /// Returns `FileListError::InvalidArgument` for the first malformed
    /// argument when the policy is `Reject`.
    pub fn from_classified<L, I>(args: I, config: FileListConfig) -> Result<Self>
    where
        L: NativeFileList<File = F>,
        I: IntoIterator<Item = ClassifiedArg<L>>,
    {
        let mut files = Vec::new();
        for (position, arg) in args.into_iter().enumerate() {
            match arg {
                ClassifiedArg::Recognized(arg) => arg.append_to(&mut files),
                ClassifiedArg::Malformed(reason) => {
                    if config.rejects_malformed_arguments() {
                        return Err(FileListError::InvalidArgument { position, reason });
                    }
                    warn!(position, reason = %reason, "Ignoring malformed file list argument");
                }
            }
        }
        Ok(Self { files, config })
    }

    /// Replace the configuration carried by this list.
    pub fn with_config(mut self, config: FileListConfig) -> Self {
        self.config = config;
        self
    }

    /// Configuration inherited by lists derived from this one
    pub fn config(&self) -> &FileListConfig {
        &self.config
    }

    /// Number of handles in the list
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Whether the list holds no handles
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Handle at `index`, or `None` when out of range.
    pub fn get(&self, index: usize) -> Option<&F> {
        self.files.get(index)
    }

    /// First handle, if any
    pub fn first(&self) -> Option<&F> {
        self.files.first()
    }

    /// Last handle, if any
    pub fn last(&self) -> Option<&F> {
        self.files.last()
    }

    /// Borrow the handles in order.
    pub fn as_slice(&self) -> &[F] {
        &self.files
    }

    /// Iterate over the handles in order.
    ///
    /// Every call starts a fresh pass. The borrow keeps the list frozen for
    /// the duration of the pass.
    pub fn iter(&self) -> std::slice::Iter<'_, F> {
        self.files.iter()
    }

    /// Copy the handles into a new `Vec`.
    pub fn to_array(&self) -> Vec<F> {
        self.files.clone()
    }

    /// Mint a new platform collection holding the handles in order.
    ///
    /// # Errors
    ///
    /// Returns `FileListError::Transfer` if the transfer object cannot be
    /// created or rejects a handle.
    pub fn to_file_list<T>(&self) -> Result<T::List>
    where
        T: FileTransfer<File = F>,
    {
        self.to_file_list_with(T::create()?)
    }

    /// Like [`to_file_list`](Self::to_file_list), using a caller-supplied
    /// transfer object.
    pub fn to_file_list_with<T>(&self, mut transfer: T) -> Result<T::List>
    where
        T: FileTransfer<File = F>,
    {
        for file in &self.files {
            transfer.add(file)?;
        }
        debug!(length = self.files.len(), "Built native file list");
        Ok(transfer.into_files()?)
    }

    /// Append handles in order and return the new length.
    pub fn push(&mut self, files: impl IntoIterator<Item = F>) -> usize {
        self.files.extend(files);
        trace!(length = self.files.len(), "push");
        self.files.len()
    }

    /// Remove and return the last handle.
    pub fn pop(&mut self) -> Option<F> {
        let file = self.files.pop();
        trace!(length = self.files.len(), removed = file.is_some(), "pop");
        file
    }

    /// Remove and return the first handle, shifting the rest down.
    pub fn shift(&mut self) -> Option<F> {
        if self.files.is_empty() {
            return None;
        }
        let file = self.files.remove(0);
        trace!(length = self.files.len(), "shift");
        Some(file)
    }

    /// Insert handles at the front, keeping their relative order, and
    /// return the new length.
    pub fn unshift(&mut self, files: impl IntoIterator<Item = F>) -> usize {
        self.files.splice(0..0, files);
        trace!(length = self.files.len(), "unshift");
        self.files.len()
    }

    /// Sort in place using the configured default ordering.
    pub fn sort(&mut self) -> &mut Self {
        match self.config.default_sort {
            DefaultSort::Name => self.sort_by(compare_names),
            DefaultSort::Insertion => self,
        }
    }

    /// Sort in place with a comparator. The sort is stable.
    pub fn sort_by<C>(&mut self, compare: C) -> &mut Self
    where
        C: FnMut(&F, &F) -> Ordering,
    {
        self.files.sort_by(compare);
        trace!(length = self.files.len(), "sort");
        self
    }

    /// Sort in place with a comparator that may fail.
    ///
    /// On error the list is left unchanged. Unlike [`sort_by`](Self::sort_by),
    /// an inconsistent comparator never panics, which makes this the entry
    /// point for comparators supplied by foreign code.
    pub fn try_sort_by<E, C>(&mut self, compare: C) -> std::result::Result<&mut Self, E>
    where
        C: FnMut(&F, &F) -> std::result::Result<Ordering, E>,
    {
        let order = try_sorted_indices(&self.files, compare)?;
        let sorted: Vec<F> = order.iter().map(|&i| self.files[i].clone()).collect();
        self.files = sorted;
        trace!(length = self.files.len(), "sort");
        Ok(self)
    }

    /// Reverse the order in place.
    pub fn reverse(&mut self) -> &mut Self {
        self.files.reverse();
        trace!(length = self.files.len(), "reverse");
        self
    }

    /// New list of the handles for which `predicate(file, index, all)` holds.
    pub fn filter<P>(&self, mut predicate: P) -> Self
    where
        P: FnMut(&F, usize, &[F]) -> bool,
    {
        let files = self
            .files
            .iter()
            .enumerate()
            .filter(|&(i, file)| predicate(file, i, &self.files))
            .map(|(_, file)| file.clone())
            .collect();
        self.derive(files)
    }

    /// First handle for which `predicate(file, index, all)` holds.
    pub fn find<P>(&self, mut predicate: P) -> Option<&F>
    where
        P: FnMut(&F, usize, &[F]) -> bool,
    {
        self.files
            .iter()
            .enumerate()
            .find(|&(i, file)| predicate(file, i, &self.files))
            .map(|(_, file)| file)
    }

    /// Like [`filter`](Self::filter), stopping at the first predicate error.
    pub fn try_filter<E, P>(&self, mut predicate: P) -> std::result::Result<Self, E>
    where
        P: FnMut(&F, usize, &[F]) -> std::result::Result<bool, E>,
    {
        let mut files = Vec::new();
        for (i, file) in self.files.iter().enumerate() {
            if predicate(file, i, &self.files)? {
                files.push(file.clone());
            }
        }
        Ok(self.derive(files))
    }

    /// Like [`find`](Self::find), stopping at the first predicate error.
    pub fn try_find<E, P>(&self, mut predicate: P) -> std::result::Result<Option<&F>, E>
    where
        P: FnMut(&F, usize, &[F]) -> std::result::Result<bool, E>,
    {
        for (i, file) in self.files.iter().enumerate() {
            if predicate(file, i, &self.files)? {
                return Ok(Some(file));
            }
        }
        Ok(None)
    }

    /// Whether `file` occurs at or after `from_index`.
    ///
    /// A negative `from_index` counts back from the end.
    pub fn includes(&self, file: &F, from_index: Option<isize>) -> bool {
        let start = from_index.map_or(0, |i| resolve_relative(i, self.files.len()));
        self.files[start..].contains(file)
    }

    /// Index of the first occurrence of `file`.
    pub fn index_of(&self, file: &F) -> Option<usize> {
        self.files.iter().position(|f| f == file)
    }

    /// New list over `[start, end)`. Negative bounds count back from the end.
    pub fn slice(&self, start: Option<isize>, end: Option<isize>) -> Self {
        let (start, end) = resolve_range(start, end, self.files.len());
        self.derive(self.files[start..end].to_vec())
    }

    /// New list holding this list's handles followed by each item's.
    pub fn concat<'a, I>(&self, items: I) -> Self
    where
        F: 'a,
        I: IntoIterator<Item = ConcatItem<'a, F>>,
    {
        let mut files = self.files.clone();
        for item in items {
            files.extend_from_slice(item.as_slice());
        }
        self.derive(files)
    }

    /// Call `callback(file, index, all)` for each handle in order.
    pub fn for_each<C>(&self, mut callback: C)
    where
        C: FnMut(&F, usize, &[F]),
    {
        for (i, file) in self.files.iter().enumerate() {
            callback(file, i, &self.files);
        }
    }

    /// Like [`for_each`](Self::for_each), stopping at the first callback error.
    pub fn try_for_each<E, C>(&self, mut callback: C) -> std::result::Result<(), E>
    where
        C: FnMut(&F, usize, &[F]) -> std::result::Result<(), E>,
    {
        for (i, file) in self.files.iter().enumerate() {
            callback(file, i, &self.files)?;
        }
        Ok(())
    }

    fn derive(&self, files: Vec<F>) -> Self {
        Self {
            files,
            config: self.config,
        }
    }
}

impl<F: FileHandle> From<Vec<F>> for ExtendedFileList<F> {
    fn from(files: Vec<F>) -> Self {
        Self {
            files,
            config: FileListConfig::default(),
        }
    }
}

impl<F: FileHandle> FromIterator<F> for ExtendedFileList<F> {
    fn from_iter<I: IntoIterator<Item = F>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<_>>())
    }
}

impl<F: FileHandle> Extend<F> for ExtendedFileList<F> {
    fn extend<I: IntoIterator<Item = F>>(&mut self, iter: I) {
        self.push(iter);
    }
}

impl<'a, F> IntoIterator for &'a ExtendedFileList<F> {
    type Item = &'a F;
    type IntoIter = std::slice::Iter<'a, F>;

    fn into_iter(self) -> Self::IntoIter {
        self.files.iter()
    }
}

impl<F> IntoIterator for ExtendedFileList<F> {
    type Item = F;
    type IntoIter = std::vec::IntoIter<F>;

    fn into_iter(self) -> Self::IntoIter {
        self.files.into_iter()
    }
}
