//! Argument shapes accepted by list construction and `concat`.

use bridge_traits::{FileHandle, NativeFileList};

use crate::list::ExtendedFileList;

/// One constructor argument.
///
/// Arguments are flattened in order: a collection is expanded in its native
/// order, a single file is appended, and a sequence is spread.
#[derive(Debug, Clone)]
pub enum FileListArg<L: NativeFileList> {
    /// A platform file collection
    Collection(L),
    /// A single file handle
    File(L::File),
    /// An ordered sequence of file handles
    Files(Vec<L::File>),
}

impl<L: NativeFileList> FileListArg<L> {
    /// Short label for log fields
    pub(crate) fn kind(&self) -> &'static str {
        match self {
            FileListArg::Collection(_) => "collection",
            FileListArg::File(_) => "file",
            FileListArg::Files(_) => "files",
        }
    }

    pub(crate) fn append_to(self, files: &mut Vec<L::File>) {
        match self {
            FileListArg::Collection(list) => files.extend(list.to_vec()),
            FileListArg::File(file) => files.push(file),
            FileListArg::Files(sequence) => files.extend(sequence),
        }
    }
}

/// An argument produced by an untyped boundary such as the JS bindings.
///
/// The boundary decides the shape of each value. Whether a malformed value
/// aborts construction is decided by the list's `ArgumentPolicy`.
#[derive(Debug, Clone)]
pub enum ClassifiedArg<L: NativeFileList> {
    /// A value matching one of the accepted shapes
    Recognized(FileListArg<L>),
    /// A value matching none of them, with a description for diagnostics
    Malformed(String),
}

impl<L: NativeFileList> From<FileListArg<L>> for ClassifiedArg<L> {
    fn from(arg: FileListArg<L>) -> Self {
        ClassifiedArg::Recognized(arg)
    }
}

/// One `concat` argument. All variants borrow, so `concat` never consumes
/// or mutates what it is given.
#[derive(Debug)]
pub enum ConcatItem<'a, F> {
    /// Another extended list
    List(&'a ExtendedFileList<F>),
    /// A single file handle
    File(&'a F),
    /// A sequence of file handles
    Files(&'a [F]),
}

impl<F> Clone for ConcatItem<'_, F> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<F> Copy for ConcatItem<'_, F> {}

impl<'a, F> From<&'a ExtendedFileList<F>> for ConcatItem<'a, F> {
    fn from(list: &'a ExtendedFileList<F>) -> Self {
        ConcatItem::List(list)
    }
}

impl<'a, F> From<&'a [F]> for ConcatItem<'a, F> {
    fn from(files: &'a [F]) -> Self {
        ConcatItem::Files(files)
    }
}

impl<'a, F> From<&'a Vec<F>> for ConcatItem<'a, F> {
    fn from(files: &'a Vec<F>) -> Self {
        ConcatItem::Files(files.as_slice())
    }
}

impl<'a, F: FileHandle> ConcatItem<'a, F> {
    pub(crate) fn as_slice(&self) -> &'a [F] {
        match *self {
            ConcatItem::List(list) => list.as_slice(),
            ConcatItem::File(file) => std::slice::from_ref(file),
            ConcatItem::Files(files) => files,
        }
    }
}
