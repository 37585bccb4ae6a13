//! In-memory file collection and transfer object.

use std::sync::Arc;

use bridge_traits::error::Result;
use bridge_traits::{FileTransfer, NativeFileList};

use crate::file::MemoryFile;

/// Immutable snapshot of files, the native stand-in for a browser `FileList`.
#[derive(Debug, Clone, PartialEq)]
pub struct MemoryFileList {
    files: Arc<[MemoryFile]>,
}

impl Default for MemoryFileList {
    fn default() -> Self {
        Self::from(Vec::new())
    }
}

impl MemoryFileList {
    pub fn iter(&self) -> std::slice::Iter<'_, MemoryFile> {
        self.files.iter()
    }
}

impl From<Vec<MemoryFile>> for MemoryFileList {
    fn from(files: Vec<MemoryFile>) -> Self {
        Self {
            files: files.into(),
        }
    }
}

impl FromIterator<MemoryFile> for MemoryFileList {
    fn from_iter<I: IntoIterator<Item = MemoryFile>>(iter: I) -> Self {
        Self {
            files: iter.into_iter().collect(),
        }
    }
}

impl NativeFileList for MemoryFileList {
    type File = MemoryFile;

    fn length(&self) -> usize {
        self.files.len()
    }

    fn item(&self, index: usize) -> Option<MemoryFile> {
        self.files.get(index).cloned()
    }
}

/// Mutable accumulator that mints [`MemoryFileList`]s.
#[derive(Debug, Default)]
pub struct MemoryDataTransfer {
    items: Vec<MemoryFile>,
}

impl MemoryDataTransfer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of files added so far
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl FileTransfer for MemoryDataTransfer {
    type File = MemoryFile;
    type List = MemoryFileList;

    fn create() -> Result<Self> {
        Ok(Self::new())
    }

    fn add(&mut self, file: &MemoryFile) -> Result<()> {
        self.items.push(file.clone());
        Ok(())
    }

    fn into_files(self) -> Result<MemoryFileList> {
        Ok(MemoryFileList::from(self.items))
    }
}
