//! In-memory file handle.

use std::fmt;
use std::sync::Arc;

use bridge_traits::FileHandle;
use bytes::Bytes;
use chrono::{DateTime, Utc};

struct FileInner {
    name: String,
    content: Bytes,
    mime_type: String,
    last_modified: DateTime<Utc>,
}

/// An immutable in-memory file.
///
/// Clones share the same allocation and compare equal; independently
/// constructed files never do, whatever their content.
#[derive(Clone)]
pub struct MemoryFile {
    inner: Arc<FileInner>,
}

impl MemoryFile {
    /// Create a file with no MIME type, stamped with the current time
    pub fn new(name: impl Into<String>, content: impl Into<Bytes>) -> Self {
        Self {
            inner: Arc::new(FileInner {
                name: name.into(),
                content: content.into(),
                mime_type: String::new(),
                last_modified: Utc::now(),
            }),
        }
    }

    /// Set the MIME type.
    ///
    /// Must be called before the file is cloned; afterwards this creates a
    /// new, distinct handle.
    pub fn with_mime_type(self, mime_type: impl Into<String>) -> Self {
        let inner = &self.inner;
        Self {
            inner: Arc::new(FileInner {
                name: inner.name.clone(),
                content: inner.content.clone(),
                mime_type: mime_type.into(),
                last_modified: inner.last_modified,
            }),
        }
    }

    /// Set the last-modified timestamp. Same caveat as [`with_mime_type`](Self::with_mime_type).
    pub fn with_last_modified(self, last_modified: DateTime<Utc>) -> Self {
        let inner = &self.inner;
        Self {
            inner: Arc::new(FileInner {
                name: inner.name.clone(),
                content: inner.content.clone(),
                mime_type: inner.mime_type.clone(),
                last_modified,
            }),
        }
    }

    /// File content
    pub fn content(&self) -> &Bytes {
        &self.inner.content
    }

    pub fn last_modified(&self) -> DateTime<Utc> {
        self.inner.last_modified
    }
}

impl PartialEq for MemoryFile {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl Eq for MemoryFile {}

impl fmt::Debug for MemoryFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemoryFile")
            .field("name", &self.inner.name)
            .field("size", &self.inner.content.len())
            .field("mime_type", &self.inner.mime_type)
            .finish()
    }
}

impl FileHandle for MemoryFile {
    fn name(&self) -> String {
        self.inner.name.clone()
    }

    fn size(&self) -> u64 {
        self.inner.content.len() as u64
    }

    fn mime_type(&self) -> String {
        self.inner.mime_type.clone()
    }
}
