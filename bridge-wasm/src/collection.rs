//! `FileList` and `DataTransfer` adapters.

use bridge_traits::error::{BridgeError, Result as BridgeResult};
use bridge_traits::{FileTransfer, NativeFileList};
use tracing::debug;

use crate::error::WasmError;
use crate::file::WasmFile;

/// A browser `FileList`.
#[derive(Debug, Clone)]
pub struct WasmFileList(web_sys::FileList);

impl WasmFileList {
    /// Wrap a `web_sys::FileList`
    pub fn new(list: web_sys::FileList) -> Self {
        Self(list)
    }

    /// Unwrap into the underlying `FileList`
    pub fn into_inner(self) -> web_sys::FileList {
        self.0
    }
}

impl From<web_sys::FileList> for WasmFileList {
    fn from(list: web_sys::FileList) -> Self {
        Self(list)
    }
}

impl NativeFileList for WasmFileList {
    type File = WasmFile;

    fn length(&self) -> usize {
        self.0.length() as usize
    }

    fn item(&self, index: usize) -> Option<WasmFile> {
        let index = u32::try_from(index).ok()?;
        self.0.item(index).map(WasmFile::from)
    }
}

/// A browser `DataTransfer`, the only way to mint a new `FileList`.
#[derive(Debug)]
pub struct WasmDataTransfer(web_sys::DataTransfer);

impl FileTransfer for WasmDataTransfer {
    type File = WasmFile;
    type List = WasmFileList;

    fn create() -> BridgeResult<Self> {
        let transfer = web_sys::DataTransfer::new().map_err(|e| {
            BridgeError::NotAvailable(format!("DataTransfer: {}", WasmError::from(e)))
        })?;
        Ok(Self(transfer))
    }

    fn add(&mut self, file: &WasmFile) -> BridgeResult<()> {
        self.0
            .items()
            .add_with_file(file.as_file())
            .map_err(|e| BridgeError::from(WasmError::from(e)))?;
        Ok(())
    }

    fn into_files(self) -> BridgeResult<WasmFileList> {
        let files = self.0.files().ok_or_else(|| {
            BridgeError::OperationFailed("DataTransfer has no file list".to_string())
        })?;
        debug!(length = files.length(), "Extracted FileList from DataTransfer");
        Ok(WasmFileList(files))
    }
}
