//! `FileHandle` over browser `File` objects.

use bridge_traits::FileHandle;
use wasm_bindgen::JsValue;

/// A browser `File`.
///
/// Equality is JavaScript strict equality: two `WasmFile`s are equal only
/// when they wrap the same `File` object.
#[derive(Debug, Clone)]
pub struct WasmFile(web_sys::File);

impl WasmFile {
    /// Wrap a `web_sys::File`
    pub fn new(file: web_sys::File) -> Self {
        Self(file)
    }

    /// Borrow the underlying `File`
    pub fn as_file(&self) -> &web_sys::File {
        &self.0
    }

    /// Unwrap into the underlying `File`
    pub fn into_inner(self) -> web_sys::File {
        self.0
    }

    /// Last-modified time in milliseconds since the Unix epoch
    pub fn last_modified(&self) -> f64 {
        self.0.last_modified()
    }
}

impl From<web_sys::File> for WasmFile {
    fn from(file: web_sys::File) -> Self {
        Self(file)
    }
}

impl From<WasmFile> for web_sys::File {
    fn from(file: WasmFile) -> Self {
        file.0
    }
}

impl From<WasmFile> for JsValue {
    fn from(file: WasmFile) -> Self {
        file.0.into()
    }
}

impl PartialEq for WasmFile {
    fn eq(&self, other: &Self) -> bool {
        <JsValue as PartialEq>::eq(self.0.as_ref(), other.0.as_ref())
    }
}

impl FileHandle for WasmFile {
    fn name(&self) -> String {
        self.0.name()
    }

    fn size(&self) -> u64 {
        self.0.size() as u64
    }

    fn mime_type(&self) -> String {
        self.0.type_()
    }
}
