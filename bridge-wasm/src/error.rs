//! Error types for WebAssembly bridge implementations

use core_filelist::FileListError;
use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};

/// Result type for WebAssembly bridge operations
pub type WasmResult<T> = Result<T, WasmError>;

/// Errors that can occur in WebAssembly bridge implementations
#[derive(Error, Debug)]
pub enum WasmError {
    /// JavaScript error from web-sys or a user callback
    #[error("JavaScript error: {0}")]
    JavaScript(String),

    /// Value passed from JavaScript has the wrong shape
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Browser API missing (e.g. `DataTransfer` in a worker)
    #[error("Not available: {0}")]
    NotAvailable(String),

    /// Invalid initialization options
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<WasmError> for bridge_traits::error::BridgeError {
    fn from(err: WasmError) -> Self {
        match err {
            WasmError::NotAvailable(what) => bridge_traits::error::BridgeError::NotAvailable(what),
            other => bridge_traits::error::BridgeError::OperationFailed(other.to_string()),
        }
    }
}

impl From<FileListError> for WasmError {
    fn from(err: FileListError) -> Self {
        match err {
            FileListError::InvalidArgument { .. } => WasmError::InvalidArgument(err.to_string()),
            FileListError::Transfer(inner) => WasmError::JavaScript(inner.to_string()),
        }
    }
}

impl From<wasm_bindgen::JsValue> for WasmError {
    fn from(js_value: wasm_bindgen::JsValue) -> Self {
        let msg = if js_value.is_string() {
            js_value
                .as_string()
                .unwrap_or_else(|| "Unknown error".to_string())
        } else if let Some(error) = js_value.dyn_ref::<js_sys::Error>() {
            error.message().into()
        } else {
            format!("{:?}", js_value)
        };
        WasmError::JavaScript(msg)
    }
}

impl From<WasmError> for JsValue {
    fn from(err: WasmError) -> Self {
        match err {
            WasmError::InvalidArgument(_) => js_sys::TypeError::new(&err.to_string()).into(),
            _ => js_sys::Error::new(&err.to_string()).into(),
        }
    }
}
