//! WebAssembly bindings for bridge-wasm
//!
//! This module exposes [`FileListExt`], a JavaScript class mirroring the
//! array-style API of `ExtendedFileList`, and [`init_file_list_ext`] for
//! one-time setup.
//!
//! Callback exceptions (`forEach`, `filter`, `find`, `sort`) are rethrown
//! unchanged. Malformed arguments throw a `TypeError` unless the configured
//! argument policy is `ignore`.

use std::cell::Cell;
use std::cmp::Ordering;

use bridge_traits::FileHandle;
use core_filelist::{ConcatItem, ExtendedFileList};
use core_runtime::config::FileListConfig;
use core_runtime::logging::{init_logging, LogLevel, LoggingConfig};
use js_sys::{Array, Function};
use serde::Deserialize;
use tracing::debug;
use wasm_bindgen::prelude::*;

use crate::classify::classify_all;
use crate::collection::{WasmDataTransfer, WasmFileList};
use crate::error::WasmError;
use crate::file::WasmFile;

thread_local! {
    static DEFAULT_CONFIG: Cell<FileListConfig> = Cell::new(FileListConfig::default());
}

fn default_config() -> FileListConfig {
    DEFAULT_CONFIG.with(Cell::get)
}

// =============================================================================
// Initialization
// =============================================================================

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct InitOptions {
    #[serde(flatten)]
    list: FileListConfig,
    log_level: Option<LogLevel>,
}

/// Install the panic hook, logging, and the default list configuration.
///
/// # Example
///
/// ```javascript
/// initFileListExt({ argumentPolicy: "ignore", defaultSort: "name", logLevel: "warn" });
/// ```
#[wasm_bindgen(js_name = initFileListExt)]
pub fn init_file_list_ext(options: JsValue) -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    let options: InitOptions = if options.is_undefined() || options.is_null() {
        InitOptions::default()
    } else {
        serde_wasm_bindgen::from_value(options)
            .map_err(|e| WasmError::Config(e.to_string()))?
    };

    DEFAULT_CONFIG.with(|config| config.set(options.list));

    let logging = LoggingConfig::default().with_level(options.log_level.unwrap_or(LogLevel::Info));
    if let Err(err) = init_logging(logging) {
        // A host that already installed a subscriber keeps it
        debug!(error = %err, "Logging already initialized");
    }

    Ok(())
}

// =============================================================================
// FileListExt
// =============================================================================

/// A more flexible version of `FileList` which includes extra utilities for
/// manipulating the list of contained files.
///
/// # Example
///
/// ```javascript
/// const list = new FileListExt([input.files, extraFile]);
/// list.push(anotherFile);
/// list.sort((a, b) => a.size - b.size);
///
/// for (const file of list.values()) {
///   console.log(file.name);
/// }
///
/// input.files = list.toFileList();
/// ```
#[wasm_bindgen]
pub struct FileListExt {
    inner: ExtendedFileList<WasmFile>,
}

impl FileListExt {
    fn wrap(inner: ExtendedFileList<WasmFile>) -> FileListExt {
        FileListExt { inner }
    }

    fn to_js_array(&self) -> Array {
        self.inner.iter().map(WasmFile::as_file).collect()
    }
}

/// Invoke a `(file, index, array)` callback with `undefined` as `this`
fn call_with_file(
    callback: &Function,
    file: &WasmFile,
    index: usize,
    array: &Array,
) -> Result<JsValue, JsValue> {
    callback.call3(
        &JsValue::UNDEFINED,
        file.as_file(),
        &JsValue::from(index as u32),
        array,
    )
}

/// Turn a JS comparator result, already passed through `Number()`, into an
/// ordering. `NaN` counts as equal.
fn ordering_from_js(value: f64) -> Ordering {
    if value < 0.0 {
        Ordering::Less
    } else if value > 0.0 {
        Ordering::Greater
    } else {
        Ordering::Equal
    }
}

#[wasm_bindgen]
impl FileListExt {
    /// Create a list from a `FileList`, a `File`, an array of `File`s, or an
    /// array mixing all three. Omitting the argument creates an empty list.
    ///
    /// The constructor takes a single value. Pass several sources as one
    /// array; extra positional arguments are not read.
    ///
    /// # Example
    ///
    /// ```javascript
    /// const empty = new FileListExt();
    /// const single = new FileListExt(file);
    /// const mixed = new FileListExt([input.files, file, [a, b]]);
    /// ```
    #[wasm_bindgen(constructor)]
    pub fn new(files: JsValue) -> Result<FileListExt, JsValue> {
        let inner = ExtendedFileList::from_classified(classify_all(files), default_config())
            .map_err(WasmError::from)?;
        Ok(Self::wrap(inner))
    }

    /// Create a list from a standard `FileList`
    #[wasm_bindgen(js_name = fromFileList)]
    pub fn from_file_list(files: web_sys::FileList) -> FileListExt {
        let inner = ExtendedFileList::from_file_list(WasmFileList::from(files))
            .with_config(default_config());
        Self::wrap(inner)
    }

    /// Create a list from an array of `File`s
    #[wasm_bindgen(js_name = fromArray)]
    pub fn from_array(files: Array) -> Result<FileListExt, JsValue> {
        Self::new(Array::of1(&files).into())
    }

    /// Number of files in the list
    #[wasm_bindgen(getter)]
    pub fn length(&self) -> u32 {
        self.inner.len() as u32
    }

    /// File at `index`, or `undefined` when out of range
    pub fn item(&self, index: u32) -> Option<web_sys::File> {
        self.inner
            .get(index as usize)
            .map(|file| file.as_file().clone())
    }

    /// Convert into a standard `FileList` for native browser APIs
    #[wasm_bindgen(js_name = toFileList)]
    pub fn to_file_list(&self) -> Result<web_sys::FileList, JsValue> {
        let files = self
            .inner
            .to_file_list::<WasmDataTransfer>()
            .map_err(WasmError::from)?;
        Ok(files.into_inner())
    }

    /// Convert into a new `Array` of `File`s
    #[wasm_bindgen(js_name = toArray)]
    pub fn to_array(&self) -> Array {
        self.to_js_array()
    }

    /// Iterator over a snapshot of the current files
    pub fn values(&self) -> js_sys::Iterator {
        self.to_js_array().values()
    }

    /// Append a `File` or an array of `File`s; returns the new length.
    /// Called without an argument, the list is unchanged.
    pub fn push(&mut self, files: JsValue) -> Result<u32, JsValue> {
        let added = self.classify_files(files)?;
        Ok(self.inner.push(added) as u32)
    }

    /// Remove and return the last file, or `undefined` when empty
    pub fn pop(&mut self) -> Option<web_sys::File> {
        self.inner.pop().map(WasmFile::into_inner)
    }

    /// Remove and return the first file, or `undefined` when empty
    pub fn shift(&mut self) -> Option<web_sys::File> {
        self.inner.shift().map(WasmFile::into_inner)
    }

    /// Insert a `File` or an array of `File`s at the front; returns the new
    /// length. Called without an argument, the list is unchanged.
    pub fn unshift(&mut self, files: JsValue) -> Result<u32, JsValue> {
        let added = self.classify_files(files)?;
        Ok(self.inner.unshift(added) as u32)
    }

    /// New list with `items` (a `File`, `FileList` or array of them) appended
    pub fn concat(&self, items: JsValue) -> Result<FileListExt, JsValue> {
        let added = self.classify_files(items)?;
        Ok(Self::wrap(
            self.inner.concat([ConcatItem::Files(added.as_slice())]),
        ))
    }

    /// New list with the files of `other` appended
    #[wasm_bindgen(js_name = concatList)]
    pub fn concat_list(&self, other: &FileListExt) -> FileListExt {
        Self::wrap(self.inner.concat([ConcatItem::List(&other.inner)]))
    }

    /// Call `callback(file, index, array)` for each file
    #[wasm_bindgen(js_name = forEach)]
    pub fn for_each(&self, callback: &Function) -> Result<(), JsValue> {
        let array = self.to_js_array();
        self.inner.try_for_each(|file, index, _| {
            call_with_file(callback, file, index, &array).map(|_| ())
        })
    }

    /// New list of the files for which `predicate(file, index, array)` is truthy
    pub fn filter(&self, predicate: &Function) -> Result<FileListExt, JsValue> {
        let array = self.to_js_array();
        let inner = self.inner.try_filter(|file, index, _| {
            call_with_file(predicate, file, index, &array).map(|result| result.is_truthy())
        })?;
        Ok(Self::wrap(inner))
    }

    /// First file for which `predicate(file, index, array)` is truthy
    pub fn find(&self, predicate: &Function) -> Result<Option<web_sys::File>, JsValue> {
        let array = self.to_js_array();
        let found = self.inner.try_find(|file, index, _| {
            call_with_file(predicate, file, index, &array).map(|result| result.is_truthy())
        })?;
        Ok(found.map(|file| file.as_file().clone()))
    }

    /// Whether `file` is in the list at or after `fromIndex`
    pub fn includes(&self, file: web_sys::File, from_index: Option<i32>) -> bool {
        self.inner
            .includes(&WasmFile::from(file), from_index.map(|i| i as isize))
    }

    /// Index of the first occurrence of `file`, or `-1`
    #[wasm_bindgen(js_name = indexOf)]
    pub fn index_of(&self, file: web_sys::File) -> i32 {
        self.inner
            .index_of(&WasmFile::from(file))
            .map_or(-1, |index| index as i32)
    }

    /// Copy of `[start, end)`; negative bounds count from the end
    pub fn slice(&self, start: Option<i32>, end: Option<i32>) -> FileListExt {
        Self::wrap(self.inner.slice(
            start.map(|i| i as isize),
            end.map(|i| i as isize),
        ))
    }

    /// Sort in place, by `compareFn(a, b)` when given, otherwise by the
    /// configured default order
    pub fn sort(&mut self, compare_fn: Option<Function>) -> Result<(), JsValue> {
        let Some(compare) = compare_fn else {
            self.inner.sort();
            return Ok(());
        };

        self.inner.try_sort_by(|a, b| {
            let result = compare.call2(&JsValue::UNDEFINED, a.as_file(), b.as_file())?;
            Ok::<_, JsValue>(ordering_from_js(js_sys::Number::new(&result).value_of()))
        })?;
        Ok(())
    }

    /// Reverse the order in place
    pub fn reverse(&mut self) {
        self.inner.reverse();
    }

    /// Names of the files, in order
    pub fn names(&self) -> Vec<String> {
        self.inner.iter().map(FileHandle::name).collect()
    }
}

impl FileListExt {
    /// Flatten `value` into files, honoring this list's argument policy.
    /// `undefined` contributes no files.
    fn classify_files(&self, value: JsValue) -> Result<Vec<WasmFile>, JsValue> {
        let classified = ExtendedFileList::from_classified(classify_all(value), *self.inner.config())
            .map_err(WasmError::from)?;
        Ok(classified.to_array())
    }
}
