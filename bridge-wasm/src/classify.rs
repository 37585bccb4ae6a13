//! Classification of untyped JavaScript arguments.
//!
//! JavaScript callers pass `FileList | File | File[]` values. Each one is
//! sorted into a [`ClassifiedArg`] here by an explicit `instanceof` check;
//! anything else becomes `Malformed` with a short description, and the
//! list's `ArgumentPolicy` decides what happens next.

use core_filelist::{ClassifiedArg, FileListArg};
use js_sys::Array;
use wasm_bindgen::{JsCast, JsValue};

use crate::collection::WasmFileList;
use crate::file::WasmFile;

/// Classify one argument
pub fn classify(value: JsValue) -> ClassifiedArg<WasmFileList> {
    if value.is_instance_of::<web_sys::FileList>() {
        let list: web_sys::FileList = value.unchecked_into();
        return FileListArg::Collection(WasmFileList::from(list)).into();
    }

    if value.is_instance_of::<web_sys::File>() {
        let file: web_sys::File = value.unchecked_into();
        return FileListArg::File(WasmFile::from(file)).into();
    }

    if Array::is_array(&value) {
        let array: Array = value.unchecked_into();
        let mut files = Vec::with_capacity(array.length() as usize);
        for (index, element) in array.iter().enumerate() {
            match element.dyn_into::<web_sys::File>() {
                Ok(file) => files.push(WasmFile::from(file)),
                Err(other) => {
                    return ClassifiedArg::Malformed(format!(
                        "array element {} is {}, expected File",
                        index,
                        describe(&other)
                    ));
                }
            }
        }
        return FileListArg::Files(files).into();
    }

    ClassifiedArg::Malformed(format!("{}, expected FileList, File or File[]", describe(&value)))
}

/// Classify a constructor-style argument list.
///
/// An array is treated as the argument list itself, so `[fileList, file,
/// [a, b]]` flattens exactly like the variadic form. `undefined` is the
/// empty argument list; any other single value is one argument.
pub fn classify_all(value: JsValue) -> Vec<ClassifiedArg<WasmFileList>> {
    if value.is_undefined() {
        return Vec::new();
    }

    if Array::is_array(&value) {
        let array: Array = value.unchecked_into();
        return array.iter().map(classify).collect();
    }

    vec![classify(value)]
}

/// Short human-readable description of a JS value's type
pub fn describe(value: &JsValue) -> String {
    if value.is_null() {
        return "null".to_string();
    }
    if value.is_undefined() {
        return "undefined".to_string();
    }
    if Array::is_array(value) {
        return "an array".to_string();
    }
    match value.js_typeof().as_string() {
        Some(kind) => format!("a value of type {}", kind),
        None => "an unknown value".to_string(),
    }
}
