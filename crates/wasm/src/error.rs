//! Error handling for WASM bindings.
//!
//! Converts sidebar errors into JavaScript `Error` objects carrying a `code`.

use thiserror::Error;
use tocbar_core::SidebarError;
use wasm_bindgen::prelude::*;

/// Error codes for TypeScript consumption.
#[wasm_bindgen]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Invalid configuration object
    Config,
    /// Table of contents could not be parsed
    Json,
    /// Current page URL could not be parsed
    Url,
    /// Unknown node path
    Path,
    /// Session storage failure
    Storage,
    /// Host element or browser API missing
    Dom,
    /// Unknown error
    Unknown,
}

impl ErrorCode {
    fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::Config => "CONFIG_ERROR",
            ErrorCode::Json => "JSON_ERROR",
            ErrorCode::Url => "URL_ERROR",
            ErrorCode::Path => "PATH_ERROR",
            ErrorCode::Storage => "STORAGE_ERROR",
            ErrorCode::Dom => "DOM_ERROR",
            ErrorCode::Unknown => "UNKNOWN_ERROR",
        }
    }
}

/// A JavaScript-friendly error type.
///
/// Not a wasm_bindgen struct: it converts into a plain JavaScript `Error`.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct SidebarJsError {
    code: ErrorCode,
    message: String,
}

impl SidebarJsError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Config, message)
    }

    pub fn dom(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Dom, message)
    }
}

impl From<SidebarError> for SidebarJsError {
    fn from(err: SidebarError) -> Self {
        let code = match &err {
            SidebarError::Config(_) => ErrorCode::Config,
            SidebarError::Json(_) => ErrorCode::Json,
            SidebarError::InvalidUrl { .. } => ErrorCode::Url,
            SidebarError::InvalidPath(_) | SidebarError::ParsePath(_) => ErrorCode::Path,
            SidebarError::InvalidScrollOffset { .. } | SidebarError::Store(_) => ErrorCode::Storage,
            SidebarError::Io(_) => ErrorCode::Unknown,
        };
        Self::new(code, err.to_string())
    }
}

impl From<serde_json::Error> for SidebarJsError {
    fn from(err: serde_json::Error) -> Self {
        Self::new(ErrorCode::Json, err.to_string())
    }
}

impl From<serde_wasm_bindgen::Error> for SidebarJsError {
    fn from(err: serde_wasm_bindgen::Error) -> Self {
        Self::config(format!("Invalid sidebar configuration: {err}"))
    }
}

impl From<SidebarJsError> for JsValue {
    fn from(err: SidebarJsError) -> Self {
        let js_error = js_sys::Error::new(&err.message);
        js_sys::Reflect::set(
            &js_error,
            &"code".into(),
            &JsValue::from_str(err.code.as_str()),
        )
        .ok();
        js_error.into()
    }
}
