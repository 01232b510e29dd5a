//! FFI interface for C/C++ interop
//!
//! Provides C-compatible functions for turning quiz export HTML into JSON
//! records or a text report.

use std::ffi::{c_char, CString};
use std::ptr;

use crate::error::{QuizError, Result};
use crate::extractors::parse_quiz;
use crate::output::{render_report, to_json};

/// Result struct returned to C/C++
/// Both pointers are owned by Rust and must be freed via quiz_free_result
#[repr(C)]
pub struct QuizResultFFI {
    /// Output text: JSON or report (null-terminated)
    pub data_ptr: *mut c_char,
    /// Error message if parsing failed (null-terminated), or null on success
    pub error_ptr: *mut c_char,
}

/// Parse quiz HTML into the structured JSON form.
///
/// # Arguments
/// * `html_ptr` - Pointer to HTML content (UTF-8, not necessarily null-terminated)
/// * `html_len` - Length of HTML content in bytes
///
/// # Returns
/// QuizResultFFI with either data_ptr set (success) or error_ptr set (failure)
///
/// # Safety
/// - `html_ptr` must point to valid memory of at least `html_len` bytes
/// - Caller must free the result via `quiz_free_result`
#[no_mangle]
pub unsafe extern "C" fn quiz_parse_html(
    html_ptr: *const c_char,
    html_len: usize,
) -> QuizResultFFI {
    let result = read_html(html_ptr, html_len).and_then(|html| to_json(&parse_quiz(&html)));
    into_ffi(result)
}

/// Parse quiz HTML and render the text report.
///
/// # Safety
/// Same as quiz_parse_html
#[no_mangle]
pub unsafe extern "C" fn quiz_render_report(
    html_ptr: *const c_char,
    html_len: usize,
) -> QuizResultFFI {
    let result = read_html(html_ptr, html_len).map(|html| render_report(&parse_quiz(&html)));
    into_ffi(result)
}

/// Free a QuizResultFFI returned by quiz_parse_html or quiz_render_report
///
/// # Safety
/// - `result` must have been returned by this library
/// - Must only be called once per result
#[no_mangle]
pub unsafe extern "C" fn quiz_free_result(result: QuizResultFFI) {
    if !result.data_ptr.is_null() {
        drop(CString::from_raw(result.data_ptr));
    }
    if !result.error_ptr.is_null() {
        drop(CString::from_raw(result.error_ptr));
    }
}

// Null or empty input is an empty document
unsafe fn read_html(html_ptr: *const c_char, html_len: usize) -> Result<String> {
    if html_ptr.is_null() || html_len == 0 {
        return Ok(String::new());
    }
    let slice = std::slice::from_raw_parts(html_ptr as *const u8, html_len);
    std::str::from_utf8(slice)
        .map(str::to_string)
        .map_err(|_| QuizError::InvalidUtf8("HTML content".to_string()))
}

fn into_ffi(result: Result<String>) -> QuizResultFFI {
    match result {
        Ok(text) => match CString::new(text) {
            Ok(cstr) => QuizResultFFI {
                data_ptr: cstr.into_raw(),
                error_ptr: ptr::null_mut(),
            },
            Err(_) => make_error_result("Result contains null bytes"),
        },
        Err(e) => make_error_result(&e.to_string()),
    }
}

// Helper to create error result
fn make_error_result(msg: &str) -> QuizResultFFI {
    let error_ptr = CString::new(msg.replace('\0', ""))
        .map(CString::into_raw)
        .unwrap_or(ptr::null_mut());
    QuizResultFFI {
        data_ptr: ptr::null_mut(),
        error_ptr,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::CStr;

    unsafe fn owned(raw: *mut c_char) -> Option<String> {
        if raw.is_null() {
            None
        } else {
            Some(CStr::from_ptr(raw).to_string_lossy().into_owned())
        }
    }

    unsafe fn take(result: QuizResultFFI) -> (Option<String>, Option<String>) {
        let data = owned(result.data_ptr);
        let error = owned(result.error_ptr);
        quiz_free_result(result);
        (data, error)
    }

    #[test]
    fn test_parse_html_ffi() {
        let html = r#"<div class="question_holder"><div class="question_text">2 + 2?</div></div>"#;
        let (data, error) =
            unsafe { take(quiz_parse_html(html.as_ptr() as *const c_char, html.len())) };

        assert!(error.is_none());
        let value: serde_json::Value = serde_json::from_str(&data.unwrap()).unwrap();
        assert_eq!(value[0]["question_text"], "2 + 2?");
    }

    #[test]
    fn test_render_report_ffi() {
        let html = r#"<div class="question_holder"><div class="question_text">2 + 2?</div></div>"#;
        let (data, _) =
            unsafe { take(quiz_render_report(html.as_ptr() as *const c_char, html.len())) };
        assert!(data.unwrap().starts_with("Question: 2 + 2?\nAnswers:\n"));
    }

    #[test]
    fn test_null_html_is_empty_document() {
        let (data, error) = unsafe { take(quiz_parse_html(ptr::null(), 0)) };
        assert!(error.is_none());
        assert_eq!(data.as_deref(), Some("[]"));
    }

    #[test]
    fn test_invalid_utf8() {
        let bytes: [u8; 3] = [0x3c, 0xff, 0xfe];
        let (data, error) =
            unsafe { take(quiz_parse_html(bytes.as_ptr() as *const c_char, bytes.len())) };
        assert!(data.is_none());
        assert_eq!(error.as_deref(), Some("Invalid UTF-8 in HTML content"));
    }
}
