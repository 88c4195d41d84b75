//! C ABI bindings (feature `ffi`).
//!
//! Input and output are NUL-terminated JSON strings. The input is an array
//! of `[x, y, "identity"]` triples, depot first. The output is either
//! `{"ok": <OptimizationResult>}` or `{"error": "<message>"}` and must be
//! released with [`u_tour_free_string`].

use std::ffi::{CStr, CString};

use libc::c_char;
use serde::Serialize;
use tracing::warn;

use crate::models::{OptimizationResult, StopSet};
use crate::optimizer::RouteOptimizer;

#[derive(Serialize)]
#[serde(rename_all = "lowercase")]
enum Response {
    Ok(OptimizationResult),
    Error(String),
}

fn solve_json(input: &str) -> Response {
    let stops: StopSet = match serde_json::from_str(input) {
        Ok(stops) => stops,
        Err(err) => return Response::Error(err.to_string()),
    };
    match RouteOptimizer::default().solve(&stops) {
        Ok(result) => Response::Ok(result),
        Err(err) => Response::Error(err.to_string()),
    }
}

fn to_c_string(response: &Response) -> *mut c_char {
    let json = match serde_json::to_string(response) {
        Ok(json) => json,
        Err(err) => {
            warn!(%err, "failed to serialize ffi response");
            return std::ptr::null_mut();
        }
    };
    match CString::new(json) {
        Ok(s) => s.into_raw(),
        Err(_) => std::ptr::null_mut(),
    }
}

/// Solves a JSON stop set and returns a JSON response.
///
/// Returns null only if the response cannot be encoded.
///
/// # Safety
///
/// `input` must be null or point to a valid NUL-terminated string.
#[no_mangle]
pub unsafe extern "C" fn u_tour_solve_json(input: *const c_char) -> *mut c_char {
    if input.is_null() {
        return to_c_string(&Response::Error("input is null".into()));
    }
    // SAFETY: non-null and NUL-terminated per the caller contract.
    let input = unsafe { CStr::from_ptr(input) };
    let response = match input.to_str() {
        Ok(text) => solve_json(text),
        Err(err) => Response::Error(err.to_string()),
    };
    to_c_string(&response)
}

/// Releases a string returned by [`u_tour_solve_json`].
///
/// # Safety
///
/// `ptr` must be null or a pointer previously returned by this library
/// that has not been freed yet.
#[no_mangle]
pub unsafe extern "C" fn u_tour_free_string(ptr: *mut c_char) {
    if !ptr.is_null() {
        // SAFETY: allocated by CString::into_raw in to_c_string.
        drop(unsafe { CString::from_raw(ptr) });
    }
}
