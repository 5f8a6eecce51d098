//! A C API for parsing names into `ParsedName` objects.
//!
//! Every string returned here is owned by the caller and must be released
//! with `full_name_parser_free_string`; every name with
//! `full_name_parser_free_name`.

use super::ParsedName;
use libc::c_char;
use std::ffi::{CStr, CString};
use std::mem;
use std::ptr;

// Interior NULs can't cross the boundary, so they are dropped
fn str_to_char_star(s: &str) -> *mut c_char {
    let owned = match CString::new(s) {
        Ok(owned) => owned,
        Err(_) => match CString::new(s.replace('\0', "")) {
            Ok(owned) => owned,
            Err(_) => return ptr::null_mut(),
        },
    };
    owned.into_raw()
}

/// Returns null for a null input or an ambiguous name.
#[no_mangle]
pub unsafe extern "C" fn full_name_parser_parse(input: *const c_char) -> *mut ParsedName {
    if input.is_null() {
        return ptr::null_mut();
    }

    let s = CStr::from_ptr(input).to_string_lossy();
    match ParsedName::parse(&s) {
        Ok(name) => Box::into_raw(Box::new(name)),
        Err(_) => ptr::null_mut(),
    }
}

#[no_mangle]
pub unsafe extern "C" fn full_name_parser_free_name(name_ptr: *mut ParsedName) {
    if !name_ptr.is_null() {
        mem::drop(Box::from_raw(name_ptr));
    }
}

#[no_mangle]
pub unsafe extern "C" fn full_name_parser_free_string(str_ptr: *mut c_char) {
    if !str_ptr.is_null() {
        mem::drop(CString::from_raw(str_ptr));
    }
}

#[no_mangle]
pub unsafe extern "C" fn full_name_parser_title(name: &ParsedName) -> *mut c_char {
    str_to_char_star(name.title())
}

#[no_mangle]
pub unsafe extern "C" fn full_name_parser_first(name: &ParsedName) -> *mut c_char {
    str_to_char_star(name.first())
}

#[no_mangle]
pub unsafe extern "C" fn full_name_parser_middle(name: &ParsedName) -> *mut c_char {
    str_to_char_star(name.middle())
}

#[no_mangle]
pub unsafe extern "C" fn full_name_parser_last(name: &ParsedName) -> *mut c_char {
    str_to_char_star(name.last())
}

#[no_mangle]
pub unsafe extern "C" fn full_name_parser_nick(name: &ParsedName) -> *mut c_char {
    str_to_char_star(name.nick())
}

#[no_mangle]
pub unsafe extern "C" fn full_name_parser_suffix(name: &ParsedName) -> *mut c_char {
    str_to_char_star(name.suffix())
}

#[no_mangle]
pub unsafe extern "C" fn full_name_parser_display_full(name: &ParsedName) -> *mut c_char {
    str_to_char_star(&name.display_full())
}
