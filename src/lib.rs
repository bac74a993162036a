//! Core library for the `appsetting` configuration loader.
//!
//! This crate provides one utility: resolve a JSON config file path against
//! a base directory, read the file as UTF-8 text, and hand back the parsed
//! document as a generic JSON value. A missing file and malformed JSON
//! surface as distinct errors that embed the resolved absolute path; any
//! other I/O failure propagates as a generic read error. The loader never
//! validates, transforms, or caches what it reads.
pub mod config;
pub mod error;

#[cfg(feature = "fuzzing")]
pub mod fuzzing;
