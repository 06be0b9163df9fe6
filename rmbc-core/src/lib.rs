#![no_std]

//! RMBC Core - Royal Mail Barcode Format Definitions
//!
//! This crate provides the format definitions and validation rules for
//! 13-character Royal Mail barcodes
//!
//! All validation is pure: no I/O, no shared state, and a constant amount of
//! work per call. Input is expected to be normalized (trimmed, uppercased)
//! before validation; see [`normalize_barcode`] (requires the `alloc`
//! feature).

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod check_digit;
pub mod error;
pub mod format;
pub mod validation;

pub use check_digit::*;
pub use error::*;
pub use format::*;
pub use validation::*;
