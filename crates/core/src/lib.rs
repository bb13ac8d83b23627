//! Core library with identifier formatting, shared errors, and validation.
//!
//! This crate provides the pure building blocks used by the console:
//! - CPF and phone display formatting
//! - Error types for values that cannot be formatted
//! - Form validation helpers
//! - `str` extension traits for empty-as-none handling

pub mod error;
pub mod identifier;
pub mod str_ext;
pub mod validation;

pub use error::{FormatError, IdentifierKind};
pub use identifier::{
    extract_digits, format_national_id, format_phone_number, try_format_national_id,
    try_format_phone_number,
};
pub use str_ext::{OptionStrExt, StrExt};
pub use validation::ValidationError;
