//! Structured error handling for identifier formatting.
//!
//! *Not representable* is an expected outcome, not a fault: display code
//! usually falls back to the raw value. The error type exists so callers
//! that do need a hard failure can propagate it with `?`.

use std::fmt;

use thiserror::Error;

/// Kind of identifier being formatted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum IdentifierKind {
    /// Brazilian individual taxpayer id (CPF).
    NationalId,
    Phone,
}

impl IdentifierKind {
    /// Human-readable name used in messages.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NationalId => "CPF",
            Self::Phone => "phone number",
        }
    }

    /// Digit counts accepted for this kind.
    #[must_use]
    pub const fn accepted_lengths(self) -> &'static [usize] {
        match self {
            Self::NationalId => &[11],
            Self::Phone => &[10, 11],
        }
    }
}

impl fmt::Display for IdentifierKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Formatting error type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("{kind} not representable: found {digits} digits, expected {}", expected(.kind))]
    NotRepresentable { kind: IdentifierKind, digits: usize },
}

impl FormatError {
    /// Create a not representable error for `kind` with the digit count found.
    #[must_use]
    pub const fn not_representable(kind: IdentifierKind, digits: usize) -> Self {
        Self::NotRepresentable { kind, digits }
    }

    /// Identifier kind that failed to format.
    #[must_use]
    pub const fn kind(&self) -> IdentifierKind {
        match self {
            Self::NotRepresentable { kind, .. } => *kind,
        }
    }
}

fn expected(kind: &IdentifierKind) -> String {
    kind.accepted_lengths()
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" or ")
}
