//! Extension traits for `str` type conversions.
//!
//! Provides utilities for handling empty-as-none semantics, commonly needed
//! when optional filter fields arrive as empty strings from a form.

/// Extension trait for `str` to handle empty-as-none semantics.
pub trait StrExt {
    /// Returns `Some(&str)` if non-empty, `None` otherwise.
    ///
    /// Whitespace counts as content.
    #[must_use]
    fn non_empty(&self) -> Option<&str>;

    /// Returns self if non-empty, otherwise returns `default`.
    #[must_use]
    fn or_str<'a>(&'a self, default: &'a str) -> &'a str;
}

impl StrExt for str {
    #[inline]
    fn non_empty(&self) -> Option<&str> {
        (!self.is_empty()).then_some(self)
    }

    #[inline]
    fn or_str<'a>(&'a self, default: &'a str) -> &'a str {
        if self.is_empty() { default } else { self }
    }
}

/// Extension trait for `Option<String>` filter fields.
pub trait OptionStrExt {
    /// Returns the inner value when present and non-empty.
    ///
    /// # Example
    /// ```
    /// use talent_core::OptionStrExt;
    ///
    /// let some: Option<String> = Some("Ana".to_string());
    /// let empty: Option<String> = Some(String::new());
    ///
    /// assert_eq!(some.non_empty(), Some("Ana"));
    /// assert_eq!(empty.non_empty(), None);
    /// ```
    #[must_use]
    fn non_empty(&self) -> Option<&str>;
}

impl OptionStrExt for Option<String> {
    #[inline]
    fn non_empty(&self) -> Option<&str> {
        self.as_deref().and_then(StrExt::non_empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_strings_are_none() {
        assert_eq!("".non_empty(), None);
        assert_eq!(" \t".non_empty(), Some(" \t"));
        assert_eq!("x".non_empty(), Some("x"));
    }

    #[test]
    fn or_str_falls_back_on_empty() {
        assert_eq!("".or_str("-"), "-");
        assert_eq!("value".or_str("-"), "value");
    }

    #[test]
    fn option_non_empty() {
        assert_eq!(None::<String>.non_empty(), None);
        assert_eq!(Some(String::new()).non_empty(), None);
        assert_eq!(Some(" ".to_string()).non_empty(), Some(" "));
        assert_eq!(Some("a@b.c".to_string()).non_empty(), Some("a@b.c"));
    }
}
