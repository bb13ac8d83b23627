//! Query string construction for listing filters.

/// Filter that can be sent as URL query parameters.
pub trait QueryParams {
    /// Ordered key/value pairs, unencoded. Absent filters are omitted.
    fn query_pairs(&self) -> Vec<(&'static str, String)>;

    /// Percent-encoded `k=v&k=v` string built from [`Self::query_pairs`].
    ///
    /// Example: `Nome=Jo%C3%A3o&PageNumber=1&PageSize=5`
    fn to_query_string(&self) -> String {
        self.query_pairs()
            .iter()
            .map(|(key, value)| format!("{key}={}", urlencoding::encode(value)))
            .collect::<Vec<_>>()
            .join("&")
    }
}
