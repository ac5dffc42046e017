use serde::Serialize;

///
/// RecordModel
/// Static schema snapshot for one record type.
///

#[derive(Clone, Debug, Serialize)]
pub struct RecordModel {
    /// Stable external name used in diagnostics.
    pub record_name: &'static str,
    /// Physical column names, in schema order. Order is authoritative:
    /// discovery and fallback scans preserve it.
    pub columns: &'static [&'static str],
}

impl RecordModel {
    /// Whether the schema carries a column with this exact name.
    #[must_use]
    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|column| *column == name)
    }
}

#[cfg(test)]
mod tests {
    use crate::test_fixtures::TOPIC;

    #[test]
    fn has_column_is_exact_match() {
        assert!(TOPIC.has_column("title_nl"));
        assert!(!TOPIC.has_column("title"));
        assert!(!TOPIC.has_column("title_"));
    }
}
