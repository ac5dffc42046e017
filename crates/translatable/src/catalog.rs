use crate::{config::Config, locale::Locale, model::RecordModel, resolve};
use std::collections::BTreeMap;

///
/// ColumnCatalog
///
/// Precomputed field → matching-column index for one record type. Built
/// once at declaration time from the static schema model; lookups
/// afterwards are map reads, never pattern scans.
///

#[derive(Clone, Debug)]
pub struct ColumnCatalog {
    model: &'static RecordModel,
    by_field: BTreeMap<String, Vec<&'static str>>,
}

impl ColumnCatalog {
    /// Build the index for the given logical fields.
    #[must_use]
    pub fn build(model: &'static RecordModel, fields: &[&str]) -> Self {
        let by_field = fields
            .iter()
            .map(|field| ((*field).to_string(), Self::scan(model, field)))
            .collect();

        Self { model, by_field }
    }

    /// Schema model this catalog indexes.
    #[must_use]
    pub const fn model(&self) -> &'static RecordModel {
        self.model
    }

    /// Columns implementing `field`, in schema order.
    ///
    /// A column matches when its name is `field`, an underscore, and a
    /// suffix of at least two word characters. The two-character floor
    /// keeps one-letter-suffixed columns out; the prefix anchor still
    /// admits unrelated columns that happen to share the shape
    /// (`title_secondary` matches field `title`). That looseness is part
    /// of the column-name contract.
    #[must_use]
    pub fn scan(model: &RecordModel, field: &str) -> Vec<&'static str> {
        model
            .columns
            .iter()
            .copied()
            .filter(|column| matches_field(column, field))
            .collect()
    }

    /// Cached matching columns for a declared field, empty for fields the
    /// catalog was not built with.
    #[must_use]
    pub fn available(&self, field: &str) -> &[&'static str] {
        self.by_field.get(field).map_or(&[], Vec::as_slice)
    }

    /// Whether `field` was indexed at build time.
    #[must_use]
    pub fn covers(&self, field: &str) -> bool {
        self.by_field.contains_key(field)
    }

    /// True iff the schema carries the exact column named for `locale`.
    #[must_use]
    pub fn column_exists(&self, field: &str, locale: &Locale, config: &Config) -> bool {
        let name = resolve::localized_column(field, locale, config);

        self.available(field).iter().any(|column| *column == name)
    }
}

// suffix rule: `_` then at least two word characters ([A-Za-z0-9_])
fn matches_field(column: &str, field: &str) -> bool {
    let Some(rest) = column.strip_prefix(field) else {
        return false;
    };
    let Some(suffix) = rest.strip_prefix('_') else {
        return false;
    };

    suffix.len() >= 2 && suffix.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'_')
}
