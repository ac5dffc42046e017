//! Column resolution: the requested locale's column first, the default
//! locale's column second. Resolution never fails; a name is always
//! produced, and dereferencing a column the schema lacks is the storage
//! layer's concern.

use crate::{
    catalog::ColumnCatalog,
    config::Config,
    locale::{Locale, LocaleContext},
    obs::{self, MetricsEvent},
    traits::Record,
};

/// Column name for `field` localized to `locale` under `config`.
#[must_use]
pub fn localized_column(field: &str, locale: &Locale, config: &Config) -> String {
    format!("{field}_{}", locale.column_suffix(config))
}

///
/// resolve_column
///
/// Requested locale's column when the schema has it, otherwise the name
/// of the default locale's column. The fallback name is returned even
/// when no such column exists either.
///

#[must_use]
pub fn resolve_column(
    catalog: &ColumnCatalog,
    field: &str,
    locale: &Locale,
    config: &Config,
    locales: &LocaleContext,
) -> String {
    if catalog.column_exists(field, locale, config) {
        obs::record(MetricsEvent::ResolveHit);

        localized_column(field, locale, config)
    } else {
        obs::record(MetricsEvent::ResolveFallback);

        localized_column(field, locales.default_locale(), config)
    }
}

///
/// find_any_translation
///
/// First non-blank value across `field`'s available columns, in catalog
/// order. Realizes "some translation, regardless of locale"; `None` when
/// every column is blank.
///

#[must_use]
pub fn find_any_translation<'r, R: Record>(
    catalog: &ColumnCatalog,
    record: &'r R,
    field: &str,
) -> Option<&'r str> {
    obs::record(MetricsEvent::AnyScan);

    catalog
        .available(field)
        .iter()
        .filter_map(|column| record.column_value(column))
        .find(|value| is_present(value))
}

// blank means absent, empty, or whitespace-only
pub(crate) fn is_present(value: &str) -> bool {
    !value.trim().is_empty()
}
