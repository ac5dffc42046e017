use crate::{
    catalog::ColumnCatalog,
    config::Config,
    error::AccessError,
    locale::LocaleContext,
    model::RecordModel,
    resolve::{self, is_present},
    traits::Record,
};
use serde::Serialize;
use std::collections::BTreeMap;

///
/// GetterMode
/// Read strategy, fixed per field at declaration time.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub enum GetterMode {
    /// Return the resolved current-locale column verbatim, blank or not.
    Direct,
    /// Resolved column, then the default locale's own column, then any
    /// available translation; first non-blank wins.
    DefaultFallback,
}

///
/// DeclareOptions
///

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct DeclareOptions {
    /// Per-field override of `Config::use_default`. `None` inherits the
    /// configuration value in effect at declaration time.
    pub use_default: Option<bool>,
}

///
/// FieldBinding
///

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub struct FieldBinding {
    pub getter: GetterMode,
}

///
/// Bindings
///
/// Dispatch table of one record type's translatable fields. Declaration
/// captures each field's getter strategy once; reads and writes consult
/// the table and the live configuration at access time.
///

#[derive(Clone, Debug)]
pub struct Bindings {
    catalog: ColumnCatalog,
    fields: BTreeMap<String, FieldBinding>,
}

impl Bindings {
    /// Declare `fields` translatable on `model`.
    #[must_use]
    pub fn declare(
        model: &'static RecordModel,
        fields: &[&str],
        options: DeclareOptions,
        config: &Config,
    ) -> Self {
        let getter = effective_getter(options, config);
        let catalog = ColumnCatalog::build(model, fields);
        let fields = fields
            .iter()
            .map(|field| ((*field).to_string(), FieldBinding { getter }))
            .collect();

        Self { catalog, fields }
    }

    /// Re-declare fields, replacing any existing bindings and re-indexing
    /// the catalog.
    pub fn extend(&mut self, fields: &[&str], options: DeclareOptions, config: &Config) {
        let getter = effective_getter(options, config);
        for field in fields {
            self.fields
                .insert((*field).to_string(), FieldBinding { getter });
        }

        let all: Vec<&str> = self.fields.keys().map(String::as_str).collect();
        self.catalog = ColumnCatalog::build(self.catalog.model(), &all);
    }

    /// Catalog backing this table.
    #[must_use]
    pub const fn catalog(&self) -> &ColumnCatalog {
        &self.catalog
    }

    /// Getter strategy declared for `field`.
    #[must_use]
    pub fn getter_mode(&self, field: &str) -> Option<GetterMode> {
        self.fields.get(field).map(|binding| binding.getter)
    }

    /// Write `value` to `field`'s current-locale column.
    ///
    /// The setter always targets the resolved column for the current
    /// locale (the default locale's column when the current one has no
    /// backing column); it never scans siblings.
    pub fn write<R: Record>(
        &self,
        record: &mut R,
        field: &str,
        value: Option<String>,
        config: &Config,
        locales: &LocaleContext,
    ) -> Result<(), AccessError> {
        self.binding(field)?;

        let column =
            resolve::resolve_column(&self.catalog, field, locales.current(), config, locales);
        record.set_column_value(&column, value);

        Ok(())
    }

    /// Read `field` under its declared getter strategy.
    pub fn read<R: Record>(
        &self,
        record: &R,
        field: &str,
        config: &Config,
        locales: &LocaleContext,
    ) -> Result<Option<String>, AccessError> {
        let binding = self.binding(field)?;

        let column =
            resolve::resolve_column(&self.catalog, field, locales.current(), config, locales);
        let direct = record.column_value(&column);

        let value = match binding.getter {
            GetterMode::Direct => direct,
            GetterMode::DefaultFallback => {
                if direct.is_some_and(is_present) {
                    direct
                } else {
                    let default_column =
                        resolve::localized_column(field, locales.default_locale(), config);

                    record
                        .column_value(&default_column)
                        .filter(|value| is_present(value))
                        .or_else(|| resolve::find_any_translation(&self.catalog, record, field))
                }
            }
        };

        Ok(value.map(str::to_string))
    }

    fn binding(&self, field: &str) -> Result<&FieldBinding, AccessError> {
        self.fields
            .get(field)
            .ok_or_else(|| AccessError::UndeclaredField {
                record: self.catalog.model().record_name,
                field: field.to_string(),
            })
    }
}

// effective policy: explicit per-field option, else the configuration in
// effect at declaration time
const fn effective_getter(options: DeclareOptions, config: &Config) -> GetterMode {
    let use_default = match options.use_default {
        Some(explicit) => explicit,
        None => config.use_default,
    };

    if use_default {
        GetterMode::DefaultFallback
    } else {
        GetterMode::Direct
    }
}
