//! Locale-aware column resolution for records that store translations in
//! per-locale physical columns (`title_en`, `title_nl`, …): suffix
//! normalization, column discovery, default-locale fallback, accessor
//! dispatch, and the at-least-one-translation validator.
#![warn(unreachable_pub)]

pub mod bind;
pub mod catalog;
pub mod config;
pub mod error;
pub mod locale;
pub mod model;
pub mod obs;
pub mod resolve;
pub mod traits;
pub mod validate;

// test
#[cfg(test)]
pub(crate) mod test_fixtures;

pub use error::Error;

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

///
/// Prelude
///
/// Prelude contains only domain vocabulary. Errors, metrics, and the
/// low-level resolution helpers stay behind their modules.
///

pub mod prelude {
    pub use crate::{
        bind::{Bindings, DeclareOptions, GetterMode},
        catalog::ColumnCatalog,
        config::Config,
        locale::{Locale, LocaleContext},
        model::RecordModel,
        traits::{Record, RecordKind, ValidationSink},
        validate::{IssueKind, RequiredTranslations, ValidateOptions, ValidationEvent},
    };
}
