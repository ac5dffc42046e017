use std::collections::BTreeMap;
use thiserror::Error as ThisError;

///
/// AccessError
///
/// Programmer-error surface of the accessor dispatch table. Resolution
/// itself never fails; only reaching for a field that was never declared
/// is reported.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum AccessError {
    #[error("field `{field}` is not declared translatable on `{record}`")]
    UndeclaredField {
        record: &'static str,
        field: String,
    },
}

///
/// ValidateError
/// Aggregated translation-validation failure, issue tags keyed by field.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum ValidateError {
    #[error("translation validation failed")]
    ValidationFailed(BTreeMap<String, Vec<String>>),
}

///
/// Error
///

#[derive(Debug, ThisError)]
pub enum Error {
    #[error(transparent)]
    Access(#[from] AccessError),

    #[error(transparent)]
    Validate(#[from] ValidateError),
}
