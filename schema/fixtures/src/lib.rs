//! Shared record fixtures for the engine's test surfaces: a `Topic`
//! record over a realistic multi-locale schema, plus an error-bag sink.

use std::collections::BTreeMap;
use translatable::prelude::*;

///
/// TOPIC_MODEL
///

pub static TOPIC_MODEL: RecordModel = RecordModel {
    record_name: "topic",
    columns: &[
        "id",
        "title_en",
        "title_nl",
        "title_de",
        "title_fr",
        "body_en",
        "body_nl",
        "body_de",
        "body_fr",
        "created_at",
    ],
};

///
/// Topic
/// Column-map record used by integration tests; stands in for a
/// persisted row.
///

#[derive(Clone, Debug, Default)]
pub struct Topic {
    values: BTreeMap<String, String>,
}

impl Topic {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a topic with the given column values.
    #[must_use]
    pub fn with(columns: &[(&str, &str)]) -> Self {
        Self {
            values: columns
                .iter()
                .map(|(column, value)| ((*column).to_string(), (*value).to_string()))
                .collect(),
        }
    }

    /// Stored value of a column, bypassing resolution.
    #[must_use]
    pub fn raw(&self, column: &str) -> Option<&str> {
        self.values.get(column).map(String::as_str)
    }
}

impl RecordKind for Topic {
    fn model() -> &'static RecordModel {
        &TOPIC_MODEL
    }
}

impl Record for Topic {
    fn column_value(&self, column: &str) -> Option<&str> {
        self.values.get(column).map(String::as_str)
    }

    fn set_column_value(&mut self, column: &str, value: Option<String>) {
        match value {
            Some(value) => {
                self.values.insert(column.to_string(), value);
            }
            None => {
                self.values.remove(column);
            }
        }
    }
}

///
/// ErrorBag
/// Minimal host-side validation error store.
///

#[derive(Debug, Default)]
pub struct ErrorBag {
    entries: Vec<ErrorEntry>,
}

///
/// ErrorEntry
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ErrorEntry {
    pub field: String,
    pub kind: IssueKind,
    pub message: String,
}

impl ErrorBag {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn entries(&self) -> &[ErrorEntry] {
        &self.entries
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl ValidationSink for ErrorBag {
    fn add_error(&mut self, field: &str, kind: IssueKind, message: &str) {
        self.entries.push(ErrorEntry {
            field: field.to_string(),
            kind,
            message: message.to_string(),
        });
    }
}
