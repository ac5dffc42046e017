use crate::{
    model::RecordModel,
    traits::{Record, RecordKind, ValidationSink},
    validate::IssueKind,
};
use std::collections::BTreeMap;

///
/// TOPIC
/// Schema snapshot shared by unit tests. Column order is deliberate:
/// discovery must preserve it.
///

pub(crate) static TOPIC: RecordModel = RecordModel {
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
    ],
};

///
/// TestTopic
/// Column-map record over the `TOPIC` schema.
///

#[derive(Clone, Debug, Default)]
pub(crate) struct TestTopic {
    values: BTreeMap<String, String>,
}

impl TestTopic {
    /// Build a record with the given column values.
    pub(crate) fn with(columns: &[(&str, &str)]) -> Self {
        Self {
            values: columns
                .iter()
                .map(|(column, value)| ((*column).to_string(), (*value).to_string()))
                .collect(),
        }
    }

    /// Stored value of a column, bypassing resolution.
    pub(crate) fn raw(&self, column: &str) -> Option<&str> {
        self.values.get(column).map(String::as_str)
    }
}

impl RecordKind for TestTopic {
    fn model() -> &'static RecordModel {
        &TOPIC
    }
}

impl Record for TestTopic {
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
/// CollectedErrors
/// ValidationSink capturing `(field, kind, message)` triples in order.
///

#[derive(Debug, Default)]
pub(crate) struct CollectedErrors {
    pub(crate) errors: Vec<(String, IssueKind, String)>,
}

impl ValidationSink for CollectedErrors {
    fn add_error(&mut self, field: &str, kind: IssueKind, message: &str) {
        self.errors
            .push((field.to_string(), kind, message.to_string()));
    }
}
