use crate::{model::RecordModel, validate::IssueKind};

///
/// RecordKind
/// Compile-time identity of a record type: its static schema model.
///

pub trait RecordKind {
    /// Schema snapshot for this record type.
    fn model() -> &'static RecordModel;
}

///
/// Record
///
/// Generic named-slot access to one record instance. Reads of columns the
/// instance does not carry yield `None`; writes to such columns are the
/// host storage layer's concern. The engine never verifies storage.
///

pub trait Record: RecordKind {
    /// Current value of a physical column.
    fn column_value(&self, column: &str) -> Option<&str>;

    /// Store a value into a physical column.
    fn set_column_value(&mut self, column: &str, value: Option<String>);
}

///
/// ValidationSink
///
/// Host validation pipeline boundary. Failures flow through the sink and
/// are never raised by the engine.
///

pub trait ValidationSink {
    fn add_error(&mut self, field: &str, kind: IssueKind, message: &str);
}
