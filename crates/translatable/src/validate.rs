use crate::{
    catalog::ColumnCatalog,
    error::ValidateError,
    model::RecordModel,
    obs::{self, MetricsEvent},
    resolve,
    traits::{Record, ValidationSink},
};
use serde::Serialize;
use std::{collections::BTreeMap, fmt};

/// Message attached to failures when the declaration does not override it.
pub const DEFAULT_MESSAGE: &str = "must have a translation";

///
/// IssueKind
///

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub enum IssueKind {
    /// No locale's column holds a non-blank value.
    MustHaveTranslation,
}

impl IssueKind {
    /// Stable tag consumed by host validation pipelines.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::MustHaveTranslation => "must_have_translation",
        }
    }
}

impl fmt::Display for IssueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

///
/// ValidationEvent
/// Host lifecycle point a rule is wired to. `Save` covers both creates
/// and updates.
///

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize)]
pub enum ValidationEvent {
    #[default]
    Save,
    Create,
    Update,
}

impl ValidationEvent {
    /// Whether a rule declared for `self` runs at `event`.
    #[must_use]
    pub const fn covers(self, event: Self) -> bool {
        match self {
            Self::Save => true,
            Self::Create => matches!(event, Self::Create),
            Self::Update => matches!(event, Self::Update),
        }
    }
}

///
/// ValidateOptions
///

#[derive(Clone, Debug, Default)]
pub struct ValidateOptions {
    /// Lifecycle event the rule runs on.
    pub on: ValidationEvent,
    /// Override for the default failure message.
    pub message: Option<String>,
}

///
/// TranslationIssue
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct TranslationIssue {
    pub field: String,
    pub kind: IssueKind,
    pub message: String,
}

///
/// RequiredTranslations
///
/// At-least-one-translation rule over a set of logical fields: some
/// locale's column must hold a non-blank value, regardless of which
/// locale currently has focus. Failures are collected per field, never
/// short-circuited, and reach the host through its `ValidationSink`.
///

#[derive(Clone, Debug)]
pub struct RequiredTranslations {
    catalog: ColumnCatalog,
    fields: Vec<String>,
    on: ValidationEvent,
    message: String,
}

impl RequiredTranslations {
    /// Declare the rule for `fields` on `model`.
    #[must_use]
    pub fn declare(model: &'static RecordModel, fields: &[&str], options: ValidateOptions) -> Self {
        Self {
            catalog: ColumnCatalog::build(model, fields),
            fields: fields.iter().map(ToString::to_string).collect(),
            on: options.on,
            message: options.message.unwrap_or_else(|| DEFAULT_MESSAGE.to_string()),
        }
    }

    /// Validated field names, in declaration order.
    #[must_use]
    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    /// Lifecycle event the rule is wired to.
    #[must_use]
    pub const fn on(&self) -> ValidationEvent {
        self.on
    }

    /// Check every validated field, collecting all failures.
    #[must_use]
    pub fn check<R: Record>(&self, record: &R) -> Vec<TranslationIssue> {
        let mut issues = Vec::new();
        for field in &self.fields {
            if resolve::find_any_translation(&self.catalog, record, field).is_some() {
                continue;
            }

            obs::record(MetricsEvent::ValidationFailure);
            issues.push(TranslationIssue {
                field: field.clone(),
                kind: IssueKind::MustHaveTranslation,
                message: self.message.clone(),
            });
        }

        issues
    }

    /// Run the rule at `event`, reporting failures through `sink`.
    pub fn run<R, S>(&self, record: &R, event: ValidationEvent, sink: &mut S)
    where
        R: Record,
        S: ValidationSink,
    {
        if !self.on.covers(event) {
            return;
        }

        for issue in self.check(record) {
            sink.add_error(&issue.field, issue.kind, &issue.message);
        }
    }

    /// Check and aggregate failures into an error, issue tags keyed by
    /// field.
    pub fn validate<R: Record>(&self, record: &R) -> Result<(), ValidateError> {
        let issues = self.check(record);
        if issues.is_empty() {
            return Ok(());
        }

        let mut by_field: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for issue in issues {
            by_field
                .entry(issue.field)
                .or_default()
                .push(issue.kind.as_str().to_string());
        }

        Err(ValidateError::ValidationFailed(by_field))
    }
}
