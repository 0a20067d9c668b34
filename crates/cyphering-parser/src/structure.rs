//! Structural validation of decoded model documents.
//!
//! Decoding accepts any record shape; this pass checks that every record
//! carries the fields its section requires, fills in default aliases and
//! lowers the document into a [`RawModel`]. Problems are collected into a
//! [`StructureReport`] so every faulty record is reported at once.

use std::fmt;

use log::{debug, warn};

use cyphering_core::text::lower_first;

use crate::{
    document::{
        ElementRecord, ModelDocument, RawAttributes, RawElement, RawModel, Section,
        trimmed_properties, trimmed_statements,
    },
    error::{Diagnostic, ErrorCode, ParseError, Severity},
};

/// A single problem found in one record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    section: Section,
    index: usize,
    element: Option<String>,
    field: &'static str,
    message: String,
    severity: Severity,
}

impl FieldViolation {
    fn error(record: &RecordRef<'_>, field: &'static str, message: impl Into<String>) -> Self {
        Self::new(record, field, message, Severity::Error)
    }

    fn warning(record: &RecordRef<'_>, field: &'static str, message: impl Into<String>) -> Self {
        Self::new(record, field, message, Severity::Warning)
    }

    fn new(
        record: &RecordRef<'_>,
        field: &'static str,
        message: impl Into<String>,
        severity: Severity,
    ) -> Self {
        Self {
            section: record.section,
            index: record.index,
            element: record.name(),
            field,
            message: message.into(),
            severity,
        }
    }

    /// Section the offending record belongs to.
    pub fn section(&self) -> Section {
        self.section
    }

    /// Position of the record within its section.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Alias or label of the record, when it has one.
    pub fn element(&self) -> Option<&str> {
        self.element.as_deref()
    }

    pub fn field(&self) -> &'static str {
        self.field
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// Convert into an `E100` diagnostic.
    pub fn to_diagnostic(&self) -> Diagnostic {
        let diagnostic = match self.severity {
            Severity::Error => Diagnostic::error(self.to_string()),
            Severity::Warning => Diagnostic::warning(self.to_string()),
        };
        let diagnostic = diagnostic.with_code(ErrorCode::E100);
        match self.field {
            "label" | "mode" => diagnostic.with_help(format!(
                "every element needs a non-empty `{}` field",
                self.field
            )),
            "reltype" if self.section == Section::Rels => {
                diagnostic.with_help("write the endpoints as `A -> B`, `A - B` or `A <- B`")
            }
            "reltype" => diagnostic.with_help("move the element under `rels`"),
            "attr.key" | "attr.on_create" | "attr.on_update" => diagnostic
                .with_help("write a Cypher expression, e.g. `null` or `${entry}.field`"),
            _ => diagnostic,
        }
    }
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]", self.section, self.index)?;
        if let Some(element) = &self.element {
            write!(f, " `{element}`")?;
        }
        write!(f, ": `{}` {}", self.field, self.message)
    }
}

/// All violations found while checking a document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StructureReport {
    violations: Vec<FieldViolation>,
}

impl StructureReport {
    pub fn violations(&self) -> &[FieldViolation] {
        &self.violations
    }

    /// Check whether any violation is an error.
    pub fn has_errors(&self) -> bool {
        self.violations.iter().any(|v| v.severity.is_error())
    }

    /// Convert the report into a result.
    ///
    /// Warnings are logged; any error turns the whole report into a
    /// [`ParseError`] carrying every violation.
    pub fn into_result(self) -> Result<(), ParseError> {
        if self.has_errors() {
            return Err(ParseError::new(
                self.violations
                    .iter()
                    .map(FieldViolation::to_diagnostic)
                    .collect(),
            ));
        }

        for violation in &self.violations {
            warn!(code:? = ErrorCode::E100; "{violation}");
        }
        Ok(())
    }
}

/// A record together with where it came from.
struct RecordRef<'a> {
    section: Section,
    index: usize,
    record: &'a ElementRecord,
}

impl RecordRef<'_> {
    /// Best available name for messages: alias, then label.
    fn name(&self) -> Option<String> {
        [&self.record.alias, &self.record.label]
            .into_iter()
            .flatten()
            .map(|value| value.trim())
            .find(|value| !value.is_empty())
            .map(str::to_string)
    }
}

/// Check every record of `document` and lower it into a [`RawModel`].
///
/// Records with errors are left out of the returned model; callers must
/// consult the report before using it.
pub fn check(document: ModelDocument) -> (RawModel, StructureReport) {
    let mut report = StructureReport::default();

    let nodes = check_section(&document.nodes, Section::Nodes, &mut report);
    let rels = check_section(&document.rels, Section::Rels, &mut report);

    debug!(
        nodes = nodes.len(),
        rels = rels.len(),
        violations = report.violations.len();
        "Checked model structure"
    );

    (RawModel { nodes, rels }, report)
}

fn check_section(
    records: &[ElementRecord],
    section: Section,
    report: &mut StructureReport,
) -> Vec<RawElement> {
    records
        .iter()
        .enumerate()
        .filter_map(|(index, record)| {
            check_record(
                &RecordRef {
                    section,
                    index,
                    record,
                },
                report,
            )
        })
        .collect()
}

fn check_record(record: &RecordRef<'_>, report: &mut StructureReport) -> Option<RawElement> {
    let fields = record.record;
    let before = report.violations.len();

    let label = required(record, "label", fields.label.as_deref(), report);
    let mode = required(record, "mode", fields.mode.as_deref(), report);

    let alias = match fields.alias.as_deref().map(str::trim) {
        Some("") => {
            report
                .violations
                .push(FieldViolation::error(record, "alias", "must not be empty"));
            None
        }
        Some(alias) => Some(alias.to_string()),
        None => label.as_deref().map(lower_first),
    };

    let reltype = fields.reltype.as_deref().map(str::trim);
    let reltype = match (record.section, reltype) {
        (Section::Rels, None) => {
            report
                .violations
                .push(FieldViolation::error(record, "reltype", "is required"));
            None
        }
        (Section::Rels, Some("")) => {
            report
                .violations
                .push(FieldViolation::error(record, "reltype", "must not be empty"));
            None
        }
        (Section::Rels, Some(reltype)) => Some(reltype.to_string()),
        (Section::Nodes, Some(_)) => {
            report.violations.push(FieldViolation::warning(
                record,
                "reltype",
                "is ignored on nodes",
            ));
            None
        }
        (Section::Nodes, None) => None,
    };

    check_attributes(record, report);

    let has_errors = report.violations[before..]
        .iter()
        .any(|v| v.severity.is_error());
    if has_errors {
        return None;
    }

    Some(RawElement {
        label: label?,
        alias: alias?,
        mode: mode?,
        reltype,
        attr: RawAttributes {
            key: trimmed_properties(&fields.attr.key),
            on_create: trimmed_properties(&fields.attr.on_create),
            on_update: trimmed_properties(&fields.attr.on_update),
        },
        index: trimmed_statements(&fields.index),
        constraint: trimmed_statements(&fields.constraint),
        custom: fields.custom.clone(),
    })
}

/// Every attribute entry needs a value.
fn check_attributes(record: &RecordRef<'_>, report: &mut StructureReport) {
    let attr = &record.record.attr;
    let blocks = [
        ("attr.key", &attr.key),
        ("attr.on_create", &attr.on_create),
        ("attr.on_update", &attr.on_update),
    ];

    for (field, values) in blocks {
        for (key, value) in values {
            if value.trim().is_empty() {
                report.violations.push(FieldViolation::error(
                    record,
                    field,
                    format!("entry `{key}` must have a value"),
                ));
            }
        }
    }
}

/// Read a required, non-empty, trimmed field.
fn required(
    record: &RecordRef<'_>,
    field: &'static str,
    value: Option<&str>,
    report: &mut StructureReport,
) -> Option<String> {
    match value.map(str::trim) {
        Some("") => {
            report
                .violations
                .push(FieldViolation::error(record, field, "must not be empty"));
            None
        }
        Some(value) => Some(value.to_string()),
        None => {
            report
                .violations
                .push(FieldViolation::error(record, field, "is required"));
            None
        }
    }
}
