use crate::student::StudentDraft;
use chrono::NaiveDate;
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;
use thiserror::Error;

/// The fields a client must supply, as non-empty strings, on every create
/// and update.
const REQUIRED_FIELDS: [&str; 4] = ["first_name", "last_name", "email", "phone_num"];

/// The expected wire format for `start_date`.
const DATE_FORMAT: &str = "%Y-%m-%d";

/// A map of field name to the list of problems found with that field.
///
/// Serializes transparently, so a rejected request body of
/// `{"first_name": null}` produces
/// `{"first_name": ["Field may not be null."], "last_name": [...], ...}`.
/// A `BTreeMap` keeps the field ordering deterministic across runs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Error)]
#[serde(transparent)]
#[error("input validation failed on {} field(s)", .0.len())]
pub struct ValidationErrors(BTreeMap<String, Vec<String>>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one problem against one field.
    pub fn add(&mut self, field: &str, message: &str) {
        self.0
            .entry(field.to_string())
            .or_default()
            .push(message.to_string());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The messages recorded against a single field, if any.
    pub fn field(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }

    /// The names of every rejected field, in deterministic order.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

impl StudentDraft {
    /// Validates an untrusted JSON body against the Student schema.
    ///
    /// Rules:
    /// - `first_name`, `last_name`, `email` and `phone_num` must be present,
    ///   strings, and non-empty. Every violation is reported under its own
    ///   field name, so a body missing three fields names all three.
    /// - `id` is server-assigned and read-only; a body that supplies one is
    ///   rejected rather than silently stripped.
    /// - `start_date` is optional (JSON null counts as absent) but must parse
    ///   as a `YYYY-MM-DD` date when given.
    /// - Any other field is dropped without complaint, matching the schema's
    ///   field whitelist on output.
    pub fn validate(raw: &Value) -> Result<StudentDraft, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let Some(body) = raw.as_object() else {
            errors.add("_schema", "Invalid input type.");
            return Err(errors);
        };

        if body.contains_key("id") {
            errors.add("id", "Field is read-only.");
        }

        for field in REQUIRED_FIELDS {
            match body.get(field) {
                None => errors.add(field, "Missing data for required field."),
                Some(Value::Null) => errors.add(field, "Field may not be null."),
                Some(Value::String(text)) if text.trim().is_empty() => {
                    errors.add(field, "Field may not be empty.");
                }
                Some(Value::String(_)) => {}
                Some(_) => errors.add(field, "Not a valid string."),
            }
        }

        let start_date = match body.get("start_date") {
            None | Some(Value::Null) => None,
            Some(Value::String(text)) => match NaiveDate::parse_from_str(text, DATE_FORMAT) {
                Ok(date) => Some(date),
                Err(_) => {
                    errors.add("start_date", "Not a valid date.");
                    None
                }
            },
            Some(_) => {
                errors.add("start_date", "Not a valid date.");
                None
            }
        };

        if !errors.is_empty() {
            return Err(errors);
        }

        let text = |field: &str| -> String {
            // Required fields were just checked to be non-empty strings.
            body[field].as_str().unwrap_or_default().to_string()
        };

        Ok(StudentDraft {
            first_name: text("first_name"),
            last_name: text("last_name"),
            email: text("email"),
            phone_num: text("phone_num"),
            start_date,
        })
    }
}
