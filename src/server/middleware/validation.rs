//! Declarative request body validation.
//!
//! A payload shape is described by a `BodySchema`: a static table of `FieldRule`s.
//! `validate` checks a JSON body against it, strips fields the table does not name
//! and reports every violated rule at once. `validate_body` wraps that into a
//! middleware so routes can declare validation ahead of auth and role checks.

use std::sync::LazyLock;

use axum::{
    body::Body,
    extract::{Request, State},
    http::{header, HeaderValue},
    middleware::Next,
    response::Response,
};
use regex::Regex;
use serde_json::{Map, Value};

use crate::{model::user::Role, server::error::AppError};

/// Upper bound on the request bodies the validator will buffer.
const MAX_BODY_BYTES: usize = 1024 * 1024;

static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^@\s]+@[^@\s.]+(\.[^@\s.]+)+$").expect("email pattern is valid")
});

/// Shape a field's value must have.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Any non-empty string.
    String,
    /// A string shaped like an email address.
    Email,
    /// An RFC 3339 date-time string.
    DateTime,
    /// One of the `Role` names.
    Role,
}

#[derive(Debug, Clone, Copy)]
pub struct FieldRule {
    pub name: &'static str,
    pub kind: FieldKind,
    pub min_len: Option<usize>,
    pub max_len: Option<usize>,
}

impl FieldRule {
    pub const fn new(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            min_len: None,
            max_len: None,
        }
    }

    /// Bounds the length in characters, inclusive on both ends.
    pub const fn length(self, min: usize, max: usize) -> Self {
        Self {
            min_len: Some(min),
            max_len: Some(max),
            ..self
        }
    }

    fn check(&self, value: &Value, violations: &mut Vec<String>) {
        let name = self.name;

        let Some(text) = value.as_str() else {
            violations.push(match self.kind {
                FieldKind::Email => format!("{name} must be an email"),
                FieldKind::DateTime => format!("{name} must be a valid ISO 8601 date string"),
                FieldKind::Role => role_violation(name),
                FieldKind::String => format!("{name} must be a string"),
            });
            return;
        };

        if text.is_empty() {
            violations.push(format!("{name} should not be empty"));
            return;
        }

        match self.kind {
            FieldKind::String => {}
            FieldKind::Email => {
                if !EMAIL.is_match(text) {
                    violations.push(format!("{name} must be an email"));
                }
            }
            FieldKind::DateTime => {
                if chrono::DateTime::parse_from_rfc3339(text).is_err() {
                    violations.push(format!("{name} must be a valid ISO 8601 date string"));
                }
            }
            FieldKind::Role => {
                if Role::parse(text).is_none() {
                    violations.push(role_violation(name));
                }
            }
        }

        let len = text.chars().count();
        if let Some(min) = self.min_len {
            if len < min {
                violations.push(format!(
                    "{name} must be longer than or equal to {min} characters"
                ));
            }
        }
        if let Some(max) = self.max_len {
            if len > max {
                violations.push(format!(
                    "{name} must be shorter than or equal to {max} characters"
                ));
            }
        }
    }
}

fn role_violation(name: &str) -> String {
    format!(
        "{name} must be one of the following values: {}, {}",
        Role::Admin.as_str(),
        Role::User.as_str()
    )
}

/// Validation rules for one request payload.
///
/// In partial mode (updates) absent or null fields are skipped, but every field
/// that is present is still checked.
#[derive(Debug, Clone, Copy)]
pub struct BodySchema {
    pub fields: &'static [FieldRule],
    pub partial: bool,
}

impl BodySchema {
    pub const fn new(fields: &'static [FieldRule]) -> Self {
        Self {
            fields,
            partial: false,
        }
    }

    pub const fn partial(self) -> Self {
        Self {
            partial: true,
            ..self
        }
    }
}

/// Validates a JSON body against `schema`.
///
/// # Returns
/// - `Ok(Map)` - The body restricted to the fields the schema names
/// - `Err(AppError::Validation)` - Body is not an object, or one or more rules
///   failed; the message joins every violation with `", "`
pub fn validate(schema: &BodySchema, body: Value) -> Result<Map<String, Value>, AppError> {
    let Value::Object(mut input) = body else {
        return Err(AppError::Validation(
            "Request body must be a JSON object".to_string(),
        ));
    };

    let mut cleaned = Map::new();
    let mut violations = Vec::new();

    for rule in schema.fields {
        match input.remove(rule.name) {
            None | Some(Value::Null) if schema.partial => {}
            None | Some(Value::Null) => {
                violations.push(format!("{} should not be empty", rule.name));
            }
            Some(value) => {
                rule.check(&value, &mut violations);
                cleaned.insert(rule.name.to_string(), value);
            }
        }
    }

    if !violations.is_empty() {
        return Err(AppError::Validation(violations.join(", ")));
    }

    Ok(cleaned)
}

/// Middleware validating the request body against the schema it was built with.
///
/// The downstream handler receives the cleaned body as `application/json`.
pub async fn validate_body(
    State(schema): State<BodySchema>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let (mut parts, body) = req.into_parts();

    let bytes = axum::body::to_bytes(body, MAX_BODY_BYTES)
        .await
        .map_err(|e| AppError::Validation(format!("Request body could not be read: {e}")))?;

    let value = if bytes.is_empty() {
        Value::Object(Map::new())
    } else {
        serde_json::from_slice(&bytes)
            .map_err(|e| AppError::Validation(format!("Request body is not valid JSON: {e}")))?
    };

    let cleaned = validate(&schema, value)?;

    let bytes = serde_json::to_vec(&Value::Object(cleaned))
        .map_err(|e| AppError::InternalError(format!("Failed to re-encode request body: {e}")))?;

    parts.headers.remove(header::CONTENT_LENGTH);
    parts.headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("application/json"),
    );

    Ok(next.run(Request::from_parts(parts, Body::from(bytes))).await)
}
