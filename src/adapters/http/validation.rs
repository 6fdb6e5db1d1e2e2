use std::collections::BTreeMap;

use validator::{ValidationError, ValidationErrors};

use crate::domain::tenant::value_objects::TenantStatus;

/// Field name -> single human-readable message
pub type FieldErrors = BTreeMap<String, String>;

/// When a field breaks several rules only the first of these is reported
const RULE_PRECEDENCE: [&str; 5] = [
  "required",
  "email",
  "length",
  "one_of",
  "no_consecutive_spaces",
];

/// Rejects empty or whitespace-only values
pub fn required(value: &str) -> Result<(), ValidationError> {
  if value.trim().is_empty() {
    return Err(ValidationError::new("required"));
  }
  Ok(())
}

/// Rejects two whitespace characters in a row
pub fn no_consecutive_spaces(value: &str) -> Result<(), ValidationError> {
  let mut previous_was_space = false;
  for c in value.chars() {
    let is_space = c.is_whitespace();
    if is_space && previous_was_space {
      return Err(ValidationError::new("no_consecutive_spaces"));
    }
    previous_was_space = is_space;
  }
  Ok(())
}

/// Accepts only the known tenant statuses
pub fn tenant_status(value: &str) -> Result<(), ValidationError> {
  if value.parse::<TenantStatus>().is_err() {
    return Err(ValidationError::new("one_of"));
  }
  Ok(())
}

/// Message used whenever a status outside the closed set is supplied
pub fn status_message() -> String {
  let allowed: Vec<&str> = TenantStatus::ALL.iter().map(|s| s.as_str()).collect();
  format!("Must be one of: {}.", allowed.join(", "))
}

/// Collapses validator output into one message per field
pub fn format_validation_errors(errors: &ValidationErrors) -> FieldErrors {
  errors
    .field_errors()
    .into_iter()
    .filter_map(|(field, field_errors)| {
      let first = field_errors
        .iter()
        .min_by_key(|error| rule_rank(&error.code))?;
      Some((field.to_lowercase(), describe(first)))
    })
    .collect()
}

fn rule_rank(code: &str) -> usize {
  RULE_PRECEDENCE
    .iter()
    .position(|rule| *rule == code)
    .unwrap_or(RULE_PRECEDENCE.len())
}

fn describe(error: &ValidationError) -> String {
  if let Some(message) = &error.message {
    return message.to_string();
  }

  match error.code.as_ref() {
    "required" => "This field is required.".to_string(),
    "email" => "Invalid email format.".to_string(),
    "length" => describe_length(error),
    "one_of" => status_message(),
    "no_consecutive_spaces" => "Must not contain consecutive spaces.".to_string(),
    other => format!("Invalid value ({}).", other),
  }
}

fn describe_length(error: &ValidationError) -> String {
  let param = |name: &str| error.params.get(name);
  let min = param("min").and_then(|v| v.as_u64());
  let max = param("max").and_then(|v| v.as_u64());
  let actual = param("value")
    .and_then(|v| v.as_str())
    .map(|v| v.chars().count() as u64);

  match (min, max, actual) {
    (Some(min), _, Some(actual)) if actual < min => format!("Must be at least {} characters.", min),
    (_, Some(max), _) => format!("Must be at most {} characters.", max),
    (Some(min), None, _) => format!("Must be at least {} characters.", min),
    _ => "Invalid length.".to_string(),
  }
}
