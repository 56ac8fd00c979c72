use std::collections::HashMap;
use std::fmt;

pub const EMAIL_LOCAL_MAX_LEN: usize = 64;
pub const EMAIL_MAX_LEN: usize = 254;
pub const PASSWORD_MIN_LEN: usize = 6;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub field: &'static str,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Every constraint violation found in one request
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(Vec<ValidationError>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.push(ValidationError::new(field, message));
    }

    /// Record the error of a failed check, if any
    pub fn check(&mut self, result: ValidationResult) {
        if let Err(e) = result {
            self.0.push(e);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ValidationError> {
        self.0.iter()
    }

    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }

    /// Field -> message, first violation per field wins
    pub fn field_map(&self) -> HashMap<String, String> {
        let mut map = HashMap::new();
        for error in &self.0 {
            map.entry(error.field.to_string())
                .or_insert_with(|| error.message.clone());
        }
        map
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.0.iter().map(ToString::to_string).collect();
        write!(f, "{}", parts.join("; "))
    }
}

impl std::error::Error for ValidationErrors {}

pub type ValidationResult = Result<(), ValidationError>;

/// Request payloads that check their own constraints after deserialization
pub trait Validate {
    fn validate(&self) -> Result<(), ValidationErrors>;
}

pub fn validate_not_blank(field: &'static str, value: &str, message: &str) -> ValidationResult {
    if value.trim().is_empty() {
        return Err(ValidationError::new(field, message));
    }

    Ok(())
}

pub fn validate_min_len(field: &'static str, value: &str, min_len: usize, message: &str) -> ValidationResult {
    if value.chars().count() < min_len {
        return Err(ValidationError::new(field, message));
    }

    Ok(())
}

/// Blank values pass; pair with `validate_not_blank` when the field is required.
pub fn validate_email(field: &'static str, value: &str, message: &str) -> ValidationResult {
    if value.is_empty() || is_valid_email(value) {
        Ok(())
    } else {
        Err(ValidationError::new(field, message))
    }
}

pub fn is_valid_email(value: &str) -> bool {
    if value.len() > EMAIL_MAX_LEN {
        return false;
    }
    let Some((local, domain)) = value.rsplit_once('@') else {
        return false;
    };

    let local_ok = !local.is_empty()
        && local.len() <= EMAIL_LOCAL_MAX_LEN
        && !local.starts_with('.')
        && !local.ends_with('.')
        && !local.contains("..")
        && local
            .chars()
            .all(|ch| ch.is_ascii_alphanumeric() || "!#$%&'*+/=?^_`{|}~.-".contains(ch));

    let domain_ok = !domain.is_empty()
        && domain.split('.').all(|label| {
            !label.is_empty()
                && !label.starts_with('-')
                && !label.ends_with('-')
                && label.chars().all(|ch| ch.is_ascii_alphanumeric() || ch == '-')
        });

    local_ok && domain_ok
}
