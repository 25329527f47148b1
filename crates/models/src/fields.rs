//! Field-by-field readers over a raw JSON object.
//!
//! A [`FieldReader`] keeps reading after a failure so that one call reports
//! every offending field. `null` counts as absent everywhere.

use serde_json::{Map, Value};

use crate::errors::{FieldError, FieldErrorKind, ValidationError};

pub struct FieldReader<'a> {
    map: &'a Map<String, Value>,
    errors: Vec<FieldError>,
}

impl<'a> FieldReader<'a> {
    pub fn new(map: &'a Map<String, Value>) -> Self {
        Self { map, errors: Vec::new() }
    }

    fn present(&self, name: &str) -> Option<&'a Value> {
        match self.map.get(name) {
            None | Some(Value::Null) => None,
            Some(v) => Some(v),
        }
    }

    fn push(&mut self, field: &str, kind: FieldErrorKind, message: &str) {
        self.errors.push(FieldError::new(field, kind, message));
    }

    pub fn required_str(&mut self, name: &str) -> String {
        match self.present(name) {
            Some(Value::String(s)) => s.clone(),
            Some(_) => {
                self.push(name, FieldErrorKind::WrongType, "expected a string");
                String::new()
            }
            None => {
                self.push(name, FieldErrorKind::Missing, "field required");
                String::new()
            }
        }
    }

    /// Required string of at least `min_chars` characters.
    pub fn required_str_min(&mut self, name: &str, min_chars: usize) -> String {
        let before = self.errors.len();
        let s = self.required_str(name);
        if self.errors.len() == before && s.chars().count() < min_chars {
            let msg = format!("must be at least {min_chars} characters");
            self.push(name, FieldErrorKind::TooShort, &msg);
        }
        s
    }

    pub fn optional_str(&mut self, name: &str) -> Option<String> {
        match self.present(name) {
            Some(Value::String(s)) => Some(s.clone()),
            Some(_) => {
                self.push(name, FieldErrorKind::WrongType, "expected a string");
                None
            }
            None => None,
        }
    }

    /// Optional absolute http(s) URL, kept exactly as given.
    pub fn optional_url(&mut self, name: &str) -> Option<String> {
        let before = self.errors.len();
        let s = self.optional_str(name)?;
        if self.errors.len() == before && !is_http_url(&s) {
            self.push(name, FieldErrorKind::InvalidUrl, "expected an http(s) URL");
            return None;
        }
        Some(s)
    }

    pub fn email(&mut self, name: &str) -> String {
        let before = self.errors.len();
        let s = self.required_str(name);
        if self.errors.len() == before && !is_valid_email(&s) {
            self.push(name, FieldErrorKind::InvalidEmail, "not a valid email address");
        }
        s
    }

    pub fn bool_or(&mut self, name: &str, default: bool) -> bool {
        match self.present(name) {
            Some(Value::Bool(b)) => *b,
            Some(_) => {
                self.push(name, FieldErrorKind::WrongType, "expected a boolean");
                default
            }
            None => default,
        }
    }

    /// Sequence of strings; absent means empty. Bad elements are reported as `name[i]`.
    pub fn str_list(&mut self, name: &str) -> Vec<String> {
        match self.present(name) {
            Some(Value::Array(items)) => {
                let mut out = Vec::with_capacity(items.len());
                for (i, item) in items.iter().enumerate() {
                    match item {
                        Value::String(s) => out.push(s.clone()),
                        _ => {
                            let field = format!("{name}[{i}]");
                            self.push(&field, FieldErrorKind::WrongType, "expected a string");
                        }
                    }
                }
                out
            }
            Some(_) => {
                self.push(name, FieldErrorKind::WrongType, "expected a list of strings");
                Vec::new()
            }
            None => Vec::new(),
        }
    }

    /// Return `value` if nothing failed, otherwise every collected error.
    pub fn finish<T>(self, value: T) -> Result<T, ValidationError> {
        if self.errors.is_empty() {
            Ok(value)
        } else {
            Err(ValidationError::new(self.errors))
        }
    }
}

/// Require a JSON object at the top level.
pub fn as_object(value: &Value) -> Result<&Map<String, Value>, ValidationError> {
    value.as_object().ok_or_else(|| {
        ValidationError::single("body", FieldErrorKind::NotAnObject, "expected a JSON object")
    })
}

pub fn is_http_url(s: &str) -> bool {
    match url::Url::parse(s) {
        Ok(u) => matches!(u.scheme(), "http" | "https") && u.host_str().map(|h| !h.is_empty()).unwrap_or(false),
        Err(_) => false,
    }
}

/// `local@domain` where the local part is a dot-atom of RFC 5322 `atext` and
/// the domain is dotted letter/digit/hyphen labels ending in a non-numeric one.
pub fn is_valid_email(s: &str) -> bool {
    let Some((local, domain)) = s.rsplit_once('@') else { return false };
    is_dot_atom(local) && is_domain(domain)
}

fn is_atext(c: char) -> bool {
    c.is_ascii_alphanumeric() || "!#$%&'*+-/=?^_`{|}~".contains(c)
}

fn is_dot_atom(local: &str) -> bool {
    !local.is_empty() && local.split('.').all(|atom| !atom.is_empty() && atom.chars().all(is_atext))
}

fn is_domain(domain: &str) -> bool {
    let labels: Vec<&str> = domain.split('.').collect();
    if labels.len() < 2 {
        return false;
    }
    let labels_ok = labels.iter().all(|l| {
        !l.is_empty()
            && l.len() <= 63
            && !l.starts_with('-')
            && !l.ends_with('-')
            && l.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
    });
    let tld_ok = labels
        .last()
        .map(|tld| !tld.chars().all(|c| c.is_ascii_digit()))
        .unwrap_or(false);
    labels_ok && tld_ok
}
