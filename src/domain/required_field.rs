use std::convert::TryFrom;
use std::fmt;

/// A form value that was submitted and is not empty.
///
/// Whitespace counts as content: only absent, `null` or `""` are rejected.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RequiredField(String);

impl AsRef<str> for RequiredField {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RequiredField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<Option<String>> for RequiredField {
    type Error = String;

    fn try_from(value: Option<String>) -> Result<Self, Self::Error> {
        match value {
            Some(value) if !value.is_empty() => Ok(Self(value)),
            Some(_) => Err("field is empty".to_string()),
            None => Err("field is missing".to_string()),
        }
    }
}
