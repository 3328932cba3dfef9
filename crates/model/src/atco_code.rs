use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// An ATCO code, the national identifier of a public transport access point
/// (a bus stop, a tram platform, ...) in Great Britain.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub struct AtcoCode(String);

impl AtcoCode {
    pub fn new<S: Into<String>>(code: S) -> Self {
        Self(code.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for AtcoCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for AtcoCode {
    fn from(code: String) -> Self {
        Self(code)
    }
}

impl From<&str> for AtcoCode {
    fn from(code: &str) -> Self {
        Self(code.to_owned())
    }
}
