//! Value objects for user-supplied input.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::domain::error::DomainError;

/// Name of the project being scaffolded; also the root directory name.
///
/// Only the checks needed to keep the root inside the working directory are
/// applied. Anything else (casing, language identifier rules) is the user's
/// business.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ProjectName(String);

impl ProjectName {
    /// The name is kept exactly as given, surrounding whitespace included.
    pub fn parse(name: &str) -> Result<Self, DomainError> {
        let reject = |reason: &str| DomainError::InvalidProjectName {
            name: name.to_string(),
            reason: reason.to_string(),
        };

        if name.trim().is_empty() {
            return Err(reject("name cannot be empty"));
        }
        if name == "." || name == ".." {
            return Err(reject("name cannot be '.' or '..'"));
        }
        if name.contains('/') || name.contains('\\') {
            return Err(reject("name cannot contain path separators"));
        }
        if name.contains('\0') {
            return Err(reject("name cannot contain NUL bytes"));
        }

        Ok(Self(name.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for ProjectName {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for ProjectName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProjectName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
