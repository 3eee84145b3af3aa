//! User login identifier.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Longest login accepted from user input.
pub const MAX_LOGIN_LEN: usize = 128;

/// Validated user login - newtype for type safety.
///
/// Construction from user input goes through [`Login::parse`], which rejects
/// empty values and values containing whitespace or control characters.
/// Logins that pass validation but match no user are still valid; reports
/// for them are simply empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Login(String);

impl Login {
    /// Parse and validate a login.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedInput`] when the value is empty, too long,
    /// or contains whitespace/control characters.
    pub fn parse(raw: &str) -> Result<Self, Error> {
        let malformed = |reason: &str| Error::MalformedInput {
            field: "login",
            reason: reason.to_string(),
        };

        if raw.is_empty() {
            return Err(malformed("must not be empty"));
        }
        if raw.len() > MAX_LOGIN_LEN {
            return Err(malformed(&format!(
                "must be at most {MAX_LOGIN_LEN} bytes"
            )));
        }
        if raw.chars().any(|c| c.is_whitespace() || c.is_control()) {
            return Err(malformed("must not contain whitespace or control characters"));
        }

        Ok(Self(raw.to_string()))
    }

    /// Get the login as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Login {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Login {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for Login {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
