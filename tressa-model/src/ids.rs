use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// Server-issued user identifier
///
/// Opaque to the client: it is only ever echoed back in request paths.
/// Numeric ids from the server are kept in their decimal form.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawUserId", into = "String")]
pub struct UserId(String);

#[derive(Deserialize)]
#[serde(untagged)]
enum RawUserId {
    Text(String),
    Number(u64),
}

impl UserId {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl FromStr for UserId {
    type Err = ModelError;

    /// Rejects empty ids and anything that would escape its path segment
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id = s.trim();
        if id.is_empty() {
            return Err(ModelError::InvalidUserId("empty id".into()));
        }
        if let Some(bad) = id
            .chars()
            .find(|c| matches!(c, '/' | '?' | '#' | '%') || c.is_whitespace())
        {
            return Err(ModelError::InvalidUserId(format!(
                "{id:?} contains {bad:?}"
            )));
        }
        Ok(UserId(id.to_string()))
    }
}

impl TryFrom<RawUserId> for UserId {
    type Error = ModelError;

    fn try_from(raw: RawUserId) -> Result<Self, Self::Error> {
        match raw {
            RawUserId::Text(text) => text.parse(),
            RawUserId::Number(n) => Ok(UserId::from(n)),
        }
    }
}

impl From<u64> for UserId {
    fn from(id: u64) -> Self {
        UserId(id.to_string())
    }
}

impl From<UserId> for String {
    fn from(id: UserId) -> Self {
        id.0
    }
}

impl AsRef<str> for UserId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
