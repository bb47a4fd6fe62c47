//! Credential payloads for registration and login
//!
//! Passwords are held in [`SecureCredential`] so they are zeroed on drop
//! and never show up in `Debug` output.

use std::fmt;

use serde::{Serialize, Serializer};
use serde_json::{Map, Value};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Secret string that zeroes its memory on drop
#[derive(Clone, Zeroize, ZeroizeOnDrop, PartialEq, Eq)]
pub struct SecureCredential {
    data: String,
}

impl SecureCredential {
    pub fn new(data: impl Into<String>) -> Self {
        Self { data: data.into() }
    }

    /// Borrow the secret. Do not keep the reference past the credential's lifetime.
    pub fn expose_secret(&self) -> &str {
        &self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl From<String> for SecureCredential {
    fn from(data: String) -> Self {
        Self::new(data)
    }
}

impl From<&str> for SecureCredential {
    fn from(data: &str) -> Self {
        Self::new(data)
    }
}

impl fmt::Debug for SecureCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecureCredential")
            .field("len", &self.len())
            .field("data", &"[REDACTED]")
            .finish()
    }
}

impl Serialize for SecureCredential {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.data)
    }
}

/// Sign-up form as sent to the users endpoint
///
/// `email` and `password` are always present; anything else the form
/// collects rides along in `fields` and is flattened into the request body.
#[derive(Clone, Serialize)]
pub struct Registration {
    pub email: String,
    pub password: SecureCredential,
    #[serde(flatten)]
    fields: Map<String, Value>,
}

/// Keys owned by the typed fields of [`Registration`]
pub const RESERVED_FIELDS: [&str; 2] = ["email", "password"];

impl Registration {
    pub fn new(email: impl Into<String>, password: impl Into<SecureCredential>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            fields: Map::new(),
        }
    }

    /// Add an extra form field. `email` and `password` are ignored here;
    /// they can only be set through [`Registration::new`].
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        let name = name.into();
        if !RESERVED_FIELDS.contains(&name.as_str()) {
            self.fields.insert(name, value.into());
        }
        self
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    /// Credentials for signing in as the account just registered
    pub fn login_credentials(&self) -> LoginCredentials {
        LoginCredentials {
            username: self.email.clone(),
            password: self.password.clone(),
        }
    }
}

impl fmt::Debug for Registration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registration")
            .field("email", &self.email)
            .field("password", &"***")
            .field("fields", &self.fields.keys().collect::<Vec<_>>())
            .finish()
    }
}

/// Username/password pair accepted by the login endpoint
#[derive(Clone, Serialize, PartialEq, Eq)]
pub struct LoginCredentials {
    pub username: String,
    pub password: SecureCredential,
}

impl LoginCredentials {
    pub fn new(username: impl Into<String>, password: impl Into<SecureCredential>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for LoginCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginCredentials")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}
