//! Username/password store.
//!
//! Passwords are kept in plaintext, exactly as typed. This file must not be
//! used to protect anything of value.

use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing::{debug, info};

use super::error::StorageError;
use super::manager::write_atomic;

/// Registered users, stored as a JSON object of username to password.
///
/// Users are kept in registration order, and the file is written in that order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    users: Vec<(String, String)>,
}

impl Credentials {
    /// Adds a user.
    ///
    /// Returns [`StorageError::UserExists`] if the username is already taken;
    /// usernames are compared exactly.
    pub fn register(&mut self, username: &str, password: &str) -> Result<(), StorageError> {
        if self.contains(username) {
            return Err(StorageError::UserExists(username.to_string()));
        }
        self.users.push((username.to_string(), password.to_string()));
        Ok(())
    }

    /// Returns `true` if `username` exists and its password is exactly `password`.
    pub fn authenticate(&self, username: &str, password: &str) -> bool {
        self.password(username) == Some(password)
    }

    pub fn contains(&self, username: &str) -> bool {
        self.password(username).is_some()
    }

    fn password(&self, username: &str) -> Option<&str> {
        self.users
            .iter()
            .find(|(name, _)| name == username)
            .map(|(_, password)| password.as_str())
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

impl Serialize for Credentials {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.users.iter().map(|(name, password)| (name, password)))
    }
}

struct CredentialsVisitor;

impl<'de> Visitor<'de> for CredentialsVisitor {
    type Value = Credentials;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an object of usernames to passwords")
    }

    // A repeated username keeps its first position and its last password.
    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Credentials, A::Error> {
        let mut users: Vec<(String, String)> = Vec::new();
        while let Some((name, password)) = map.next_entry::<String, String>()? {
            match users.iter_mut().find(|(existing, _)| *existing == name) {
                Some(entry) => entry.1 = password,
                None => users.push((name, password)),
            }
        }
        Ok(Credentials { users })
    }
}

impl<'de> Deserialize<'de> for Credentials {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(CredentialsVisitor)
    }
}

/// Loads credentials from `path`; a missing file is an empty store.
pub fn load_credentials(path: &Path) -> Result<Credentials, StorageError> {
    match fs::read_to_string(path) {
        Ok(content) => Ok(serde_json::from_str(&content)?),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            debug!(path = %path.display(), "credentials file not found");
            Ok(Credentials::default())
        }
        Err(e) => Err(e.into()),
    }
}

/// Writes credentials to `path`, replacing the file atomically.
pub fn save_credentials(path: &Path, credentials: &Credentials) -> Result<(), StorageError> {
    let content = serde_json::to_vec(credentials)?;
    write_atomic(path, &content)?;
    info!(path = %path.display(), users = credentials.len(), "saved credentials");
    Ok(())
}
