//! Commit identifier (SHA-1 hash)
//!
//! Commit IDs are 40-character lowercase hexadecimal strings.
//!
//! ## Format
//!
//! - Full: 40 hex characters (e.g., "abc123...def"), printed by default
//! - Short: First 7 characters (e.g., "abc123d")

use crate::artifacts::objects::{OBJECT_ID_LENGTH, SHORT_OBJECT_ID_LENGTH};

/// Commit identifier (SHA-1 hash)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CommitId(String);

impl CommitId {
    /// Parse and validate a commit ID from a string
    ///
    /// Upper-case hex digits are accepted and normalized to lower case.
    pub fn try_parse(id: &str) -> anyhow::Result<Self> {
        if id.len() != OBJECT_ID_LENGTH {
            return Err(anyhow::anyhow!("Invalid object ID length: {}", id.len()));
        }
        if !id.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(anyhow::anyhow!("Invalid object ID characters: {}", id));
        }
        Ok(Self(id.to_ascii_lowercase()))
    }

    /// Abbreviated form used in log lines
    pub fn short(&self) -> &str {
        &self.0[..SHORT_OBJECT_ID_LENGTH]
    }
}

impl From<git2::Oid> for CommitId {
    fn from(oid: git2::Oid) -> Self {
        Self(oid.to_string())
    }
}

impl TryFrom<&CommitId> for git2::Oid {
    type Error = git2::Error;

    fn try_from(id: &CommitId) -> Result<Self, Self::Error> {
        git2::Oid::from_str(&id.0)
    }
}

impl std::fmt::Display for CommitId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
