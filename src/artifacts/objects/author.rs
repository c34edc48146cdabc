//! Author and committer identity for wip commits
//!
//! Each role is read from its own `GIT_<ROLE>_NAME` / `GIT_<ROLE>_EMAIL` and,
//! when present, `GIT_<ROLE>_DATE`. Without these variables the repository
//! configuration (`user.name`, `user.email`) is used instead.

use crate::errors::BackendError;
use chrono::{DateTime, FixedOffset};
use derive_new::new;

/// Which signature of a commit is being resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Author,
    Committer,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Author => write!(f, "author"),
            Role::Committer => write!(f, "committer"),
        }
    }
}

impl Role {
    /// Name, email and date variables of the role
    pub fn env_vars(self) -> [&'static str; 3] {
        match self {
            Role::Author => ["GIT_AUTHOR_NAME", "GIT_AUTHOR_EMAIL", "GIT_AUTHOR_DATE"],
            Role::Committer => [
                "GIT_COMMITTER_NAME",
                "GIT_COMMITTER_EMAIL",
                "GIT_COMMITTER_DATE",
            ],
        }
    }
}

#[derive(Debug, Clone, Eq, PartialEq, new)]
pub struct Author {
    name: String,
    email: String,
    timestamp: Option<DateTime<FixedOffset>>,
}

impl Author {
    /// Load the identity of `role` from environment variables
    ///
    /// Returns `None` unless both name and email are set.
    pub fn load_from_env(role: Role) -> Option<Self> {
        let [name_var, email_var, date_var] = role.env_vars();
        let name = std::env::var(name_var).ok()?;
        let email = std::env::var(email_var).ok()?;
        let timestamp = std::env::var(date_var)
            .ok()
            .and_then(|date| Self::parse_timestamp(&date));

        Some(Author::new(name, email, timestamp))
    }

    /// Parse a `GIT_*_DATE` value as RFC 2822 or `%Y-%m-%d %H:%M:%S %z`
    pub fn parse_timestamp(date: &str) -> Option<DateTime<FixedOffset>> {
        DateTime::parse_from_rfc2822(date)
            .or_else(|_| DateTime::parse_from_str(date, "%Y-%m-%d %H:%M:%S %z"))
            .ok()
    }

    /// Resolve the `role` signature for a new commit in `repository`
    pub fn resolve(
        repository: &git2::Repository,
        role: Role,
    ) -> Result<git2::Signature<'static>, BackendError> {
        match Self::load_from_env(role) {
            Some(identity) => identity.signature(role),
            None => repository.signature().map_err(|e| {
                let [name_var, email_var, _] = role.env_vars();
                BackendError::Identity {
                    role,
                    message: format!(
                        "set {name_var}/{email_var} or user.name/user.email ({})",
                        e.message()
                    ),
                }
            }),
        }
    }

    pub fn signature(&self, role: Role) -> Result<git2::Signature<'static>, BackendError> {
        let signature = match self.timestamp {
            Some(timestamp) => {
                let offset_minutes = timestamp.offset().local_minus_utc() / 60;
                let time = git2::Time::new(timestamp.timestamp(), offset_minutes);
                git2::Signature::new(&self.name, &self.email, &time)
            }
            None => git2::Signature::now(&self.name, &self.email),
        };

        signature.map_err(|e| BackendError::Identity {
            role,
            message: e.message().to_string(),
        })
    }
}
