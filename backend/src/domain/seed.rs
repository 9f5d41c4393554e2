//! Fixed user rosters loaded once at startup.
//!
//! A roster is selected by name through configuration and handed to a store
//! adapter; nothing here holds global state.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::domain::{User, UserValidationError};

const ORIGINAL_ROSTER: &[(u32, &str)] = &[
    (0, "Steve Rogers"),
    (1, "Tony Stark"),
    (2, "Carol Danvers"),
];

const EXTENDED_ROSTER: &[(u32, &str)] = &[
    (0, "Steve Rogers"),
    (1, "Tony Stark"),
    (2, "Bruce Banner"),
    (3, "Natasha Romanoff"),
    (4, "Carol Danvers"),
];

/// Named seed roster.
///
/// # Examples
/// ```
/// use user_directory::domain::SeedSet;
///
/// let seed: SeedSet = "original".parse().expect("known seed");
/// assert_eq!(seed.users().expect("valid roster").len(), 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SeedSet {
    /// Three-user roster.
    Original,
    /// Five-user roster.
    #[default]
    Extended,
}

/// Raised when a seed name does not match any roster.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown seed set '{name}'; expected original|extended")]
pub struct UnknownSeedSet {
    /// The rejected name.
    pub name: String,
}

impl SeedSet {
    fn roster(self) -> &'static [(u32, &'static str)] {
        match self {
            Self::Original => ORIGINAL_ROSTER,
            Self::Extended => EXTENDED_ROSTER,
        }
    }

    /// Configuration name of the roster.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Original => "original",
            Self::Extended => "extended",
        }
    }

    /// Build the roster in insertion order.
    ///
    /// # Errors
    /// Returns [`UserValidationError`] if a roster entry breaks a user
    /// invariant.
    pub fn users(self) -> Result<Vec<User>, UserValidationError> {
        self.roster()
            .iter()
            .map(|&(id, name)| User::try_from_parts(id, name))
            .collect()
    }
}

impl fmt::Display for SeedSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SeedSet {
    type Err = UnknownSeedSet;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "original" => Ok(Self::Original),
            "extended" => Ok(Self::Extended),
            _ => Err(UnknownSeedSet { name: s.to_owned() }),
        }
    }
}
