//! Identity attributes shared by employees and presidents.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Gender category recorded for a person.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Male => "男性",
            Self::Female => "女性",
            Self::Other => "その他",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Name, gender and age of a person. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    name: String,
    gender: Gender,
    age: u32,
}

impl Profile {
    #[must_use]
    pub fn new(name: impl Into<String>, gender: Gender, age: u32) -> Self {
        Self {
            name: name.into(),
            gender,
            age,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn gender(&self) -> Gender {
        self.gender
    }

    #[must_use]
    pub const fn age(&self) -> u32 {
        self.age
    }
}

/// Capabilities every person in the organization exposes.
///
/// [`Employee`](crate::domain::Employee) and
/// [`President`](crate::domain::President) implement this independently;
/// each introduces itself differently.
pub trait Person {
    fn profile(&self) -> &Profile;

    /// A one-line self-introduction.
    fn describe_self(&self) -> String;

    fn name(&self) -> &str {
        self.profile().name()
    }

    fn gender(&self) -> Gender {
        self.profile().gender()
    }

    fn age(&self) -> u32 {
        self.profile().age()
    }
}
