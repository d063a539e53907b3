//! The rank ladder employees move through.
//!
//! Ranks are totally ordered from [`Rank::Junior`] up to [`Rank::Executive`].
//! Promotion and demotion move exactly one rung; the ends of the ladder are
//! reported as `None` rather than treated as failures.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An organizational rank, lowest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rank {
    Junior,
    Lead,
    Manager,
    Executive,
}

impl Rank {
    /// Every rank in ladder order, lowest to highest.
    pub const LADDER: [Self; 4] = [Self::Junior, Self::Lead, Self::Manager, Self::Executive];

    /// Position of this rank on the ladder (0 = bottom).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Junior => 0,
            Self::Lead => 1,
            Self::Manager => 2,
            Self::Executive => 3,
        }
    }

    /// The rank one step up, or `None` when already at the top.
    ///
    /// ```
    /// use company_roster::Rank;
    ///
    /// assert_eq!(Rank::Junior.next(), Some(Rank::Lead));
    /// assert_eq!(Rank::Executive.next(), None);
    /// ```
    #[must_use]
    pub fn next(self) -> Option<Self> {
        Self::LADDER.get(self.index() + 1).copied()
    }

    /// The rank one step down, or `None` when already at the bottom.
    #[must_use]
    pub fn previous(self) -> Option<Self> {
        self.index()
            .checked_sub(1)
            .and_then(|i| Self::LADDER.get(i).copied())
    }

    #[must_use]
    pub const fn is_top(self) -> bool {
        matches!(self, Self::Executive)
    }

    #[must_use]
    pub const fn is_bottom(self) -> bool {
        matches!(self, Self::Junior)
    }

    /// Monthly compensation attached to this rank.
    ///
    /// The table is fixed at compile time; employees never store their own
    /// compensation, they read it through here.
    #[must_use]
    pub const fn compensation(self) -> u64 {
        match self {
            Self::Junior => 200_000,
            Self::Lead => 300_000,
            Self::Manager => 450_000,
            Self::Executive => 600_000,
        }
    }

    /// Display label used in rosters and notices.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Junior => "ヒラ",
            Self::Lead => "主任",
            Self::Manager => "課長",
            Self::Executive => "役員",
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
