//! Letter ranks for cyclomatic complexity scores.
//!
//! A rank is an ordinal grade from `A` (simple) to `F` (unmaintainable).
//! The score breakpoints are the analyzer's: every rank threshold a user
//! configures is compared against ranks derived here, so they must agree
//! with what radon itself would report.
//!
//! | Rank | Score  |
//! |------|--------|
//! | A    | 0-5    |
//! | B    | 6-10   |
//! | C    | 11-20  |
//! | D    | 21-30  |
//! | E    | 31-40  |
//! | F    | 41+    |

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Rank {
    A = 0,
    B = 1,
    C = 2,
    D = 3,
    E = 4,
    F = 5,
}

impl Rank {
    pub const ALL: [Rank; 6] = [Rank::A, Rank::B, Rank::C, Rank::D, Rank::E, Rank::F];

    /// Rank a (possibly fractional) complexity score.
    ///
    /// Fractional scores appear when ranking averages, so the cut-over
    /// between bands is not at the integer boundaries: `5.5` is already
    /// `B`, `10.5` is `C`.
    pub fn from_score(score: f64) -> Rank {
        if score.is_nan() || score <= 0.0 {
            return Rank::A;
        }
        let band = (score / 10.0).ceil().clamp(1.0, 6.0);
        let band = if score > 5.0 { band } else { band - 1.0 };
        Rank::ALL[(band as usize).min(5)]
    }

    pub fn as_char(self) -> char {
        (b'A' + self as u8) as char
    }
}

/// Whether `rank` is worse than the configured `ceiling`.
///
/// An unset ceiling disables the check.
pub fn exceeds(rank: Rank, ceiling: Option<Rank>) -> bool {
    ceiling.is_some_and(|ceiling| rank > ceiling)
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid rank {0:?}: expected one of A, B, C, D, E, F")]
pub struct ParseRankError(String);

impl FromStr for Rank {
    type Err = ParseRankError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let mut chars = trimmed.chars();
        match (chars.next().map(|c| c.to_ascii_uppercase()), chars.next()) {
            (Some(letter @ 'A'..='F'), None) => Ok(Rank::ALL[(letter as u8 - b'A') as usize]),
            _ => Err(ParseRankError(s.to_string())),
        }
    }
}

impl TryFrom<String> for Rank {
    type Error = ParseRankError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Rank> for String {
    fn from(rank: Rank) -> Self {
        rank.to_string()
    }
}
