//! Wish item lifecycle status.
//!
//! An item moves `wish -> in_progress -> achieved`, although any status may be
//! set directly through a partial update. The database enforces the same three
//! literals with a `CHECK` constraint.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub const STATUS_WISH: &str = "wish";
pub const STATUS_IN_PROGRESS: &str = "in_progress";
pub const STATUS_ACHIEVED: &str = "achieved";

/// All valid status literals, in lifecycle order.
pub const VALID_STATUSES: &[&str] = &[STATUS_WISH, STATUS_IN_PROGRESS, STATUS_ACHIEVED];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WishStatus {
    #[default]
    Wish,
    InProgress,
    Achieved,
}

impl WishStatus {
    /// The literal stored in `wish_items.status`.
    pub fn as_str(self) -> &'static str {
        match self {
            WishStatus::Wish => STATUS_WISH,
            WishStatus::InProgress => STATUS_IN_PROGRESS,
            WishStatus::Achieved => STATUS_ACHIEVED,
        }
    }

    /// Parse a query-string value, returning `None` for anything that is not
    /// one of the three literals.
    pub fn parse_filter(value: &str) -> Option<Self> {
        value.parse().ok()
    }
}

impl fmt::Display for WishStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid wish status '{0}'. Must be one of: wish, in_progress, achieved")]
pub struct InvalidWishStatus(pub String);

impl FromStr for WishStatus {
    type Err = InvalidWishStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            STATUS_WISH => Ok(WishStatus::Wish),
            STATUS_IN_PROGRESS => Ok(WishStatus::InProgress),
            STATUS_ACHIEVED => Ok(WishStatus::Achieved),
            other => Err(InvalidWishStatus(other.to_string())),
        }
    }
}

// Used by `#[sqlx(try_from = "String")]` when decoding rows.
impl TryFrom<String> for WishStatus {
    type Error = InvalidWishStatus;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
