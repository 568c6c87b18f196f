use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Where an election sits in its lifecycle.
///
/// This is authored alongside the election data rather than derived from
/// its dates; see [`super::Election::phase_at`] for the derived view.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElectionStatus {
    /// Open for voting.
    Current,
    /// Closed, results available.
    Past,
    /// Announced, candidates visible, voting not yet open.
    Future,
}

impl ElectionStatus {
    pub const ALL: [ElectionStatus; 3] = [Self::Current, Self::Past, Self::Future];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Current => "current",
            Self::Past => "past",
            Self::Future => "future",
        }
    }
}

impl Display for ElectionStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown election status `{0}`, expected one of current, past, future")]
pub struct UnknownStatus(pub String);

impl FromStr for ElectionStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| UnknownStatus(s.to_string()))
    }
}
