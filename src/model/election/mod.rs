mod candidate;
mod catalog;
mod status;

pub use candidate::Candidate;
pub use catalog::ElectionCatalog;
pub use status::{ElectionStatus, UnknownStatus};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Our election IDs are slugs, e.g. `election-1`.
pub type ElectionId = String;
/// Our candidate IDs are slugs, unique within an election.
pub type CandidateId = String;

/// A single election and everyone standing in it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Election {
    /// Election unique ID.
    pub id: ElectionId,
    pub title: String,
    pub description: String,
    /// Polling opens.
    pub start_date: DateTime<Utc>,
    /// Polling closes.
    pub end_date: DateTime<Utc>,
    /// Authored lifecycle status.
    pub status: ElectionStatus,
    /// Free-form kind, e.g. "General Election".
    #[serde(rename = "type")]
    pub kind: String,
    /// Human-readable eligibility rules.
    pub eligible_voters: Vec<String>,
    /// Candidates in authored order.
    pub candidates: Vec<Candidate>,
}

impl Election {
    pub fn candidate(&self, candidate_id: &str) -> Option<&Candidate> {
        self.candidates.iter().find(|c| c.id == candidate_id)
    }

    /// Candidates standing in exactly this region, in authored order.
    pub fn candidates_in_region(
        &self,
        state_id: &str,
        district_id: &str,
        mandal_id: &str,
    ) -> Vec<&Candidate> {
        self.candidates
            .iter()
            .filter(|c| c.stands_in(state_id, district_id, mandal_id))
            .collect()
    }

    /// The phase implied by the schedule at `instant`, ignoring the authored status.
    pub fn phase_at(&self, instant: DateTime<Utc>) -> ElectionStatus {
        if instant < self.start_date {
            ElectionStatus::Future
        } else if instant > self.end_date {
            ElectionStatus::Past
        } else {
            ElectionStatus::Current
        }
    }

    /// Whether the authored status agrees with the schedule at `instant`.
    pub fn schedule_agrees(&self, instant: DateTime<Utc>) -> bool {
        self.phase_at(instant) == self.status
    }
}
